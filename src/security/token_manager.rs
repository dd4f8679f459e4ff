//! Secure token manager with memory-safe handling and masking capabilities
//!
//! This module holds the registry credential for a run, using the `secrecy`
//! crate to prevent accidental exposure in logs or memory dumps.

use secrecy::{ExposeSecret, SecretString};

/// Registry credential holder
///
/// # Examples
///
/// ```
/// use nuget_publisher::security::SecureTokenManager;
///
/// let manager = SecureTokenManager::new(Some("octocat".to_string()), None);
/// assert!(!manager.has_api_key());
/// assert_eq!(manager.user(), "octocat");
/// ```
#[derive(Debug, Default)]
pub struct SecureTokenManager {
    user: Option<String>,
    api_key: Option<SecretString>,
}

impl SecureTokenManager {
    /// Creates a manager for `user` and `api_key`
    ///
    /// An empty key counts as no key.
    pub fn new(user: Option<String>, api_key: Option<SecretString>) -> Self {
        Self {
            user: user.filter(|u| !u.is_empty()),
            api_key: api_key.filter(|k| !k.expose_secret().is_empty()),
        }
    }

    /// Registry user name, empty when unset
    pub fn user(&self) -> &str {
        self.user.as_deref().unwrap_or_default()
    }

    /// The API key, if configured
    pub fn api_key(&self) -> Option<&SecretString> {
        self.api_key.as_ref()
    }

    /// Checks if an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Masks a token for safe logging
    ///
    /// Shows only the first 3 and last 3 characters for identification purposes.
    /// Tokens shorter than 10 characters are fully masked as "****".
    ///
    /// # Examples
    ///
    /// ```
    /// use nuget_publisher::security::SecureTokenManager;
    ///
    /// let manager = SecureTokenManager::default();
    /// assert_eq!(manager.mask_token("abcdef123456"), "abc...456");
    /// assert_eq!(manager.mask_token("short"), "****");
    /// ```
    pub fn mask_token(&self, token: &str) -> String {
        let chars: Vec<char> = token.chars().collect();
        if chars.len() < 10 {
            return "****".to_string();
        }

        let prefix: String = chars[..3].iter().collect();
        let suffix: String = chars[chars.len() - 3..].iter().collect();
        format!("{}...{}", prefix, suffix)
    }

    /// Masks the configured API key wherever it appears in `text`
    pub fn mask_secrets(&self, text: &str) -> String {
        match &self.api_key {
            Some(key) => {
                let key = key.expose_secret();
                text.replace(key, &self.mask_token(key))
            }
            None => text.to_string(),
        }
    }
}
