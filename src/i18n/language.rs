//! Validated language codes.
//!
//! The path scanner treats any two-character segment as a language code, so
//! the configured default language must have the same shape or it could
//! never match a scanned segment. `LanguageCode` enforces that at
//! construction time instead of deep inside the rewrite.

use anyhow::{bail, Result};
use std::fmt;

/// A validated two-letter language code (e.g., "en", "fr").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Create a LanguageCode from a string.
    ///
    /// # Returns
    /// * `Ok(LanguageCode)` if the code is exactly two ASCII lowercase letters
    /// * `Err` otherwise
    pub fn new(code: &str) -> Result<Self> {
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_lowercase()) {
            bail!(
                "invalid language code '{}': expected two lowercase ASCII letters",
                code
            );
        }
        Ok(Self(code.to_string()))
    }

    /// Get the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
