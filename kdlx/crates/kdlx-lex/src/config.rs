//! Scan configuration.
//!
//! The defaults scan the document language as written; the two knobs exist
//! for callers that embed documents (and already stripped a byte order mark)
//! or that accept older files with trailing digit separators.
//!
//! Configuration is plain data. Reading a configuration file from disk is
//! the caller's business; [`ScanConfig::from_toml_str`] only parses text.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a `_` at the end of a digit run is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeparatorPolicy {
    /// `1_` is an invalid numeric literal.
    #[default]
    Strict,
    /// `1_` is accepted as a decimal.
    Lenient,
}

/// Options controlling a scan.
///
/// # Example
///
/// ```
/// use kdlx_lex::{ScanConfig, SeparatorPolicy};
///
/// let config = ScanConfig::from_toml_str("separators = \"lenient\"").unwrap();
/// assert!(config.skip_bom);
/// assert_eq!(config.separators, SeparatorPolicy::Lenient);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// Skip a single U+FEFF at offset 0.
    #[serde(default = "default_true")]
    pub skip_bom: bool,

    /// Trailing-underscore policy for numeric literals.
    #[serde(default)]
    pub separators: SeparatorPolicy,
}

fn default_true() -> bool {
    true
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            skip_bom: true,
            separators: SeparatorPolicy::Strict,
        }
    }
}

impl ScanConfig {
    /// Parses a configuration from TOML text.
    ///
    /// Missing keys take their defaults; unknown keys are an error.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Serializes the configuration to TOML text.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Returns a copy with `skip_bom` set.
    pub fn with_skip_bom(mut self, skip_bom: bool) -> Self {
        self.skip_bom = skip_bom;
        self
    }

    /// Returns a copy with the given separator policy.
    pub fn with_separators(mut self, separators: SeparatorPolicy) -> Self {
        self.separators = separators;
        self
    }
}

/// Errors from loading or saving a [`ScanConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The text is not valid TOML or does not match the configuration shape.
    #[error("invalid scan configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be written as TOML.
    #[error("cannot serialize scan configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScanConfig::default();
        assert!(config.skip_bom);
        assert_eq!(config.separators, SeparatorPolicy::Strict);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(ScanConfig::from_toml_str("").unwrap(), ScanConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let config = ScanConfig::from_toml_str("skip_bom = false\nseparators = \"strict\"\n").unwrap();
        assert!(!config.skip_bom);
        assert_eq!(config.separators, SeparatorPolicy::Strict);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = ScanConfig::from_toml_str("skip_bon = true").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid scan configuration"));
    }

    #[test]
    fn test_bad_policy_is_rejected() {
        assert!(ScanConfig::from_toml_str("separators = \"loose\"").is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ScanConfig::default()
            .with_skip_bom(false)
            .with_separators(SeparatorPolicy::Lenient);
        let text = config.to_toml_string().unwrap();
        assert_eq!(ScanConfig::from_toml_str(&text).unwrap(), config);
    }
}
