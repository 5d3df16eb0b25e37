//! Generation tables: TLDs, prefixes, homoglyphs and the insertion alphabet

use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config_error;
use crate::domain::{COMMON_TLDS, INSERTION_CHARS, PHISHING_PREFIXES};
use crate::error::{ForgeError, Result};
use crate::variants::HomoglyphMap;

const TLD_PATTERN: &str = r"^[a-z0-9]([a-z0-9-]*[a-z0-9])?(\.[a-z0-9]([a-z0-9-]*[a-z0-9])?)*$";

/// Read-only configuration handed to the engine.
///
/// Every field falls back to the built-in table when absent from a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForgeConfig {
    /// TLDs each label variant is combined with, besides its own
    pub tlds: Vec<String>,
    /// Prefixes prepended to the whole original domain
    pub prefixes: Vec<String>,
    /// Single-character look-alikes
    pub homoglyphs: HomoglyphMap,
    /// Characters tried at every insertion position
    pub insertion_chars: Vec<char>,
    /// Also combine the unmodified main label with every TLD
    pub tld_swap: bool,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            tlds: COMMON_TLDS.iter().map(|s| s.to_string()).collect(),
            prefixes: PHISHING_PREFIXES.iter().map(|s| s.to_string()).collect(),
            homoglyphs: HomoglyphMap::default(),
            insertion_chars: INSERTION_CHARS.to_vec(),
            tld_swap: false,
        }
    }
}

impl ForgeConfig {
    /// Load a JSON config file and validate it
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })?;

        let config = Self::from_json(&content)?;
        tracing::debug!(
            path = %path.display(),
            tlds = config.tlds.len(),
            prefixes = config.prefixes.len(),
            homoglyphs = config.homoglyphs.len(),
            "Loaded config"
        );
        Ok(config)
    }

    /// Parse and validate a JSON config string
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)
            .map_err(|e| ForgeError::parse(e.to_string(), Some(content.to_string())))?;
        config.validate()?;
        Ok(config)
    }

    /// Pretty JSON of the effective configuration
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ForgeError::internal(format!("Failed to serialize config: {}", e)))
    }

    pub fn with_tld_swap(mut self, enabled: bool) -> Self {
        self.tld_swap = enabled;
        self
    }

    /// Check every table entry is usable in a domain name
    pub fn validate(&self) -> Result<()> {
        let tld_regex = Regex::new(TLD_PATTERN).map_err(|e| ForgeError::internal(e.to_string()))?;

        for tld in &self.tlds {
            if !tld_regex.is_match(tld) {
                return Err(config_error!("invalid TLD '{}'", tld));
            }
        }

        if self.prefixes.iter().any(|p| p.is_empty()) {
            return Err(config_error!("prefixes cannot be empty strings"));
        }

        for (from, to) in self.homoglyphs.iter() {
            if !from.is_ascii_lowercase() {
                return Err(config_error!(
                    "homoglyph source '{}' must be a lowercase ASCII letter",
                    from
                ));
            }
            if !to.is_ascii_alphanumeric() {
                return Err(config_error!(
                    "homoglyph replacement '{}' for '{}' must be ASCII alphanumeric",
                    to,
                    from
                ));
            }
        }

        if let Some(c) = self.insertion_chars.iter().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(config_error!("insertion character '{}' must be ASCII alphanumeric", c));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ForgeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tlds.len(), 18);
        assert_eq!(config.prefixes.len(), 8);
        assert_eq!(config.insertion_chars.len(), 11);
        assert_eq!(config.homoglyphs.get('o'), Some('0'));
        assert!(!config.tld_swap);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = ForgeConfig::from_json(r#"{"tlds": ["com", "net"], "tld_swap": true}"#).unwrap();
        assert_eq!(config.tlds, vec!["com", "net"]);
        assert!(config.tld_swap);
        assert_eq!(config.prefixes, ForgeConfig::default().prefixes);
        assert_eq!(config.homoglyphs, HomoglyphMap::default());
    }

    #[test]
    fn test_invalid_tld_rejected() {
        for bad in [r#"{"tlds": ["c om"]}"#, r#"{"tlds": [""]}"#, r#"{"tlds": ["COM"]}"#, r#"{"tlds": [".uk"]}"#] {
            let err = ForgeConfig::from_json(bad).unwrap_err();
            assert!(matches!(err, ForgeError::Config { .. }), "{} -> {:?}", bad, err);
        }
        assert!(ForgeConfig::from_json(r#"{"tlds": ["co.uk", "xn--p1ai"]}"#).is_ok());
    }

    #[test]
    fn test_invalid_tables_rejected() {
        assert!(ForgeConfig::from_json(r#"{"prefixes": [""]}"#).is_err());
        assert!(ForgeConfig::from_json(r#"{"homoglyphs": {"1": "l"}}"#).is_err());
        assert!(ForgeConfig::from_json(r#"{"homoglyphs": {"O": "0"}}"#).is_err());
        assert!(ForgeConfig::from_json(r#"{"homoglyphs": {"a": "@"}}"#).is_err());
        assert!(ForgeConfig::from_json(r#"{"insertion_chars": ["-"]}"#).is_err());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = ForgeConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ForgeError::Parse { .. }));
    }

    #[test]
    fn test_dump_round_trip() {
        let config = ForgeConfig::default().with_tld_swap(true);
        let json = config.to_json_pretty().unwrap();
        assert_eq!(ForgeConfig::from_json(&json).unwrap(), config);
    }
}
