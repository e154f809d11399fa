//! Sayura engine configuration.
//!
//! The engine is deliberately knob-poor: the transliteration rules are
//! fixed, and the two options here only govern what happens to the key
//! that triggered a flush. Defaults reproduce the classic behavior.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or saving a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read/write config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Engine options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SayuraConfig {
    /// After a commit triggered by Space or an unmapped key, also deliver
    /// that key to the application, as the classic engine did.
    pub forward_commit_trigger: bool,

    /// Flush pending text when an unmapped key arrives. When disabled the
    /// engine declines such keys and keeps composing.
    pub commit_on_unknown: bool,
}

impl Default for SayuraConfig {
    fn default() -> Self {
        Self {
            forward_commit_trigger: true,
            commit_on_unknown: true,
        }
    }
}

impl SayuraConfig {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_behavior() {
        let config = SayuraConfig::default();
        assert!(config.forward_commit_trigger);
        assert!(config.commit_on_unknown);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = SayuraConfig::from_toml_str("commit_on_unknown = false\n").expect("parse");
        assert!(!config.commit_on_unknown);
        assert!(config.forward_commit_trigger);
    }

    #[test]
    fn test_toml_roundtrip_via_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("sayura.toml");

        let mut config = SayuraConfig::default();
        config.forward_commit_trigger = false;
        config.save_toml(&path).expect("save");

        let loaded = SayuraConfig::load_toml(&path).expect("load");
        assert_eq!(loaded, config);
    }
}
