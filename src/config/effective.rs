//! Loading and overriding the codec configuration.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::defaults::CodecConfig;

impl CodecConfig {
    /// Load from a TOML file, falling back to defaults for missing keys.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {}", path.display(), e)))?;
        let config: CodecConfig = toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(format!("TOML parse error: {}", e)))?;
        config.validate()?;
        debug!(path = %path.display(), element = %config.element_name, "loaded codec config");
        Ok(config)
    }

    /// Load from `path` if given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply CLI flags on top of the loaded values.
    pub fn with_overrides(mut self, element_name: Option<String>) -> Result<Self, ConfigError> {
        if let Some(name) = element_name {
            self.element_name = name;
        }
        self.validate()?;
        Ok(self)
    }

    /// Check that `element_name` can be written as an XML tag.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_xml_name(&self.element_name) {
            return Err(ConfigError::ValidationError(format!(
                "element_name '{}' is not a valid XML name",
                self.element_name
            )));
        }
        Ok(())
    }
}

fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_alphabetic() || first == '_' || first == ':') {
        return false;
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | ':' | '-' | '.'))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
