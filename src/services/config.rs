/// Handler configuration - loads deployment variants from environment variables
use crate::constants::DEFAULT_MAX_FIELDS;
use crate::error::ConfigError;
use std::str::FromStr;

/// How the inbound payload carries the subject/body mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputShape {
    /// `subject`/`body` are top-level fields of the event itself.
    Direct,
    /// The event's `body` field is a JSON-encoded string containing the
    /// subject/body mapping, as delivered by an HTTP proxy integration.
    Wrapped,
}

impl FromStr for InputShape {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" => Ok(Self::Direct),
            "wrapped" | "http" => Ok(Self::Wrapped),
            other => Err(ConfigError::InvalidInputShape(other.to_string())),
        }
    }
}

/// Deployment configuration for the relay handler.
///
/// The historical deployments differed only in input shape, field-count
/// strictness, and whether a configuration set was attached to sends; one
/// handler parametrized here replaces those copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub input_shape: InputShape,
    /// Limit on the number of fields in the subject/body-bearing mapping;
    /// `None` disables the check.
    pub max_fields: Option<usize>,
    /// SES configuration set to attach to sends, if any.
    pub configuration_set: Option<String>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            input_shape: InputShape::Direct,
            max_fields: Some(DEFAULT_MAX_FIELDS),
            configuration_set: None,
        }
    }
}

impl RelayConfig {
    /// Loads the configuration from the environment.
    ///
    /// `INPUT_SHAPE` is `direct` (default) or `wrapped`; `MAX_FIELDS` is a
    /// field-count limit where `0` disables the check (default 2);
    /// `CONFIG_SET` names the SES configuration set (unset or empty means
    /// none). Invalid values fail startup rather than producing a
    /// half-configured handler.
    pub fn from_env() -> Result<Self, ConfigError> {
        let input_shape = match std::env::var("INPUT_SHAPE") {
            Ok(value) => value.parse()?,
            Err(_) => InputShape::Direct,
        };

        let max_fields = match std::env::var("MAX_FIELDS") {
            Ok(value) => {
                let limit: usize = value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidMaxFields(value.clone()))?;
                if limit == 0 { None } else { Some(limit) }
            }
            Err(_) => Some(DEFAULT_MAX_FIELDS),
        };

        let configuration_set = std::env::var("CONFIG_SET").ok().filter(|s| !s.is_empty());

        Ok(Self {
            input_shape,
            max_fields,
            configuration_set,
        })
    }
}
