//! Engine configuration.
//!
//! # Load Order
//!
//! 1. Default values ([`EngineConfig::default`])
//! 2. A JSON document ([`EngineConfig::from_json`]), missing fields default
//! 3. Environment variables ([`EngineConfig::from_env`]):
//!    `CIFRADO_PADDING` = `wrap` | `ragged`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// Environment variable selecting the transposition padding mode.
pub const ENV_PADDING: &str = "CIFRADO_PADDING";

/// How the transposition cipher fills an incomplete last row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Padding {
    /// Refill the last row with the leading symbols of the text.
    ///
    /// Compatible with existing ciphertexts, but lossy: decrypting returns
    /// the padding symbols too, so round trips are exact only when the text
    /// length is a multiple of the key length.
    #[default]
    Wrap,
    /// Leave the last row short. Decryption recovers each column's height
    /// from the ciphertext length, so every length round-trips.
    Ragged,
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Padding::Wrap => write!(f, "wrap"),
            Padding::Ragged => write!(f, "ragged"),
        }
    }
}

impl FromStr for Padding {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wrap" => Ok(Padding::Wrap),
            "ragged" => Ok(Padding::Ragged),
            _ => Err(ConfigError::UnknownPadding(s.to_string())),
        }
    }
}

/// Settings for [`CipherEngine`](crate::CipherEngine).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Transposition padding mode.
    pub padding: Padding,
}

impl EngineConfig {
    /// Parses a JSON document such as `{"padding": "ragged"}`.
    ///
    /// # Errors
    /// Returns [`ConfigError::Json`] on malformed JSON or unknown fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use cifrado_clasico::config::{EngineConfig, Padding};
    ///
    /// let config = EngineConfig::from_json(r#"{"padding": "ragged"}"#).unwrap();
    /// assert_eq!(config.padding, Padding::Ragged);
    /// assert_eq!(EngineConfig::from_json("{}").unwrap(), EngineConfig::default());
    /// ```
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(document)?)
    }

    /// Builds a configuration from defaults overridden by process
    /// environment variables.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidEnvVar`] if a variable holds an
    /// unsupported value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_overrides(|name| std::env::var(name).ok())
    }

    /// Applies overrides read through `lookup` on top of `self`.
    ///
    /// `lookup` maps a variable name to its value; [`from_env`](Self::from_env)
    /// passes `std::env::var`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_PADDING) {
            self.padding = value.parse().map_err(|_| ConfigError::InvalidEnvVar {
                var: ENV_PADDING.to_string(),
                value: value.clone(),
                reason: "expected \"wrap\" or \"ragged\"",
            })?;
            debug!(padding = %self.padding, "padding overridden from environment");
        }
        Ok(self)
    }
}
