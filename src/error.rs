//! Error types for the cifrado-clasico library.
//!
//! Messages are the user-facing Spanish texts shown by the presentation
//! shell, so `Display` output is part of the public contract.

use std::fmt;

use thiserror::Error;

/// Rejection reasons produced by the validation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    /// The field is empty or contains only whitespace.
    #[error("La entrada está vacía o contiene solo espacios en blanco.")]
    BlankInput,
    /// The field must be an integer but does not parse as one.
    #[error("La entrada no es un número entero.")]
    NotInteger,
    /// The field must be text but consists only of digits.
    #[error("La entrada es de tipo numérico.")]
    NumericString,
    /// The field contains a symbol outside the Spanish alphabet.
    #[error("La entrada contiene caracteres fuera del alfabeto español.")]
    NotInAlphabet,
}

/// Errors raised while a cipher is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CipherError {
    /// A text or key symbol could not be mapped to an alphabet position,
    /// or the key is unusable for the selected cipher.
    #[error("La clave esta fuera de rango, elija una distinta.")]
    InvalidKey,
}

/// Outcome of validating the text and key fields together.
///
/// Both fields are always checked; each slot holds the first error found
/// for that field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Error for the text field, if any.
    pub text: Option<ValidationError>,
    /// Error for the key field, if any.
    pub key: Option<ValidationError>,
}

impl ValidationReport {
    /// Returns `true` when neither field failed.
    pub fn is_ok(&self) -> bool {
        self.text.is_none() && self.key.is_none()
    }

    /// Converts the report into a `Result`, failing if any field failed.
    pub fn into_result(self) -> Result<(), ValidationReport> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = Vec::with_capacity(2);
        if let Some(err) = self.text {
            lines.push(format!("Texto inválido: {}", err));
        }
        if let Some(err) = self.key {
            lines.push(format!("Clave inválida: {}", err));
        }
        write!(f, "{}", lines.join("\n"))
    }
}

impl std::error::Error for ValidationReport {}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("invalid configuration document: {0}")]
    Json(#[from] serde_json::Error),
    /// An environment variable held an unsupported value.
    #[error("invalid value {value:?} for {var}: {reason}")]
    InvalidEnvVar {
        /// Variable name.
        var: String,
        /// Offending value.
        value: String,
        /// What was expected instead.
        reason: &'static str,
    },
    /// A padding mode name was not recognized.
    #[error("unknown padding mode {0:?} (expected \"wrap\" or \"ragged\")")]
    UnknownPadding(String),
}

/// Top-level error returned by [`CipherEngine::run`](crate::CipherEngine::run).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// One or both input fields were rejected before ciphering.
    #[error(transparent)]
    Validation(#[from] ValidationReport),
    /// The cipher itself failed.
    #[error(transparent)]
    Cipher(#[from] CipherError),
}
