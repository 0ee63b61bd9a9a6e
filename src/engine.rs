//! CipherEngine: dispatches text and keys to the selected cipher.
//!
//! The engine is stateless apart from its [`EngineConfig`]. [`run`]
//! reproduces the presentation shell's flow: validate both fields, collect
//! their errors, normalize, then cipher.
//!
//! [`run`]: CipherEngine::run

use tracing::{debug, instrument};

use crate::ciphers::{caesar, transposition, vigenere, CipherKind, Key};
use crate::config::EngineConfig;
use crate::error::{CipherError, Error, ValidationReport};
use crate::validator::validate_fields;

/// Which way to run a cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Plaintext to ciphertext.
    Encrypt,
    /// Ciphertext to plaintext.
    Decrypt,
}

/// Front door to the three ciphers.
///
/// # Examples
///
/// ```
/// use cifrado_clasico::{CipherEngine, CipherKind, Direction, Key};
///
/// let engine = CipherEngine::new();
/// let ct = engine.encrypt(CipherKind::Caesar, "HOLA", &Key::Shift(3)).unwrap();
/// assert_eq!(ct, "KRÑD");
///
/// let pt = engine.run(CipherKind::Caesar, Direction::Decrypt, "krñd", "3").unwrap();
/// assert_eq!(pt, "HOLA");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CipherEngine {
    config: EngineConfig,
}

impl CipherEngine {
    /// Creates an engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with a custom configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use cifrado_clasico::config::{EngineConfig, Padding};
    /// use cifrado_clasico::{CipherEngine, CipherKind, Key};
    ///
    /// let engine = CipherEngine::with_config(EngineConfig { padding: Padding::Ragged });
    /// let key = Key::from("CLAVE");
    /// let ct = engine.encrypt(CipherKind::Transposition, "SOL", &key).unwrap();
    /// assert_eq!(engine.decrypt(CipherKind::Transposition, &ct, &key).unwrap(), "SOL");
    /// ```
    pub fn with_config(config: EngineConfig) -> Self {
        CipherEngine { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Encrypts already-normalized `text` with `key`.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKey`] if `key` is the wrong kind for
    /// `kind` or any symbol cannot be mapped into the alphabet.
    pub fn encrypt(&self, kind: CipherKind, text: &str, key: &Key) -> Result<String, CipherError> {
        self.dispatch(kind, Direction::Encrypt, text, key)
    }

    /// Decrypts already-normalized `text` with `key`.
    ///
    /// # Errors
    /// Same conditions as [`encrypt`](Self::encrypt).
    pub fn decrypt(&self, kind: CipherKind, text: &str, key: &Key) -> Result<String, CipherError> {
        self.dispatch(kind, Direction::Decrypt, text, key)
    }

    /// Validates raw field values, then runs the cipher.
    ///
    /// Both fields are validated before anything is reported, so a
    /// [`Error::Validation`] may carry errors for the text and the key at
    /// once. On success the text is upper-cased and the key parsed according
    /// to [`CipherKind::key_kind`].
    ///
    /// # Errors
    /// - [`Error::Validation`] if either field is rejected.
    /// - [`Error::Cipher`] if the cipher fails (for example, a Caesar text
    ///   containing spaces).
    #[instrument(level = "debug", skip(self, raw_text, raw_key), fields(cipher = %kind))]
    pub fn run(
        &self,
        kind: CipherKind,
        direction: Direction,
        raw_text: &str,
        raw_key: &str,
    ) -> Result<String, Error> {
        let key_kind = kind.key_kind();
        validate_fields(raw_text, raw_key, key_kind)?;

        let text = raw_text.to_uppercase();
        let key = Key::parse(raw_key, key_kind).map_err(|err| ValidationReport {
            text: None,
            key: Some(err),
        })?;
        Ok(self.dispatch(kind, direction, &text, &key)?)
    }

    fn dispatch(
        &self,
        kind: CipherKind,
        direction: Direction,
        text: &str,
        key: &Key,
    ) -> Result<String, CipherError> {
        debug!(
            cipher = ?kind,
            ?direction,
            text_len = text.chars().count(),
            padding = %self.config.padding,
            "running cipher"
        );
        let padding = self.config.padding;
        match (kind, key, direction) {
            (CipherKind::Caesar, Key::Shift(shift), Direction::Encrypt) => {
                caesar::encrypt(text, *shift)
            }
            (CipherKind::Caesar, Key::Shift(shift), Direction::Decrypt) => {
                caesar::decrypt(text, *shift)
            }
            (CipherKind::Vigenere, Key::Word(word), Direction::Encrypt) => {
                vigenere::encrypt(text, word)
            }
            (CipherKind::Vigenere, Key::Word(word), Direction::Decrypt) => {
                vigenere::decrypt(text, word)
            }
            (CipherKind::Transposition, Key::Word(word), Direction::Encrypt) => {
                transposition::encrypt_with(text, word, padding)
            }
            (CipherKind::Transposition, Key::Word(word), Direction::Decrypt) => {
                transposition::decrypt_with(text, word, padding)
            }
            _ => {
                debug!(cipher = ?kind, key_kind = ?key.kind(), "key kind does not match cipher");
                Err(CipherError::InvalidKey)
            }
        }
    }
}
