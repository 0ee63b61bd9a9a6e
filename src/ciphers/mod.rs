//! The three classical ciphers and the types that select and key them.
//!
//! Each cipher module exposes a pure `encrypt`/`decrypt` pair over
//! upper-cased text. [`CipherKind`] names a cipher and the [`KeyKind`] it
//! expects; [`Key`] carries the parsed key value.

pub mod caesar;
pub mod transposition;
pub mod vigenere;

use std::fmt;

use crate::error::ValidationError;
use crate::validator::{parse_shift, KeyKind};

/// Available ciphers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherKind {
    /// Columnar transposition keyed by a word.
    Transposition,
    /// Caesar shift keyed by an integer.
    Caesar,
    /// Vigenère running-key cipher keyed by a word.
    Vigenere,
}

impl CipherKind {
    /// All ciphers, in menu order.
    pub const ALL: [CipherKind; 3] = [
        CipherKind::Transposition,
        CipherKind::Caesar,
        CipherKind::Vigenere,
    ];

    /// Returns the kind of key this cipher takes.
    pub fn key_kind(self) -> KeyKind {
        match self {
            CipherKind::Caesar => KeyKind::Integer,
            CipherKind::Transposition | CipherKind::Vigenere => KeyKind::Text,
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherKind::Transposition => write!(f, "Cifrado de Transposición"),
            CipherKind::Caesar => write!(f, "Cifrado de César"),
            CipherKind::Vigenere => write!(f, "Cifrado de Vigenère"),
        }
    }
}

/// A parsed cipher key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Integer shift (Caesar). Any value is valid.
    Shift(i64),
    /// Word key (Transposition, Vigenère), upper-cased.
    Word(String),
}

impl Key {
    /// Parses a raw key field according to `kind`.
    ///
    /// Integer keys are reduced modulo the alphabet length; text keys are
    /// upper-cased. No alphabet check is made here: run the validator first.
    ///
    /// # Errors
    /// Returns [`ValidationError::NotInteger`] if an integer key does not
    /// parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use cifrado_clasico::ciphers::Key;
    /// use cifrado_clasico::validator::KeyKind;
    ///
    /// assert_eq!(Key::parse("3", KeyKind::Integer), Ok(Key::Shift(3)));
    /// assert_eq!(Key::parse("clave", KeyKind::Text), Ok(Key::Word("CLAVE".into())));
    /// ```
    pub fn parse(raw: &str, kind: KeyKind) -> Result<Self, ValidationError> {
        match kind {
            KeyKind::Integer => parse_shift(raw).map(Key::Shift),
            KeyKind::Text => Ok(Key::Word(raw.to_uppercase())),
        }
    }

    /// Returns the kind of this key.
    pub fn kind(&self) -> KeyKind {
        match self {
            Key::Shift(_) => KeyKind::Integer,
            Key::Word(_) => KeyKind::Text,
        }
    }
}

impl From<i64> for Key {
    fn from(shift: i64) -> Self {
        Key::Shift(shift)
    }
}

impl From<&str> for Key {
    fn from(word: &str) -> Self {
        Key::Word(word.to_uppercase())
    }
}
