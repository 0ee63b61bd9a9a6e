//! Classical ciphers over the Spanish alphabet.
//!
//! Three teaching ciphers, columnar transposition, Caesar and Vigenère,
//! operating on the 27-symbol alphabet `ABCDEFGHIJKLMNÑOPQRSTUVWXYZ`, plus
//! the validation pipeline that gates user input before any cipher runs.
//! These are pedagogical ciphers with no security guarantees.
//!
//! # Architecture
//!
//! ```text
//! alphabet     (fixed symbol table, position lookups, modular shifts)
//!     ↑
//! validator    (is_blank → validate_type → all_characters_in_alphabet)
//!     ↑
//! ciphers      (caesar / vigenere / transposition, pure functions)
//!     ↑
//! CipherEngine (dispatch on CipherKind + Key, full validate-then-cipher run)
//! ```
//!
//! # Examples
//!
//! Run the whole pipeline on raw field values:
//!
//! ```
//! use cifrado_clasico::{CipherEngine, CipherKind, Direction};
//!
//! let engine = CipherEngine::new();
//! let ct = engine
//!     .run(CipherKind::Vigenere, Direction::Encrypt, "hola", "clave")
//!     .unwrap();
//! assert_eq!(ct, "JZLV");
//! ```
//!
//! Validation errors for both fields are reported together, in Spanish:
//!
//! ```
//! use cifrado_clasico::{CipherEngine, CipherKind, Direction};
//!
//! let engine = CipherEngine::new();
//! let err = engine
//!     .run(CipherKind::Caesar, Direction::Encrypt, "   ", "tres")
//!     .unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Texto inválido: La entrada está vacía o contiene solo espacios en blanco.\n\
//!      Clave inválida: La entrada no es un número entero."
//! );
//! ```
//!
//! Call a cipher directly on normalized input:
//!
//! ```
//! use cifrado_clasico::ciphers::transposition;
//!
//! let ct = transposition::encrypt("HOLAMUNDO", "ABC").unwrap();
//! assert_eq!(ct, "HAN OMD LUO");
//! assert_eq!(transposition::decrypt(&ct, "ABC").unwrap(), "HOLAMUNDO");
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod ciphers;
pub mod config;
pub mod error;
pub mod utils;
pub mod validator;

mod engine;

pub use ciphers::{CipherKind, Key};
pub use engine::{CipherEngine, Direction};
pub use error::{CipherError, Error, ValidationError, ValidationReport};
pub use validator::KeyKind;
