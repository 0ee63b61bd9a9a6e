//! Input validation pipeline.
//!
//! Every check takes a raw field value and returns it unchanged on success,
//! so checks compose with `and_then`. The first failing check of a field
//! decides that field's error; the text and key fields are validated
//! independently by [`validate_fields`].

use tracing::debug;

use crate::alphabet;
use crate::error::{ValidationError, ValidationReport};
use crate::utils::text::normalize;

/// The kind of value a field must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// A base-10 integer, e.g. a Caesar shift.
    Integer,
    /// Text over the Spanish alphabet.
    Text,
}

/// Rejects empty or whitespace-only input.
///
/// # Examples
///
/// ```
/// use cifrado_clasico::error::ValidationError;
/// use cifrado_clasico::validator::is_blank;
///
/// assert_eq!(is_blank("   "), Err(ValidationError::BlankInput));
/// assert_eq!(is_blank("A"), Ok("A"));
/// ```
pub fn is_blank(raw: &str) -> Result<&str, ValidationError> {
    if raw.trim().is_empty() {
        Err(ValidationError::BlankInput)
    } else {
        Ok(raw)
    }
}

/// Checks that `raw` has the shape required by `expected`.
///
/// - [`KeyKind::Integer`]: an optional sign followed by ASCII digits,
///   surrounding whitespace ignored. Magnitude is unbounded.
/// - [`KeyKind::Text`]: anything except a string made only of numeric
///   characters.
///
/// # Examples
///
/// ```
/// use cifrado_clasico::error::ValidationError;
/// use cifrado_clasico::validator::{validate_type, KeyKind};
///
/// assert_eq!(validate_type("123", KeyKind::Text), Err(ValidationError::NumericString));
/// assert_eq!(validate_type("ABC", KeyKind::Text), Ok("ABC"));
/// assert_eq!(validate_type("-4", KeyKind::Integer), Ok("-4"));
/// assert_eq!(validate_type("4.5", KeyKind::Integer), Err(ValidationError::NotInteger));
/// ```
pub fn validate_type(raw: &str, expected: KeyKind) -> Result<&str, ValidationError> {
    match expected {
        KeyKind::Integer => {
            if is_integer(raw) {
                Ok(raw)
            } else {
                Err(ValidationError::NotInteger)
            }
        }
        KeyKind::Text => {
            if !raw.is_empty() && raw.chars().all(char::is_numeric) {
                Err(ValidationError::NumericString)
            } else {
                Ok(raw)
            }
        }
    }
}

/// Checks that every symbol of `raw`, once upper-cased and stripped of
/// spaces, belongs to the alphabet.
///
/// Returns the original input, not the normalized form.
///
/// # Examples
///
/// ```
/// use cifrado_clasico::error::ValidationError;
/// use cifrado_clasico::validator::all_characters_in_alphabet;
///
/// assert_eq!(all_characters_in_alphabet("HOLÁ"), Err(ValidationError::NotInAlphabet));
/// assert_eq!(all_characters_in_alphabet("hola mundo"), Ok("hola mundo"));
/// ```
pub fn all_characters_in_alphabet(raw: &str) -> Result<&str, ValidationError> {
    if normalize(raw).chars().all(alphabet::contains) {
        Ok(raw)
    } else {
        Err(ValidationError::NotInAlphabet)
    }
}

/// Runs the full pipeline for one field.
///
/// Text fields go through `is_blank`, `validate_type` and
/// `all_characters_in_alphabet`; integer fields skip the alphabet check.
pub fn validate(raw: &str, expected: KeyKind) -> Result<&str, ValidationError> {
    let checked = is_blank(raw).and_then(|s| validate_type(s, expected))?;
    match expected {
        KeyKind::Integer => Ok(checked),
        KeyKind::Text => all_characters_in_alphabet(checked),
    }
}

/// Validates the text field (always text) and the key field (of
/// `key_kind`), collecting the errors of both.
///
/// # Errors
/// Returns a [`ValidationReport`] holding every field that failed.
///
/// # Examples
///
/// ```
/// use cifrado_clasico::error::ValidationError;
/// use cifrado_clasico::validator::{validate_fields, KeyKind};
///
/// let report = validate_fields("", "x1", KeyKind::Integer).unwrap_err();
/// assert_eq!(report.text, Some(ValidationError::BlankInput));
/// assert_eq!(report.key, Some(ValidationError::NotInteger));
/// ```
pub fn validate_fields(text: &str, key: &str, key_kind: KeyKind) -> Result<(), ValidationReport> {
    let report = ValidationReport {
        text: validate(text, KeyKind::Text).err(),
        key: validate(key, key_kind).err(),
    };
    if let Some(err) = report.text {
        debug!(field = "text", error = ?err, "field rejected");
    }
    if let Some(err) = report.key {
        debug!(field = "key", error = ?err, "field rejected");
    }
    report.into_result()
}

/// Parses an integer key of any magnitude, reduced modulo the alphabet
/// length.
///
/// The result lies in `-26..=26` and keeps the sign of the input, which is
/// congruent to the full value for every shift computation.
///
/// # Errors
/// Returns [`ValidationError::NotInteger`] if `raw` is not an integer.
///
/// # Examples
///
/// ```
/// use cifrado_clasico::validator::parse_shift;
///
/// assert_eq!(parse_shift("3"), Ok(3));
/// assert_eq!(parse_shift(" -30 "), Ok(-3));
/// assert!(parse_shift("100000000000000000000000000000").is_ok());
/// ```
pub fn parse_shift(raw: &str) -> Result<i64, ValidationError> {
    let (negative, digits) = split_sign(raw.trim()).ok_or(ValidationError::NotInteger)?;
    let modulus = alphabet::ALPHABET_LEN as i64;
    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        (acc * 10 + i64::from(b - b'0')) % modulus
    });
    Ok(if negative { -magnitude } else { magnitude })
}

fn is_integer(raw: &str) -> bool {
    split_sign(raw.trim()).is_some()
}

/// Splits an optional leading sign from a run of ASCII digits.
fn split_sign(s: &str) -> Option<(bool, &str)> {
    let (negative, digits) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        Some((negative, digits))
    } else {
        None
    }
}
