//! Caesar cipher: every symbol moves a fixed number of places along the
//! alphabet.

use tracing::warn;

use crate::alphabet;
use crate::error::CipherError;

/// Encrypts `text` by shifting each symbol `shift` places forward.
///
/// Negative shifts and shifts of 27 or more wrap around the alphabet.
///
/// # Parameters
/// - `text`: Upper-cased text over the alphabet.
/// - `shift`: Any integer shift.
///
/// # Errors
/// Returns [`CipherError::InvalidKey`] if any symbol of `text` (a space
/// included) is not in the alphabet. No partial output is produced.
///
/// # Examples
///
/// ```
/// use cifrado_clasico::ciphers::caesar;
///
/// assert_eq!(caesar::encrypt("HOLA", 3).unwrap(), "KRÑD");
/// ```
pub fn encrypt(text: &str, shift: i64) -> Result<String, CipherError> {
    apply(text, shift)
}

/// Decrypts `text` by shifting each symbol `shift` places backward.
///
/// # Errors
/// Returns [`CipherError::InvalidKey`] if any symbol of `text` is not in
/// the alphabet.
///
/// # Examples
///
/// ```
/// use cifrado_clasico::ciphers::caesar;
///
/// assert_eq!(caesar::decrypt("KRÑD", 3).unwrap(), "HOLA");
/// ```
pub fn decrypt(text: &str, shift: i64) -> Result<String, CipherError> {
    // Negate after reduction so i64::MIN cannot overflow.
    let shift = shift.rem_euclid(alphabet::ALPHABET_LEN as i64);
    apply(text, -shift)
}

fn apply(text: &str, shift: i64) -> Result<String, CipherError> {
    text.chars()
        .map(|symbol| match alphabet::position_of(symbol) {
            Some(pos) => Ok(alphabet::symbol_at(alphabet::shift(pos, shift))),
            None => {
                warn!(symbol = ?symbol, "caesar: symbol outside alphabet");
                Err(CipherError::InvalidKey)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_hola() {
        assert_eq!(encrypt("HOLA", 3).unwrap(), "KRÑD");
    }

    #[test]
    fn test_encrypt_wraps_end_of_alphabet() {
        assert_eq!(encrypt("XYZ", 3).unwrap(), "ABC");
        assert_eq!(encrypt("N", 1).unwrap(), "Ñ");
        assert_eq!(encrypt("Ñ", 1).unwrap(), "O");
    }

    #[test]
    fn test_negative_shift() {
        assert_eq!(encrypt("ABC", -3).unwrap(), "XYZ");
        assert_eq!(decrypt("XYZ", -3).unwrap(), "ABC");
    }

    #[test]
    fn test_large_shifts_are_reduced() {
        assert_eq!(encrypt("HOLA", 30).unwrap(), encrypt("HOLA", 3).unwrap());
        assert_eq!(encrypt("HOLA", -24).unwrap(), encrypt("HOLA", 3).unwrap());
        assert_eq!(encrypt("HOLA", 27).unwrap(), "HOLA");
        assert_eq!(encrypt("HOLA", 0).unwrap(), "HOLA");
    }

    #[test]
    fn test_extreme_shifts_roundtrip() {
        for shift in [i64::MIN, i64::MAX, i64::MIN + 1] {
            let ct = encrypt("ÑANDU", shift).unwrap();
            assert_eq!(decrypt(&ct, shift).unwrap(), "ÑANDU");
        }
    }

    #[test]
    fn test_symbol_outside_alphabet_fails_whole_call() {
        assert_eq!(encrypt("HOLA MUNDO", 3), Err(CipherError::InvalidKey));
        assert_eq!(decrypt("hola", 3), Err(CipherError::InvalidKey));
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(encrypt("", 5).unwrap(), "");
    }
}
