//! Vigenère cipher: each symbol is shifted by the position of the key
//! symbol beneath it, the key repeating cyclically over the text.

use tracing::warn;

use crate::alphabet;
use crate::error::CipherError;
use crate::utils::text::repeat_to_length;

/// Encrypts `text` with the running key `key`.
///
/// # Parameters
/// - `text`: Upper-cased text over the alphabet.
/// - `key`: Upper-cased, non-empty key over the alphabet.
///
/// # Errors
/// Returns [`CipherError::InvalidKey`] if `key` is empty or any symbol of
/// `text` or `key` is not in the alphabet.
///
/// # Examples
///
/// ```
/// use cifrado_clasico::ciphers::vigenere;
///
/// assert_eq!(vigenere::encrypt("HOLA", "CLAVE").unwrap(), "JZLV");
/// ```
pub fn encrypt(text: &str, key: &str) -> Result<String, CipherError> {
    combine(text, key, 1)
}

/// Decrypts `text` with the running key `key`.
///
/// # Errors
/// Same conditions as [`encrypt`].
///
/// # Examples
///
/// ```
/// use cifrado_clasico::ciphers::vigenere;
///
/// assert_eq!(vigenere::decrypt("JZLV", "CLAVE").unwrap(), "HOLA");
/// ```
pub fn decrypt(text: &str, key: &str) -> Result<String, CipherError> {
    combine(text, key, -1)
}

/// Adds (`sign = 1`) or subtracts (`sign = -1`) key positions from text
/// positions.
fn combine(text: &str, key: &str, sign: i64) -> Result<String, CipherError> {
    let key: Vec<char> = key.chars().collect();
    if key.is_empty() {
        warn!("vigenere: empty key");
        return Err(CipherError::InvalidKey);
    }
    let text: Vec<char> = text.chars().collect();
    let expanded = repeat_to_length(&key, text.len());

    text.iter()
        .zip(expanded.iter())
        .map(|(&t, &k)| {
            let (Some(tp), Some(kp)) = (alphabet::position_of(t), alphabet::position_of(k)) else {
                warn!(text = ?t, key = ?k, "vigenere: symbol outside alphabet");
                return Err(CipherError::InvalidKey);
            };
            Ok(alphabet::symbol_at(alphabet::shift(tp, sign * kp as i64)))
        })
        .collect()
}
