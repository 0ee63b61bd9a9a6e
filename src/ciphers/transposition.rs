//! Columnar transposition cipher.
//!
//! The text (spaces removed) is written row-major into a grid as wide as
//! the key, then the columns are read out in the alphabetical order of the
//! key symbols. Encryption output separates columns with single spaces;
//! decryption ignores spaces in its input.
//!
//! # Column order
//!
//! Key symbols are ranked by alphabet position (so Ñ sorts between N and
//! O). Repeated symbols keep their left-to-right order, which keeps the
//! column order a permutation for any key.

use tracing::warn;

use crate::alphabet;
use crate::config::Padding;
use crate::error::CipherError;
use crate::utils::grid::Grid;
use crate::utils::text::remove_spaces;

/// Encrypts `text` with `key` using [`Padding::Wrap`].
///
/// # Errors
/// Returns [`CipherError::InvalidKey`] if `key` is empty or contains a
/// symbol outside the alphabet.
///
/// # Examples
///
/// ```
/// use cifrado_clasico::ciphers::transposition;
///
/// assert_eq!(
///     transposition::encrypt("ATACARALAMANECER", "CLAVE").unwrap(),
///     "ALET ARAR AMEC TANA CACA"
/// );
/// ```
pub fn encrypt(text: &str, key: &str) -> Result<String, CipherError> {
    encrypt_with(text, key, Padding::Wrap)
}

/// Decrypts `text` with `key` using [`Padding::Wrap`].
///
/// When the original text length was not a multiple of the key length,
/// the wrapped padding symbols come back at the end of the output.
///
/// # Examples
///
/// ```
/// use cifrado_clasico::ciphers::transposition;
///
/// assert_eq!(
///     transposition::decrypt("ALET ARAR AMEC TANA CACA", "CLAVE").unwrap(),
///     "ATACARALAMANECERATAC"
/// );
/// ```
pub fn decrypt(text: &str, key: &str) -> Result<String, CipherError> {
    decrypt_with(text, key, Padding::Wrap)
}

/// Encrypts `text` with `key` and the given padding mode.
///
/// # Parameters
/// - `text`: Text to encrypt; spaces are removed first.
/// - `key`: Upper-cased key over the alphabet; its length is the grid width.
/// - `padding`: How an incomplete last row is filled.
///
/// # Returns
/// The columns in key order joined with single spaces. Empty text yields
/// an empty string.
///
/// # Errors
/// Returns [`CipherError::InvalidKey`] if `key` is empty or contains a
/// symbol outside the alphabet.
pub fn encrypt_with(text: &str, key: &str, padding: Padding) -> Result<String, CipherError> {
    let order = column_order(key)?;
    let symbols: Vec<char> = remove_spaces(text).chars().collect();
    if symbols.is_empty() {
        return Ok(String::new());
    }

    let grid = match padding {
        Padding::Wrap => Grid::wrapped(&symbols, order.len()),
        Padding::Ragged => Grid::ragged(&symbols, order.len()),
    };

    let columns: Vec<String> = order.iter().map(|&c| grid.column(c)).collect();
    Ok(columns.join(" "))
}

/// Decrypts `text` with `key` and the given padding mode.
///
/// The padding mode must match the one used to encrypt.
///
/// # Returns
/// The recovered text with no separators.
///
/// # Errors
/// Returns [`CipherError::InvalidKey`] if `key` is empty or contains a
/// symbol outside the alphabet.
pub fn decrypt_with(text: &str, key: &str, padding: Padding) -> Result<String, CipherError> {
    let order = column_order(key)?;
    let symbols: Vec<char> = remove_spaces(text).chars().collect();
    if symbols.is_empty() {
        return Ok(String::new());
    }

    let columns = match padding {
        Padding::Wrap => split_even(&symbols, &order),
        Padding::Ragged => split_ragged(&symbols, &order),
    };
    Ok(Grid::from_columns(&columns).into_text())
}

/// Returns the original column index read at each output position.
///
/// # Errors
/// Returns [`CipherError::InvalidKey`] for an empty key or a key symbol
/// outside the alphabet.
pub fn column_order(key: &str) -> Result<Vec<usize>, CipherError> {
    let positions = key
        .chars()
        .map(|symbol| {
            alphabet::position_of(symbol).ok_or_else(|| {
                warn!(symbol = ?symbol, "transposition: key symbol outside alphabet");
                CipherError::InvalidKey
            })
        })
        .collect::<Result<Vec<usize>, CipherError>>()?;
    if positions.is_empty() {
        warn!("transposition: empty key");
        return Err(CipherError::InvalidKey);
    }

    let mut order: Vec<usize> = (0..positions.len()).collect();
    // Stable: equal symbols keep their original left-to-right order.
    order.sort_by_key(|&c| positions[c]);
    Ok(order)
}

/// Splits wrapped ciphertext into equal chunks of `ceil(n / k)` symbols and
/// puts each chunk back under its original column.
///
/// Short input leaves trailing chunks short or empty.
fn split_even(symbols: &[char], order: &[usize]) -> Vec<Vec<char>> {
    let k = order.len();
    let rows = symbols.len().div_ceil(k);
    let chunks: Vec<&[char]> = symbols.chunks(rows).collect();

    let mut columns = vec![Vec::new(); k];
    for (slot, &col) in order.iter().enumerate() {
        if let Some(chunk) = chunks.get(slot) {
            columns[col] = chunk.to_vec();
        }
    }
    columns
}

/// Splits ragged ciphertext using the column heights implied by its length:
/// the first `n mod k` columns (in key order of the plaintext grid) are one
/// symbol taller.
fn split_ragged(symbols: &[char], order: &[usize]) -> Vec<Vec<char>> {
    let k = order.len();
    let rows = symbols.len().div_ceil(k);
    let tall = symbols.len() % k;
    let height = |col: usize| if tall == 0 || col < tall { rows } else { rows - 1 };

    let mut columns = vec![Vec::new(); k];
    let mut cursor = 0;
    for &col in order {
        let end = (cursor + height(col)).min(symbols.len());
        columns[col] = symbols[cursor..end].to_vec();
        cursor = end;
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_order_clave() {
        // C=2 L=11 A=0 V=22 E=4 -> A, C, E, L, V.
        assert_eq!(column_order("CLAVE").unwrap(), vec![2, 0, 4, 1, 3]);
    }

    #[test]
    fn test_column_order_repeated_symbols_is_permutation() {
        assert_eq!(column_order("BAB").unwrap(), vec![1, 0, 2]);
        assert_eq!(column_order("AAA").unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_column_order_enye_between_n_and_o() {
        // N=13 Ñ=14 O=15 regardless of code point order.
        assert_eq!(column_order("OÑN").unwrap(), vec![2, 1, 0]);
    }

    #[test]
    fn test_column_order_invalid_keys() {
        assert_eq!(column_order(""), Err(CipherError::InvalidKey));
        assert_eq!(column_order("CLAVE1"), Err(CipherError::InvalidKey));
        assert_eq!(column_order("clave"), Err(CipherError::InvalidKey));
    }

    #[test]
    fn test_encrypt_wraps_padding() {
        // Grid rows: ATACA RALAM ANECE R+ATAC.
        assert_eq!(
            encrypt("ATACARALAMANECER", "CLAVE").unwrap(),
            "ALET ARAR AMEC TANA CACA"
        );
    }

    #[test]
    fn test_encrypt_ignores_spaces() {
        assert_eq!(
            encrypt("ATACAR AL AMANECER", "CLAVE").unwrap(),
            encrypt("ATACARALAMANECER", "CLAVE").unwrap()
        );
    }

    #[test]
    fn test_exact_fit_roundtrip() {
        let ct = encrypt("HOLAMUNDO", "ABC").unwrap();
        assert_eq!(ct, "HAN OMD LUO");
        assert_eq!(decrypt(&ct, "ABC").unwrap(), "HOLAMUNDO");
    }

    #[test]
    fn test_repeated_key_roundtrip() {
        let ct = encrypt("HOLAMUNDO", "BAB").unwrap();
        assert_eq!(ct, "OMD HAN LUO");
        assert_eq!(decrypt(&ct, "BAB").unwrap(), "HOLAMUNDO");
    }

    #[test]
    fn test_wrap_decrypt_returns_padding() {
        assert_eq!(
            decrypt("ALETARARAMECTANACACA", "CLAVE").unwrap(),
            "ATACARALAMANECERATAC"
        );
    }

    #[test]
    fn test_wrap_decrypt_tolerates_short_input() {
        // 7 symbols, 5 columns: chunks AB CD EF G and one empty chunk.
        assert_eq!(decrypt("ABCDEFG", "CLAVE").unwrap(), "CGAEDBF");
    }

    #[test]
    fn test_ragged_encrypt() {
        assert_eq!(
            encrypt_with("ATACARALAMANECER", "CLAVE", Padding::Ragged).unwrap(),
            "ALE ARAR AME TAN CAC"
        );
    }

    #[test]
    fn test_ragged_roundtrip_any_length() {
        let plain = "ATACARALAMANECER";
        for len in 1..=plain.len() {
            let text = &plain[..len];
            let ct = encrypt_with(text, "CLAVE", Padding::Ragged).unwrap();
            assert_eq!(
                decrypt_with(&ct, "CLAVE", Padding::Ragged).unwrap(),
                text,
                "length {}",
                len
            );
        }
    }

    #[test]
    fn test_key_longer_than_text() {
        let ct = encrypt_with("SOL", "CLAVE", Padding::Ragged).unwrap();
        assert_eq!(decrypt_with(&ct, "CLAVE", Padding::Ragged).unwrap(), "SOL");
        // Wrap pads the single row with the text itself: S O L S O.
        assert_eq!(encrypt("SOL", "CLAVE").unwrap(), "L S O O S");
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(encrypt("", "CLAVE").unwrap(), "");
        assert_eq!(decrypt("  ", "CLAVE").unwrap(), "");
    }

    #[test]
    fn test_invalid_key() {
        assert_eq!(encrypt("HOLA", ""), Err(CipherError::InvalidKey));
        assert_eq!(decrypt("HOLA", "ÁRBOL"), Err(CipherError::InvalidKey));
    }
}
