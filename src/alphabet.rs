//! The 27-symbol Spanish alphabet shared by every cipher and validator.
//!
//! Symbols are the uppercase Latin letters A–Z with Ñ placed between N and
//! O, following Spanish collation. Positions are zero-based.

/// Number of symbols in the alphabet.
pub const ALPHABET_LEN: usize = 27;

/// The ordered alphabet: `ABCDEFGHIJKLMNÑOPQRSTUVWXYZ`.
pub const ALPHABET: [char; ALPHABET_LEN] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'Ñ', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Returns the ordered alphabet.
///
/// # Examples
///
/// ```
/// use cifrado_clasico::alphabet;
///
/// assert_eq!(alphabet::alphabet().len(), 27);
/// assert_eq!(alphabet::alphabet()[14], 'Ñ');
/// ```
pub fn alphabet() -> &'static [char; ALPHABET_LEN] {
    &ALPHABET
}

/// Returns the position of `symbol`, or `None` if it is not an alphabet
/// symbol.
///
/// Only uppercase symbols are members; callers normalize case first.
///
/// # Examples
///
/// ```
/// use cifrado_clasico::alphabet::position_of;
///
/// assert_eq!(position_of('A'), Some(0));
/// assert_eq!(position_of('Ñ'), Some(14));
/// assert_eq!(position_of('O'), Some(15));
/// assert_eq!(position_of('Á'), None);
/// ```
pub fn position_of(symbol: char) -> Option<usize> {
    match symbol {
        'A'..='N' => Some(symbol as usize - 'A' as usize),
        'Ñ' => Some(14),
        'O'..='Z' => Some(symbol as usize - 'A' as usize + 1),
        _ => None,
    }
}

/// Returns `true` if `symbol` belongs to the alphabet.
pub fn contains(symbol: char) -> bool {
    position_of(symbol).is_some()
}

/// Returns the symbol at `index`, wrapping modulo [`ALPHABET_LEN`].
pub fn symbol_at(index: usize) -> char {
    ALPHABET[index % ALPHABET_LEN]
}

/// Moves `position` by `delta` places, wrapping around the alphabet.
///
/// Uses Euclidean remainder so negative deltas wrap backwards, and reduces
/// `delta` first so no `i64` value can overflow.
///
/// # Examples
///
/// ```
/// use cifrado_clasico::alphabet::shift;
///
/// assert_eq!(shift(0, -1), 26);
/// assert_eq!(shift(26, 1), 0);
/// assert_eq!(shift(3, i64::MIN), shift(3, i64::MIN % 27));
/// ```
pub fn shift(position: usize, delta: i64) -> usize {
    let n = ALPHABET_LEN as i64;
    let delta = delta.rem_euclid(n);
    ((position as i64 % n + delta) % n) as usize
}
