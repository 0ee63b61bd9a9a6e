//! Text normalization helpers shared by the validator and the ciphers.

/// Removes every ASCII space (`' '`) from `text`.
///
/// Other whitespace (tabs, newlines) is kept so it can be rejected by the
/// alphabet check.
///
/// # Parameters
/// - `text`: Input text.
///
/// # Returns
/// The text without spaces.
pub fn remove_spaces(text: &str) -> String {
    text.chars().filter(|&c| c != ' ').collect()
}

/// Upper-cases `text` and removes spaces, yielding the form that is checked
/// against the alphabet.
pub fn normalize(text: &str) -> String {
    remove_spaces(&text.to_uppercase())
}

/// Repeats `symbols` cyclically until `length` symbols have been produced.
///
/// If `symbols` is longer than `length` it is truncated. An empty input
/// yields an empty output regardless of `length`.
///
/// # Parameters
/// - `symbols`: The sequence to repeat.
/// - `length`: Desired output length.
///
/// # Returns
/// A `Vec<char>` of exactly `length` symbols (or empty).
pub fn repeat_to_length(symbols: &[char], length: usize) -> Vec<char> {
    if symbols.is_empty() {
        return Vec::new();
    }
    symbols.iter().copied().cycle().take(length).collect()
}
