//! Property tests for the cipher round-trip laws.

use cifrado_clasico::alphabet::ALPHABET;
use cifrado_clasico::ciphers::{caesar, transposition, vigenere};
use cifrado_clasico::config::Padding;
use cifrado_clasico::validator::{validate, KeyKind};
use cifrado_clasico::ValidationError;
use proptest::prelude::*;

fn alphabet_text(min: usize, max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(ALPHABET.to_vec()), min..=max)
        .prop_map(|symbols| symbols.into_iter().collect())
}

proptest! {
    #[test]
    fn caesar_roundtrip(text in alphabet_text(0, 40), shift in any::<i64>()) {
        let ct = caesar::encrypt(&text, shift).unwrap();
        prop_assert_eq!(caesar::decrypt(&ct, shift).unwrap(), text);
    }

    #[test]
    fn caesar_shift_is_modular(text in alphabet_text(0, 20), shift in -1000i64..1000) {
        prop_assert_eq!(
            caesar::encrypt(&text, shift).unwrap(),
            caesar::encrypt(&text, shift + 27).unwrap()
        );
    }

    #[test]
    fn vigenere_roundtrip(text in alphabet_text(0, 40), key in alphabet_text(1, 12)) {
        let ct = vigenere::encrypt(&text, &key).unwrap();
        prop_assert_eq!(ct.chars().count(), text.chars().count());
        prop_assert_eq!(vigenere::decrypt(&ct, &key).unwrap(), text);
    }

    #[test]
    fn transposition_wrap_roundtrip_on_full_grids(
        key in alphabet_text(1, 8),
        rows in 1usize..8,
        seed in alphabet_text(64, 64),
    ) {
        let len = key.chars().count() * rows;
        let text: String = seed.chars().take(len).collect();
        let ct = transposition::encrypt(&text, &key).unwrap();
        prop_assert_eq!(transposition::decrypt(&ct, &key).unwrap(), text);
    }

    #[test]
    fn transposition_ragged_roundtrip(text in alphabet_text(1, 40), key in alphabet_text(1, 8)) {
        let ct = transposition::encrypt_with(&text, &key, Padding::Ragged).unwrap();
        prop_assert_eq!(
            transposition::decrypt_with(&ct, &key, Padding::Ragged).unwrap(),
            text
        );
    }

    #[test]
    fn alphabet_text_passes_validation(text in alphabet_text(1, 30)) {
        // Digits never appear, so the numeric check cannot fire.
        prop_assert_eq!(validate(&text, KeyKind::Text), Ok(text.as_str()));
    }

    #[test]
    fn digit_strings_are_numeric(digits in "[0-9]{1,12}") {
        prop_assert_eq!(
            validate(&digits, KeyKind::Text),
            Err(ValidationError::NumericString)
        );
        prop_assert_eq!(validate(&digits, KeyKind::Integer), Ok(digits.as_str()));
    }
}
