//! Regression tests for the transposition cipher's wrap padding.
//!
//! An incomplete last grid row is filled with the leading symbols of the
//! text instead of blanks. Ciphertexts produced this way must stay
//! decryptable exactly as before, padding included, so these tests pin the
//! lossy behavior rather than "fix" it. The ragged mode is the exact
//! alternative.

use cifrado_clasico::ciphers::transposition;
use cifrado_clasico::config::{EngineConfig, Padding};
use cifrado_clasico::{CipherEngine, CipherKind, Direction};

/// (plaintext, key, wrapped ciphertext, wrapped decryption)
const VECTORS: [(&str, &str, &str, &str); 3] = [
    (
        "ATACARALAMANECER",
        "CLAVE",
        "ALET ARAR AMEC TANA CACA",
        "ATACARALAMANECERATAC",
    ),
    ("SOL", "CLAVE", "L S O O S", "SOLSO"),
    ("HOLAMUNDO", "ABC", "HAN OMD LUO", "HOLAMUNDO"),
];

// ═══════════════════════════════════════════════════════════════════════
// Frozen vectors
// ═══════════════════════════════════════════════════════════════════════

/// Encrypting with wrap padding reuses leading plaintext symbols.
#[test]
fn wrap_encrypt_vectors() {
    for (plain, key, cipher, _) in VECTORS {
        assert_eq!(
            transposition::encrypt(plain, key).unwrap(),
            cipher,
            "plaintext {:?}, key {:?}",
            plain,
            key
        );
    }
}

/// Decrypting returns the padded grid, so the tail repeats the head.
#[test]
fn wrap_decrypt_keeps_padding() {
    for (plain, key, cipher, padded) in VECTORS {
        let out = transposition::decrypt(cipher, key).unwrap();
        assert_eq!(out, padded);
        assert!(out.starts_with(plain));
    }
}

/// Spaces between column groups are optional on decryption.
#[test]
fn wrap_decrypt_ignores_group_spaces() {
    for (_, key, cipher, padded) in VECTORS {
        let joined: String = cipher.chars().filter(|&c| c != ' ').collect();
        assert_eq!(transposition::decrypt(&joined, key).unwrap(), padded);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Engine defaults
// ═══════════════════════════════════════════════════════════════════════

/// The default engine keeps wrap padding for compatibility.
#[test]
fn engine_defaults_to_wrap() {
    let engine = CipherEngine::new();
    assert_eq!(engine.config().padding, Padding::Wrap);
    let ct = engine
        .run(
            CipherKind::Transposition,
            Direction::Encrypt,
            "atacar al amanecer",
            "clave",
        )
        .unwrap();
    assert_eq!(ct, VECTORS[0].2);
}

/// Ragged mode round-trips the lengths wrap padding cannot.
#[test]
fn ragged_mode_recovers_exact_text() {
    let engine = CipherEngine::with_config(EngineConfig {
        padding: Padding::Ragged,
    });
    for (plain, key, _, _) in VECTORS {
        let ct = engine
            .run(CipherKind::Transposition, Direction::Encrypt, plain, key)
            .unwrap();
        let pt = engine
            .run(CipherKind::Transposition, Direction::Decrypt, &ct, key)
            .unwrap();
        assert_eq!(pt, plain);
    }
}
