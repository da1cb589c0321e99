//! Process-wide default-wordlist lifecycle.
//!
//! These tests mutate the global registry, so they live in their own test
//! binary (integration test files run as separate processes) and the
//! mutations are sequenced inside a single test function.

use mnemo_core::{
    entropy_to_mnemonic, get_default_wordlist, register_wordlist, set_default_wordlist,
    MnemonicError,
};
use mnemo_tests::synthetic_wordlist;

#[test]
fn default_lifecycle() {
    // The process registry is pre-seeded with built-in English.
    assert_eq!(get_default_wordlist().unwrap(), "EN");
    let with_default = entropy_to_mnemonic(&[0u8; 16], None).unwrap();
    assert!(with_default.starts_with("abandon"));

    // Switching to an unregistered language fails and leaves the default.
    let err = set_default_wordlist("ES").unwrap_err();
    assert_eq!(err, MnemonicError::UnknownWordlist("ES".into()));
    assert_eq!(get_default_wordlist().unwrap(), "EN");

    // After registration the switch sticks and drives default resolution.
    register_wordlist(synthetic_wordlist("ES"));
    set_default_wordlist("ES").unwrap();
    assert_eq!(get_default_wordlist().unwrap(), "ES");
    let spanish = entropy_to_mnemonic(&[0u8; 16], None).unwrap();
    assert!(spanish.starts_with("word0000"));

    // And back.
    set_default_wordlist("EN").unwrap();
    assert_eq!(get_default_wordlist().unwrap(), "EN");
    assert_eq!(entropy_to_mnemonic(&[0u8; 16], None).unwrap(), with_default);
}
