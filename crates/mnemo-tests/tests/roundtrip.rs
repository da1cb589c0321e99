//! Round-trip and checksum-sensitivity properties of the mnemonic codec.

use proptest::prelude::*;

use mnemo_core::{
    english, entropy_to_mnemonic, mnemonic_to_entropy, register_wordlist, validate_mnemonic,
    IDEOGRAPHIC_SPACE,
};
use mnemo_tests::{synthetic_wordlist, synthetic_wordlist_with_separator};

const ZERO_12: &str = "abandon abandon abandon abandon abandon abandon abandon abandon \
                       abandon abandon abandon about";

#[test]
fn separator_follows_wordlist_attribute() {
    let english = english();
    let japanese = synthetic_wordlist_with_separator("JA", IDEOGRAPHIC_SPACE);

    let ascii_joined = entropy_to_mnemonic(&[0u8; 16], Some(&english)).unwrap();
    assert!(ascii_joined.contains(' '));
    assert!(!ascii_joined.contains(IDEOGRAPHIC_SPACE));

    let ideographic_joined = entropy_to_mnemonic(&[0u8; 16], Some(&japanese)).unwrap();
    assert!(ideographic_joined.contains(IDEOGRAPHIC_SPACE));
    assert!(!ideographic_joined.contains(' '));

    // The ideographically-joined phrase still decodes.
    let entropy = mnemonic_to_entropy(&ideographic_joined, Some(&japanese)).unwrap();
    assert_eq!(entropy, "00000000000000000000000000000000");
}

/// For a fixed 11-word prefix, exactly 128 of the 2048 final words carry a
/// checksum consistent with the prefix: the last word contributes 7 entropy
/// bits (128 possibilities), each with exactly one valid 4-bit checksum.
#[test]
fn exactly_128_valid_final_words() {
    let english = english();
    let prefix = "abandon ".repeat(11);
    let valid = english
        .words()
        .iter()
        .filter(|word| validate_mnemonic(&format!("{prefix}{word}"), Some(&english)))
        .count();
    assert_eq!(valid, 128);
}

/// Substituting any single word must never decode back to the original
/// entropy: either validation fails or different entropy is recovered.
#[test]
fn word_substitution_never_preserves_entropy() {
    let english = english();
    let original = mnemonic_to_entropy(ZERO_12, Some(&english)).unwrap();
    let words: Vec<&str> = ZERO_12.split(' ').collect();

    for position in 0..words.len() {
        for substitute in ["ability", "zoo", "letter"] {
            if words[position] == substitute {
                continue;
            }
            let mut mutated = words.clone();
            mutated[position] = substitute;
            let phrase = mutated.join(" ");
            match mnemonic_to_entropy(&phrase, Some(&english)) {
                Ok(entropy) => assert_ne!(entropy, original, "{phrase:?}"),
                Err(_) => {}
            }
        }
    }
}

/// Encoding is independent of unrelated registry mutations.
#[test]
fn encoding_unaffected_by_registry_mutation() {
    let english = english();
    let entropy = [0x5a; 20];
    let before = entropy_to_mnemonic(&entropy, Some(&english)).unwrap();
    register_wordlist(synthetic_wordlist("XX"));
    let after = entropy_to_mnemonic(&entropy, Some(&english)).unwrap();
    assert_eq!(before, after);
}

// --- proptest ---

fn entropy_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::sample::select(vec![16usize, 20, 24, 28, 32])
        .prop_flat_map(|len| prop::collection::vec(any::<u8>(), len))
}

proptest! {
    #[test]
    fn roundtrip_english(entropy in entropy_strategy()) {
        let english = english();
        let mnemonic = entropy_to_mnemonic(&entropy, Some(&english)).unwrap();
        let recovered = mnemonic_to_entropy(&mnemonic, Some(&english)).unwrap();
        prop_assert_eq!(recovered, hex::encode(&entropy));
    }

    #[test]
    fn roundtrip_synthetic_ideographic(entropy in entropy_strategy()) {
        let wordlist = synthetic_wordlist_with_separator("JA", IDEOGRAPHIC_SPACE);
        let mnemonic = entropy_to_mnemonic(&entropy, Some(&wordlist)).unwrap();
        let recovered = mnemonic_to_entropy(&mnemonic, Some(&wordlist)).unwrap();
        prop_assert_eq!(recovered, hex::encode(&entropy));
    }

    #[test]
    fn word_count_matches_entropy(entropy in entropy_strategy()) {
        let english = english();
        let mnemonic = entropy_to_mnemonic(&entropy, Some(&english)).unwrap();
        let expected_words = (entropy.len() * 8 + entropy.len() * 8 / 32) / 11;
        prop_assert_eq!(mnemonic.split(' ').count(), expected_words);
    }

    #[test]
    fn generated_phrases_validate(entropy in entropy_strategy()) {
        let english = english();
        let mnemonic = entropy_to_mnemonic(&entropy, Some(&english)).unwrap();
        prop_assert!(validate_mnemonic(&mnemonic, Some(&english)));
    }
}
