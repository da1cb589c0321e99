//! Shared helpers for mnemonic integration tests.

use mnemo_core::{Wordlist, WORDLIST_LEN};

/// Build a synthetic 2048-word list (`word0000` .. `word2047`) joined by
/// ASCII space, for tests that need a non-English language.
pub fn synthetic_wordlist(language: &str) -> Wordlist {
    Wordlist::new(language, synthetic_words()).expect("synthetic wordlist is well-formed")
}

/// Same as [`synthetic_wordlist`] with an explicit separator.
pub fn synthetic_wordlist_with_separator(language: &str, separator: char) -> Wordlist {
    Wordlist::with_separator(language, synthetic_words(), separator)
        .expect("synthetic wordlist is well-formed")
}

fn synthetic_words() -> Vec<String> {
    (0..WORDLIST_LEN).map(|i| format!("word{i:04}")).collect()
}
