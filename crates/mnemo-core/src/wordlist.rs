//! Wordlist data model and the process-wide wordlist registry.
//!
//! A [`Wordlist`] is an immutable, ordered array of exactly 2048 unique
//! words for one language; a word's position is its canonical 11-bit index.
//! Words are NFKD-normalized once at construction so that encoding output
//! and decoding lookups always agree, and each wordlist carries its join
//! separator as an explicit attribute (the ideographic space U+3000 for
//! Japanese-style lists) instead of inferring it from content.
//!
//! The registry exists in two forms: [`WordlistRegistry`] values for
//! callers that want deterministic, isolated state, and a process-wide
//! instance behind [`register_wordlist`] / [`set_default_wordlist`] /
//! [`get_default_wordlist`] that is pre-seeded with the built-in English
//! list. The process default is last-writer-wins and expected to be
//! configured during initialization.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

use crate::error::MnemonicError;
use crate::words;

/// Number of words in a wordlist; a word index is always 11 bits.
pub const WORDLIST_LEN: usize = 2048;

/// Ideographic space (U+3000), the join separator of Japanese wordlists.
pub const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// Language identifier of the built-in English wordlist.
pub const ENGLISH_LANGUAGE: &str = "EN";

/// An ordered, immutable 2048-word vocabulary for one language.
pub struct Wordlist {
    language: String,
    /// NFKD-normalized words in canonical order.
    words: Vec<String>,
    /// Reverse lookup: normalized word -> 11-bit index.
    index: HashMap<String, u16>,
    separator: char,
}

impl Wordlist {
    /// Build a wordlist joined by ASCII space.
    ///
    /// Fails with [`MnemonicError::InvalidWordlist`] unless exactly 2048
    /// unique words are supplied. Words are NFKD-normalized; uniqueness is
    /// checked after normalization.
    pub fn new<S: AsRef<str>>(
        language: &str,
        words: impl IntoIterator<Item = S>,
    ) -> Result<Self, MnemonicError> {
        Self::with_separator(language, words, ' ')
    }

    /// Build a wordlist with an explicit join separator.
    pub fn with_separator<S: AsRef<str>>(
        language: &str,
        words: impl IntoIterator<Item = S>,
        separator: char,
    ) -> Result<Self, MnemonicError> {
        let words: Vec<String> = words
            .into_iter()
            .map(|word| word.as_ref().nfkd().collect())
            .collect();
        if words.len() != WORDLIST_LEN {
            return Err(MnemonicError::InvalidWordlist(format!(
                "expected {WORDLIST_LEN} words, got {}",
                words.len()
            )));
        }
        let mut index = HashMap::with_capacity(WORDLIST_LEN);
        for (position, word) in words.iter().enumerate() {
            if index.insert(word.clone(), position as u16).is_some() {
                return Err(MnemonicError::InvalidWordlist(format!(
                    "duplicate word: {word}"
                )));
            }
        }
        Ok(Self {
            language: language.to_string(),
            words,
            index,
            separator,
        })
    }

    /// The language identifier this wordlist was registered under.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The word at an 11-bit index, or `None` past the end of the list.
    pub fn word(&self, index: u16) -> Option<&str> {
        self.words.get(index as usize).map(String::as_str)
    }

    /// The exact index of a word (case-sensitive, NFKD-normalized form).
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.index.get(word).copied()
    }

    /// The separator used to join words of this list into a mnemonic.
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Read access to the full ordered word array.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl fmt::Debug for Wordlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wordlist")
            .field("language", &self.language)
            .field("separator", &self.separator)
            .field("words", &self.words.len())
            .finish()
    }
}

/// Built-in English wordlist, shared by the process registry.
static ENGLISH: LazyLock<Arc<Wordlist>> = LazyLock::new(|| {
    Arc::new(
        Wordlist::new(ENGLISH_LANGUAGE, words::ENGLISH)
            .expect("built-in English wordlist is well-formed"),
    )
});

/// The built-in English wordlist.
pub fn english() -> Arc<Wordlist> {
    ENGLISH.clone()
}

/// A set of named wordlists with an optional default selection.
///
/// The default is stored by language identifier, so looking it back up is
/// unambiguous even when two languages happen to share word content.
pub struct WordlistRegistry {
    lists: HashMap<String, Arc<Wordlist>>,
    default: Option<String>,
}

impl WordlistRegistry {
    /// An empty registry with no wordlists and no default.
    pub fn new() -> Self {
        Self {
            lists: HashMap::new(),
            default: None,
        }
    }

    /// A registry pre-seeded with the built-in English wordlist as default.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register_shared(english());
        registry.default = Some(ENGLISH_LANGUAGE.to_string());
        registry
    }

    /// Register a wordlist under its language identifier.
    ///
    /// Re-registering a language replaces the previous list; an existing
    /// default selection for that language now resolves to the new list.
    pub fn register(&mut self, wordlist: Wordlist) -> Arc<Wordlist> {
        let shared = Arc::new(wordlist);
        self.register_shared(shared.clone());
        shared
    }

    fn register_shared(&mut self, wordlist: Arc<Wordlist>) {
        self.lists.insert(wordlist.language().to_string(), wordlist);
    }

    /// Select the default wordlist by language identifier.
    pub fn set_default(&mut self, language: &str) -> Result<(), MnemonicError> {
        if !self.lists.contains_key(language) {
            return Err(MnemonicError::UnknownWordlist(language.to_string()));
        }
        self.default = Some(language.to_string());
        Ok(())
    }

    /// The language identifier of the current default wordlist.
    pub fn default_language(&self) -> Result<String, MnemonicError> {
        self.default.clone().ok_or(MnemonicError::NoDefaultWordlist)
    }

    /// The current default wordlist, for codec operations that were not
    /// given an explicit one.
    pub fn default_wordlist(&self) -> Result<Arc<Wordlist>, MnemonicError> {
        self.default
            .as_deref()
            .and_then(|language| self.lists.get(language))
            .cloned()
            .ok_or(MnemonicError::WordlistRequired)
    }

    /// Look up a wordlist by language identifier.
    pub fn get(&self, language: &str) -> Option<Arc<Wordlist>> {
        self.lists.get(language).cloned()
    }

    /// All registered language identifiers, sorted.
    pub fn languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self.lists.keys().cloned().collect();
        languages.sort();
        languages
    }
}

impl Default for WordlistRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}

impl fmt::Debug for WordlistRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordlistRegistry")
            .field("languages", &self.languages())
            .field("default", &self.default)
            .finish()
    }
}

/// Process-wide registry, seeded with built-in English on first use.
static REGISTRY: LazyLock<RwLock<WordlistRegistry>> =
    LazyLock::new(|| RwLock::new(WordlistRegistry::with_builtin()));

/// Register a wordlist in the process-wide registry.
pub fn register_wordlist(wordlist: Wordlist) -> Arc<Wordlist> {
    REGISTRY.write().register(wordlist)
}

/// Select the process-wide default wordlist by language identifier.
pub fn set_default_wordlist(language: &str) -> Result<(), MnemonicError> {
    REGISTRY.write().set_default(language)?;
    debug!(%language, "default wordlist changed");
    Ok(())
}

/// The language identifier of the process-wide default wordlist.
pub fn get_default_wordlist() -> Result<String, MnemonicError> {
    REGISTRY.read().default_language()
}

/// Look up a wordlist in the process-wide registry.
pub fn wordlist(language: &str) -> Option<Arc<Wordlist>> {
    REGISTRY.read().get(language)
}

/// Resolve the process-wide default for codec operations.
pub(crate) fn default_wordlist() -> Result<Arc<Wordlist>, MnemonicError> {
    REGISTRY.read().default_wordlist()
}
