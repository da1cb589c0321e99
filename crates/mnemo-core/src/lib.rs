//! # mnemo-core — mnemonic encoding and seed derivation.
//!
//! A deterministic, bidirectional mapping between an entropy buffer and a
//! human-transcribable word sequence with an embedded checksum, plus
//! PBKDF2 derivation of a 64-byte seed from the mnemonic and an optional
//! passphrase, following BIP-39.
//!
//! # Modules
//!
//! - [`error`] — `MnemonicError` enum
//! - [`mnemonic`] — entropy↔mnemonic codec, validation, generation
//! - [`seed`] — PBKDF2-HMAC-SHA512 seed derivation, sync and async
//! - [`wordlist`] — `Wordlist`, registry, process-wide default selection

pub mod error;
pub mod mnemonic;
pub mod seed;
pub mod wordlist;

mod bits;
mod checksum;
mod words;

// Re-exports for convenient access
pub use error::MnemonicError;
pub use mnemonic::{
    entropy_to_mnemonic, generate_mnemonic, generate_mnemonic_with_rng, mnemonic_to_entropy,
    validate_mnemonic, DEFAULT_STRENGTH_BITS,
};
pub use seed::{mnemonic_to_seed, mnemonic_to_seed_sync, Seed, PBKDF2_ROUNDS, SEED_LEN};
pub use wordlist::{
    english, get_default_wordlist, register_wordlist, set_default_wordlist, wordlist, Wordlist,
    WordlistRegistry, ENGLISH_LANGUAGE, IDEOGRAPHIC_SPACE, WORDLIST_LEN,
};
