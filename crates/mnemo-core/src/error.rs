//! Mnemonic error types.

use thiserror::Error;

/// Errors that can occur in mnemonic encoding, decoding, and seed derivation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MnemonicError {
    /// Entropy length outside 16-32 bytes or not a multiple of 4, or a
    /// generation strength that is not a multiple of 32 bits.
    #[error("invalid entropy: {0}")]
    InvalidEntropy(String),

    /// Word count not a multiple of 3, or a word absent from the wordlist.
    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    /// Recomputed checksum bits do not match the embedded checksum.
    #[error("invalid checksum")]
    InvalidChecksum,

    /// No wordlist was supplied and no process-wide default is configured.
    #[error("a wordlist is required but none was given or configured")]
    WordlistRequired,

    /// Language identifier not present in the registry.
    #[error("unknown wordlist: {0}")]
    UnknownWordlist(String),

    /// No default wordlist has been configured.
    #[error("no default wordlist is set")]
    NoDefaultWordlist,

    /// Wordlist construction with the wrong word count or duplicate words.
    #[error("invalid wordlist: {0}")]
    InvalidWordlist(String),

    /// Failure surfaced by the underlying key-derivation primitive.
    #[error("key derivation: {0}")]
    KeyDerivation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_checksum() {
        assert_eq!(MnemonicError::InvalidChecksum.to_string(), "invalid checksum");
    }

    #[test]
    fn display_unknown_wordlist_includes_identifier() {
        let e = MnemonicError::UnknownWordlist("XX".into());
        assert_eq!(e.to_string(), "unknown wordlist: XX");
    }

    #[test]
    fn display_no_default_wordlist() {
        assert_eq!(
            MnemonicError::NoDefaultWordlist.to_string(),
            "no default wordlist is set"
        );
    }

    #[test]
    fn clone_and_eq() {
        let e1 = MnemonicError::InvalidEntropy("15 bytes".into());
        let e2 = e1.clone();
        assert_eq!(e1, e2);
    }
}
