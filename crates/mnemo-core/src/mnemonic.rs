//! Mnemonic encoding, decoding, validation, and generation.
//!
//! A mnemonic packs `entropy ‖ checksum` into consecutive 11-bit indices
//! into a 2048-word list. Valid entropy lengths are 16-32 bytes in 4-byte
//! steps, giving 12/15/18/21/24-word phrases. Decoding recovers and
//! re-verifies the checksum, so a corrupted phrase is rejected rather than
//! silently producing different entropy.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::trace;
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroize;

use crate::bits::{bits_to_bytes, bits_to_index, bytes_to_bits, index_bits, WORD_BITS};
use crate::checksum::checksum_bits;
use crate::error::MnemonicError;
use crate::wordlist::{self, Wordlist, IDEOGRAPHIC_SPACE};

/// Default entropy strength for generated mnemonics, in bits (12 words).
pub const DEFAULT_STRENGTH_BITS: usize = 128;

const MIN_ENTROPY_BYTES: usize = 16;
const MAX_ENTROPY_BYTES: usize = 32;

fn check_entropy_len(len: usize) -> Result<(), MnemonicError> {
    if !(MIN_ENTROPY_BYTES..=MAX_ENTROPY_BYTES).contains(&len) || len % 4 != 0 {
        return Err(MnemonicError::InvalidEntropy(format!(
            "length {len} must be 16-32 bytes and a multiple of 4"
        )));
    }
    Ok(())
}

/// Encode an entropy buffer as a mnemonic phrase.
///
/// With `wordlist` absent, the process-wide default is used; if none is
/// configured either, this fails with [`MnemonicError::WordlistRequired`].
/// Words are joined by the wordlist's separator attribute (ASCII space for
/// most languages, U+3000 for Japanese-style lists).
pub fn entropy_to_mnemonic(
    entropy: &[u8],
    wordlist: Option<&Wordlist>,
) -> Result<String, MnemonicError> {
    check_entropy_len(entropy.len())?;
    let default;
    let wl = match wordlist {
        Some(wl) => wl,
        None => {
            default = wordlist::default_wordlist()?;
            default.as_ref()
        }
    };

    let mut bits = bytes_to_bits(entropy);
    bits.push_str(&checksum_bits(entropy));
    debug_assert_eq!(bits.len() % WORD_BITS, 0);

    let separator = wl.separator().to_string();
    let mut phrase = String::new();
    for start in (0..bits.len()).step_by(WORD_BITS) {
        let index = bits_to_index(&bits[start..start + WORD_BITS]);
        let word = wl
            .word(index)
            .expect("an 11-bit index is always within a 2048-word list");
        if !phrase.is_empty() {
            phrase.push_str(&separator);
        }
        phrase.push_str(word);
    }
    Ok(phrase)
}

/// Decode a mnemonic phrase back into its entropy, as lowercase hex.
///
/// The phrase is NFKD-normalized and split on ASCII space or ideographic
/// space regardless of the wordlist's own separator, so phrases transcribed
/// with either separator decode the same way. Fails with
/// [`MnemonicError::InvalidMnemonic`] for a word count that is not a
/// multiple of 3 or a word missing from the wordlist, with
/// [`MnemonicError::InvalidEntropy`] if the recovered payload has an
/// impossible length, and with [`MnemonicError::InvalidChecksum`] when the
/// embedded checksum does not match the recovered entropy.
pub fn mnemonic_to_entropy(
    mnemonic: &str,
    wordlist: Option<&Wordlist>,
) -> Result<String, MnemonicError> {
    let default;
    let wl = match wordlist {
        Some(wl) => wl,
        None => {
            default = wordlist::default_wordlist()?;
            default.as_ref()
        }
    };

    let normalized: String = mnemonic.nfkd().collect();
    let words: Vec<&str> = normalized.split([' ', IDEOGRAPHIC_SPACE]).collect();
    if words.is_empty() || words.len() % 3 != 0 {
        return Err(MnemonicError::InvalidMnemonic(format!(
            "word count {} is not a multiple of 3",
            words.len()
        )));
    }

    let mut bits = String::with_capacity(words.len() * WORD_BITS);
    for word in &words {
        let index = wl
            .index_of(word)
            .ok_or_else(|| MnemonicError::InvalidMnemonic(format!("unknown word: {word}")))?;
        bits.push_str(&index_bits(index));
    }

    // The entropy prefix is the largest multiple of 32 bits; the remainder
    // is the checksum suffix.
    let divider = bits.len() / 33 * 32;
    let (entropy_bits, checksum) = bits.split_at(divider);
    let entropy = bits_to_bytes(entropy_bits);
    check_entropy_len(entropy.len())?;
    if checksum_bits(&entropy) != checksum {
        return Err(MnemonicError::InvalidChecksum);
    }
    Ok(hex::encode(entropy))
}

/// Whether a phrase decodes as a valid mnemonic against the wordlist.
///
/// This is a boolean-only predicate: the distinction between failure kinds
/// is deliberately discarded.
pub fn validate_mnemonic(mnemonic: &str, wordlist: Option<&Wordlist>) -> bool {
    mnemonic_to_entropy(mnemonic, wordlist).is_ok()
}

/// Generate a mnemonic from the OS cryptographic RNG.
///
/// `strength_bits` must be a multiple of 32 in the 128-256 range;
/// [`DEFAULT_STRENGTH_BITS`] gives a 12-word phrase.
pub fn generate_mnemonic(
    strength_bits: usize,
    wordlist: Option<&Wordlist>,
) -> Result<String, MnemonicError> {
    generate_mnemonic_with_rng(strength_bits, &mut OsRng, wordlist)
}

/// Generate a mnemonic from a caller-supplied cryptographic RNG.
pub fn generate_mnemonic_with_rng<R: RngCore + CryptoRng>(
    strength_bits: usize,
    rng: &mut R,
    wordlist: Option<&Wordlist>,
) -> Result<String, MnemonicError> {
    if strength_bits % 32 != 0 {
        return Err(MnemonicError::InvalidEntropy(format!(
            "strength {strength_bits} is not a multiple of 32"
        )));
    }
    trace!(strength_bits, "generating mnemonic");
    let mut entropy = vec![0u8; strength_bits / 8];
    rng.fill_bytes(&mut entropy);
    let mnemonic = entropy_to_mnemonic(&entropy, wordlist);
    entropy.zeroize();
    mnemonic
}
