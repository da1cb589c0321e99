//! Entropy checksum derivation.
//!
//! The checksum embedded in a mnemonic is the first `ENT / 32` bits of the
//! SHA-256 digest of the entropy, where `ENT` is the entropy length in bits.
//! A 16-byte entropy carries a 4-bit checksum; a 32-byte entropy carries 8.

use sha2::{Digest, Sha256};

use crate::bits::bytes_to_bits;

/// Derive the checksum bit-string for an entropy buffer.
///
/// Deterministic and pure; the caller is responsible for having validated
/// the entropy length.
pub(crate) fn checksum_bits(entropy: &[u8]) -> String {
    let cs = entropy.len() * 8 / 32;
    let digest = Sha256::digest(entropy);
    let mut bits = bytes_to_bits(&digest);
    bits.truncate(cs);
    bits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_proportional_to_entropy() {
        for (entropy_len, cs_len) in [(16, 4), (20, 5), (24, 6), (28, 7), (32, 8)] {
            assert_eq!(checksum_bits(&vec![0u8; entropy_len]).len(), cs_len);
        }
    }

    #[test]
    fn known_zero_entropy_checksums() {
        // SHA-256 of 16 zero bytes starts 0x37 = 00110111.
        assert_eq!(checksum_bits(&[0u8; 16]), "0011");
        // SHA-256 of 32 zero bytes starts 0x66 = 01100110.
        assert_eq!(checksum_bits(&[0u8; 32]), "01100110");
    }

    #[test]
    fn deterministic() {
        let entropy = [0xab; 20];
        assert_eq!(checksum_bits(&entropy), checksum_bits(&entropy));
    }

    #[test]
    fn sensitive_to_entropy() {
        let a = checksum_bits(&[0u8; 32]);
        let mut flipped = [0u8; 32];
        flipped[0] = 1;
        // 8-bit checksums collide with probability 1/256; these two do not.
        assert_ne!(a, checksum_bits(&flipped));
    }
}
