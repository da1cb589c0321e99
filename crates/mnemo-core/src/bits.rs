//! Bit-string helpers for packing entropy and checksum into word indices.
//!
//! Mnemonic encoding works on a binary-string representation: entropy bytes
//! become a string of `0`/`1` characters, the checksum bits are appended,
//! and the result is consumed in 11-bit chunks. The strings involved are
//! short (at most 264 + 8 bits), so clarity wins over bit twiddling here.

/// Number of bits encoded by one mnemonic word.
pub(crate) const WORD_BITS: usize = 11;

/// Concatenate each byte's 8-bit, zero-left-padded binary representation.
pub(crate) fn bytes_to_bits(bytes: &[u8]) -> String {
    let mut bits = String::with_capacity(bytes.len() * 8);
    for byte in bytes {
        bits.push_str(&format!("{byte:08b}"));
    }
    bits
}

/// Parse consecutive 8-bit chunks of a bit-string back into bytes.
///
/// The input length must be a multiple of 8; callers guarantee this by
/// construction (the entropy prefix cut at the divider index).
pub(crate) fn bits_to_bytes(bits: &str) -> Vec<u8> {
    bits.as_bytes()
        .chunks(8)
        .map(|chunk| {
            let chunk = std::str::from_utf8(chunk).expect("bit string is ASCII");
            u8::from_str_radix(chunk, 2).expect("bit string contains only 0 and 1")
        })
        .collect()
}

/// An 11-bit, zero-left-padded binary representation of a word index.
pub(crate) fn index_bits(index: u16) -> String {
    format!("{index:011b}")
}

/// Parse a bit-string chunk (at most 11 bits in practice) as a word index.
pub(crate) fn bits_to_index(bits: &str) -> u16 {
    u16::from_str_radix(bits, 2).expect("bit string contains only 0 and 1")
}
