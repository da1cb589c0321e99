//! PBKDF2 seed derivation from a mnemonic and optional passphrase.
//!
//! The mnemonic (NFKD-normalized) is the PBKDF2 password; the salt is the
//! literal prefix `"mnemonic"` followed by the NFKD-normalized passphrase.
//! 2048 rounds of HMAC-SHA512 produce a 64-byte seed. Derivation does not
//! validate the mnemonic: any string derives *a* seed, so callers that
//! want checksum protection validate first.

use hmac::Hmac;
use sha2::Sha512;
use std::fmt;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::MnemonicError;

/// Length of a derived seed in bytes.
pub const SEED_LEN: usize = 64;

/// PBKDF2 iteration count.
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Salt prefix prepended to the normalized passphrase.
const SALT_PREFIX: &str = "mnemonic";

/// A 64-byte seed derived from a mnemonic.
///
/// Key material is zeroized on drop and redacted from `Debug` output.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Seed {
    bytes: [u8; SEED_LEN],
}

impl Seed {
    /// Get the raw seed bytes. Handle with care.
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.bytes
    }
}

impl Clone for Seed {
    fn clone(&self) -> Self {
        Self { bytes: self.bytes }
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seed").field("bytes", &"[REDACTED]").finish()
    }
}

/// Build the PBKDF2 salt from an optional passphrase.
fn salt(passphrase: Option<&str>) -> Zeroizing<String> {
    let mut salt = String::from(SALT_PREFIX);
    if let Some(passphrase) = passphrase {
        salt.extend(passphrase.nfkd());
    }
    Zeroizing::new(salt)
}

/// Derive the seed for a mnemonic, blocking the calling thread.
///
/// The passphrase defaults to empty. Both mnemonic and passphrase are
/// NFKD-normalized before derivation.
pub fn mnemonic_to_seed_sync(
    mnemonic: &str,
    passphrase: Option<&str>,
) -> Result<Seed, MnemonicError> {
    let password = Zeroizing::new(mnemonic.nfkd().collect::<String>());
    let salt = salt(passphrase);
    let mut bytes = [0u8; SEED_LEN];
    pbkdf2::pbkdf2::<Hmac<Sha512>>(
        password.as_bytes(),
        salt.as_bytes(),
        PBKDF2_ROUNDS,
        &mut bytes,
    )
    .map_err(|e| MnemonicError::KeyDerivation(e.to_string()))?;
    let seed = Seed { bytes };
    bytes.zeroize();
    Ok(seed)
}

/// Derive the seed for a mnemonic without blocking the async runtime.
///
/// Same algorithm and parameters as [`mnemonic_to_seed_sync`], run on the
/// blocking thread pool. Resolves with the seed or surfaces the underlying
/// derivation error; there is no cancellation or timeout.
pub async fn mnemonic_to_seed(
    mnemonic: &str,
    passphrase: Option<&str>,
) -> Result<Seed, MnemonicError> {
    let mnemonic = mnemonic.to_owned();
    let passphrase = passphrase.map(str::to_owned);
    tokio::task::spawn_blocking(move || mnemonic_to_seed_sync(&mnemonic, passphrase.as_deref()))
        .await
        .map_err(|e| MnemonicError::KeyDerivation(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO_12: &str = "abandon abandon abandon abandon abandon abandon abandon abandon \
                           abandon abandon abandon about";

    /// Reference seed for `ZERO_12` with an empty passphrase.
    const ZERO_12_SEED: &str = "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc1\
                                9a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4";

    #[test]
    fn reference_vector_empty_passphrase() {
        let seed = mnemonic_to_seed_sync(ZERO_12, None).unwrap();
        assert_eq!(hex::encode(seed.as_bytes()), ZERO_12_SEED);
    }

    #[test]
    fn reference_vector_with_passphrase() {
        let seed = mnemonic_to_seed_sync(ZERO_12, Some("TREZOR")).unwrap();
        assert_eq!(
            hex::encode(seed.as_bytes()),
            "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e5349553\
             1f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04"
        );
    }

    #[test]
    fn reference_vector_max_entropy() {
        let seed = mnemonic_to_seed_sync(
            "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong",
            Some("TREZOR"),
        )
        .unwrap();
        assert_eq!(
            hex::encode(seed.as_bytes()),
            "ac27495480225222079d7be181583751e86f571027b0497b5b5d11218e0a8a13\
             332572917f0f8e5a589620c6f15b11c61dee327651a14c34e18231052e48c069"
        );
    }

    #[test]
    fn empty_and_absent_passphrase_agree() {
        let a = mnemonic_to_seed_sync(ZERO_12, None).unwrap();
        let b = mnemonic_to_seed_sync(ZERO_12, Some("")).unwrap();
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn passphrase_changes_seed() {
        let a = mnemonic_to_seed_sync(ZERO_12, None).unwrap();
        let b = mnemonic_to_seed_sync(ZERO_12, Some("password")).unwrap();
        assert_ne!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn passphrase_is_nfkd_normalized() {
        // Precomposed and decomposed spellings derive the same seed.
        let a = mnemonic_to_seed_sync(ZERO_12, Some("caf\u{00e9}")).unwrap();
        let b = mnemonic_to_seed_sync(ZERO_12, Some("cafe\u{0301}")).unwrap();
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn derivation_does_not_validate() {
        // Seed derivation is defined over arbitrary strings.
        let seed = mnemonic_to_seed_sync("not a real mnemonic", None).unwrap();
        assert_eq!(seed.as_bytes().len(), SEED_LEN);
    }

    #[test]
    fn seed_debug_hides_bytes() {
        let seed = mnemonic_to_seed_sync(ZERO_12, None).unwrap();
        let debug = format!("{seed:?}");
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("5eb00b"));
    }

    #[test]
    fn seed_clone() {
        let seed = mnemonic_to_seed_sync(ZERO_12, None).unwrap();
        let cloned = seed.clone();
        assert_eq!(seed.as_bytes(), cloned.as_bytes());
    }

    #[tokio::test]
    async fn async_matches_sync() {
        let sync = mnemonic_to_seed_sync(ZERO_12, Some("TREZOR")).unwrap();
        let run = mnemonic_to_seed(ZERO_12, Some("TREZOR")).await.unwrap();
        assert_eq!(sync.as_bytes(), run.as_bytes());
    }
}
