//! Master key derivation, stage two of the pipeline.
//!
//! Stretches normalized secret material into a fixed 256-bit master key.
//! Deterministic and pure: the same secret, intensity, and algorithm always
//! yield the same key, with no randomness anywhere. The CPU time spent here
//! scales linearly with intensity, and that cost *is* the security property.

use pbkdf2::pbkdf2_hmac;
use sha2::{Sha256, Sha512};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::algorithm::{Algorithm, Intensity};
use crate::error::DeriveError;
use crate::secret::SecretInput;

/// Master key length in bytes (256 bits).
pub const MASTER_KEY_LEN: usize = 32;

/// The session master key: the sole output of master-key derivation.
///
/// Carries the algorithm version it was derived under, so site-password
/// derivation can never run a mismatched formula against it. Lives in
/// volatile memory only, zeroizes on drop, and never prints its bytes.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct MasterKey {
    key: [u8; MASTER_KEY_LEN],
    #[zeroize(skip)]
    algorithm: Algorithm,
}

impl MasterKey {
    /// Wrap raw key bytes. Exists for callers that manage their own key
    /// fixtures; normal use goes through [`derive_master_key`].
    pub fn from_bytes(key: [u8; MASTER_KEY_LEN], algorithm: Algorithm) -> Self {
        Self { key, algorithm }
    }

    pub fn as_bytes(&self) -> &[u8; MASTER_KEY_LEN] {
        &self.key
    }

    /// The formula version this key was derived under.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
}

impl Clone for MasterKey {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            algorithm: self.algorithm,
        }
    }
}

impl std::fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MasterKey")
            .field("key", &"[redacted]")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

/// Derive the master key from a user secret.
///
/// Passphrase path: one PBKDF2 stretch over the passphrase bytes with the
/// fixed constant salt. Mnemonic path: the standard BIP-39 seed transform
/// first, then a stretch identical in structure under the distinct
/// domain-separation salt.
///
/// Blocks for the duration of the stretch, tens of milliseconds to low
/// seconds depending on intensity. Callers with a responsive thread to
/// protect must offload this; there is no cancellation and no progress
/// reporting, by contract.
pub fn derive_master_key(
    secret: &SecretInput,
    intensity: Intensity,
    algorithm: Algorithm,
) -> Result<MasterKey, DeriveError> {
    let (material, salt) = secret.key_material();
    if material.as_slice().is_empty() {
        return Err(DeriveError::InvalidInput("empty secret".into()));
    }

    let iterations = algorithm.iterations(intensity);
    let mut key = [0u8; MASTER_KEY_LEN];
    match algorithm {
        Algorithm::Pbkdf2Sha512 => {
            pbkdf2_hmac::<Sha512>(material.as_slice(), salt, iterations, &mut key)
        }
        Algorithm::HmacSha256 => {
            pbkdf2_hmac::<Sha256>(material.as_slice(), salt, iterations, &mut key)
        }
    }

    let master = MasterKey::from_bytes(key, algorithm);
    key.zeroize();
    Ok(master)
}
