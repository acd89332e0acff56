//! Site password derivation, stage three of the pipeline.
//!
//! Combines the master key with non-secret site metadata and maps the result
//! onto the fixed output alphabet. For a fixed (master key, record,
//! intensity) the output is byte-identical on every call, on every platform,
//! indefinitely. Users must be able to regenerate old passwords years
//! later, so every detail here is part of the compatibility contract.

use hmac::{Hmac, Mac};
use pbkdf2::pbkdf2_hmac;
use serde::{Deserialize, Serialize};
use sha2::{Sha256, Sha512};
use zeroize::Zeroize;

use crate::algorithm::{Algorithm, Intensity};
use crate::alphabet;
use crate::error::DeriveError;
use crate::master::MasterKey;

/// Derived material width for the double-stretch variant: 512 bits, wider
/// than the master key, leaving surplus entropy for the mapping step.
const SITE_KEY_LEN: usize = 64;

/// Non-secret metadata identifying one password to derive.
///
/// Owned and persisted by the surrounding application; the core only reads
/// it. Uniqueness is not enforced: duplicate records are valid inputs and
/// simply derive duplicate passwords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteRecord {
    /// Email or username registered at the site.
    pub email: String,
    /// Site domain.
    pub domain: String,
    /// Rotation counter, starting at 1. Incrementing it derives an entirely
    /// unrelated password without touching the master secret.
    #[serde(default = "default_rotation")]
    pub rotation_rounds: u32,
    /// Free-form note. Never enters derivation.
    #[serde(default)]
    pub comment: String,
}

fn default_rotation() -> u32 {
    1
}

impl SiteRecord {
    pub fn new(email: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            domain: domain.into(),
            rotation_rounds: default_rotation(),
            comment: String::new(),
        }
    }

    /// Canonical byte form fed to the site derivation:
    /// `email || ":" || domain || ":" || decimal rotation counter`, UTF-8.
    ///
    /// Any two implementations must canonicalize identically or derived
    /// passwords silently diverge with no error signal.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        format!("{}:{}:{}", self.email, self.domain, self.rotation_rounds).into_bytes()
    }

    fn validate(&self) -> Result<(), DeriveError> {
        if self.email.is_empty() {
            return Err(DeriveError::InvalidInput("site record has empty email".into()));
        }
        if self.domain.is_empty() {
            return Err(DeriveError::InvalidInput("site record has empty domain".into()));
        }
        if self.rotation_rounds == 0 {
            return Err(DeriveError::InvalidInput(
                "rotation counter must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Derive the 16-character password for one site record.
///
/// The double-stretch variant uses the canonical bytes as the *salt* of a
/// second PBKDF2 pass keyed by the master key, at the same work factor as
/// master-key derivation, so brute-forcing a single site password is not
/// materially cheaper than brute-forcing the master key. The legacy variant
/// is a single HMAC pass and ignores intensity, preserving its historical
/// semantics bit-for-bit.
///
/// Pure and lock-free; concurrent calls for different records are safe and
/// order-independent.
pub fn derive_password(
    master_key: &MasterKey,
    site: &SiteRecord,
    intensity: Intensity,
) -> Result<String, DeriveError> {
    site.validate()?;
    let canonical = site.canonical_bytes();

    match master_key.algorithm() {
        Algorithm::Pbkdf2Sha512 => {
            let iterations = Algorithm::Pbkdf2Sha512.iterations(intensity);
            let mut derived = [0u8; SITE_KEY_LEN];
            pbkdf2_hmac::<Sha512>(master_key.as_bytes(), &canonical, iterations, &mut derived);
            let password = alphabet::encode(&derived);
            derived.zeroize();
            Ok(password)
        }
        Algorithm::HmacSha256 => {
            let mut mac = Hmac::<Sha256>::new_from_slice(master_key.as_bytes())
                .map_err(|e| DeriveError::BackendUnavailable(e.to_string()))?;
            mac.update(&canonical);
            let digest = mac.finalize().into_bytes();
            Ok(alphabet::encode(&digest))
        }
    }
}
