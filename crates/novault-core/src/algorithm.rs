//! Derivation formula versioning and work-factor configuration.
//!
//! Two formulas exist historically and both remain derivable; the version is
//! an explicit, serializable choice so a future change can never silently
//! break passwords derived under an older formula. New deployments use
//! [`Algorithm::Pbkdf2Sha512`].
//!
//! The iteration formula `base_iterations * intensity` is part of the
//! compatibility contract: changing either factor changes every derived
//! password.

use serde::{Deserialize, Serialize};

use crate::error::DeriveError;

/// Versioned derivation formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Legacy single-pass variant: master key via PBKDF2-HMAC-SHA-256,
    /// site passwords via one HMAC-SHA-256 pass (no per-site stretch).
    HmacSha256,

    /// Double-stretch variant: master key via PBKDF2-HMAC-SHA-512, site
    /// passwords via a second PBKDF2-HMAC-SHA-512 pass at the same work
    /// factor, so brute-forcing one site password costs as much as
    /// brute-forcing the master key.
    #[default]
    Pbkdf2Sha512,
}

impl Algorithm {
    /// Iteration count at intensity 1.
    pub const fn base_iterations(self) -> u32 {
        match self {
            Algorithm::HmacSha256 => 100_000,
            Algorithm::Pbkdf2Sha512 => 1_000_000,
        }
    }

    /// Actual stretching work factor: `base_iterations * intensity`.
    /// Strictly monotonic in intensity.
    pub fn iterations(self, intensity: Intensity) -> u32 {
        self.base_iterations() * u32::from(intensity.get())
    }
}

/// User-chosen stretching multiplier, validated to `1..=10`.
///
/// Construction is the only place range checking happens: the derivation
/// functions accept any `Intensity` value and scale cost linearly. The
/// value itself is configuration, not a secret; it lives in the surrounding
/// application's settings store and is read at derivation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Intensity(u8);

impl Intensity {
    pub const MIN: Intensity = Intensity(1);
    pub const MAX: Intensity = Intensity(10);

    /// Validate a raw setting. Out-of-range values are rejected, never
    /// clamped; clamping would mask configuration drift and silently
    /// derive different passwords.
    pub fn new(value: u8) -> Result<Self, DeriveError> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(Intensity(value))
        } else {
            Err(DeriveError::UnsupportedIntensity(value))
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Intensity(3)
    }
}

impl TryFrom<u8> for Intensity {
    type Error = DeriveError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Intensity::new(value)
    }
}

impl From<Intensity> for u8 {
    fn from(intensity: Intensity) -> u8 {
        intensity.0
    }
}
