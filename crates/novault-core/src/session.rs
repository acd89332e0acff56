//! Scoped caching of the unlocked master key.
//!
//! The surrounding application holds exactly one `Session` per login. The
//! master key lives inside it, never in ambient global state, and leaves
//! memory through exactly two doors: [`Session::clear`] or drop, both of
//! which zeroize. Site records and the intensity setting stay outside; the
//! intensity is read per call so a settings change is never masked by a
//! stale cached value.

use log::{debug, warn};

use crate::algorithm::{Algorithm, Intensity};
use crate::error::DeriveError;
use crate::master::{derive_master_key, MasterKey};
use crate::memory;
use crate::secret::SecretInput;
use crate::site::{derive_password, SiteRecord};
use crate::strength;

/// Holder of the unlocked master key for the duration of a login.
#[derive(Default)]
pub struct Session {
    key: Option<MasterKey>,
    algorithm: Algorithm,
}

impl Session {
    /// A locked session pinned to a formula version. `Session::default()`
    /// uses the canonical version.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            key: None,
            algorithm,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Derive and cache the master key for this session.
    ///
    /// Replaces (and zeroizes) any previously cached key, so re-login with a
    /// different secret never leaves the old key resident. Blocks for the
    /// duration of the stretch; UI callers offload this to a background
    /// task. Weak passphrases are warned about, never refused.
    pub fn unlock(&mut self, secret: &SecretInput, intensity: Intensity) -> Result<(), DeriveError> {
        memory::disable_core_dumps();

        if let Some(report) = secret.passphrase_text().map(strength::analyze) {
            if !report.meets_minimum {
                warn!(
                    "unlock passphrase is below the recommended strength (~{:.0} bits)",
                    report.entropy_bits
                );
            }
        }

        self.key = Some(derive_master_key(secret, intensity, self.algorithm)?);
        debug!(
            "session unlocked (intensity {}, {:?})",
            intensity.get(),
            self.algorithm
        );
        Ok(())
    }

    pub fn is_unlocked(&self) -> bool {
        self.key.is_some()
    }

    /// Derive the password for one site record on demand. The result is
    /// ephemeral: recomputed per use, displayed or copied by the caller,
    /// then discarded.
    pub fn password_for(
        &self,
        site: &SiteRecord,
        intensity: Intensity,
    ) -> Result<String, DeriveError> {
        let key = self.key.as_ref().ok_or(DeriveError::SessionLocked)?;
        derive_password(key, site, intensity)
    }

    /// Explicit secure wipe. Dropping the session wipes too; this exists for
    /// logout and panic flows where the session object outlives the login.
    pub fn clear(&mut self) {
        if self.key.take().is_some() {
            debug!("session cleared");
        }
    }
}
