//! Secret input acquisition, stage one of the pipeline.
//!
//! A user secret is either a free-text passphrase or a BIP-39 mnemonic
//! phrase. It exists only for the duration of a derivation call and is never
//! persisted; everything downstream works from the normalized key material
//! this module produces.

use std::fmt;

use bip39::{Language, Mnemonic};
use zeroize::Zeroizing;

use crate::error::DeriveError;
use crate::memory::SecretBuffer;

/// Fixed, constant, non-secret salt for the passphrase path.
///
/// Constant on purpose: the same human secret must produce the same master
/// key on every installation with zero persisted state (no salt to store,
/// no account to look up). This forgoes protection against
/// cross-installation precomputation in exchange for true statelessness.
/// Changing it would invalidate every previously derived password.
pub const PASSPHRASE_SALT: &[u8] = b"ConstantSaltForDeterministicResults";

/// Domain-separation salt for the mnemonic path, distinct from
/// [`PASSPHRASE_SALT`] so passphrase-derived and mnemonic-derived keys can
/// never collide, even for identical raw bytes.
pub const MNEMONIC_SALT: &[u8] = b"ConstantSaltForDeterministicResults/bip39";

/// A validated user secret. Construct via [`SecretInput::passphrase`] or
/// [`SecretInput::mnemonic`]; invalid input never reaches the KDF.
pub struct SecretInput(Form);

enum Form {
    Passphrase(Zeroizing<String>),
    Mnemonic(Box<Mnemonic>),
}

impl SecretInput {
    /// Wrap a free-text passphrase. The empty string is rejected: derivation
    /// never substitutes a default secret.
    pub fn passphrase(secret: impl Into<String>) -> Result<Self, DeriveError> {
        let secret = Zeroizing::new(secret.into());
        if secret.is_empty() {
            return Err(DeriveError::InvalidInput("empty passphrase".into()));
        }
        Ok(SecretInput(Form::Passphrase(secret)))
    }

    /// Parse a space-separated BIP-39 mnemonic phrase (English wordlist).
    /// Unknown words and checksum failures are rejected here, before any
    /// stretching starts.
    pub fn mnemonic(words: &str) -> Result<Self, DeriveError> {
        let parsed = Mnemonic::parse_in(Language::English, words)
            .map_err(|e| DeriveError::InvalidInput(format!("invalid mnemonic: {e}")))?;
        Ok(SecretInput(Form::Mnemonic(Box::new(parsed))))
    }

    /// Whether this secret is a mnemonic (selects the domain-separation
    /// salt in the master-key stretch).
    pub fn is_mnemonic(&self) -> bool {
        matches!(self.0, Form::Mnemonic(_))
    }

    /// Passphrase text for strength analysis, `None` for mnemonics (their
    /// entropy is fixed by the wordlist).
    pub(crate) fn passphrase_text(&self) -> Option<&str> {
        match &self.0 {
            Form::Passphrase(secret) => Some(secret.as_str()),
            Form::Mnemonic(_) => None,
        }
    }

    /// Normalize to raw key material plus the fixed salt for this secret
    /// form. The mnemonic path first runs the standard BIP-39 seed transform
    /// (empty BIP-39 passphrase; the mnemonic itself is the whole secret).
    pub(crate) fn key_material(&self) -> (SecretBuffer, &'static [u8]) {
        match &self.0 {
            Form::Passphrase(secret) => {
                (SecretBuffer::from_slice(secret.as_bytes()), PASSPHRASE_SALT)
            }
            Form::Mnemonic(mnemonic) => {
                let seed = Zeroizing::new(mnemonic.to_seed(""));
                (SecretBuffer::from_slice(seed.as_slice()), MNEMONIC_SALT)
            }
        }
    }
}

impl fmt::Debug for SecretInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let form = match self.0 {
            Form::Passphrase(_) => "passphrase",
            Form::Mnemonic(_) => "mnemonic",
        };
        f.debug_tuple("SecretInput").field(&form).finish()
    }
}

/// Generate a fresh 24-word English mnemonic, for onboarding flows that
/// prefer a wordlist secret over a free-text passphrase.
pub fn generate_mnemonic() -> Result<Mnemonic, DeriveError> {
    Mnemonic::generate_in(Language::English, 24)
        .map_err(|e| DeriveError::BackendUnavailable(e.to_string()))
}
