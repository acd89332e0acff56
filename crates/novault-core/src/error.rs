//! Error taxonomy for the derivation pipeline.
//!
//! Every variant reflects a programming mistake, a configuration mistake, or
//! an environment precondition failure, never a transient condition, so no
//! retry policy applies anywhere. Errors always propagate: a silently
//! substituted default would derive a different password than the one the
//! user has been using for years.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeriveError {
    /// Empty secret, unparseable mnemonic, or a site record with a missing
    /// required field. Derivation refuses to run.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Intensity outside the supported range. Rejected rather than clamped,
    /// so configuration drift between sessions cannot silently change
    /// derived passwords.
    #[error("unsupported intensity {0} (supported range 1..=10)")]
    UnsupportedIntensity(u8),

    /// The underlying KDF/MAC primitive refused to initialize. Fatal to the
    /// operation; retrying cannot help.
    #[error("cryptographic backend unavailable: {0}")]
    BackendUnavailable(String),

    /// A password was requested from a session with no unlocked master key.
    #[error("session is locked")]
    SessionLocked,
}
