//! Novault Core
//!
//! Stateless, deterministic password derivation for Novault: nothing secret
//! is ever stored, every site password is recomputed on demand.
//!
//! # Pipeline
//!
//! 1. [`secret`]: normalize a passphrase or BIP-39 mnemonic into raw key
//!    material.
//! 2. [`master`]: stretch that material into a 256-bit [`MasterKey`] using
//!    PBKDF2 with a fixed, documented constant salt; cost scales with
//!    [`Intensity`].
//! 3. [`site`]: expand the master key plus one [`SiteRecord`] into a fixed
//!    16-character password over the fixed [`alphabet`].
//!
//! Determinism is the contract: same inputs, same password, on every
//! platform, indefinitely. [`Algorithm`] versions the exact formula so the
//! contract survives future changes. Everything is pure and lock-free;
//! derivations block for their stretch duration and are safe to run
//! concurrently for different inputs.
//!
//! # Example
//!
//! ```
//! use novault_core::{Intensity, SecretInput, Session, SiteRecord};
//!
//! let mut session = Session::default();
//! let secret = SecretInput::passphrase("correct horse battery staple")?;
//! let intensity = Intensity::new(1)?;
//!
//! session.unlock(&secret, intensity)?;
//!
//! let site = SiteRecord::new("user@example.com", "example.com");
//! let password = session.password_for(&site, intensity)?;
//! assert_eq!(password.len(), 16);
//!
//! session.clear();
//! # Ok::<(), novault_core::DeriveError>(())
//! ```

pub mod algorithm;
pub mod alphabet;
pub mod error;
pub mod master;
pub mod memory;
pub mod secret;
pub mod session;
pub mod site;
pub mod strength;

pub use algorithm::{Algorithm, Intensity};
pub use error::DeriveError;
pub use master::{derive_master_key, MasterKey};
pub use secret::{generate_mnemonic, SecretInput};
pub use session::Session;
pub use site::{derive_password, SiteRecord};
