//! Recorded derivation vectors.
//!
//! These pin the compatibility contract end to end: master-key derivation
//! for both secret forms, site-password derivation for both formula
//! versions, and the output alphabet. Every value here was recorded from the
//! exact formulas in use; a mismatch means previously derived passwords are
//! no longer reproducible, which is the one failure this system must never
//! have. The intensity-3 site vectors are long-standing snapshots that
//! predate the versioned formula and must keep reproducing bit-for-bit.

use novault_core::alphabet::ALPHABET;
use novault_core::{
    derive_master_key, derive_password, Algorithm, Intensity, MasterKey, SecretInput, SiteRecord,
};

const REFERENCE_MNEMONIC: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

fn intensity(raw: u8) -> Intensity {
    Intensity::new(raw).unwrap()
}

/// Deterministic 32-byte fixture key: byte `i` is `(seed + i) % 256`, the
/// same construction the historical snapshots were recorded with.
fn fixture_key(seed: u8, algorithm: Algorithm) -> MasterKey {
    let mut key = [0u8; 32];
    for (i, byte) in key.iter_mut().enumerate() {
        *byte = seed.wrapping_add(i as u8);
    }
    MasterKey::from_bytes(key, algorithm)
}

fn site(email: &str, domain: &str, rotation: u32) -> SiteRecord {
    let mut record = SiteRecord::new(email, domain);
    record.rotation_rounds = rotation;
    record
}

// ============================================================================
// Master-key vectors
// ============================================================================

#[test]
fn master_key_passphrase_vector() {
    let secret = SecretInput::passphrase("correct horse battery staple").unwrap();
    let key = derive_master_key(&secret, intensity(1), Algorithm::Pbkdf2Sha512).unwrap();
    assert_eq!(
        hex::encode(key.as_bytes()),
        "0685b46402b62ff1e65f27a26de3059b4c5422992fee95712a47dfc02257255c"
    );
}

#[test]
fn master_key_passphrase_vector_legacy() {
    let secret = SecretInput::passphrase("correct horse battery staple").unwrap();
    let key = derive_master_key(&secret, intensity(1), Algorithm::HmacSha256).unwrap();
    assert_eq!(
        hex::encode(key.as_bytes()),
        "15b32f4cb42fe0f29df9ce9d15ad6ff1cd1eb17e62ce062928ec4e3c12bc54a2"
    );
}

#[test]
fn master_key_intensity_two_vector() {
    let secret = SecretInput::passphrase("test-passphrase").unwrap();
    let key = derive_master_key(&secret, intensity(2), Algorithm::Pbkdf2Sha512).unwrap();
    assert_eq!(
        hex::encode(key.as_bytes()),
        "b034c9580ed757dea53ed04fc6973a87108d5640674639aa97ec9927addb0ca6"
    );
}

#[test]
fn master_key_mnemonic_vector() {
    let secret = SecretInput::mnemonic(REFERENCE_MNEMONIC).unwrap();
    let key = derive_master_key(&secret, intensity(1), Algorithm::Pbkdf2Sha512).unwrap();
    assert_eq!(
        hex::encode(key.as_bytes()),
        "defe2700691dcdd5a3ef1b4896cb2417ffd26c9d31bfd1555ef7b2649274a065"
    );
}

#[test]
fn master_key_mnemonic_vector_legacy() {
    let secret = SecretInput::mnemonic(REFERENCE_MNEMONIC).unwrap();
    let key = derive_master_key(&secret, intensity(1), Algorithm::HmacSha256).unwrap();
    assert_eq!(
        hex::encode(key.as_bytes()),
        "714de78c83e146d6427642bfbd5b71e20b6a2c7773dff00bcb40dcbcfec74a3e"
    );
}

// ============================================================================
// Site-password vectors, canonical formula
// ============================================================================

/// Historical snapshot outputs, all recorded at intensity 3.
#[test]
fn site_password_recorded_snapshots() {
    let three = intensity(3);

    let key = fixture_key(1, Algorithm::Pbkdf2Sha512);
    let record = site("user@example.com", "example.com", 1);
    assert_eq!(derive_password(&key, &record, three).unwrap(), "|J@OE)MPLIW**QCk");

    let key = fixture_key(2, Algorithm::Pbkdf2Sha512);
    let record = site("user@gmail.com", "google.com", 1);
    assert_eq!(derive_password(&key, &record, three).unwrap(), "^G%!-,4f[l0Q!?;0");

    let key = fixture_key(3, Algorithm::Pbkdf2Sha512);
    let record = site("admin@company.com", "company.com", 10);
    assert_eq!(derive_password(&key, &record, three).unwrap(), "d+r[4AHm;[7C8X6E");
}

#[test]
fn site_password_vector_intensity_one() {
    let key = fixture_key(1, Algorithm::Pbkdf2Sha512);
    let record = site("user@example.com", "example.com", 1);
    assert_eq!(
        derive_password(&key, &record, intensity(1)).unwrap(),
        "WgqWyr+&EJ})g^,@"
    );
}

#[test]
fn site_password_rotation_vector() {
    let key = fixture_key(1, Algorithm::Pbkdf2Sha512);
    let record = site("user@example.com", "example.com", 2);
    assert_eq!(
        derive_password(&key, &record, intensity(1)).unwrap(),
        ",T3Pr.%v_%<A.F(N"
    );
}

// ============================================================================
// Site-password vectors, legacy formula
// ============================================================================

#[test]
fn site_password_legacy_vectors() {
    let key = fixture_key(1, Algorithm::HmacSha256);
    let one = intensity(1);

    let record = site("user@example.com", "example.com", 1);
    assert_eq!(derive_password(&key, &record, one).unwrap(), "MMA;}1[wc)aP213G");

    let rotated = site("user@example.com", "example.com", 2);
    assert_eq!(derive_password(&key, &rotated, one).unwrap(), "_T#yw9wVciAzvG9t");
}

// ============================================================================
// Full-pipeline vectors
// ============================================================================

#[test]
fn end_to_end_passphrase_chain() {
    let secret = SecretInput::passphrase("correct horse battery staple").unwrap();
    let key = derive_master_key(&secret, intensity(1), Algorithm::Pbkdf2Sha512).unwrap();
    let record = site("user@example.com", "example.com", 1);
    assert_eq!(
        derive_password(&key, &record, intensity(1)).unwrap(),
        "]7<cS2iX8G>6f>dY"
    );
}

#[test]
fn end_to_end_mnemonic_chain() {
    let secret = SecretInput::mnemonic(REFERENCE_MNEMONIC).unwrap();
    let key = derive_master_key(&secret, intensity(1), Algorithm::Pbkdf2Sha512).unwrap();
    let record = site("user@example.com", "example.com", 1);
    assert_eq!(
        derive_password(&key, &record, intensity(1)).unwrap(),
        "yEBFms+dsa0QN^nt"
    );
}

#[test]
fn end_to_end_legacy_chain() {
    let secret = SecretInput::passphrase("correct horse battery staple").unwrap();
    let key = derive_master_key(&secret, intensity(1), Algorithm::HmacSha256).unwrap();
    let record = site("user@example.com", "example.com", 1);
    assert_eq!(
        derive_password(&key, &record, intensity(1)).unwrap(),
        "eh@C%{RoD(<&*J(2"
    );
}

// ============================================================================
// Contract pins
// ============================================================================

#[test]
fn alphabet_contract_pinned() {
    assert_eq!(
        ALPHABET,
        "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()_+-=[]{}|;:,.<>?"
    );
    assert_eq!(ALPHABET.len(), 88);
}

#[test]
fn formula_versions_never_collide() {
    let record = site("user@example.com", "example.com", 1);
    let one = intensity(1);

    let legacy = derive_password(&fixture_key(1, Algorithm::HmacSha256), &record, one).unwrap();
    let canonical =
        derive_password(&fixture_key(1, Algorithm::Pbkdf2Sha512), &record, one).unwrap();
    assert_ne!(legacy, canonical);
}
