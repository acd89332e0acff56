//! Fixed output alphabet and the byte-to-character mapping.
//!
//! Both the alphabet contents and its ordering are part of the compatibility
//! contract: reordering a single character changes every derived password
//! ever produced.

/// Output alphabet in contract order: lowercase, uppercase, digits, then a
/// fixed punctuation set.
pub const ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Every derived password is exactly this long.
pub const PASSWORD_LEN: usize = 16;

/// Map derived key material onto the alphabet.
///
/// For each of the first [`PASSWORD_LEN`] positions, byte `i` reduced modulo
/// the alphabet size selects the output character. The reduction is not
/// uniform (256 is not a multiple of the alphabet size); that bias is
/// historical and preserved bit-for-bit; rejection sampling would change
/// previously derived passwords.
///
/// # Panics
///
/// Panics if `derived` is shorter than [`PASSWORD_LEN`]. Both derivation
/// variants produce at least 256 bits.
pub fn encode(derived: &[u8]) -> String {
    let table = ALPHABET.as_bytes();
    derived[..PASSWORD_LEN]
        .iter()
        .map(|&b| table[b as usize % table.len()] as char)
        .collect()
}
