//! Passphrase strength estimation for the unlock flow.
//!
//! A stateless vault has no random salt and no server to throttle guesses;
//! the passphrase plus the stretch is the entire defense, so the unlock flow
//! warns loudly about weak secrets. It only warns: refusing a weak secret
//! would lock the user out of passwords they already derived under it.
//!
//! The estimate is conservative: character-class size times length, with
//! penalties for dictionary words, repetition, and keyboard-walk sequences.

use std::collections::HashSet;

/// Minimum recommended entropy for an unlock passphrase, in bits.
pub const MIN_RECOMMENDED_BITS: f64 = 60.0;

/// Strength classification, ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLevel {
    /// Below 28 bits: trivially brute-forceable.
    Dangerous,
    /// 28 to 35 bits: falls to a targeted attack.
    Weak,
    /// 36 to 59 bits: adequate against casual threats only.
    Fair,
    /// 60 to 127 bits: resists well-funded attackers.
    Strong,
    /// 128 bits and up: beyond brute force for the foreseeable future.
    Excellent,
}

impl StrengthLevel {
    fn for_bits(bits: f64) -> Self {
        match bits {
            b if b < 28.0 => StrengthLevel::Dangerous,
            b if b < 36.0 => StrengthLevel::Weak,
            b if b < 60.0 => StrengthLevel::Fair,
            b if b < 128.0 => StrengthLevel::Strong,
            _ => StrengthLevel::Excellent,
        }
    }

    /// Whether this level meets [`MIN_RECOMMENDED_BITS`].
    pub fn is_recommended(self) -> bool {
        self >= StrengthLevel::Strong
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthLevel::Dangerous => "dangerous",
            StrengthLevel::Weak => "weak",
            StrengthLevel::Fair => "fair",
            StrengthLevel::Strong => "strong",
            StrengthLevel::Excellent => "excellent",
        }
    }
}

/// Result of analyzing one passphrase.
#[derive(Debug, Clone)]
pub struct StrengthReport {
    /// Estimated entropy in bits.
    pub entropy_bits: f64,
    pub level: StrengthLevel,
    /// Specific problems found; empty when clean.
    pub warnings: Vec<String>,
    /// Shorthand for `level.is_recommended()`.
    pub meets_minimum: bool,
}

/// Passwords and fragments seen constantly in breach corpora. Substring
/// matches count: "Password123!" contains "password".
const BREACH_FRAGMENTS: &[&str] = &[
    "password", "passwort", "123456", "12345678", "qwerty", "azerty", "letmein", "welcome",
    "admin", "iloveyou", "dragon", "monkey", "sunshine", "princess", "football", "starwars",
    "secret", "login", "abc123", "trustno1", "master", "shadow", "superman", "batman",
];

/// Estimate the entropy of an unlock passphrase.
///
/// # Example
/// ```
/// use novault_core::strength::analyze;
/// let report = analyze("correct horse battery staple");
/// assert!(report.level.is_recommended());
/// ```
pub fn analyze(passphrase: &str) -> StrengthReport {
    if passphrase.is_empty() {
        return StrengthReport {
            entropy_bits: 0.0,
            level: StrengthLevel::Dangerous,
            warnings: vec!["passphrase is empty".to_string()],
            meets_minimum: false,
        };
    }

    let mut warnings = Vec::new();

    let lowered = passphrase.to_lowercase();
    if BREACH_FRAGMENTS.iter().any(|frag| lowered.contains(frag)) {
        warnings.push("contains a fragment common in breached password lists".to_string());
    }

    let length = passphrase.chars().count() as f64;
    let mut bits = length * (charset_size(passphrase) as f64).log2();

    // Repetition collapses the effective search space.
    let unique: HashSet<char> = passphrase.chars().collect();
    let unique_ratio = unique.len() as f64 / length;
    if unique_ratio < 0.5 {
        bits *= 0.6 + 0.4 * unique_ratio;
        warnings.push("mostly repeated characters".to_string());
    }

    // Keyboard walks and counting runs ("abcd", "4321") are near-free guesses.
    let runs = sequential_runs(passphrase);
    if runs > 1 {
        bits -= runs as f64 * 2.5;
        warnings.push("contains sequential character runs".to_string());
    }

    // Diceware-style phrases: per-word entropy beats per-character entropy
    // at equal length.
    let words = passphrase.split_whitespace().count();
    if words >= 4 {
        bits += (words as f64 - 3.0) * 2.5;
    }

    if passphrase.chars().count() < 12 {
        warnings.push("shorter than 12 characters".to_string());
    }

    let bits = bits.max(0.0);
    let level = StrengthLevel::for_bits(bits);

    StrengthReport {
        entropy_bits: bits,
        level,
        warnings,
        meets_minimum: level.is_recommended(),
    }
}

fn charset_size(passphrase: &str) -> u32 {
    let mut lower = 0;
    let mut upper = 0;
    let mut digit = 0;
    let mut punct = 0;
    let mut other = 0;

    for ch in passphrase.chars() {
        if ch.is_ascii_lowercase() {
            lower = 26;
        } else if ch.is_ascii_uppercase() {
            upper = 26;
        } else if ch.is_ascii_digit() {
            digit = 10;
        } else if ch.is_ascii_punctuation() || ch == ' ' {
            punct = 33;
        } else {
            // Conservative stand-in for the non-ASCII plane.
            other = 100;
        }
    }

    (lower + upper + digit + punct + other).max(1)
}

/// Count three-character ascending or descending code-point runs.
fn sequential_runs(passphrase: &str) -> usize {
    let points: Vec<u32> = passphrase.chars().map(u32::from).collect();
    points
        .windows(3)
        .filter(|w| {
            (w[1] == w[0] + 1 && w[2] == w[1] + 1) || (w[0] == w[1] + 1 && w[1] == w[2] + 1)
        })
        .count()
}
