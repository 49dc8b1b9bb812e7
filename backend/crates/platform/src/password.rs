//! Clear-text password handling for password change forms
//!
//! Passwords never leave this process; they are only validated and compared
//! while a change/reset form is open. The buffers are zeroized on drop.
//!
//! - Unicode NFKC normalization before any length check
//! - Length counted in code points
//! - Strength meter used by the change-password form

use std::fmt;

use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

/// Minimum password length accepted by the change and reset forms
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: usize = 128;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    /// Control characters other than space, tab and newline
    #[error("Password contains invalid control characters")]
    InvalidCharacter,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// Not `Clone`, and `Debug` output is redacted.
///
/// ## Examples
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("correct horse".to_string()).unwrap();
/// assert_eq!(password.char_count(), 13);
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Normalize and validate a password typed into a form
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let mut raw = raw;
        let normalized: String = raw.nfkc().collect();
        raw.zeroize();

        if normalized.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let char_count = normalized.chars().count();

        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if normalized
            .chars()
            .any(|ch| ch.is_control() && ch != ' ' && ch != '\t' && ch != '\n')
        {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        Ok(Self(normalized))
    }

    /// Number of code points after normalization
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    /// Whether `other` normalizes to the same password.
    ///
    /// Compares every byte so the running time only depends on the lengths.
    pub fn matches(&self, other: &str) -> bool {
        let mut other: String = other.nfkc().collect();
        let same = constant_time_eq(self.0.as_bytes(), other.as_bytes());
        other.zeroize();
        same
    }

    /// Strength of this password as shown next to the "New Password" field
    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::assess(&self.0)
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

// ============================================================================
// Strength meter
// ============================================================================

/// Strength bucket of a password
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLabel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLabel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Strong => "Strong",
        }
    }

    /// Progress bar color
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Weak => "#ff4d4f",
            Self::Fair => "#faad14",
            Self::Good | Self::Strong => "#52c41a",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score in `0..=100` plus its bucket.
///
/// Scoring: +25 for at least 8 characters, +15 more for at least 12, and +15
/// for each of lowercase, uppercase, digit and any other character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordStrength {
    pub score: u8,
    pub label: StrengthLabel,
}

impl PasswordStrength {
    /// Assess any input, including text that does not pass the policy yet.
    /// Returns `None` for an empty field so the meter stays hidden.
    pub fn assess_input(input: &str) -> Option<Self> {
        if input.is_empty() {
            None
        } else {
            Some(Self::assess(input))
        }
    }

    fn assess(password: &str) -> Self {
        let len = password.chars().count();
        let mut score = 0u8;

        if len >= 8 {
            score += 25;
        }
        if len >= 12 {
            score += 15;
        }
        if password.chars().any(|c| c.is_ascii_lowercase()) {
            score += 15;
        }
        if password.chars().any(|c| c.is_ascii_uppercase()) {
            score += 15;
        }
        if password.chars().any(|c| c.is_ascii_digit()) {
            score += 15;
        }
        if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
            score += 15;
        }

        let label = match score {
            0..=39 => StrengthLabel::Weak,
            40..=69 => StrengthLabel::Fair,
            70..=89 => StrengthLabel::Good,
            _ => StrengthLabel::Strong,
        };

        Self { score, label }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_minimum_length() {
        assert!(ClearTextPassword::new("abcdefgh".to_string()).is_ok());
    }

    #[test]
    fn test_rejects_short() {
        let err = ClearTextPassword::new("short".to_string()).unwrap_err();
        assert_eq!(err, PasswordPolicyError::TooShort { min: 8, actual: 5 });
    }

    #[test]
    fn test_rejects_too_long() {
        let err = ClearTextPassword::new("a".repeat(129)).unwrap_err();
        assert_eq!(
            err,
            PasswordPolicyError::TooLong {
                max: 128,
                actual: 129
            }
        );
    }

    #[test]
    fn test_rejects_whitespace_only() {
        let err = ClearTextPassword::new("          ".to_string()).unwrap_err();
        assert_eq!(err, PasswordPolicyError::EmptyOrWhitespace);
    }

    #[test]
    fn test_rejects_control_characters() {
        let err = ClearTextPassword::new("abc\u{0007}defgh".to_string()).unwrap_err();
        assert_eq!(err, PasswordPolicyError::InvalidCharacter);
    }

    #[test]
    fn test_counts_code_points_not_bytes() {
        // 8 code points, 24 bytes
        let password = ClearTextPassword::new("パスワードです！".to_string()).unwrap();
        assert_eq!(password.char_count(), 8);
    }

    #[test]
    fn test_matches_after_normalization() {
        let password = ClearTextPassword::new("Ｐａｓｓｗｏｒｄ1".to_string()).unwrap();
        assert!(password.matches("Password1"));
        assert!(!password.matches("Password2"));
        assert!(!password.matches("Password"));
    }

    #[test]
    fn test_debug_is_redacted() {
        let password = ClearTextPassword::new("SuperSecret1!".to_string()).unwrap();
        let debug = format!("{:?}", password);
        assert!(!debug.contains("SuperSecret"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_strength_buckets() {
        assert_eq!(PasswordStrength::assess_input(""), None);

        let weak = PasswordStrength::assess_input("abc").unwrap();
        assert_eq!(weak.score, 15);
        assert_eq!(weak.label, StrengthLabel::Weak);

        // 25 + 15
        let fair = PasswordStrength::assess_input("abcdefgh").unwrap();
        assert_eq!(fair.score, 40);
        assert_eq!(fair.label, StrengthLabel::Fair);

        // 25 + 15 + 15 + 15
        let good = PasswordStrength::assess_input("abcdEFG1").unwrap();
        assert_eq!(good.score, 70);
        assert_eq!(good.label, StrengthLabel::Good);

        let strong = PasswordStrength::assess_input("abcdEFGH123!").unwrap();
        assert_eq!(strong.score, 100);
        assert_eq!(strong.label, StrengthLabel::Strong);
    }

    #[test]
    fn test_strength_from_password() {
        let password = ClearTextPassword::new("abcdEFGH123!".to_string()).unwrap();
        assert_eq!(password.strength().label, StrengthLabel::Strong);
        assert_eq!(StrengthLabel::Strong.color(), "#52c41a");
    }
}
