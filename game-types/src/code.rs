use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub type SessionId = Uuid;

/// Number of digits in a secret code or guess.
pub const CODE_LENGTH: usize = 4;

/// Rules governing secret code generation and guess validation.
///
/// The active mode is fixed per deployment; it is never switched mid-game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodeMode {
    /// Digits may repeat; a leading zero is allowed.
    Open,
    /// All four digits are pairwise distinct and the first digit is 1-9.
    Distinct,
}

/// The hidden code a player is trying to discover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretCode([u8; CODE_LENGTH]);

impl SecretCode {
    /// Build a code from raw digits. Panics if any digit exceeds 9;
    /// generation and parsing are the only producers and both guarantee this.
    pub fn new(digits: [u8; CODE_LENGTH]) -> Self {
        assert!(digits.iter().all(|&d| d <= 9), "digit out of range");
        Self(digits)
    }

    pub fn digits(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }
}

impl fmt::Display for SecretCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.0 {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

/// A validated player guess. Only produced by guess parsing, so the digit
/// invariants of the active [`CodeMode`] always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guess([u8; CODE_LENGTH]);

impl Guess {
    pub fn new(digits: [u8; CODE_LENGTH]) -> Self {
        assert!(digits.iter().all(|&d| d <= 9), "digit out of range");
        Self(digits)
    }

    pub fn digits(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.0 {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_display() {
        let code = SecretCode::new([0, 1, 2, 3]);
        assert_eq!(code.to_string(), "0123");

        let guess = Guess::new([9, 9, 0, 1]);
        assert_eq!(guess.to_string(), "9901");
    }

    #[test]
    #[should_panic(expected = "digit out of range")]
    fn test_code_rejects_out_of_range_digit() {
        SecretCode::new([0, 1, 2, 10]);
    }
}
