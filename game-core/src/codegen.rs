use game_types::{CODE_LENGTH, CodeMode, Guess, SecretCode, ValidationError};
use rand::Rng;
use rand::seq::SliceRandom;

/// Produces secret codes and validates raw guesses against the rules of the
/// active [`CodeMode`].
pub struct CodeGenerator {
    mode: CodeMode,
}

impl CodeGenerator {
    pub fn new(mode: CodeMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> CodeMode {
        self.mode
    }

    /// Draw a fresh secret code.
    ///
    /// `Open` draws each digit independently from 0-9. `Distinct` draws the
    /// first digit from 1-9, then three more without replacement from the
    /// nine remaining digit values.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> SecretCode {
        match self.mode {
            CodeMode::Open => {
                let mut digits = [0u8; CODE_LENGTH];
                for digit in &mut digits {
                    *digit = rng.gen_range(0..=9);
                }
                SecretCode::new(digits)
            }
            CodeMode::Distinct => {
                let first = rng.gen_range(1..=9);
                let mut remaining: Vec<u8> = (0..=9).filter(|&d| d != first).collect();
                remaining.shuffle(rng);
                SecretCode::new([first, remaining[0], remaining[1], remaining[2]])
            }
        }
    }

    /// Parse and validate a raw guess. A rejected guess never reaches the
    /// session: validation runs before evaluation and before the attempt
    /// counter moves.
    pub fn parse_guess(&self, raw: &str) -> Result<Guess, ValidationError> {
        if raw.len() != CODE_LENGTH || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::Format);
        }

        let mut digits = [0u8; CODE_LENGTH];
        for (digit, byte) in digits.iter_mut().zip(raw.bytes()) {
            *digit = byte - b'0';
        }

        if self.mode == CodeMode::Distinct {
            if digits[0] == 0 {
                return Err(ValidationError::LeadingZero);
            }
            let mut seen = [false; 10];
            for &digit in &digits {
                if seen[digit as usize] {
                    return Err(ValidationError::DuplicateDigit);
                }
                seen[digit as usize] = true;
            }
        }

        Ok(Guess::new(digits))
    }
}
