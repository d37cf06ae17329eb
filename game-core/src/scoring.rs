use game_types::{CODE_LENGTH, Guess, Score, SecretCode};

pub struct ScoringEngine;

impl ScoringEngine {
    /// Evaluate a guess against the secret code.
    ///
    /// Exact matches are counted first and those positions are excluded from
    /// both sides. The remaining guess digits are then matched left to right
    /// against the remaining secret digits, consuming one secret occurrence
    /// per match. The consumption order matters under repeated digits: it is
    /// what keeps a single secret digit from being claimed twice.
    pub fn evaluate(secret: &SecretCode, guess: &Guess) -> Score {
        let secret_digits = secret.digits();
        let guess_digits = guess.digits();

        let mut exact = 0u8;
        let mut secret_rest: Vec<u8> = Vec::with_capacity(CODE_LENGTH);
        let mut guess_rest: Vec<u8> = Vec::with_capacity(CODE_LENGTH);

        for i in 0..CODE_LENGTH {
            if guess_digits[i] == secret_digits[i] {
                exact += 1;
            } else {
                secret_rest.push(secret_digits[i]);
                guess_rest.push(guess_digits[i]);
            }
        }

        let mut partial = 0u8;
        for digit in guess_rest {
            if let Some(pos) = secret_rest.iter().position(|&d| d == digit) {
                partial += 1;
                secret_rest.remove(pos);
            }
        }

        Score::new(exact, partial)
    }
}
