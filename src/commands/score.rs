//! Score command
//!
//! Scores a guess against a given secret without running a game.

use crate::core::{Feedback, GameError, Palette};

/// Result of scoring two codes
pub struct ScoreResult {
    pub secret: String,
    pub guess: String,
    pub length: usize,
    pub feedback: Feedback,
}

/// Parse both codes with `palette` and score them
///
/// # Errors
///
/// Returns `GameError::InvalidInput` if either code uses an unknown color or
/// the lengths differ.
pub fn score_codes(palette: &Palette, secret: &str, guess: &str) -> Result<ScoreResult, GameError> {
    let secret_code = palette.parse_code(secret)?;
    let guess_code = palette.parse_code(guess)?;
    let feedback = Feedback::score(&secret_code, &guess_code)?;

    Ok(ScoreResult {
        secret: palette.format_code(&secret_code),
        guess: palette.format_code(&guess_code),
        length: secret_code.len(),
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::InputError;
    use crate::palettes;

    #[test]
    fn score_codes_duplicate_example() {
        let result = score_codes(&palettes::classic(), "rrbg", "r b b y").unwrap();
        assert_eq!(result.feedback, Feedback::new(2, 0));
        assert_eq!(result.secret, "r r b g");
        assert_eq!(result.guess, "r b b y");
        assert_eq!(result.length, 4);

        let result = score_codes(&palettes::classic(), "rrbg", "rbyb").unwrap();
        assert_eq!(result.feedback, Feedback::new(1, 1));
    }

    #[test]
    fn score_codes_length_mismatch() {
        let result = score_codes(&palettes::classic(), "rgb", "rgby");
        assert!(matches!(
            result,
            Err(GameError::InvalidInput(InputError::LengthMismatch { .. }))
        ));
    }

    #[test]
    fn score_codes_unknown_color() {
        let result = score_codes(&palettes::classic(), "rgbw", "rgby");
        assert_eq!(
            result.err(),
            Some(GameError::InvalidInput(InputError::UnknownColorKey(
                "w".to_string()
            )))
        );
    }
}
