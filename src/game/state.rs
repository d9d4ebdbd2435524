//! Game state snapshots and the turn transition
//!
//! A [`GameState`] is never edited in place. Submitting a guess produces a
//! new snapshot; starting a game produces a fresh one.

use super::{GameConfiguration, generate_code};
use crate::core::{Code, Feedback, GameError, GameStatus, InputError};
use rand::Rng;
use std::sync::Arc;

/// A scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    guess: Code,
    feedback: Feedback,
}

impl Attempt {
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Code {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }
}

/// Snapshot of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    config: Arc<GameConfiguration>,
    secret: Code,
    history: Vec<Attempt>,
    status: GameStatus,
}

impl GameState {
    /// Start a game with a freshly generated secret
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfiguration` if no secret can be generated.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::GameStatus;
    /// use mastermind::game::{GameConfiguration, GameState};
    /// use mastermind::palettes;
    /// use std::sync::Arc;
    ///
    /// let config = Arc::new(GameConfiguration::new(4, 10, false, palettes::classic()).unwrap());
    /// let state = GameState::start(config, &mut rand::rng()).unwrap();
    ///
    /// assert_eq!(state.status(), GameStatus::InProgress);
    /// assert!(state.history().is_empty());
    /// assert_eq!(state.reveal_secret().len(), 4);
    /// ```
    pub fn start<R: Rng>(config: Arc<GameConfiguration>, rng: &mut R) -> Result<Self, GameError> {
        let secret = generate_code(
            config.palette(),
            config.length(),
            config.allow_duplicates(),
            rng,
        )?;

        Ok(Self {
            config,
            secret,
            history: Vec::new(),
            status: GameStatus::InProgress,
        })
    }

    /// Start a game with a known secret
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` if the secret does not fit the
    /// configuration, or repeats a color when the configuration promises a
    /// secret without duplicates.
    pub fn with_secret(config: Arc<GameConfiguration>, secret: Code) -> Result<Self, GameError> {
        secret.validate(config.palette(), config.length())?;
        if config.guarantees_unique_secret() && secret.has_duplicates() {
            return Err(InputError::RepeatedColor.into());
        }

        Ok(Self {
            config,
            secret,
            history: Vec::new(),
            status: GameStatus::InProgress,
        })
    }

    /// Score a guess and return the attempt plus the next snapshot
    ///
    /// The winning check happens before the attempt budget check, so a correct
    /// guess on the final attempt wins.
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` if the game is over, or the guess has
    /// the wrong length or a color outside the palette. `self` is unchanged.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Feedback, GameStatus};
    /// use mastermind::game::{GameConfiguration, GameState};
    /// use mastermind::palettes;
    /// use std::sync::Arc;
    ///
    /// let palette = palettes::classic();
    /// let secret = palette.parse_code("r g b y").unwrap();
    /// let guess = palette.parse_code("r b g o").unwrap();
    /// let config = Arc::new(GameConfiguration::new(4, 10, false, palette).unwrap());
    ///
    /// let state = GameState::with_secret(config, secret).unwrap();
    /// let (attempt, next) = state.submit_guess(&guess).unwrap();
    ///
    /// assert_eq!(attempt.feedback(), Feedback::new(1, 2));
    /// assert_eq!(next.status(), GameStatus::InProgress);
    /// assert_eq!(next.history().len(), 1);
    /// assert!(state.history().is_empty());
    /// ```
    pub fn submit_guess(&self, guess: &Code) -> Result<(Attempt, Self), GameError> {
        if self.status.is_over() {
            return Err(InputError::GameOver(self.status).into());
        }
        guess.validate(self.config.palette(), self.config.length())?;

        let feedback = Feedback::score(&self.secret, guess)?;
        let attempt = Attempt {
            guess: guess.clone(),
            feedback,
        };

        let mut history = self.history.clone();
        history.push(attempt.clone());

        let status = if feedback.is_solved(self.config.length()) {
            GameStatus::Won
        } else if history.len() >= self.config.max_attempts() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        let next = Self {
            config: Arc::clone(&self.config),
            secret: self.secret.clone(),
            history,
            status,
        };

        Ok((attempt, next))
    }

    /// The secret code; reading it never affects the game
    #[inline]
    #[must_use]
    pub const fn reveal_secret(&self) -> &Code {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &GameConfiguration {
        &self.config
    }

    /// Shared handle to the configuration, for starting the next game
    #[inline]
    #[must_use]
    pub fn config_handle(&self) -> Arc<GameConfiguration> {
        Arc::clone(&self.config)
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Attempt] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn last_attempt(&self) -> Option<&Attempt> {
        self.history.last()
    }

    #[inline]
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.config.max_attempts().saturating_sub(self.history.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Palette;
    use crate::palettes;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn setup(secret: &str, max_attempts: usize) -> (Palette, GameState) {
        let palette = palettes::classic();
        let secret = palette.parse_code(secret).unwrap();
        let config = GameConfiguration::new(secret.len(), max_attempts, true, palette.clone())
            .unwrap();
        let state = GameState::with_secret(Arc::new(config), secret).unwrap();
        (palette, state)
    }

    #[test]
    fn start_generates_fitting_secret() {
        let config = GameConfiguration::new(5, 10, false, palettes::extended()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let state = GameState::start(Arc::new(config), &mut rng).unwrap();

        assert_eq!(state.reveal_secret().len(), 5);
        assert!(!state.reveal_secret().has_duplicates());
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.attempts_remaining(), 10);
    }

    #[test]
    fn with_secret_rejects_wrong_length() {
        let palette = palettes::classic();
        let secret = palette.parse_code("r g b").unwrap();
        let config = GameConfiguration::new(4, 10, false, palette).unwrap();

        assert_eq!(
            GameState::with_secret(Arc::new(config), secret),
            Err(GameError::InvalidInput(InputError::LengthMismatch {
                expected: 4,
                actual: 3
            }))
        );
    }

    #[test]
    fn with_secret_rejects_repeats_without_duplicates() {
        let palette = palettes::classic();
        let secret = palette.parse_code("r r r r").unwrap();
        let config = GameConfiguration::new(4, 10, false, palette.clone()).unwrap();

        assert_eq!(
            GameState::with_secret(Arc::new(config), secret.clone()),
            Err(GameError::InvalidInput(InputError::RepeatedColor))
        );

        let config = GameConfiguration::new(4, 10, true, palette).unwrap();
        assert!(GameState::with_secret(Arc::new(config), secret).is_ok());
    }

    #[test]
    fn with_secret_allows_repeats_past_palette_size() {
        let palette = palettes::classic();
        let secret = palette.parse_code("r g b y o p r").unwrap();
        let config = GameConfiguration::new(7, 10, false, palette).unwrap();

        assert!(!config.guarantees_unique_secret());
        assert!(GameState::with_secret(Arc::new(config), secret).is_ok());
    }

    #[test]
    fn win_with_attempts_remaining() {
        let (palette, state) = setup("r g b y", 10);
        let guess = palette.parse_code("r g b y").unwrap();

        let (attempt, next) = state.submit_guess(&guess).unwrap();
        assert_eq!(attempt.feedback(), Feedback::new(4, 0));
        assert_eq!(next.status(), GameStatus::Won);
        assert_eq!(next.attempts_remaining(), 9);
    }

    #[test]
    fn loss_on_last_attempt() {
        let (palette, mut state) = setup("r g b y", 3);
        let miss = palette.parse_code("o o o o").unwrap();

        for _ in 0..2 {
            let (_, next) = state.submit_guess(&miss).unwrap();
            assert_eq!(next.status(), GameStatus::InProgress);
            state = next;
        }

        let (attempt, last) = state.submit_guess(&miss).unwrap();
        assert_eq!(attempt.feedback(), Feedback::new(0, 0));
        assert_eq!(last.status(), GameStatus::Lost);
        assert_eq!(last.history().len(), 3);
        assert_eq!(last.attempts_remaining(), 0);
    }

    #[test]
    fn win_on_last_attempt_beats_loss() {
        let (palette, state) = setup("r g b y", 2);
        let miss = palette.parse_code("o o o o").unwrap();
        let hit = palette.parse_code("r g b y").unwrap();

        let (_, state) = state.submit_guess(&miss).unwrap();
        let (_, state) = state.submit_guess(&hit).unwrap();
        assert_eq!(state.status(), GameStatus::Won);
    }

    #[test]
    fn terminal_state_rejects_guesses() {
        let (palette, state) = setup("r g", 1);
        let miss = palette.parse_code("o o").unwrap();

        let (_, lost) = state.submit_guess(&miss).unwrap();
        assert_eq!(lost.status(), GameStatus::Lost);

        let result = lost.submit_guess(&miss);
        assert_eq!(
            result,
            Err(GameError::InvalidInput(InputError::GameOver(
                GameStatus::Lost
            )))
        );
        assert_eq!(lost.history().len(), 1);
    }

    #[test]
    fn won_state_rejects_guesses() {
        let (palette, state) = setup("r g", 5);
        let hit = palette.parse_code("r g").unwrap();

        let (_, won) = state.submit_guess(&hit).unwrap();
        assert!(won.submit_guess(&hit).is_err());
        assert_eq!(won.history().len(), 1);
    }

    #[test]
    fn malformed_guess_leaves_state_unchanged() {
        let (palette, state) = setup("r g b y", 10);
        let before = state.clone();

        let short = palette.parse_code("r g b").unwrap();
        assert!(matches!(
            state.submit_guess(&short),
            Err(GameError::InvalidInput(InputError::LengthMismatch { .. }))
        ));

        let foreign = Code::new(vec![crate::core::ColorId::new(200); 4]);
        assert_eq!(
            state.submit_guess(&foreign),
            Err(GameError::InvalidInput(InputError::UnknownColor {
                position: 0
            }))
        );

        assert_eq!(state, before);
    }

    #[test]
    fn history_keeps_submission_order() {
        let (palette, state) = setup("r g b y", 10);
        let first = palette.parse_code("o o o o").unwrap();
        let second = palette.parse_code("y b g r").unwrap();

        let (_, state) = state.submit_guess(&first).unwrap();
        let (_, state) = state.submit_guess(&second).unwrap();

        assert_eq!(state.history()[0].guess(), &first);
        assert_eq!(state.history()[1].guess(), &second);
        assert_eq!(state.history()[1].feedback(), Feedback::new(0, 4));
        assert_eq!(state.last_attempt(), Some(&state.history()[1]));
    }

    #[test]
    fn reveal_is_idempotent() {
        let (_, state) = setup("r r b g", 10);
        let first = state.reveal_secret().clone();
        let second = state.reveal_secret().clone();

        assert_eq!(first, second);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert!(state.history().is_empty());
    }
}
