//! Game session: owns the random source and the current game snapshot
//!
//! Each call replaces the snapshot wholesale or leaves it untouched.

use super::{Attempt, GameConfiguration, GameState};
use crate::core::{Code, ColorId, GameError, GameStatus};
use rand::Rng;
use std::sync::{Arc, Mutex, PoisonError};

/// A running sequence of games sharing one random source
pub struct GameSession<R: Rng> {
    rng: R,
    state: GameState,
}

impl<R: Rng> GameSession<R> {
    /// Create a session and start its first game
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfiguration` if no secret can be generated.
    ///
    /// # Examples
    /// ```
    /// use mastermind::game::{GameConfiguration, GameSession};
    /// use mastermind::palettes;
    ///
    /// let config = GameConfiguration::new(4, 10, true, palettes::classic()).unwrap();
    /// let mut session = GameSession::new(config, rand::rng()).unwrap();
    ///
    /// let guess = session.config().palette().parse_code("rrgg").unwrap();
    /// let attempt = session.submit_guess(&guess).unwrap();
    /// assert!(attempt.feedback().total() <= 4);
    /// ```
    pub fn new(config: GameConfiguration, mut rng: R) -> Result<Self, GameError> {
        let state = GameState::start(Arc::new(config), &mut rng)?;
        Ok(Self { rng, state })
    }

    /// Abandon the current game and start one under `config`
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfiguration`; the current game is kept.
    pub fn start(&mut self, config: GameConfiguration) -> Result<&GameState, GameError> {
        self.state = GameState::start(Arc::new(config), &mut self.rng)?;
        Ok(&self.state)
    }

    /// Abandon the current game and start another with the same configuration
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfiguration` if no secret can be generated.
    pub fn restart(&mut self) -> Result<&GameState, GameError> {
        self.state = GameState::start(self.state.config_handle(), &mut self.rng)?;
        Ok(&self.state)
    }

    /// Submit a guess for the current game
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` if the game is over or the guess is
    /// malformed; the current game is kept.
    pub fn submit_guess(&mut self, guess: &Code) -> Result<Attempt, GameError> {
        let (attempt, next) = self.state.submit_guess(guess)?;
        self.state = next;
        Ok(attempt)
    }

    /// Submit a row of UI slots, rejecting any unset slot
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` as for [`GameSession::submit_guess`],
    /// or `InputError::UnsetSlot` for an incomplete row.
    pub fn submit_slots(&mut self, slots: &[Option<ColorId>]) -> Result<Attempt, GameError> {
        let guess = Code::from_slots(slots)?;
        self.submit_guess(&guess)
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &GameConfiguration {
        self.state.config()
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.state.status()
    }

    #[inline]
    #[must_use]
    pub const fn reveal_secret(&self) -> &Code {
        self.state.reveal_secret()
    }
}

/// A session that can be shared between threads
///
/// Every operation holds the lock for its whole duration, so concurrent
/// submissions are applied one after another.
pub struct SharedSession<R: Rng> {
    inner: Mutex<GameSession<R>>,
}

impl<R: Rng> SharedSession<R> {
    #[must_use]
    pub const fn new(session: GameSession<R>) -> Self {
        Self {
            inner: Mutex::new(session),
        }
    }

    // Transitions never leave a half-applied state, so a poisoned lock still
    // guards a consistent snapshot.
    fn lock(&self) -> std::sync::MutexGuard<'_, GameSession<R>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// # Errors
    /// See [`GameSession::start`].
    pub fn start(&self, config: GameConfiguration) -> Result<GameState, GameError> {
        self.lock().start(config).cloned()
    }

    /// # Errors
    /// See [`GameSession::submit_guess`].
    pub fn submit_guess(&self, guess: &Code) -> Result<(Attempt, GameState), GameError> {
        let mut session = self.lock();
        let attempt = session.submit_guess(guess)?;
        Ok((attempt, session.state().clone()))
    }

    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.lock().state().clone()
    }

    #[must_use]
    pub fn reveal_secret(&self) -> Code {
        self.lock().reveal_secret().clone()
    }

    #[must_use]
    pub fn into_inner(self) -> GameSession<R> {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ConfigError, Feedback, InputError};
    use crate::palettes;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn seeded_session(length: usize, max_attempts: usize) -> GameSession<ChaCha8Rng> {
        let config =
            GameConfiguration::new(length, max_attempts, false, palettes::classic()).unwrap();
        GameSession::new(config, ChaCha8Rng::seed_from_u64(42)).unwrap()
    }

    /// A guess sharing no color with the secret
    fn disjoint_guess(session: &GameSession<ChaCha8Rng>) -> Code {
        let secret = session.reveal_secret();
        let miss = session
            .config()
            .palette()
            .ids()
            .find(|id| !secret.colors().contains(id))
            .unwrap();
        Code::new(vec![miss; secret.len()])
    }

    #[test]
    fn session_win_flow() {
        let mut session = seeded_session(4, 10);
        let secret = session.reveal_secret().clone();

        let attempt = session.submit_guess(&secret).unwrap();
        assert_eq!(attempt.feedback(), Feedback::new(4, 0));
        assert_eq!(session.status(), GameStatus::Won);
    }

    #[test]
    fn session_loss_flow_and_rejection() {
        let mut session = seeded_session(4, 3);
        let miss = disjoint_guess(&session);

        for _ in 0..3 {
            session.submit_guess(&miss).unwrap();
        }
        assert_eq!(session.status(), GameStatus::Lost);

        let err = session.submit_guess(&miss).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidInput(InputError::GameOver(GameStatus::Lost))
        );
        assert_eq!(session.state().history().len(), 3);
    }

    #[test]
    fn submit_slots_rejects_unset_without_mutation() {
        let mut session = seeded_session(4, 10);
        let red = session.config().palette().id_of("r").unwrap();

        let err = session
            .submit_slots(&[Some(red), None, Some(red), Some(red)])
            .unwrap_err();
        assert_eq!(err, GameError::InvalidInput(InputError::UnsetSlot(1)));
        assert!(session.state().history().is_empty());

        session.submit_slots(&[Some(red); 4]).unwrap();
        assert_eq!(session.state().history().len(), 1);
    }

    #[test]
    fn restart_replaces_game() {
        let mut session = seeded_session(4, 1);
        let miss = disjoint_guess(&session);
        session.submit_guess(&miss).unwrap();
        assert_eq!(session.status(), GameStatus::Lost);

        let state = session.restart().unwrap();
        assert_eq!(state.status(), GameStatus::InProgress);
        assert!(state.history().is_empty());
        assert_eq!(state.config().max_attempts(), 1);
    }

    #[test]
    fn start_switches_configuration() {
        let mut session = seeded_session(4, 10);
        let config = GameConfiguration::new(6, 12, true, palettes::extended()).unwrap();

        let state = session.start(config).unwrap();
        assert_eq!(state.reveal_secret().len(), 6);
        assert_eq!(state.config().palette().len(), 8);
        assert_eq!(session.config().max_attempts(), 12);
    }

    #[test]
    fn invalid_configuration_never_reaches_session() {
        assert_eq!(
            GameConfiguration::new(4, 0, false, palettes::classic()),
            Err(ConfigError::ZeroAttempts)
        );
    }

    #[test]
    fn reveal_does_not_change_session() {
        let session = seeded_session(4, 10);
        let first = session.reveal_secret().clone();
        let second = session.reveal_secret().clone();
        assert_eq!(first, second);
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn shared_session_serializes_submissions() {
        use std::thread;

        let session = seeded_session(4, 40);
        let miss = disjoint_guess(&session);
        let shared = SharedSession::new(session);

        thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..5 {
                        shared.submit_guess(&miss).unwrap();
                    }
                });
            }
        });

        let snapshot = shared.snapshot();
        assert_eq!(snapshot.history().len(), 20);
        assert_eq!(snapshot.status(), GameStatus::InProgress);
        assert_eq!(&shared.reveal_secret(), snapshot.reveal_secret());
    }

    #[test]
    fn shared_session_stops_at_budget() {
        use std::thread;

        let session = seeded_session(4, 6);
        let miss = disjoint_guess(&session);
        let shared = SharedSession::new(session);

        let accepted: usize = thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(|| {
                        (0..5)
                            .filter(|_| shared.submit_guess(&miss).is_ok())
                            .count()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).sum()
        });

        assert_eq!(accepted, 6);
        let session = shared.into_inner();
        assert_eq!(session.status(), GameStatus::Lost);
        assert_eq!(session.state().history().len(), 6);
    }
}
