//! In-memory win/loss tally for the current process

use super::GameState;
use crate::core::GameStatus;
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Winning games keyed by the number of attempts they took
    pub guess_distribution: BTreeMap<usize, usize>,
}

impl Statistics {
    /// Count a finished game; games still in progress are ignored
    ///
    /// Returns whether the game was counted.
    pub fn record(&mut self, state: &GameState) -> bool {
        match state.status() {
            GameStatus::InProgress => false,
            GameStatus::Won => {
                self.total_games += 1;
                self.games_won += 1;
                *self
                    .guess_distribution
                    .entry(state.history().len())
                    .or_insert(0) += 1;
                true
            }
            GameStatus::Lost => {
                self.total_games += 1;
                true
            }
        }
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}
