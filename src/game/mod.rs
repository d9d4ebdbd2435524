//! Game engine: configuration, secret generation and the turn state machine

mod config;
mod generator;
mod session;
mod state;
mod stats;

pub use config::GameConfiguration;
pub use generator::generate_code;
pub use session::{GameSession, SharedSession};
pub use state::{Attempt, GameState};
pub use stats::Statistics;

pub use crate::core::GameStatus;
