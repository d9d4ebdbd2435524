//! Mastermind
//!
//! A code-breaking game engine: secret generation, exact/partial scoring and
//! the turn-by-turn game state machine, with TUI and CLI front ends.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Feedback, GameStatus};
//! use mastermind::game::{GameConfiguration, GameSession};
//! use mastermind::palettes;
//!
//! let config = GameConfiguration::new(4, 10, false, palettes::classic()).unwrap();
//! let mut session = GameSession::new(config, rand::rng()).unwrap();
//!
//! // Guess the secret outright
//! let secret = session.reveal_secret().clone();
//! let attempt = session.submit_guess(&secret).unwrap();
//!
//! assert_eq!(attempt.feedback(), Feedback::new(4, 0));
//! assert_eq!(session.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Game engine
pub mod game;

// Built-in and file palettes
pub mod palettes;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
