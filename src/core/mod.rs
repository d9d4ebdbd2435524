//! Core domain types for Mastermind
//!
//! Colors, codes, feedback and errors. Everything here is pure: no I/O and no
//! randomness.

mod code;
mod color;
mod error;
mod feedback;
mod status;

pub use code::Code;
pub use color::{Color, ColorId, Palette};
pub use error::{ConfigError, GameError, InputError};
pub use feedback::Feedback;
pub use status::GameStatus;
