//! Error types for the game engine
//!
//! Two categories exist: configuration errors (fatal to `configure`/`start`)
//! and input errors (fatal to a single guess submission, state untouched).

use super::GameStatus;
use std::fmt;

/// Rejected game configuration or palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroLength,
    ZeroAttempts,
    EmptyPalette,
    TooManyColors(usize),
    DuplicateColorKey(String),
    InvalidColorKey(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLength => write!(f, "Code length must be at least 1"),
            Self::ZeroAttempts => write!(f, "Attempt budget must be at least 1"),
            Self::EmptyPalette => write!(f, "Palette must contain at least one color"),
            Self::TooManyColors(n) => write!(f, "Palette has {n} colors, at most 256 allowed"),
            Self::DuplicateColorKey(key) => {
                write!(f, "Palette contains duplicate color key '{key}'")
            }
            Self::InvalidColorKey(key) => write!(
                f,
                "Color key '{key}' must be non-empty and contain no whitespace or commas"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Rejected guess or scoring request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    LengthMismatch { expected: usize, actual: usize },
    UnsetSlot(usize),
    UnknownColor { position: usize },
    UnknownColorKey(String),
    RepeatedColor,
    GameOver(GameStatus),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => {
                write!(f, "Code must have {expected} colors, got {actual}")
            }
            Self::UnsetSlot(position) => write!(f, "Slot {} has no color", position + 1),
            Self::UnknownColor { position } => {
                write!(f, "Slot {} holds a color outside the palette", position + 1)
            }
            Self::UnknownColorKey(key) => write!(f, "Unknown color '{key}'"),
            Self::RepeatedColor => write!(f, "Code repeats a color but duplicates are off"),
            Self::GameOver(status) => write!(f, "Game is already over ({status})"),
        }
    }
}

impl std::error::Error for InputError {}

/// Any error surfaced by the game engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidConfiguration(ConfigError),
    InvalidInput(InputError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(e) => write!(f, "Invalid configuration: {e}"),
            Self::InvalidInput(e) => write!(f, "Invalid input: {e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidConfiguration(e) => Some(e),
            Self::InvalidInput(e) => Some(e),
        }
    }
}

impl From<ConfigError> for GameError {
    fn from(e: ConfigError) -> Self {
        Self::InvalidConfiguration(e)
    }
}

impl From<InputError> for GameError {
    fn from(e: InputError) -> Self {
        Self::InvalidInput(e)
    }
}
