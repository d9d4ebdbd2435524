//! Color palettes
//!
//! Provides built-in palettes compiled into the binary and a loader for
//! custom palette files.

mod embedded;
pub mod loader;

pub use embedded::{CLASSIC, CLASSIC_COUNT, EXTENDED, EXTENDED_COUNT};

use crate::core::Palette;
use loader::colors_from_slice;

/// The classic six-color palette
///
/// # Panics
/// Will not panic - the embedded palette is checked by the test suite.
#[must_use]
pub fn classic() -> Palette {
    Palette::new(colors_from_slice(CLASSIC)).expect("embedded palette is valid")
}

/// The extended eight-color palette
///
/// # Panics
/// Will not panic - the embedded palette is checked by the test suite.
#[must_use]
pub fn extended() -> Palette {
    Palette::new(colors_from_slice(EXTENDED)).expect("embedded palette is valid")
}
