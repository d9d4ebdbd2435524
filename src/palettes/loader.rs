//! Palette loading utilities
//!
//! Palette files list one color per line as `key hex label...`. Blank lines
//! and lines starting with `#` are skipped, as are lines missing a hex value.

use crate::core::Color;
use std::fs;
use std::io;
use std::path::Path;

/// Load colors from a file
///
/// The result still has to go through [`crate::core::Palette::new`] for key
/// validation.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use mastermind::core::Palette;
/// use mastermind::palettes::loader::load_from_file;
///
/// let colors = load_from_file("my_palette.txt").unwrap();
/// let palette = Palette::new(colors).unwrap();
/// println!("Loaded {} colors", palette.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Color>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_colors(&content))
}

/// Parse palette text in the file format
#[must_use]
pub fn parse_colors(content: &str) -> Vec<Color> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            let key = parts.next()?;
            let hex = parts.next()?;
            let label = parts.collect::<Vec<_>>().join(" ");
            Some(Color::new(key, label, hex))
        })
        .collect()
}

/// Convert an embedded `(key, label, hex)` slice to colors
///
/// # Examples
/// ```
/// use mastermind::palettes::loader::colors_from_slice;
/// use mastermind::palettes::CLASSIC;
///
/// let colors = colors_from_slice(CLASSIC);
/// assert_eq!(colors.len(), CLASSIC.len());
/// ```
#[must_use]
pub fn colors_from_slice(slice: &[(&str, &str, &str)]) -> Vec<Color> {
    slice
        .iter()
        .map(|&(key, label, hex)| Color::new(key, label, hex))
        .collect()
}
