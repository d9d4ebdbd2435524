//! Secret code generation

use crate::core::{Code, ColorId, ConfigError, Palette};
use rand::Rng;

/// Generate a random secret code
///
/// With duplicates allowed, each position is an independent uniform draw.
/// Without, colors are drawn without replacement by a partial Fisher-Yates
/// shuffle. If `length` exceeds the palette size a duplicate-free code is
/// impossible and generation falls back to drawing with replacement.
///
/// # Errors
/// Returns `ConfigError::ZeroLength` or `ConfigError::EmptyPalette`.
///
/// # Examples
/// ```
/// use mastermind::game::generate_code;
/// use mastermind::palettes;
///
/// let palette = palettes::classic();
/// let secret = generate_code(&palette, 4, false, &mut rand::rng()).unwrap();
/// assert_eq!(secret.len(), 4);
/// assert!(!secret.has_duplicates());
/// ```
pub fn generate_code<R: Rng>(
    palette: &Palette,
    length: usize,
    allow_duplicates: bool,
    rng: &mut R,
) -> Result<Code, ConfigError> {
    if length == 0 {
        return Err(ConfigError::ZeroLength);
    }
    if palette.is_empty() {
        return Err(ConfigError::EmptyPalette);
    }

    let size = palette.len();

    if allow_duplicates || length > size {
        let colors = (0..length)
            .map(|_| ColorId::new(rng.random_range(0..size) as u8))
            .collect();
        return Ok(Code::new(colors));
    }

    let mut pool: Vec<ColorId> = palette.ids().collect();
    for i in 0..length {
        let j = rng.random_range(i..size);
        pool.swap(i, j);
    }
    pool.truncate(length);

    Ok(Code::new(pool))
}
