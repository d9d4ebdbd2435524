//! Game configuration
//!
//! Validated once at construction and immutable afterwards. Changing any
//! setting means building a new configuration and starting a new game.

use crate::core::{ConfigError, Palette};

/// Rules for one game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfiguration {
    length: usize,
    max_attempts: usize,
    allow_duplicates: bool,
    palette: Palette,
}

impl GameConfiguration {
    /// Validate settings and build a configuration
    ///
    /// The palette has already been validated for empty and duplicate keys by
    /// [`Palette::new`].
    ///
    /// # Errors
    /// Returns `ConfigError::ZeroLength` or `ConfigError::ZeroAttempts`.
    ///
    /// # Examples
    /// ```
    /// use mastermind::game::GameConfiguration;
    /// use mastermind::palettes;
    ///
    /// let config = GameConfiguration::new(4, 10, false, palettes::classic()).unwrap();
    /// assert_eq!(config.length(), 4);
    ///
    /// assert!(GameConfiguration::new(0, 10, false, palettes::classic()).is_err());
    /// ```
    pub fn new(
        length: usize,
        max_attempts: usize,
        allow_duplicates: bool,
        palette: Palette,
    ) -> Result<Self, ConfigError> {
        if length == 0 {
            return Err(ConfigError::ZeroLength);
        }
        if max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        if palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }

        Ok(Self {
            length,
            max_attempts,
            allow_duplicates,
            palette,
        })
    }

    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[inline]
    #[must_use]
    pub const fn allow_duplicates(&self) -> bool {
        self.allow_duplicates
    }

    #[inline]
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Whether generated secrets are guaranteed free of repeated colors
    ///
    /// False when duplicates are allowed, and also when the code is longer
    /// than the palette, since generation then falls back to duplicates.
    #[must_use]
    pub fn guarantees_unique_secret(&self) -> bool {
        !self.allow_duplicates && self.length <= self.palette.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palettes;

    #[test]
    fn config_valid() {
        let config = GameConfiguration::new(5, 8, true, palettes::extended()).unwrap();
        assert_eq!(config.length(), 5);
        assert_eq!(config.max_attempts(), 8);
        assert!(config.allow_duplicates());
        assert_eq!(config.palette().len(), 8);
    }

    #[test]
    fn config_rejects_zero_length() {
        assert_eq!(
            GameConfiguration::new(0, 10, false, palettes::classic()),
            Err(ConfigError::ZeroLength)
        );
    }

    #[test]
    fn config_rejects_zero_attempts() {
        assert_eq!(
            GameConfiguration::new(4, 0, false, palettes::classic()),
            Err(ConfigError::ZeroAttempts)
        );
    }

    #[test]
    fn config_accepts_length_beyond_palette() {
        let config = GameConfiguration::new(9, 10, false, palettes::classic()).unwrap();
        assert!(!config.guarantees_unique_secret());
    }

    #[test]
    fn unique_secret_guarantee() {
        let palette = palettes::classic();
        let unique = GameConfiguration::new(6, 10, false, palette.clone()).unwrap();
        let dupes = GameConfiguration::new(4, 10, true, palette).unwrap();
        assert!(unique.guarantees_unique_secret());
        assert!(!dupes.guarantees_unique_secret());
    }
}
