//! Colors, interned color identifiers and validated palettes
//!
//! The engine never looks at a color's label or hex value. Codes refer to
//! palette entries through [`ColorId`], an index into the palette they were
//! built against.

use super::{Code, ConfigError, InputError};
use rustc_hash::FxHashMap;
use std::fmt;

/// Index of a color within its palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorId(u8);

impl ColorId {
    #[inline]
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A palette entry: identifying key plus display metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Color {
    key: String,
    label: String,
    hex: String,
}

impl Color {
    pub fn new(key: impl Into<String>, label: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            hex: hex.into(),
        }
    }

    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Display swatch, passed through exactly as supplied
    #[inline]
    #[must_use]
    pub fn hex(&self) -> &str {
        &self.hex
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}

/// Ordered set of colors with unique keys
///
/// At most 256 colors, so every entry fits a [`ColorId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
    by_key: FxHashMap<String, ColorId>,
}

impl Palette {
    /// Largest palette a `ColorId` can address
    pub const MAX_COLORS: usize = 256;

    /// Build a palette, validating keys
    ///
    /// # Errors
    /// Returns `ConfigError` if:
    /// - The palette is empty
    /// - A key is empty, contains whitespace or a comma
    /// - Two colors share a key
    /// - There are more than [`Palette::MAX_COLORS`] colors
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Color, Palette};
    ///
    /// let palette = Palette::new(vec![
    ///     Color::new("r", "Red", "#e53935"),
    ///     Color::new("b", "Blue", "#1e88e5"),
    /// ])
    /// .unwrap();
    /// assert_eq!(palette.len(), 2);
    ///
    /// assert!(Palette::new(vec![]).is_err());
    /// ```
    pub fn new(colors: Vec<Color>) -> Result<Self, ConfigError> {
        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if colors.len() > Self::MAX_COLORS {
            return Err(ConfigError::TooManyColors(colors.len()));
        }

        let mut by_key = FxHashMap::default();
        for (i, color) in colors.iter().enumerate() {
            let key = color.key();
            if key.is_empty() || key.contains(|c: char| c.is_whitespace() || c == ',') {
                return Err(ConfigError::InvalidColorKey(key.to_string()));
            }
            if by_key
                .insert(key.to_string(), ColorId::new(i as u8))
                .is_some()
            {
                return Err(ConfigError::DuplicateColorKey(key.to_string()));
            }
        }

        Ok(Self { colors, by_key })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Iterate over every identifier in palette order
    pub fn ids(&self) -> impl Iterator<Item = ColorId> + '_ {
        (0..self.colors.len()).map(|i| ColorId::new(i as u8))
    }

    #[inline]
    #[must_use]
    pub fn get(&self, id: ColorId) -> Option<&Color> {
        self.colors.get(id.index())
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, id: ColorId) -> bool {
        id.index() < self.colors.len()
    }

    #[must_use]
    pub fn id_of(&self, key: &str) -> Option<ColorId> {
        self.by_key.get(key).copied()
    }

    /// Parse a code from palette keys
    ///
    /// Keys may be separated by whitespace or commas. When every key in the
    /// palette is a single character, an unseparated string like `"rgby"` is
    /// also accepted.
    ///
    /// # Errors
    /// Returns `InputError::UnknownColorKey` for a key not in the palette.
    ///
    /// # Examples
    /// ```
    /// use mastermind::palettes;
    ///
    /// let palette = palettes::classic();
    /// let a = palette.parse_code("r g b y").unwrap();
    /// let b = palette.parse_code("rgby").unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(palette.format_code(&a), "r g b y");
    /// ```
    pub fn parse_code(&self, text: &str) -> Result<Code, InputError> {
        let tokens: Vec<&str> = text
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect();

        let single_char_keys = self.colors.iter().all(|c| c.key().chars().count() == 1);

        let ids = if tokens.len() == 1 && single_char_keys && self.id_of(tokens[0]).is_none() {
            tokens[0]
                .chars()
                .map(|ch| {
                    let key = ch.to_string();
                    self.id_of(&key).ok_or(InputError::UnknownColorKey(key))
                })
                .collect::<Result<Vec<_>, _>>()?
        } else {
            tokens
                .iter()
                .map(|&key| {
                    self.id_of(key)
                        .ok_or_else(|| InputError::UnknownColorKey(key.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(Code::new(ids))
    }

    /// Render a code as space-separated keys
    ///
    /// Identifiers outside the palette render as `?`.
    #[must_use]
    pub fn format_code(&self, code: &Code) -> String {
        code.colors()
            .iter()
            .map(|&id| self.get(id).map_or("?", Color::key))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
