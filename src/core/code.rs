//! Ordered color sequences used for both secrets and guesses

use super::{ColorId, InputError, Palette};
use rustc_hash::FxHashMap;

/// A sequence of palette colors
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code(Vec<ColorId>);

impl Code {
    #[must_use]
    pub const fn new(colors: Vec<ColorId>) -> Self {
        Self(colors)
    }

    /// Build a code from a row of UI slots
    ///
    /// # Errors
    /// Returns `InputError::UnsetSlot` with the first empty position.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, ColorId, InputError};
    ///
    /// let red = ColorId::new(0);
    /// assert!(Code::from_slots(&[Some(red), Some(red)]).is_ok());
    /// assert_eq!(
    ///     Code::from_slots(&[Some(red), None]),
    ///     Err(InputError::UnsetSlot(1))
    /// );
    /// ```
    pub fn from_slots(slots: &[Option<ColorId>]) -> Result<Self, InputError> {
        slots
            .iter()
            .enumerate()
            .map(|(i, slot)| slot.ok_or(InputError::UnsetSlot(i)))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[ColorId] {
        &self.0
    }

    /// Whether any color appears more than once
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        self.color_counts().values().any(|&count| count > 1)
    }

    /// Check that this code has `length` colors, all from `palette`
    ///
    /// # Errors
    /// Returns `InputError::LengthMismatch` or `InputError::UnknownColor`.
    pub fn validate(&self, palette: &Palette, length: usize) -> Result<(), InputError> {
        if self.len() != length {
            return Err(InputError::LengthMismatch {
                expected: length,
                actual: self.len(),
            });
        }
        if let Some(position) = self.0.iter().position(|&id| !palette.contains(id)) {
            return Err(InputError::UnknownColor { position });
        }
        Ok(())
    }

    /// Occurrences of each color over all positions
    pub(crate) fn color_counts(&self) -> FxHashMap<ColorId, usize> {
        let mut counts = FxHashMap::default();
        for &id in &self.0 {
            *counts.entry(id).or_insert(0) += 1;
        }
        counts
    }
}

impl From<Vec<ColorId>> for Code {
    fn from(colors: Vec<ColorId>) -> Self {
        Self(colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;

    fn ids(raw: &[u8]) -> Code {
        raw.iter().copied().map(ColorId::new).collect::<Vec<_>>().into()
    }

    #[test]
    fn from_slots_complete() {
        let slots = [Some(ColorId::new(1)), Some(ColorId::new(0))];
        assert_eq!(Code::from_slots(&slots).unwrap(), ids(&[1, 0]));
    }

    #[test]
    fn from_slots_reports_first_unset() {
        let slots = [Some(ColorId::new(1)), None, None];
        assert_eq!(Code::from_slots(&slots), Err(InputError::UnsetSlot(1)));
    }

    #[test]
    fn color_counts_include_duplicates() {
        let code = ids(&[0, 0, 2, 1]);
        let counts = code.color_counts();
        assert_eq!(counts.get(&ColorId::new(0)), Some(&2));
        assert_eq!(counts.get(&ColorId::new(1)), Some(&1));
        assert_eq!(counts.get(&ColorId::new(2)), Some(&1));
        assert_eq!(counts.get(&ColorId::new(3)), None);
    }

    #[test]
    fn has_duplicates() {
        assert!(ids(&[0, 1, 0]).has_duplicates());
        assert!(!ids(&[0, 1, 2]).has_duplicates());
        assert!(!ids(&[]).has_duplicates());
    }

    #[test]
    fn validate_against_palette() {
        let palette = Palette::new(vec![
            Color::new("r", "Red", "#ff0000"),
            Color::new("b", "Blue", "#0000ff"),
        ])
        .unwrap();

        assert_eq!(ids(&[0, 1, 1]).validate(&palette, 3), Ok(()));
        assert_eq!(
            ids(&[0, 1]).validate(&palette, 3),
            Err(InputError::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            ids(&[0, 5, 1]).validate(&palette, 3),
            Err(InputError::UnknownColor { position: 1 })
        );
    }
}
