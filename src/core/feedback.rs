//! Mastermind feedback calculation and representation
//!
//! Feedback is a pair of counts:
//! - exact: same color at the same position
//! - partial: color present in the secret but not counted as exact

use super::{Code, InputError};
use std::fmt;

/// Scored result of one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    pub exact: usize,
    pub partial: usize,
}

impl Feedback {
    #[inline]
    #[must_use]
    pub const fn new(exact: usize, partial: usize) -> Self {
        Self { exact, partial }
    }

    /// Whether this feedback means the code of `length` was cracked
    #[inline]
    #[must_use]
    pub const fn is_solved(self, length: usize) -> bool {
        self.exact == length
    }

    /// Colors of the guess matched in any way
    #[inline]
    #[must_use]
    pub const fn total(self) -> usize {
        self.exact + self.partial
    }

    /// Score `guess` against `secret`
    ///
    /// Duplicates are handled by counting every color over all positions of
    /// both codes, exact positions included, and taking the overlap.
    ///
    /// # Algorithm
    /// 1. Count positions where both codes agree (exact)
    /// 2. Count occurrences of each color in each code
    /// 3. Sum `min(secret, guess)` per color (overlap)
    /// 4. partial = overlap - exact
    ///
    /// # Errors
    /// Returns `InputError::LengthMismatch` if the codes differ in length.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Feedback;
    /// use mastermind::palettes;
    ///
    /// let palette = palettes::classic();
    /// let secret = palette.parse_code("r r b g").unwrap();
    /// let guess = palette.parse_code("r b b y").unwrap();
    /// assert_eq!(Feedback::score(&secret, &guess).unwrap(), Feedback::new(2, 0));
    ///
    /// let guess = palette.parse_code("r b y b").unwrap();
    /// assert_eq!(Feedback::score(&secret, &guess).unwrap(), Feedback::new(1, 1));
    /// ```
    pub fn score(secret: &Code, guess: &Code) -> Result<Self, InputError> {
        if secret.len() != guess.len() {
            return Err(InputError::LengthMismatch {
                expected: secret.len(),
                actual: guess.len(),
            });
        }

        let exact = secret
            .colors()
            .iter()
            .zip(guess.colors())
            .filter(|(s, g)| s == g)
            .count();

        let secret_counts = secret.color_counts();
        let guess_counts = guess.color_counts();

        // Colors missing from either side contribute min(n, 0) = 0
        let overlap: usize = secret_counts
            .iter()
            .map(|(id, &n)| n.min(guess_counts.get(id).copied().unwrap_or(0)))
            .sum();

        Ok(Self {
            exact,
            partial: overlap.saturating_sub(exact),
        })
    }

    /// Render as key pegs: `●` exact, `○` partial, `·` for the rest
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Feedback;
    ///
    /// assert_eq!(Feedback::new(2, 1).to_pegs(4), "●●○·");
    /// ```
    #[must_use]
    pub fn to_pegs(self, length: usize) -> String {
        let misses = length.saturating_sub(self.total());
        let mut result = String::with_capacity(length * 3);
        result.extend(std::iter::repeat_n('●', self.exact));
        result.extend(std::iter::repeat_n('○', self.partial));
        result.extend(std::iter::repeat_n('·', misses));
        result
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} exact, {} partial", self.exact, self.partial)
    }
}
