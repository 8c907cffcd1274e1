//! Bounded draw abstraction.
//!
//! The array filler and weighted tables only ever ask for one thing: an
//! integer in `[min, max)`. In production that is a [`SeededGenerator`];
//! in tests a scripted or recording implementation is injected.
//!
//! [`SeededGenerator`]: crate::generator::SeededGenerator

use crate::error::RarityError;

/// Abstraction over a source of bounded pseudo-random integers.
pub trait BoundedRng: Send + Sync {
    /// Draws an integer in `[min, max)`.
    ///
    /// # Errors
    ///
    /// Returns `RarityError::InvalidRange` if `max <= min`.
    fn next_in(&mut self, min: i128, max: i128) -> Result<i128, RarityError>;
}

/// Validates a half-open range, returning its width.
///
/// A width that does not fit in `i128` is reported as `None`; it is always
/// wider than any 64-bit state.
///
/// # Errors
///
/// Returns `RarityError::InvalidRange` if `max <= min`.
pub fn range_width(min: i128, max: i128) -> Result<Option<i128>, RarityError> {
    if max <= min {
        return Err(RarityError::InvalidRange { min, max });
    }
    Ok(max.checked_sub(min))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_width_of_valid_range() {
        assert_eq!(range_width(0, 1000), Ok(Some(1000)));
        assert_eq!(range_width(-5, 5), Ok(Some(10)));
    }

    #[test]
    fn test_range_width_rejects_empty_and_inverted_ranges() {
        assert_eq!(
            range_width(3, 3),
            Err(RarityError::InvalidRange { min: 3, max: 3 })
        );
        assert_eq!(
            range_width(10, -10),
            Err(RarityError::InvalidRange { min: 10, max: -10 })
        );
    }

    #[test]
    fn test_range_width_overflow_is_unbounded() {
        assert_eq!(range_width(i128::MIN, i128::MAX), Ok(None));
    }
}
