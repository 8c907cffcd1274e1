//! Array filling with decorrelation skips.
//!
//! After each stored draw `v`, the filler discards `v % 17` further draws
//! from the same source before moving on. Those discarded draws are part of
//! the output contract: removing them changes every later value.

use tracing::trace;

use crate::error::RarityError;
use crate::rng::BoundedRng;

/// Default lower bound (inclusive) for filling.
pub const DEFAULT_MIN: i128 = 0;
/// Default upper bound (exclusive) for filling.
pub const DEFAULT_MAX: i128 = 100_000;

/// Skip divisor applied to each stored draw.
pub const SKIP_MODULUS: i128 = 17;

/// Fills `values` in place with draws from `[min, max)` and returns it.
///
/// An empty slice returns immediately without touching `rng`, even if the
/// range is invalid. A negative draw yields a non-positive remainder and so
/// no skips.
///
/// # Errors
///
/// Returns `RarityError::InvalidRange` if `values` is non-empty and
/// `max <= min`.
pub fn fill_array<'a, R: BoundedRng + ?Sized>(
    rng: &mut R,
    values: &'a mut [i128],
    min: i128,
    max: i128,
) -> Result<&'a mut [i128], RarityError> {
    if values.is_empty() {
        return Ok(values);
    }

    for slot in &mut *values {
        let value = rng.next_in(min, max)?;
        *slot = value;
        let skip = value % SKIP_MODULUS;
        for _ in 0..skip {
            rng.next_in(min, max)?;
        }
        trace!(value, skip, "filled slot");
    }

    Ok(values)
}
