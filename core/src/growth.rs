//! Growth policy for the array's buffer.

/// Smallest capacity a freshly constructed array may have.
///
/// Requests below this (including zero) are silently raised to it, so a new
/// array can always accept a few elements before its first growth.
pub const BASE_CAPACITY: usize = 4;

/// Multiplier applied to the capacity when the buffer is full.
pub const DEFAULT_GROWTH_FACTOR: f64 = 2.0;

/// A validated capacity multiplier.
///
/// Always positive and finite. The array replaces a rejected rate with
/// [`DEFAULT_GROWTH_FACTOR`] rather than keeping its previous factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthFactor(f64);

impl GrowthFactor {
    /// Validates `rate`. Returns `None` for non-positive, NaN and infinite
    /// input; callers substitute [`GrowthFactor::default`].
    pub fn new(rate: f64) -> Option<Self> {
        (rate > 0.0 && rate.is_finite()).then_some(GrowthFactor(rate))
    }

    /// The multiplier as a plain float.
    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }

    /// Capacity to grow to from `current`.
    ///
    /// Computes `floor(current * factor)` but never less than `current + 1`,
    /// so factors close to (or below) one still make progress. Returns `None`
    /// when the result does not fit in `usize`.
    pub fn next_capacity(self, current: usize) -> Option<usize> {
        let scaled = current as f64 * self.0;
        if scaled >= usize::MAX as f64 {
            return None;
        }
        // Truncation is floor for non-negative values.
        let scaled = scaled as usize;
        let minimum = current.checked_add(1)?;
        Some(scaled.max(minimum))
    }
}

impl Default for GrowthFactor {
    fn default() -> Self {
        GrowthFactor(DEFAULT_GROWTH_FACTOR)
    }
}
