//! Construction options for [`GrowableArray`](crate::GrowableArray).

use crate::growth::{BASE_CAPACITY, DEFAULT_GROWTH_FACTOR};

/// Configuration applied when constructing an array.
///
/// # Example
///
/// ```
/// use growlist_core::{ArrayOptions, GrowableArray};
///
/// let options = ArrayOptions::default()
///     .with_initial_capacity(16)
///     .with_growth_factor(1.5);
/// let list = GrowableArray::<u8>::with_options(options).unwrap();
/// assert_eq!(list.capacity(), 16);
/// assert_eq!(list.growth_factor(), 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrayOptions {
    /// Requested number of slots. Values below [`BASE_CAPACITY`] are raised to it.
    pub initial_capacity: usize,
    /// Capacity multiplier, validated like
    /// [`GrowableArray::set_growth_factor`](crate::GrowableArray::set_growth_factor).
    pub growth_factor: f64,
}

impl ArrayOptions {
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_growth_factor(mut self, growth_factor: f64) -> Self {
        self.growth_factor = growth_factor;
        self
    }
}

impl Default for ArrayOptions {
    fn default() -> Self {
        Self {
            initial_capacity: BASE_CAPACITY,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}
