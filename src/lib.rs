//! growlist - a growable array over a manually managed buffer
//!
//! # Overview
//!
//! [`GrowableArray`] is a contiguous array that owns a single raw allocation
//! and keeps its logical length separate from its physical capacity. It is a
//! small, predictable building block:
//!
//! - Appends grow the buffer by a configurable factor (default `2.0`)
//! - Reads past the end return `None` instead of panicking
//! - Writes past the end are ignored instead of growing
//! - The end of the array works as a stack (`top` / `pop`)
//!
//! # Quick Start
//!
//! ```
//! use growlist::{ArrayOptions, GrowableArray};
//!
//! let options = ArrayOptions::default().with_growth_factor(1.5);
//! let mut list = GrowableArray::with_options(options).unwrap();
//!
//! for value in 1..=6 {
//!     list.append(value).unwrap();
//! }
//!
//! // 4 slots, then floor(4 * 1.5) = 6.
//! assert_eq!(list.capacity(), 6);
//! assert_eq!(list.top(), Some(&6));
//! assert_eq!(list.get(10), None);
//! ```
//!
//! # Errors
//!
//! Only allocation can fail. Constructors, `append` and `extend_from_slice`
//! return [`AllocationError`], and the array is left untouched when they do.
//!
//! # Raw Access
//!
//! [`GrowableArray::as_slice`] is the bounded view of the buffer and should be
//! preferred. [`GrowableArray::as_ptr`] exposes the raw address for interop;
//! it is invalidated by any growth and by dropping the array.

pub use growlist_core::{
    AllocationError, ArrayOptions, BASE_CAPACITY, DEFAULT_GROWTH_FACTOR, GrowableArray,
    GrowthFactor,
};
