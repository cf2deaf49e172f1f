#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

//! A growable array over a manually managed raw buffer.
//!
//! [`GrowableArray`] owns one contiguous allocation obtained from the global
//! allocator and keeps its logical length separate from its physical capacity.
//! Appends grow the buffer by a configurable multiplier, lookups past the end
//! return `None`, and the array doubles as a stack through [`GrowableArray::top`]
//! and [`GrowableArray::pop`].
//!
//! # Example
//!
//! ```
//! use growlist_core::{AllocationError, GrowableArray};
//!
//! fn example() -> Result<(), AllocationError> {
//!     let mut list = GrowableArray::new()?;
//!     assert_eq!(list.capacity(), 4);
//!
//!     for value in [10, 20, 30, 40, 50] {
//!         list.append(value)?;
//!     }
//!
//!     assert_eq!(list.capacity(), 8);
//!     assert_eq!(list.get(4), Some(&50));
//!     assert_eq!(list.pop(), Some(50));
//!     assert_eq!(list.top(), Some(&40));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

// This works on std and no_std and is harmless.
extern crate alloc;

pub mod array;
pub mod error;
pub mod growth;
pub mod options;
mod raw;

pub use array::GrowableArray;
pub use error::AllocationError;
pub use growth::{BASE_CAPACITY, DEFAULT_GROWTH_FACTOR, GrowthFactor};
pub use options::ArrayOptions;
