//! Error types for growable array allocation.
//!
//! Only allocation can fail. Out-of-range reads are reported as `None` and
//! out-of-range writes are ignored, so neither appears here.

use core::alloc::Layout;

use thiserror::Error;

/// Failure to obtain memory for the array's buffer.
///
/// Returned by the constructors and by operations that may grow the buffer.
/// The array is left exactly as it was before the failing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AllocationError {
    /// The requested element count has no valid byte layout, or growing the
    /// current capacity would overflow `usize`.
    #[error("capacity overflow: cannot lay out {requested} elements")]
    CapacityOverflow { requested: usize },

    /// The global allocator refused the request.
    #[error("allocator could not provide {size} bytes (align {align})")]
    Exhausted { size: usize, align: usize },
}

impl AllocationError {
    pub(crate) fn exhausted(layout: Layout) -> Self {
        AllocationError::Exhausted {
            size: layout.size(),
            align: layout.align(),
        }
    }
}
