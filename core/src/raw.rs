#![allow(unsafe_code)]

//! Owned, uninitialized storage for `GrowableArray`.
//!
//! `RawBuffer<T>` only tracks an allocation and its capacity. It never reads,
//! writes, or drops elements; the array above it is responsible for knowing
//! which slots are initialized.

use core::{alloc::Layout, marker::PhantomData, ptr::NonNull};

use allocator_api2::alloc::{Allocator, Global};

use crate::error::AllocationError;

pub(crate) struct RawBuffer<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

impl<T> RawBuffer<T> {
    /// Allocates room for exactly `cap` elements.
    ///
    /// Zero-sized layouts (`cap == 0` or a zero-sized `T`) never reach the
    /// allocator and use a dangling, well-aligned pointer instead.
    pub(crate) fn allocate(cap: usize) -> Result<Self, AllocationError> {
        let layout = Self::layout(cap)?;
        let ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            Global
                .allocate(layout)
                .map_err(|_| AllocationError::exhausted(layout))?
                .cast::<T>()
        };
        Ok(RawBuffer {
            ptr,
            cap,
            _marker: PhantomData,
        })
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    #[inline(always)]
    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Moves the first `len` elements into a fresh allocation of `new_cap`
    /// slots and releases the old one.
    ///
    /// The new block is fully populated before the old block is freed. If the
    /// allocation fails, `self` is untouched.
    pub(crate) fn relocate(&mut self, len: usize, new_cap: usize) -> Result<(), AllocationError> {
        assert!(len <= self.cap && len <= new_cap);
        let new = Self::allocate(new_cap)?;

        // SAFETY: both blocks hold at least `len` slots, they are distinct
        // allocations, and the caller guarantees `[0, len)` is initialized.
        // The elements are moved bitwise; the old slots are never dropped.
        unsafe {
            core::ptr::copy_nonoverlapping(self.ptr(), new.ptr(), len);
        }

        // Dropping the old buffer only releases its memory.
        *self = new;
        Ok(())
    }

    fn layout(cap: usize) -> Result<Layout, AllocationError> {
        Layout::array::<T>(cap).map_err(|_| AllocationError::CapacityOverflow { requested: cap })
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        // The layout was valid when this buffer was allocated.
        let Ok(layout) = Self::layout(self.cap) else {
            return;
        };
        if layout.size() != 0 {
            // SAFETY: `ptr` was returned by `Global.allocate` with this exact layout.
            unsafe { Global.deallocate(self.ptr.cast(), layout) }
        }
    }
}
