#![allow(unsafe_code)]

//! The growable array itself.
//!
//! `GrowableArray<T>` keeps three pieces of state next to its buffer:
//!
//! - `len`: how many slots, from the front, hold initialized values
//! - `capacity`: how many slots the buffer has (tracked by the raw buffer)
//! - `growth`: the multiplier used when an append finds the buffer full
//!
//! ```text
//! buf ──▶ [ v0 | v1 | v2 | ·· | ·· ]
//!          └── len = 3 ──┘
//!          └──────── capacity = 5 ────┘
//! ```
//!
//! Slots past `len` are allocated but never read through the public API,
//! even when they still hold the bytes of a popped value.

use core::{fmt, ptr};

use crate::error::AllocationError;
use crate::growth::{BASE_CAPACITY, GrowthFactor};
use crate::options::ArrayOptions;
use crate::raw::RawBuffer;

/// A contiguous, growable array with stack-like removal.
///
/// Lookups return `Option` instead of panicking, writes past the logical end
/// are ignored, and only allocation can fail.
///
/// Dropping the array drops its live elements and releases the buffer.
///
/// # Example
///
/// ```
/// use growlist_core::GrowableArray;
///
/// let mut list = GrowableArray::with_capacity(0).unwrap();
/// assert_eq!(list.capacity(), 4);
///
/// list.append(1).unwrap();
/// list.append(2).unwrap();
/// list.append(3).unwrap();
///
/// list.set(2, 99);
/// list.set(5, 100); // out of range: ignored
/// assert_eq!(list.as_slice(), &[1, 2, 99]);
/// ```
pub struct GrowableArray<T> {
    buf: RawBuffer<T>,
    len: usize,
    growth: GrowthFactor,
}

#[cfg(target_pointer_width = "64")]
static_assertions::assert_eq_size!(GrowableArray<u8>, [usize; 4]);
static_assertions::assert_eq_size!(Option<GrowableArray<u8>>, GrowableArray<u8>);

impl<T> GrowableArray<T> {
    /// Creates an empty array with [`BASE_CAPACITY`] slots and the default
    /// growth factor.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError`] if the buffer cannot be allocated.
    pub fn new() -> Result<Self, AllocationError> {
        Self::with_options(ArrayOptions::default())
    }

    /// Creates an empty array with room for at least `capacity` elements.
    ///
    /// Capacities below [`BASE_CAPACITY`], including zero, are raised to it.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError::CapacityOverflow`] if `capacity` elements do
    /// not fit in the address space, or [`AllocationError::Exhausted`] if the
    /// allocator refuses the request.
    pub fn with_capacity(capacity: usize) -> Result<Self, AllocationError> {
        Self::with_options(ArrayOptions::default().with_initial_capacity(capacity))
    }

    /// Creates an empty array from explicit options.
    ///
    /// An invalid growth factor is replaced by the default, exactly as
    /// [`set_growth_factor`](Self::set_growth_factor) would do.
    pub fn with_options(options: ArrayOptions) -> Result<Self, AllocationError> {
        let capacity = options.initial_capacity.max(BASE_CAPACITY);
        let buf = RawBuffer::allocate(capacity)?;
        tracing::trace!(capacity, "allocated growable array");

        let mut array = Self {
            buf,
            len: 0,
            growth: GrowthFactor::default(),
        };
        array.set_growth_factor(options.growth_factor);
        Ok(array)
    }

    /// Number of initialized elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array holds no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements the current buffer can hold without growing.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// The multiplier applied to the capacity on the next growth.
    #[inline]
    pub fn growth_factor(&self) -> f64 {
        self.growth.get()
    }

    /// Changes the multiplier used by subsequent growths.
    ///
    /// Non-positive, NaN, and infinite rates are rejected and the default of
    /// `2.0` is stored instead, so the previous factor is never kept around by
    /// accident.
    ///
    /// ```
    /// use growlist_core::GrowableArray;
    ///
    /// let mut list = GrowableArray::<i32>::new().unwrap();
    /// list.set_growth_factor(3.0);
    /// assert_eq!(list.growth_factor(), 3.0);
    ///
    /// list.set_growth_factor(-1.0);
    /// assert_eq!(list.growth_factor(), 2.0);
    /// ```
    pub fn set_growth_factor(&mut self, rate: f64) {
        self.growth = GrowthFactor::new(rate).unwrap_or_else(|| {
            tracing::warn!(rate, "rejected growth factor, using default");
            GrowthFactor::default()
        });
    }

    /// Returns the element at `index`, or `None` if `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Mutable counterpart of [`get`](Self::get).
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Overwrites the element at `index`.
    ///
    /// Does nothing when `index >= len()`: `set` never grows the array and
    /// never writes past the logical end. Use [`append`](Self::append) to add
    /// elements. The replaced value (or `value` itself, when ignored) is
    /// dropped as usual.
    pub fn set(&mut self, index: usize, value: T) {
        if let Some(slot) = self.get_mut(index) {
            *slot = value;
        }
    }

    /// Returns the last element without removing it.
    #[inline]
    pub fn top(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Removes the last element and returns it, or `None` if the array is empty.
    ///
    /// The vacated slot is not cleared. It simply falls outside `len()` and is
    /// overwritten by the next append.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: the slot at the old `len - 1` was initialized. Having shrunk
        // `len` first, the value is read out exactly once and never dropped in place.
        Some(unsafe { ptr::read(self.buf.ptr().add(self.len)) })
    }

    /// Adds `value` at the end, growing the buffer first if it is full.
    ///
    /// Growth costs O(len) but happens geometrically rarely, so appends are
    /// amortized O(1).
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError`] if the buffer had to grow and could not.
    /// The array is unchanged in that case and `value` is dropped.
    pub fn append(&mut self, value: T) -> Result<(), AllocationError> {
        if self.len == self.buf.capacity() {
            self.grow(1)?;
        }
        // SAFETY: `len < capacity` holds here, so the slot is inside the
        // allocation and currently uninitialized.
        unsafe {
            ptr::write(self.buf.ptr().add(self.len), value);
        }
        self.len += 1;
        Ok(())
    }

    /// Appends a clone of every element of `values`, in order.
    ///
    /// The buffer grows at most once, to the capacity the same sequence of
    /// single appends would have reached.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError`] if the buffer had to grow and could not.
    /// Nothing is appended in that case.
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<(), AllocationError>
    where
        T: Clone,
    {
        if values.len() > self.buf.capacity() - self.len {
            self.grow(values.len())?;
        }
        for value in values {
            // SAFETY: room for all of `values` was reserved above, so the slot
            // at `len` is inside the allocation and uninitialized. `len` moves
            // past each value as soon as it is written.
            unsafe {
                ptr::write(self.buf.ptr().add(self.len), value.clone());
            }
            self.len += 1;
        }
        Ok(())
    }

    /// The initialized elements as a slice.
    ///
    /// This is the bounded view of the buffer: the borrow ties it to the
    /// array, so it cannot outlive a growth or the array itself.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the pointer is non-null and aligned, and `[0, len)` is initialized.
        unsafe { core::slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    /// The initialized elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, and `&mut self` guarantees exclusive access.
        unsafe { core::slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    /// Raw address of the buffer, without transferring ownership.
    ///
    /// The pointer is invalidated by any append that grows the array and by
    /// dropping it. Only the first [`len`](Self::len) elements may be read.
    /// Prefer [`as_slice`](Self::as_slice) unless a flat pointer is required
    /// for interop.
    pub fn as_ptr(&self) -> *const T {
        self.buf.ptr()
    }

    /// Mutable raw address of the buffer. Same rules as [`as_ptr`](Self::as_ptr).
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.ptr()
    }

    /// Grows the buffer until `additional` more elements fit.
    ///
    /// Steps through the growth factor one capacity at a time and relocates
    /// once at the end. On error nothing has changed.
    #[cold]
    #[inline(never)]
    fn grow(&mut self, additional: usize) -> Result<(), AllocationError> {
        // Saturated: the required or scaled capacity does not fit in usize.
        let overflow = AllocationError::CapacityOverflow {
            requested: usize::MAX,
        };
        let required = self.len.checked_add(additional).ok_or(overflow)?;

        let old_capacity = self.buf.capacity();
        let mut new_capacity = old_capacity;
        while new_capacity < required {
            new_capacity = self.growth.next_capacity(new_capacity).ok_or(overflow)?;
        }

        self.buf.relocate(self.len, new_capacity)?;
        tracing::debug!(old_capacity, new_capacity, len = self.len, "grew buffer");
        Ok(())
    }
}

impl<T> Drop for GrowableArray<T> {
    fn drop(&mut self) {
        // SAFETY: `[0, len)` is initialized and dropped exactly once here. The
        // raw buffer then releases the memory without touching the elements.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("growth_factor", &self.growth_factor())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for GrowableArray<T> {
    /// Compares elements only; capacity and growth factor are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowableArray<T> {}

// Same rules as any exclusively owned buffer of `T`.
unsafe impl<T: Send> Send for GrowableArray<T> {}
unsafe impl<T: Sync> Sync for GrowableArray<T> {}

#[cfg(test)]
#[path = "array_test.rs"]
mod array_test;
