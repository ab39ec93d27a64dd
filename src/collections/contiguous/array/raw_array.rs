use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::util::error::{AllocationError, CapacityOverflow, OutOfMemory};

/// A single heap allocation with room for `cap` values of `T`, none of which are assumed to be
/// initialized. Tracking which slots hold live values is left to the owner.
///
/// Every allocating method is fallible: allocator failure and oversized layouts are reported as an
/// [`AllocationError`] and leave the existing allocation untouched.
pub struct RawArray<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) cap: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> RawArray<T> {
    /// Creates a RawArray with capacity 0, without allocating.
    pub const fn new() -> RawArray<T> {
        RawArray {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Allocates room for exactly `cap` values.
    ///
    /// # Errors
    /// Returns an [`AllocationError`] if the layout for `cap` values exceeds [`isize::MAX`] bytes
    /// or the allocator fails.
    pub fn try_with_cap(cap: usize) -> Result<RawArray<T>, AllocationError> {
        let mut arr = RawArray::new();
        arr.try_realloc(cap)?;
        Ok(arr)
    }

    /// Like [`try_with_cap`](RawArray::try_with_cap), except that every byte of the allocation is
    /// zeroed.
    ///
    /// # Errors
    /// Returns an [`AllocationError`] if the layout for `cap` values exceeds [`isize::MAX`] bytes
    /// or the allocator fails.
    pub fn try_with_cap_zeroed(cap: usize) -> Result<RawArray<T>, AllocationError> {
        let layout = RawArray::<T>::make_layout(cap)?;
        let ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            // SAFETY: Zero-sized layouts are guarded against.
            let raw = unsafe { alloc::alloc_zeroed(layout) }.cast::<T>();
            NonNull::new(raw).ok_or(OutOfMemory)?
        };

        Ok(RawArray {
            ptr,
            cap,
            _phantom: PhantomData,
        })
    }

    /// Returns the number of values the allocation has room for.
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Returns a pointer to the first slot. Dangling, but aligned, when nothing is allocated.
    pub const fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Reallocates so that there is room for exactly `new_cap` values. The first
    /// `min(cap, new_cap)` slots keep their contents, any new slots are uninitialized.
    ///
    /// Slots beyond `new_cap` are released without being dropped, so the owner must drop any live
    /// values in them first.
    ///
    /// # Errors
    /// Returns an [`AllocationError`] if the new layout exceeds [`isize::MAX`] bytes or the
    /// allocator fails. In either case the existing allocation and capacity are unchanged.
    pub fn try_realloc(&mut self, new_cap: usize) -> Result<(), AllocationError> {
        if new_cap == self.cap {
            return Ok(());
        }

        let old_layout = RawArray::<T>::make_layout(self.cap)?;
        let new_layout = RawArray::<T>::make_layout(new_cap)?;

        let new_ptr = match (old_layout.size(), new_layout.size()) {
            (0, 0) => {
                // Nothing is ever allocated for zero-sized types, only the capacity changes.
                self.ptr
            },
            (0, _) => {
                // SAFETY: The new layout has a non-zero size.
                let raw = unsafe { alloc::alloc(new_layout) }.cast::<T>();
                NonNull::new(raw).ok_or(OutOfMemory)?
            },
            (_, 0) => {
                // SAFETY: ptr was allocated by the global allocator with old_layout.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), old_layout) };
                NonNull::dangling()
            },
            (_, new_size) => {
                // SAFETY: ptr was allocated by the global allocator with old_layout, and new_size
                // is non-zero and no greater than isize::MAX once rounded up to the alignment,
                // which make_layout has checked.
                let raw = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_size)
                }.cast::<T>();
                NonNull::new(raw).ok_or(OutOfMemory)?
            },
        };

        self.ptr = new_ptr;
        self.cap = new_cap;
        Ok(())
    }

    /// A helper function to create a [`Layout`] for `cap` values of `T`.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the layout's size would exceed [`isize::MAX`].
    pub(crate) fn make_layout(cap: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<T>(cap).map_err(|_| CapacityOverflow)
    }
}

impl<T> Default for RawArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawArray<T> {
    fn drop(&mut self) {
        // The layout was valid when the allocation was made, so it's still valid now.
        match RawArray::<T>::make_layout(self.cap) {
            Ok(layout) if layout.size() != 0 => {
                // SAFETY: ptr is always allocated in the global allocator and layout is the same
                // as when allocated. Zero-sized layouts aren't allocated and are guarded against
                // deallocation.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
            },
            _ => {},
        }
    }
}

impl<T> Debug for RawArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawArray")
            .field("ptr", &self.ptr)
            .field("cap", &self.cap)
            .finish()
    }
}

// SAFETY: RawArray uniquely owns its allocation, so it can be sent between threads when T: Send.
unsafe impl<T: Send> Send for RawArray<T> {}
// SAFETY: RawArray provides no interior mutability, so sharing it is safe when T: Sync.
unsafe impl<T: Sync> Sync for RawArray<T> {}
