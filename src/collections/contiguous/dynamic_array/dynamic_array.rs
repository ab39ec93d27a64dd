use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::collections::contiguous::RawArray;
#[doc(inline)]
pub use crate::util::error::{AllocationError, CapacityOverflow, IndexOutOfBounds};
use crate::util::fmt::DebugIter;

/// The capacity that an empty allocation grows to on its first append.
const MIN_GROWTH_CAP: usize = 1;

const GROWTH_FACTOR: usize = 2;

/// A growable, contiguous sequence of elements of type `T`, held in a single allocation.
///
/// DynamicArray dereferences to `[T]`, so it can be indexed, sliced and iterated directly, just like
/// a pointer to its first element. The size of every element, [`element_size`], is fixed by `T`.
///
/// All operations that may allocate return an [`AllocationError`] on failure rather than aborting,
/// and leave the DynamicArray as it was. Any operation that reallocates invalidates references into
/// the old storage, which the borrow checker enforces by requiring `&mut self`.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DynamicArray.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `length` | `O(1)` |
/// | `capacity` | `O(1)` |
/// | `append` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `resize` | `O(n)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `map` | `O(n)` |
/// | `find` | `O(n)` |
///
/// \* If the DynamicArray is full, `append` first doubles the capacity, which takes `O(n)`.
///
/// \** If the DynamicArray has enough capacity for the additional items already, `reserve` is
/// `O(1)`.
///
/// [`element_size`]: DynamicArray::element_size
pub struct DynamicArray<T> {
    pub(crate) buf: RawArray<T>,
    pub(crate) len: usize,
}

impl<T> DynamicArray<T> {
    /// Creates a new DynamicArray with length and capacity 0. Memory will be allocated by the first
    /// append.
    ///
    /// # Examples
    /// ```
    /// # use slh::collections::contiguous::DynamicArray;
    /// let arr: DynamicArray<u8> = DynamicArray::new();
    /// assert_eq!(arr.length(), 0);
    /// assert_eq!(arr.capacity(), 0);
    /// ```
    pub const fn new() -> DynamicArray<T> {
        DynamicArray {
            buf: RawArray::new(),
            len: 0,
        }
    }

    /// Creates a new DynamicArray with capacity exactly equal to the provided value, allowing
    /// values to be added without reallocation. A capacity of 0 is valid and doesn't allocate.
    ///
    /// # Errors
    /// Returns an [`AllocationError`] if the allocation can't be made.
    ///
    /// # Examples
    /// ```
    /// # use slh::collections::contiguous::DynamicArray;
    /// let arr: DynamicArray<u32> = DynamicArray::create(10).unwrap();
    /// assert_eq!(arr.capacity(), 10);
    /// assert_eq!(arr.length(), 0);
    /// ```
    pub fn create(cap: usize) -> Result<DynamicArray<T>, AllocationError> {
        Ok(DynamicArray {
            buf: RawArray::try_with_cap(cap)?,
            len: 0,
        })
    }

    /// Returns the number of elements the DynamicArray can hold without reallocating.
    pub const fn capacity(&self) -> usize {
        self.buf.cap()
    }

    /// Returns the number of live elements in the DynamicArray.
    pub const fn length(&self) -> usize {
        self.len
    }

    /// Returns the size in bytes of a single element.
    pub const fn element_size(&self) -> usize {
        size_of::<T>()
    }

    /// Reallocates the DynamicArray to hold exactly `new_cap` elements.
    ///
    /// When shrinking below the current length, the length is clamped to `new_cap` and the
    /// elements past it are dropped, so the length never exceeds the capacity.
    ///
    /// # Errors
    /// Returns an [`AllocationError`] if the reallocation fails. The capacity is then unchanged,
    /// though a shrink will already have dropped the elements that didn't fit.
    ///
    /// # Examples
    /// ```
    /// # use slh::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::create(2).unwrap();
    /// for i in 0..5 {
    ///     arr.append(i).unwrap();
    /// }
    /// arr.resize(3).unwrap();
    /// assert_eq!(arr.capacity(), 3);
    /// assert_eq!(&*arr, &[0, 1, 2]);
    /// ```
    pub fn resize(&mut self, new_cap: usize) -> Result<(), AllocationError> {
        if new_cap < self.len {
            self.truncate(new_cap);
        }
        self.buf.try_realloc(new_cap)
    }

    /// Ensures that the DynamicArray has capacity to hold an additional `extra` elements.
    ///
    /// # Errors
    /// Returns an [`AllocationError`] if `len + extra` overflows or the reallocation fails.
    pub fn reserve(&mut self, extra: usize) -> Result<(), AllocationError> {
        let new_cap = self.len.checked_add(extra).ok_or(CapacityOverflow)?;

        if new_cap <= self.capacity() {
            return Ok(());
        }

        self.buf.try_realloc(new_cap)
    }

    /// Returns a reference to the element at `index`, or [`None`] if it is out of bounds.
    pub fn at(&self, index: usize) -> Option<&T> {
        self.deref().get(index)
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if it is out of bounds.
    pub fn at_mut(&mut self, index: usize) -> Option<&mut T> {
        self.deref_mut().get_mut(index)
    }

    /// Returns a reference to the element at `index`, returning an [`Err`] with the length of the
    /// DynamicArray if it is out of bounds.
    pub fn try_at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.at(index).ok_or(IndexOutOfBounds {
            index,
            len: self.len,
        })
    }

    /// Appends `value` to the end of the DynamicArray, growing it first if it is full. Growth
    /// doubles the capacity, except that an empty allocation grows to a capacity of 1.
    ///
    /// # Errors
    /// Returns an [`AllocationError`] if the DynamicArray needs to grow and can't. The DynamicArray
    /// is left unchanged and `value` is dropped.
    ///
    /// # Examples
    /// ```
    /// # use slh::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::new();
    /// for i in 0..=5 {
    ///     arr.append(i).unwrap();
    /// }
    /// assert_eq!(&*arr, &[0, 1, 2, 3, 4, 5]);
    /// assert_eq!(arr.capacity(), 8);
    /// ```
    pub fn append(&mut self, value: T) -> Result<(), AllocationError> {
        if self.len == self.capacity() {
            self.grow()?;
        }

        // SAFETY: The capacity has just been adjusted to support the addition of the new item, so
        // the slot at len is allocated and uninitialized.
        unsafe { self.buf.as_ptr().add(self.len).write(value) };
        self.len += 1;
        Ok(())
    }

    /// Removes the last element and returns it, if the DynamicArray isn't empty.
    pub fn pop(&mut self) -> Option<T> {
        self.len = self.len.checked_sub(1)?;

        // SAFETY: len has just been decremented, so it indexes the last initialized value, which
        // is read out and then forgotten about by excluding it from the live range.
        Some(unsafe { self.buf.as_ptr().add(self.len).read() })
    }

    /// Drops every element, keeping the capacity.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Invokes `visit` on every element in index order, allowing each to be modified in place.
    pub fn map<F>(&mut self, mut visit: F)
    where
        F: FnMut(&mut T),
    {
        for element in self.iter_mut() {
            visit(element);
        }
    }

    /// Releases the DynamicArray and all of its elements.
    pub fn free(self) {
        drop(self);
    }

    /// Grows the allocation so that at least one more element fits.
    ///
    /// # Errors
    /// Returns an [`AllocationError`] if doubling overflows or the reallocation fails.
    pub(crate) fn grow(&mut self) -> Result<(), AllocationError> {
        let new_cap = match self.capacity() {
            0 => MIN_GROWTH_CAP,
            cap => cap.checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow)?,
        };
        self.buf.try_realloc(new_cap)
    }

    /// Drops all elements at or past `new_len`.
    pub(crate) fn truncate(&mut self, new_len: usize) {
        let Some(count) = self.len.checked_sub(new_len) else { return };

        // Shorten first so that a panicking drop can't cause a double drop.
        self.len = new_len;
        // SAFETY: The count slots starting at new_len were initialized and are no longer part of
        // the live range, so they are dropped exactly once.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.as_ptr().add(new_len),
                count,
            ));
        }
    }
}

impl<T: Eq> DynamicArray<T> {
    /// Returns the lowest index holding an element equal to `value`, or [`None`] if there isn't
    /// one.
    ///
    /// # Examples
    /// ```
    /// # use slh::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::new();
    /// for i in 0..10_i32 {
    ///     arr.append(i * i).unwrap();
    /// }
    /// assert_eq!(arr.find(&16), Some(4));
    /// assert_eq!(arr.find(&999), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<usize> {
        self.iter().position(|element| element == value)
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        self.truncate(0);

        // Implicitly drop self.buf, which only deallocates.
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The first len slots are initialized. The pointer is non-null and properly
        // aligned, even when nothing is allocated, and the borrow checker prevents mutation for
        // the lifetime of the slice.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: The first len slots are initialized. The pointer is non-null and properly
        // aligned, even when nothing is allocated, and the borrow checker prevents any other
        // access for the lifetime of the slice.
        unsafe { slice::from_raw_parts_mut(self.buf.as_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for DynamicArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for DynamicArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("contents", &DebugIter::new(self.iter()))
            .field("len", &self.len)
            .field("cap", &self.capacity())
            .finish()
    }
}
