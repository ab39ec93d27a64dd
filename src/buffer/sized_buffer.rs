use std::fmt::{self, Debug, Formatter};
use std::ops::{Deref, DerefMut};
use std::slice;
use std::str::{self, Lines, Utf8Error};

use crate::collections::contiguous::RawArray;
use crate::util::error::AllocationError;

/// An owned, fixed-size run of bytes.
///
/// A buffer with a size of zero doubles as the failure value: [`SizedBuffer::create`] returns it
/// when the allocation can't be made, and code receiving input should treat an empty buffer as
/// having nothing to work with.
pub struct SizedBuffer {
    buf: RawArray<u8>,
    size: usize,
}

impl SizedBuffer {
    /// Creates a buffer with no bytes and no allocation.
    pub const fn empty() -> SizedBuffer {
        SizedBuffer {
            buf: RawArray::new(),
            size: 0,
        }
    }

    /// Allocates a buffer of `size` zeroed bytes, or returns the empty buffer if that isn't
    /// possible.
    pub fn create(size: usize) -> SizedBuffer {
        SizedBuffer::try_create(size).unwrap_or_else(|_| SizedBuffer::empty())
    }

    /// Allocates a buffer of `size` zeroed bytes.
    ///
    /// # Errors
    /// Returns an [`AllocationError`] if the buffer can't be allocated.
    pub fn try_create(size: usize) -> Result<SizedBuffer, AllocationError> {
        Ok(SizedBuffer {
            buf: RawArray::try_with_cap_zeroed(size)?,
            size,
        })
    }

    /// Allocates a buffer holding a copy of `bytes`.
    ///
    /// # Errors
    /// Returns an [`AllocationError`] if the buffer can't be allocated.
    pub fn try_from_bytes(bytes: &[u8]) -> Result<SizedBuffer, AllocationError> {
        let mut buffer = SizedBuffer::try_create(bytes.len())?;
        buffer.copy_from_slice(bytes);
        Ok(buffer)
    }

    /// Returns the number of bytes in the buffer.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the buffer holds no bytes.
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Interprets the buffer as UTF-8 text.
    ///
    /// # Errors
    /// Returns a [`Utf8Error`] if the bytes aren't valid UTF-8.
    pub fn as_str(&self) -> Result<&str, Utf8Error> {
        str::from_utf8(self)
    }

    /// Interprets the buffer as UTF-8 text and splits it into lines.
    ///
    /// # Errors
    /// Returns a [`Utf8Error`] if the bytes aren't valid UTF-8.
    pub fn lines(&self) -> Result<Lines<'_>, Utf8Error> {
        Ok(self.as_str()?.lines())
    }

    /// Forgets any bytes past `size`, leaving the allocation as is. Used when fewer bytes arrive
    /// than were allocated for.
    pub(crate) fn truncate(&mut self, size: usize) {
        self.size = self.size.min(size);
    }
}

impl Default for SizedBuffer {
    fn default() -> Self {
        Self::empty()
    }
}

impl Deref for SizedBuffer {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The allocation holds at least size zero-initialized or written bytes, and the
        // pointer is aligned and non-null even when nothing is allocated.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.size) }
    }
}

impl DerefMut for SizedBuffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, with exclusive access guaranteed by &mut self.
        unsafe { slice::from_raw_parts_mut(self.buf.as_ptr(), self.size) }
    }
}

impl PartialEq for SizedBuffer {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl Eq for SizedBuffer {}

impl Debug for SizedBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SizedBuffer")
            .field("size", &self.size)
            .field("contents", &String::from_utf8_lossy(self))
            .finish()
    }
}
