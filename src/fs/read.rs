use std::ffi::CString;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use super::{Fd, InvalidPathError, IsDirectoryError, ReadError};
use crate::buffer::SizedBuffer;

/// Reads the entire file at `path` into a new [`SizedBuffer`].
///
/// The buffer is sized from the file's metadata and filled by repeated reads until that many bytes
/// have arrived or the file ends early. An empty file produces an empty buffer.
///
/// # Errors
/// Returns a [`ReadError`] if the path can't be converted, the file can't be opened or read, it
/// is a directory, or the buffer can't be allocated.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<SizedBuffer, ReadError> {
    let pathname = CString::new(path.as_ref().as_os_str().as_bytes())
        .map_err(|_| InvalidPathError)?;

    let fd = Fd::open_read_only(&pathname).map_err(ReadError::from_errno)?;
    let metadata = fd.metadata().map_err(ReadError::from_errno)?;
    if metadata.is_dir {
        return Err(IsDirectoryError.into());
    }

    let mut buffer = SizedBuffer::try_create(metadata.size)?;

    let mut filled = 0;
    while filled < buffer.size() {
        match fd.read(&mut buffer[filled..]).map_err(ReadError::from_errno)? {
            0 => break,
            count => filled += count,
        }
    }
    buffer.truncate(filled);

    Ok(buffer)
}
