use derive_more::{Display, Error, From, IsVariant};
use libc::c_int;

use crate::util::error::{AllocationError, OutOfMemory};

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("no such file or directory")]
pub struct NotFoundError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("permission denied")]
pub struct PermissionError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("path refers to a directory")]
pub struct IsDirectoryError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("path is invalid")]
pub struct InvalidPathError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("error during I/O")]
pub struct IOError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("unexpected OS error with code: {_0}")]
pub struct UnexpectedError(#[error(not(source))] pub c_int);

/// Everything that can go wrong while reading a file into memory.
#[derive(Debug, Display, Error, From, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum ReadError {
    NotFound(NotFoundError),
    Permission(PermissionError),
    IsDirectory(IsDirectoryError),
    InvalidPath(InvalidPathError),
    IO(IOError),
    Alloc(AllocationError),
    Unexpected(UnexpectedError),
}

impl ReadError {
    /// Interprets an `errno` value from `open`, `fstat` or `read`.
    pub(crate) fn from_errno(errno: c_int) -> ReadError {
        match errno {
            libc::ENOENT | libc::ENOTDIR => NotFoundError.into(),
            libc::EACCES | libc::EPERM => PermissionError.into(),
            libc::EISDIR => IsDirectoryError.into(),
            libc::ENAMETOOLONG | libc::ELOOP => InvalidPathError.into(),
            libc::EIO => IOError.into(),
            libc::ENOMEM => AllocationError::from(OutOfMemory).into(),
            e => UnexpectedError(e).into(),
        }
    }
}
