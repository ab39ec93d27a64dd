use std::ffi::CStr;
use std::io;
use std::mem::MaybeUninit;

use libc::{c_int, stat as Stat};

/// The parts of `fstat` output that reading a file needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Metadata {
    pub size: usize,
    pub is_dir: bool,
}

/// An owned file descriptor, closed on drop.
#[derive(Debug)]
pub(crate) struct Fd(pub c_int);

impl Fd {
    /// Opens `pathname` read-only, retrying if interrupted by a signal.
    pub fn open_read_only(pathname: &CStr) -> Result<Fd, c_int> {
        loop {
            // SAFETY: pathname is a valid, NUL-terminated C string for the duration of the call.
            match unsafe { libc::open(pathname.as_ptr(), libc::O_RDONLY | libc::O_CLOEXEC) } {
                -1 => match err_no() {
                    libc::EINTR => continue,
                    e => return Err(e),
                },
                fd => return Ok(Fd(fd)),
            }
        }
    }

    pub fn metadata(&self) -> Result<Metadata, c_int> {
        let mut raw_meta: MaybeUninit<Stat> = MaybeUninit::uninit();
        // SAFETY: raw_meta is valid for writes of a stat struct and self.0 is an open descriptor.
        if unsafe { libc::fstat(self.0, raw_meta.as_mut_ptr()) } == -1 {
            return Err(err_no());
        }
        // SAFETY: fstat initializes raw_meta whenever it doesn't return an error.
        let raw = unsafe { raw_meta.assume_init() };

        Ok(Metadata {
            // Negative sizes aren't produced for regular files, treat them as empty.
            size: usize::try_from(raw.st_size).unwrap_or(0),
            is_dir: raw.st_mode & libc::S_IFMT == libc::S_IFDIR,
        })
    }

    /// Reads up to `buf.len()` bytes, returning how many were read. Zero means end of file.
    pub fn read(&self, buf: &mut [u8]) -> Result<usize, c_int> {
        loop {
            // SAFETY: buf is valid for writes of buf.len() bytes.
            match unsafe { libc::read(self.0, buf.as_mut_ptr().cast(), buf.len()) } {
                -1 => match err_no() {
                    libc::EINTR => continue,
                    e => return Err(e),
                },
                count => return Ok(count.unsigned_abs()),
            }
        }
    }
}

impl Drop for Fd {
    fn drop(&mut self) {
        // Nothing was written through this descriptor, so a failed close loses nothing.
        // SAFETY: self.0 is owned by this Fd and isn't used again.
        unsafe { libc::close(self.0) };
    }
}

pub(crate) fn err_no() -> c_int {
    io::Error::last_os_error().raw_os_error().unwrap_or(0)
}
