//! Whole-file reading for solution input, built on thin `libc` syscall wrappers.
//!
//! The only entry point is [`read_text`], which loads an entire file into a
//! [`SizedBuffer`](crate::buffer::SizedBuffer). Failures are reported through the strongly typed
//! [`ReadError`], never by panicking.
#![cfg(unix)]

mod error;
mod fd;
mod read;

pub use error::*;
pub(crate) use fd::*;
pub use read::*;
