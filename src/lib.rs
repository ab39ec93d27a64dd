//! A small helper library for writing puzzle solutions as standalone programs.
//!
//! # Purpose
//! Every solution needs the same things: somewhere to put a handful of integers, a way to sort
//! them, and the contents of an input file. This crate provides exactly those, plus a driver that
//! turns a single solution function into a complete program.
//!
//! # Contents
//! - [`collections::linked::LinkedList`]: a singly-linked list of `i32` with a stable, in-place
//!   bubble sort that relinks nodes instead of moving values.
//! - [`collections::contiguous::DynamicArray`]: a growable array of any element type, which
//!   doubles its capacity when full.
//! - [`buffer::SizedBuffer`]: an owned byte buffer that knows its own size.
//! - [`fs::read_text`]: reads a whole file into a [`SizedBuffer`](buffer::SizedBuffer).
//! - [`solution`]: parses the command line, reads the input and prints the answer.
//!
//! # Error Handling
//! Nothing here aborts on allocation failure. Every operation that needs memory returns a
//! [`Result`] with an [`AllocationError`], and leaves the container it was called on usable.
//! Errors are strongly typed, using enums for static dispatch rather than dynamic, with structs
//! (often ZSTs) that implement [`Error`](std::error::Error).
//!
//! Lookups that can miss, such as an index past the end, return [`None`] rather than panicking.
//!
//! # Dependencies
//! The [`fs`] module relies on `libc` for its thin syscall wrappers. The [`solution`] driver uses
//! `clap` to parse its arguments and `log` to report what it's doing, leaving the choice of logger
//! to the program. Error types are written with `derive_more`.
//!
//! Each of these is behind a cargo feature, so the collections can be used on their own.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "contiguous")]
pub mod buffer;
#[cfg(feature = "collections")]
pub mod collections;
#[cfg(all(unix, feature = "fs"))]
pub mod fs;
#[cfg(all(unix, feature = "solution"))]
pub mod solution;

pub(crate) mod util;

#[doc(inline)]
pub use util::error::{AllocationError, CapacityOverflow, IndexOutOfBounds, OutOfMemory};
