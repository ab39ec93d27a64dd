//! The container primitives that solutions are built from.
//!
//! # Purpose
//! Solutions tend to need two things: a list of integers that can be grown at either end and sorted,
//! and a growable contiguous buffer of arbitrary elements. [`linked::LinkedList`] and
//! [`contiguous::DynamicArray`] cover those, and nothing more.
//!
//! # Method
//! Every operation that needs memory reports failure through a [`Result`] carrying an
//! [`AllocationError`](crate::AllocationError) instead of aborting the process, and every lookup
//! reports a miss through [`None`]. Nothing in here panics or logs.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;
