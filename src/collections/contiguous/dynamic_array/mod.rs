//! A module containing [`DynamicArray`]. Borrowed iteration is provided by [`std::slice`] through
//! `Deref<Target = [T]>`.
//!
//! [`DynamicArray`] is also re-exported under the parent module.

mod dynamic_array;
mod tests;

pub use dynamic_array::*;
