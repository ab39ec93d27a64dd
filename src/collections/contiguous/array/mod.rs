//! A module containing [`RawArray`], the uninitialized single-allocation storage that backs
//! [`DynamicArray`](super::DynamicArray) and [`SizedBuffer`](crate::buffer::SizedBuffer).

mod raw_array;

pub use raw_array::*;
