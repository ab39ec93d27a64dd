//! Contiguous collection types. Revolves around [`DynamicArray`], a growable buffer of uniformly
//! sized elements, built on the fallible [`RawArray`] allocation.

pub mod array;
pub mod dynamic_array;

#[doc(inline)]
pub use array::RawArray;
#[doc(inline)]
pub use dynamic_array::DynamicArray;
