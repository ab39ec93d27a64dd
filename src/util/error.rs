use derive_more::{Display, Error, From, IsVariant};

/// An index was outside of the live range of a collection.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// The number of live elements at the time of the request.
    pub len: usize,
}

/// The requested capacity can't be described by a valid allocation layout.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

/// The global allocator couldn't satisfy a request.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Memory allocation failed!")]
pub struct OutOfMemory;

/// Any failure to obtain memory for a node, an array or an array's growth.
#[derive(Debug, Display, Error, From, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum AllocationError {
    /// The size of the allocation would exceed [`isize::MAX`] bytes.
    CapacityOverflow(CapacityOverflow),
    /// The allocator returned a null pointer.
    OutOfMemory(OutOfMemory),
}
