//! The owned byte buffer that carries a solution's input. See [`SizedBuffer`].

mod sized_buffer;

pub use sized_buffer::*;
