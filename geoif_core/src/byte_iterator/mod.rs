//! Byte-level iteration over text input and the small parsing helpers built on it.

mod basics;
mod iterator;

pub use basics::*;
pub use iterator::*;
