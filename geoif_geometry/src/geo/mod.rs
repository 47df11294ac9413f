#![allow(clippy::module_inception)]

mod geometry;
mod interface;
#[cfg(feature = "geo-types")]
mod interop;
mod types;

pub use geometry::*;
pub use interface::*;
pub use types::*;
