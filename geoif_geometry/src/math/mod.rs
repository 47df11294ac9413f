//! Planar computations shared by the geometry types.

mod area;
mod bounds;
mod convex_hull;

pub use area::*;
pub use bounds::*;
pub use convex_hull::*;
