// This module defines the concrete geometry types of the crate: `Point`, the line-based
// `LineString` and `LinearRing`, `Polygon`, their multi-geometry counterparts and the
// heterogeneous `GeometryCollection`. All of them implement `GeometryTrait` and
// `HasGeoInterface`, and can be built back from an interchange mapping through
// `FromGeoInterface`.

mod collection;
mod coordinates;
mod linestring;
mod macros;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod ring;
mod sequence;
mod traits;

pub use collection::*;
pub use coordinates::*;
pub use linestring::*;
pub use multi_linestring::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use ring::*;
pub use sequence::*;
pub use traits::*;
