//! Geometry values with a canonical WKT text form, a GeoJSON-like interchange mapping
//! ("geo interface"), bounding boxes and convex hulls.
//!
//! Every concrete shape implements [`GeometryTrait`] and [`HasGeoInterface`]; the
//! [`Geometry`] enum dispatches over all of them. Geometries are built from raw
//! coordinates, from an interchange mapping ([`FromGeoInterface`], [`Geometry::from_dict`]),
//! from any value exposing one ([`Geometry::from_interface`]), or from WKT and the
//! constructor-shaped `Debug` text ([`from_wkt`], [`from_repr`]).

mod error;
mod geo;
pub mod math;
mod text;

pub use error::*;
pub use geo::*;
pub use text::*;
