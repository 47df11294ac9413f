use super::{CompositeGeometryTrait, Coordinates, FromGeoInterface, GeometryTrait, HasGeoInterface, write_tuple};
use crate::{GeoInterface, Geometry, math};
use anyhow::Result;
use std::fmt::Debug;

/// A heterogeneous, ordered collection of geometries.
///
/// Members may differ in type and dimensionality.
#[derive(Clone, Default, PartialEq)]
pub struct GeometryCollection(Vec<Geometry>);

impl GeometryCollection {
	#[must_use]
	pub fn new(geometries: Vec<Geometry>) -> Self {
		Self(geometries)
	}

	pub fn push(&mut self, geometry: impl Into<Geometry>) {
		self.0.push(geometry.into());
	}
}

impl GeometryTrait for GeometryCollection {
	fn geometry_type(&self) -> &'static str {
		Self::GEOMETRY_TYPE
	}

	fn has_z(&self) -> bool {
		self.0.iter().any(GeometryTrait::has_z)
	}

	fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	fn flat_coords(&self) -> Vec<&Coordinates> {
		self.0.iter().flat_map(GeometryTrait::flat_coords).collect()
	}

	fn bounds(&self) -> Option<[f64; 4]> {
		math::merge_bounds(self.0.iter().map(GeometryTrait::bounds))
	}

	/// Members are written as complete WKT, e.g. `POINT (0 0), LINESTRING (0 0, 1 1)`.
	fn wkt_coords(&self, precision: Option<u8>) -> String {
		self.0.iter().map(|g| g.to_wkt(precision)).collect::<Vec<_>>().join(", ")
	}

	fn wkt_inset(&self) -> &'static str {
		" "
	}
}

impl HasGeoInterface for GeometryCollection {
	/// Uses a `geometries` list instead of `coordinates`.
	fn geo_interface(&self) -> GeoInterface {
		GeoInterface::new_collection(self.0.iter().map(HasGeoInterface::geo_interface).collect()).with_bbox(self.bounds())
	}
}

impl FromGeoInterface for GeometryCollection {
	const GEOMETRY_TYPE: &'static str = "GeometryCollection";

	fn from_mapping(dict: &GeoInterface) -> Result<Self> {
		let geometries = dict
			.geometries()?
			.iter()
			.map(Geometry::from_dict)
			.collect::<Result<Vec<_>>>()?;
		Ok(Self(geometries))
	}
}

impl CompositeGeometryTrait<Geometry> for GeometryCollection {
	fn as_slice(&self) -> &[Geometry] {
		&self.0
	}

	fn into_inner(self) -> Vec<Geometry> {
		self.0
	}
}

impl Debug for GeometryCollection {
	/// `GeometryCollection((Point(0, 0), LineString(((0, 0), (1, 1)))))`
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str("GeometryCollection(")?;
		write_tuple(f, self.0.iter())?;
		f.write_str(")")
	}
}

impl FromIterator<Geometry> for GeometryCollection {
	fn from_iter<I: IntoIterator<Item = Geometry>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

crate::impl_geo_interface_eq!(GeometryCollection);
