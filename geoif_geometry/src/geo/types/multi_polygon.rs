use super::{
	CompositeGeometryTrait, Coordinates, FromGeoInterface, GeometryTrait, HasGeoInterface, LinearRing, Polygon,
	check_dimensions, write_tuple,
};
use crate::{GeoCoordinates, GeoInterface, math};
use anyhow::Result;
use std::fmt::{self, Debug, Formatter};

/// An ordered collection of polygons of one dimensionality.
#[derive(Clone, Default, PartialEq)]
pub struct MultiPolygon(Vec<Polygon>);

impl MultiPolygon {
	pub fn new(polygons: Vec<Polygon>) -> Result<Self> {
		check_dimensions(
			polygons
				.iter()
				.filter_map(|p| p.exterior().and_then(|ring| ring.sequence().dimension())),
		)?;
		Ok(Self(polygons))
	}

	pub(crate) fn new_unchecked(polygons: Vec<Polygon>) -> Self {
		Self(polygons)
	}

	/// Sum of the member areas.
	#[must_use]
	pub fn area(&self) -> f64 {
		self.0.iter().map(Polygon::area).sum()
	}
}

impl GeometryTrait for MultiPolygon {
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

	fn wkt_coords(&self, precision: Option<u8>) -> String {
		self
			.0
			.iter()
			.map(|polygon| format!("({})", polygon.wkt_coords(precision)))
			.collect::<Vec<_>>()
			.join(", ")
	}

	fn wkt_inset(&self) -> &'static str {
		" "
	}
}

impl HasGeoInterface for MultiPolygon {
	fn geo_interface(&self) -> GeoInterface {
		let coordinates = GeoCoordinates::List(self.0.iter().map(Polygon::to_geo_coordinates).collect());
		GeoInterface::new(Self::GEOMETRY_TYPE, coordinates).with_bbox(self.bounds())
	}
}

impl FromGeoInterface for MultiPolygon {
	const GEOMETRY_TYPE: &'static str = "MultiPolygon";

	fn from_mapping(dict: &GeoInterface) -> Result<Self> {
		let polygons = dict
			.coordinates()?
			.as_list()?
			.iter()
			.map(Polygon::from_geo_coordinates)
			.collect::<Result<Vec<_>>>()?;
		Self::new(polygons)
	}
}

impl CompositeGeometryTrait<Polygon> for MultiPolygon {
	fn as_slice(&self) -> &[Polygon] {
		&self.0
	}

	fn into_inner(self) -> Vec<Polygon> {
		self.0
	}
}

/// A polygon written as a plain tuple of its rings.
struct Rings<'a>(&'a Polygon);

impl Debug for Rings<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write_tuple(f, self.0.iter().map(LinearRing::sequence))
	}
}

impl Debug for MultiPolygon {
	/// Every member is a tuple of rings, exterior first:
	/// `MultiPolygon(((((0, 0), (1, 0), (0, 1), (0, 0)),),))`.
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str("MultiPolygon(")?;
		write_tuple(f, self.0.iter().map(Rings))?;
		f.write_str(")")
	}
}

crate::impl_geo_interface_eq!(MultiPolygon);
