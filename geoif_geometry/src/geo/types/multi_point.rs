use super::{CompositeGeometryTrait, Coordinates, FromGeoInterface, GeometryTrait, HasGeoInterface, Point, check_dimensions, write_tuple};
use crate::{GeoCoordinates, GeoInterface};
use anyhow::Result;
use std::fmt::Debug;

/// An ordered collection of points of one dimensionality.
#[derive(Clone, Default, PartialEq)]
pub struct MultiPoint(Vec<Point>);

impl MultiPoint {
	/// Fails with [`GeometryError::Dimension`](crate::GeometryError::Dimension) when 2D and 3D
	/// points are mixed.
	pub fn new(points: Vec<Point>) -> Result<Self> {
		check_dimensions(points.iter().map(|p| p.coords().dimension()))?;
		Ok(Self(points))
	}

	pub(crate) fn new_unchecked(points: Vec<Point>) -> Self {
		Self(points)
	}

	/// Creates one point per coordinate tuple.
	pub fn from_coords<C: Into<Coordinates>>(coords: impl IntoIterator<Item = C>) -> Result<Self> {
		let points = coords
			.into_iter()
			.map(Point::try_new)
			.collect::<Result<Vec<_>>>()?;
		Self::new(points)
	}
}

impl GeometryTrait for MultiPoint {
	fn geometry_type(&self) -> &'static str {
		Self::GEOMETRY_TYPE
	}

	fn has_z(&self) -> bool {
		self.0.first().is_some_and(GeometryTrait::has_z)
	}

	fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	fn flat_coords(&self) -> Vec<&Coordinates> {
		self.0.iter().map(Point::coords).collect()
	}

	fn wkt_coords(&self, precision: Option<u8>) -> String {
		self.0.iter().map(|p| p.wkt_coords(precision)).collect::<Vec<_>>().join(", ")
	}

	fn wkt_inset(&self) -> &'static str {
		" "
	}
}

impl HasGeoInterface for MultiPoint {
	fn geo_interface(&self) -> GeoInterface {
		let coordinates: GeoCoordinates = self.0.iter().map(Point::coords).collect();
		GeoInterface::new(Self::GEOMETRY_TYPE, coordinates).with_bbox(self.bounds())
	}
}

impl FromGeoInterface for MultiPoint {
	const GEOMETRY_TYPE: &'static str = "MultiPoint";

	fn from_mapping(dict: &GeoInterface) -> Result<Self> {
		Self::from_coords(dict.coordinates()?.as_positions()?)
	}
}

impl CompositeGeometryTrait<Point> for MultiPoint {
	fn as_slice(&self) -> &[Point] {
		&self.0
	}

	fn into_inner(self) -> Vec<Point> {
		self.0
	}
}

impl Debug for MultiPoint {
	/// `MultiPoint(((0, 0), (1, 1)))`
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str("MultiPoint(")?;
		write_tuple(f, self.0.iter().map(Point::coords))?;
		f.write_str(")")
	}
}

crate::impl_geo_interface_eq!(MultiPoint);
