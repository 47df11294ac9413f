use super::{Coordinates, FromGeoInterface, GeometryTrait, HasGeoInterface, MultiPoint, SingleGeometryTrait};
use crate::{GeoCoordinates, GeoInterface};
use anyhow::Result;
use std::fmt::Debug;

/// A zero-dimensional geometry: a single 2D or 3D position.
///
/// Every public constructor validates the components, so a point never holds NaN or
/// infinite values.
#[derive(Clone, Copy, PartialEq)]
pub struct Point(Coordinates);

impl Point {
	/// Fails with [`GeometryError::InvalidCoordinate`](crate::GeometryError::InvalidCoordinate)
	/// on non-finite components.
	pub fn new(x: f64, y: f64) -> Result<Self> {
		Self::try_new(Coordinates::new(x, y))
	}

	pub fn new_3d(x: f64, y: f64, z: f64) -> Result<Self> {
		Self::try_new(Coordinates::new_3d(x, y, z))
	}

	/// Builds a point from anything convertible into `Coordinates`, such as arrays or
	/// tuples, validating the components.
	pub fn try_new(coords: impl Into<Coordinates>) -> Result<Self> {
		let coords = coords.into();
		coords.verify()?;
		Ok(Self(coords))
	}

	/// Wraps coordinates that are already known to be finite.
	pub(crate) fn new_unchecked(coords: Coordinates) -> Self {
		Self(coords)
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.0.x()
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.0.y()
	}

	#[must_use]
	pub fn z(&self) -> Option<f64> {
		self.0.z()
	}

	/// Returns a reference to the underlying `Coordinates`.
	#[must_use]
	pub fn coords(&self) -> &Coordinates {
		&self.0
	}
}

impl GeometryTrait for Point {
	fn geometry_type(&self) -> &'static str {
		Self::GEOMETRY_TYPE
	}

	fn has_z(&self) -> bool {
		self.0.has_z()
	}

	fn is_empty(&self) -> bool {
		false
	}

	fn flat_coords(&self) -> Vec<&Coordinates> {
		vec![&self.0]
	}

	fn wkt_coords(&self, precision: Option<u8>) -> String {
		self.0.to_wkt(precision)
	}

	fn wkt_inset(&self) -> &'static str {
		" "
	}
}

impl HasGeoInterface for Point {
	/// `{"type": "Point", "coordinates": [x, y]}`; points carry no bbox.
	fn geo_interface(&self) -> GeoInterface {
		GeoInterface::new(Self::GEOMETRY_TYPE, GeoCoordinates::from(&self.0))
	}
}

impl FromGeoInterface for Point {
	const GEOMETRY_TYPE: &'static str = "Point";

	fn from_mapping(dict: &GeoInterface) -> Result<Self> {
		Ok(Self(dict.coordinates()?.as_position()?))
	}
}

impl SingleGeometryTrait<MultiPoint> for Point {
	fn into_multi(self) -> MultiPoint {
		MultiPoint::new_unchecked(vec![self])
	}
}

impl Debug for Point {
	/// Formats the point as a constructor call, e.g. `Point(1, 2)`.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Point{:?}", self.0)
	}
}

crate::impl_geo_interface_eq!(Point);
