use super::{CompositeGeometryTrait, CoordinateSequence, Coordinates, FromGeoInterface, GeometryTrait, HasGeoInterface};
use crate::{GeoInterface, math};
use anyhow::Result;
use std::fmt::Debug;

/// A closed line: its last coordinate always equals its first one.
///
/// Open input is closed on construction by repeating the first coordinate.
#[derive(Clone, Default, PartialEq)]
pub struct LinearRing(CoordinateSequence);

impl LinearRing {
	/// Creates a ring from coordinate tuples and closes it if necessary.
	pub fn new<C: Into<Coordinates>>(coords: impl IntoIterator<Item = C>) -> Result<Self> {
		let coords = close(coords.into_iter().map(Into::into).collect());
		Ok(Self(CoordinateSequence::new(coords)?))
	}

	pub(crate) fn new_unchecked(coords: Vec<Coordinates>) -> Self {
		Self(CoordinateSequence::new_unchecked(close(coords)))
	}

	/// Returns the stored coordinates, including the closing one.
	#[must_use]
	pub fn coords(&self) -> &[Coordinates] {
		self.0.as_slice()
	}

	/// Replaces all coordinates after validating them; the previous ring is kept on failure.
	pub fn set_coords<C: Into<Coordinates>>(&mut self, coords: impl IntoIterator<Item = C>) -> Result<()> {
		*self = Self::new(coords)?;
		Ok(())
	}

	#[must_use]
	pub fn sequence(&self) -> &CoordinateSequence {
		&self.0
	}

	/// Shoelace area of the planar projection: positive for counterclockwise rings.
	#[must_use]
	pub fn signed_area(&self) -> f64 {
		math::signed_area(self.0.as_slice())
	}

	#[must_use]
	pub fn is_ccw(&self) -> bool {
		self.signed_area() > 0.0
	}
}

fn close(mut coords: Vec<Coordinates>) -> Vec<Coordinates> {
	if let (Some(&first), Some(&last)) = (coords.first(), coords.last()) {
		if first != last {
			coords.push(first);
		}
	}
	coords
}

impl GeometryTrait for LinearRing {
	fn geometry_type(&self) -> &'static str {
		Self::GEOMETRY_TYPE
	}

	fn has_z(&self) -> bool {
		self.0.has_z()
	}

	fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	fn flat_coords(&self) -> Vec<&Coordinates> {
		self.0.as_slice().iter().collect()
	}

	fn wkt_coords(&self, precision: Option<u8>) -> String {
		self.0.wkt_coords(precision)
	}

	fn wkt_inset(&self) -> &'static str {
		" "
	}
}

impl HasGeoInterface for LinearRing {
	fn geo_interface(&self) -> GeoInterface {
		GeoInterface::new(Self::GEOMETRY_TYPE, self.0.to_geo_coordinates()).with_bbox(self.bounds())
	}
}

impl FromGeoInterface for LinearRing {
	const GEOMETRY_TYPE: &'static str = "LinearRing";

	fn from_mapping(dict: &GeoInterface) -> Result<Self> {
		Self::new(dict.coordinates()?.as_positions()?)
	}
}

impl CompositeGeometryTrait<Coordinates> for LinearRing {
	fn as_slice(&self) -> &[Coordinates] {
		self.0.as_slice()
	}

	fn into_inner(self) -> Vec<Coordinates> {
		self.0.into_inner()
	}
}

impl Debug for LinearRing {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "LinearRing({:?})", self.0)
	}
}

crate::impl_geo_interface_eq!(LinearRing);
