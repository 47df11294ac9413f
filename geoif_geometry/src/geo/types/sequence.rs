use super::{Coordinates, Dimension};
use crate::{GeoCoordinates, GeometryError};
use anyhow::{Result, bail};
use log::debug;
use std::fmt::{self, Debug, Formatter};

/// An ordered list of coordinates that all share one dimensionality.
///
/// This is the storage of the line-based geometries.
#[derive(Clone, Default, PartialEq)]
pub struct CoordinateSequence(Vec<Coordinates>);

impl CoordinateSequence {
	/// Validates and wraps `coords`.
	///
	/// Fails with [`GeometryError::Dimension`] when 2D and 3D coordinates are mixed, and
	/// with [`GeometryError::InvalidCoordinate`] on non-finite components.
	pub fn new(coords: Vec<Coordinates>) -> Result<Self> {
		for c in &coords {
			c.verify()?;
		}
		check_dimensions(coords.iter().map(Coordinates::dimension))?;
		Ok(Self(coords))
	}

	/// Wraps coordinates that are already known to be valid.
	pub(crate) fn new_unchecked(coords: Vec<Coordinates>) -> Self {
		Self(coords)
	}

	/// Parses a list of positions from an interchange mapping.
	pub fn from_geo_coordinates(coordinates: &GeoCoordinates) -> Result<Self> {
		Self::new(coordinates.as_positions()?)
	}

	#[must_use]
	pub fn as_slice(&self) -> &[Coordinates] {
		&self.0
	}

	#[must_use]
	pub fn into_inner(self) -> Vec<Coordinates> {
		self.0
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// The shared dimensionality, or `None` when the sequence is empty.
	#[must_use]
	pub fn dimension(&self) -> Option<Dimension> {
		self.0.first().map(Coordinates::dimension)
	}

	#[must_use]
	pub fn has_z(&self) -> bool {
		self.dimension().is_some_and(Dimension::has_z)
	}

	/// Comma separated WKT coordinates, e.g. `0 0, 1 1`.
	#[must_use]
	pub fn wkt_coords(&self, precision: Option<u8>) -> String {
		self.0.iter().map(|c| c.to_wkt(precision)).collect::<Vec<_>>().join(", ")
	}

	#[must_use]
	pub fn to_geo_coordinates(&self) -> GeoCoordinates {
		self.0.iter().collect()
	}
}

impl Debug for CoordinateSequence {
	/// Formats the sequence as a tuple of coordinate tuples, e.g. `((0, 0), (1, 1))`.
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write_tuple(f, self.0.iter())
	}
}

/// Checks that all dimensions are equal and returns the shared one.
///
/// Returns `Ok(None)` for no input.
pub fn check_dimensions(dimensions: impl IntoIterator<Item = Dimension>) -> Result<Option<Dimension>> {
	let mut iter = dimensions.into_iter();
	let Some(first) = iter.next() else {
		return Ok(None);
	};
	if iter.any(|d| d != first) {
		debug!("rejecting coordinates of mixed dimensionality, expected {first:?}");
		bail!(GeometryError::Dimension)
	}
	Ok(Some(first))
}

/// Writes `items` as a tuple: `(a, b)`, `(a,)` or `()`.
///
/// The trailing comma of one-element tuples keeps the text unambiguous when it is
/// read back.
pub(crate) fn write_tuple<T: Debug>(f: &mut Formatter<'_>, items: impl ExactSizeIterator<Item = T>) -> fmt::Result {
	let single = items.len() == 1;
	f.write_str("(")?;
	for (index, item) in items.enumerate() {
		if index > 0 {
			f.write_str(", ")?;
		}
		write!(f, "{item:?}")?;
	}
	if single {
		f.write_str(",")?;
	}
	f.write_str(")")
}
