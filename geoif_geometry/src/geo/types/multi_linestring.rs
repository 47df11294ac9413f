use super::{
	CompositeGeometryTrait, Coordinates, FromGeoInterface, GeometryTrait, HasGeoInterface, LineString, check_dimensions,
	write_tuple,
};
use crate::{GeoCoordinates, GeoInterface};
use anyhow::Result;
use std::fmt::Debug;

/// An ordered collection of lines of one dimensionality.
#[derive(Clone, Default, PartialEq)]
pub struct MultiLineString(Vec<LineString>);

impl MultiLineString {
	pub fn new(lines: Vec<LineString>) -> Result<Self> {
		check_dimensions(lines.iter().filter_map(|l| l.sequence().dimension()))?;
		Ok(Self(lines))
	}

	pub(crate) fn new_unchecked(lines: Vec<LineString>) -> Self {
		Self(lines)
	}
}

impl GeometryTrait for MultiLineString {
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
		self.0.iter().flat_map(LineString::coords).collect()
	}

	fn wkt_coords(&self, precision: Option<u8>) -> String {
		self
			.0
			.iter()
			.map(|line| format!("({})", line.wkt_coords(precision)))
			.collect::<Vec<_>>()
			.join(", ")
	}

	fn wkt_inset(&self) -> &'static str {
		" "
	}
}

impl HasGeoInterface for MultiLineString {
	fn geo_interface(&self) -> GeoInterface {
		let coordinates = GeoCoordinates::List(self.0.iter().map(|l| l.sequence().to_geo_coordinates()).collect());
		GeoInterface::new(Self::GEOMETRY_TYPE, coordinates).with_bbox(self.bounds())
	}
}

impl FromGeoInterface for MultiLineString {
	const GEOMETRY_TYPE: &'static str = "MultiLineString";

	fn from_mapping(dict: &GeoInterface) -> Result<Self> {
		let lines = dict
			.coordinates()?
			.as_list()?
			.iter()
			.map(|line| LineString::new(line.as_positions()?))
			.collect::<Result<Vec<_>>>()?;
		Self::new(lines)
	}
}

impl CompositeGeometryTrait<LineString> for MultiLineString {
	fn as_slice(&self) -> &[LineString] {
		&self.0
	}

	fn into_inner(self) -> Vec<LineString> {
		self.0
	}
}

impl Debug for MultiLineString {
	/// `MultiLineString((((0, 0), (1, 1)),))`
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str("MultiLineString(")?;
		write_tuple(f, self.0.iter().map(LineString::sequence))?;
		f.write_str(")")
	}
}

crate::impl_geo_interface_eq!(MultiLineString);
