use super::*;
use crate::{GeometryError, from_wkt};
use anyhow::{Result, bail};
use log::trace;
use std::{
	fmt::{self, Debug, Display, Formatter},
	str::FromStr,
};

/// Any geometry of this crate.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(Point),
	LineString(LineString),
	LinearRing(LinearRing),
	Polygon(Polygon),
	MultiPoint(MultiPoint),
	MultiLineString(MultiLineString),
	MultiPolygon(MultiPolygon),
	GeometryCollection(GeometryCollection),
}

/// Calls `$body` with `$g` bound to the wrapped geometry of every variant.
macro_rules! dispatch {
	($self:expr, $g:ident => $body:expr) => {
		match $self {
			Geometry::Point($g) => $body,
			Geometry::LineString($g) => $body,
			Geometry::LinearRing($g) => $body,
			Geometry::Polygon($g) => $body,
			Geometry::MultiPoint($g) => $body,
			Geometry::MultiLineString($g) => $body,
			Geometry::MultiPolygon($g) => $body,
			Geometry::GeometryCollection($g) => $body,
		}
	};
}

const GEOMETRY_TYPES: [&str; 8] = [
	"Point",
	"LineString",
	"LinearRing",
	"Polygon",
	"MultiPoint",
	"MultiLineString",
	"MultiPolygon",
	"GeometryCollection",
];

impl Geometry {
	/// Builds the geometry described by an interchange mapping, choosing the variant by its
	/// `type`, which must be spelled exactly as this crate writes it.
	pub fn from_dict(dict: &GeoInterface) -> Result<Self> {
		Self::from_mapping_as(&dict.geometry_type, dict)
	}

	/// Builds a geometry from any value exposing an interchange mapping.
	///
	/// The `type` is matched ignoring ASCII case; the coordinates must still parse.
	pub fn from_interface(obj: &impl HasGeoInterface) -> Result<Self> {
		let dict = obj.geo_interface();
		let Some(geometry_type) = GEOMETRY_TYPES
			.iter()
			.find(|name| name.eq_ignore_ascii_case(&dict.geometry_type))
		else {
			bail!(GeometryError::Parse(format!("unknown geometry type '{}'", dict.geometry_type)))
		};
		Self::from_mapping_as(geometry_type, &dict)
	}

	fn from_mapping_as(geometry_type: &str, dict: &GeoInterface) -> Result<Self> {
		trace!("building a {geometry_type} from its geo interface");
		Ok(match geometry_type {
			"Point" => Geometry::Point(Point::from_mapping(dict)?),
			"LineString" => Geometry::LineString(LineString::from_mapping(dict)?),
			"LinearRing" => Geometry::LinearRing(LinearRing::from_mapping(dict)?),
			"Polygon" => Geometry::Polygon(Polygon::from_mapping(dict)?),
			"MultiPoint" => Geometry::MultiPoint(MultiPoint::from_mapping(dict)?),
			"MultiLineString" => Geometry::MultiLineString(MultiLineString::from_mapping(dict)?),
			"MultiPolygon" => Geometry::MultiPolygon(MultiPolygon::from_mapping(dict)?),
			"GeometryCollection" => Geometry::GeometryCollection(GeometryCollection::from_mapping(dict)?),
			other => bail!(GeometryError::Parse(format!("unknown geometry type '{other}'"))),
		})
	}

	/// Parses a JSON geometry object.
	pub fn from_json(json: &str) -> Result<Self> {
		Self::from_dict(&GeoInterface::from_json(json)?)
	}

	/// Serializes the interchange mapping as JSON.
	pub fn to_json(&self) -> Result<String> {
		self.geo_interface().to_json()
	}

	/// Wraps single geometries into their multi counterpart; everything else is returned
	/// unchanged. A ring becomes a one-member `MultiLineString`.
	#[must_use]
	pub fn into_multi(self) -> Self {
		match self {
			Geometry::Point(g) => Geometry::MultiPoint(g.into_multi()),
			Geometry::LineString(g) => Geometry::MultiLineString(g.into_multi()),
			Geometry::LinearRing(g) => {
				Geometry::MultiLineString(LineString::new_unchecked(g.into_inner()).into_multi())
			}
			Geometry::Polygon(g) => Geometry::MultiPolygon(g.into_multi()),
			Geometry::MultiPoint(_)
			| Geometry::MultiLineString(_)
			| Geometry::MultiPolygon(_)
			| Geometry::GeometryCollection(_) => self,
		}
	}
}

impl GeometryTrait for Geometry {
	fn geometry_type(&self) -> &'static str {
		dispatch!(self, g => g.geometry_type())
	}

	fn has_z(&self) -> bool {
		dispatch!(self, g => g.has_z())
	}

	fn is_empty(&self) -> bool {
		dispatch!(self, g => g.is_empty())
	}

	fn flat_coords(&self) -> Vec<&Coordinates> {
		dispatch!(self, g => g.flat_coords())
	}

	fn wkt_coords(&self, precision: Option<u8>) -> String {
		dispatch!(self, g => g.wkt_coords(precision))
	}

	fn wkt_inset(&self) -> &'static str {
		dispatch!(self, g => g.wkt_inset())
	}

	fn bounds(&self) -> Option<[f64; 4]> {
		dispatch!(self, g => g.bounds())
	}

	fn convex_hull(&self) -> Option<Geometry> {
		dispatch!(self, g => g.convex_hull())
	}
}

impl HasGeoInterface for Geometry {
	fn geo_interface(&self) -> GeoInterface {
		dispatch!(self, g => g.geo_interface())
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		dispatch!(self, g => Debug::fmt(g, f))
	}
}

impl Display for Geometry {
	/// Writes the canonical WKT.
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(&self.wkt())
	}
}

impl FromStr for Geometry {
	type Err = anyhow::Error;

	/// Parses WKT.
	fn from_str(s: &str) -> Result<Self> {
		from_wkt(s)
	}
}

crate::impl_into_geometry!(
	Point,
	LineString,
	LinearRing,
	Polygon,
	MultiPoint,
	MultiLineString,
	MultiPolygon,
	GeometryCollection
);

crate::impl_geo_interface_eq!(Geometry);
