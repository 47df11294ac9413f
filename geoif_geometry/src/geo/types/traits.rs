use crate::{Coordinates, GeoInterface, Geometry, GeometryError, math};
use anyhow::{Result, bail};
use std::fmt::Debug;

/// Structural capability of exposing an interchange mapping.
///
/// Every geometry of this crate implements it, and so can any foreign type that wants
/// to be accepted by [`FromGeoInterface::from_interface`] or [`Geometry::from_interface`].
pub trait HasGeoInterface {
	/// Returns the interchange mapping: `type`, `coordinates` (or `geometries`) and an
	/// optional `bbox`.
	fn geo_interface(&self) -> GeoInterface;
}

/// The capability set shared by all geometries.
///
/// Derived values (bounds, WKT, convex hull) are computed from the stored coordinates on
/// every call and never cached.
pub trait GeometryTrait: Debug + Clone + HasGeoInterface {
	/// The interchange type name, e.g. `"LineString"`.
	fn geometry_type(&self) -> &'static str;

	/// Whether the stored coordinates carry a z component.
	fn has_z(&self) -> bool;

	/// Whether the geometry holds no coordinates at all.
	fn is_empty(&self) -> bool;

	/// All coordinates of the geometry in storage order.
	fn flat_coords(&self) -> Vec<&Coordinates>;

	/// The coordinate part of the WKT text, without the enclosing parentheses.
	fn wkt_coords(&self, precision: Option<u8>) -> String;

	/// Text inserted between the type keyword (and `Z` marker) and the opening parenthesis.
	fn wkt_inset(&self) -> &'static str {
		""
	}

	/// Axis-aligned bounding box `[min_x, min_y, max_x, max_y]`; z never takes part.
	///
	/// Returns `None` for an empty geometry.
	fn bounds(&self) -> Option<[f64; 4]> {
		math::compute_bounds(self.flat_coords())
	}

	/// Convex hull of the planar projection of all coordinates.
	///
	/// Returns `None` for an empty geometry.
	fn convex_hull(&self) -> Option<Geometry> {
		math::convex_hull(self.flat_coords())
	}

	/// WKT text, with every number rounded to `precision` decimal places if given.
	fn to_wkt(&self, precision: Option<u8>) -> String {
		let mut wkt = self.geometry_type().to_uppercase();
		if self.has_z() {
			wkt.push_str(" Z");
		}
		if self.is_empty() {
			wkt.push_str(" EMPTY");
			return wkt;
		}
		wkt.push_str(self.wkt_inset());
		wkt.push('(');
		wkt.push_str(&self.wkt_coords(precision));
		wkt.push(')');
		wkt
	}

	/// Canonical WKT text.
	fn wkt(&self) -> String {
		self.to_wkt(None)
	}
}

/// Construction from an interchange mapping.
pub trait FromGeoInterface: Sized {
	/// The `type` value this geometry is stored under.
	const GEOMETRY_TYPE: &'static str;

	/// Builds the geometry from the payload of `dict` without looking at its `type`.
	fn from_mapping(dict: &GeoInterface) -> Result<Self>;

	/// Builds the geometry from a mapping whose `type` must equal [`Self::GEOMETRY_TYPE`]
	/// exactly. A `bbox` in the mapping is ignored and recomputed.
	fn from_dict(dict: &GeoInterface) -> Result<Self> {
		if dict.geometry_type != Self::GEOMETRY_TYPE {
			bail!(GeometryError::Parse(format!(
				"expected type '{}', but got '{}'",
				Self::GEOMETRY_TYPE,
				dict.geometry_type
			)))
		}
		Self::from_mapping(dict)
	}

	/// Builds the geometry from any value exposing an interchange mapping.
	///
	/// The type name is compared ignoring ASCII case, so mappings of implementations that
	/// spell it e.g. `"LINESTRING"` are accepted as long as the coordinates parse.
	fn from_interface(obj: &impl HasGeoInterface) -> Result<Self> {
		let dict = obj.geo_interface();
		if !dict.geometry_type.eq_ignore_ascii_case(Self::GEOMETRY_TYPE) {
			bail!(GeometryError::Parse(format!(
				"expected type '{}', but got '{}'",
				Self::GEOMETRY_TYPE,
				dict.geometry_type
			)))
		}
		Self::from_mapping(&dict)
	}
}

/// Geometries that can be wrapped into their multi-geometry counterpart.
pub trait SingleGeometryTrait<Multi>: Debug + Clone {
	/// Converts the single geometry into a multi-geometry with one member.
	fn into_multi(self) -> Multi;
}

/// Composite geometries: ordered collections of simpler elements.
///
/// Only read access is offered here; each type validates additions itself.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	/// Returns the elements in order.
	fn as_slice(&self) -> &[Item];

	/// Consumes the composite geometry and returns its elements.
	fn into_inner(self) -> Vec<Item>;

	/// Returns the number of elements.
	fn len(&self) -> usize {
		self.as_slice().len()
	}

	/// Returns an iterator over the elements.
	fn iter(&self) -> std::slice::Iter<'_, Item> {
		self.as_slice().iter()
	}

	/// Returns a reference to the first element, if any.
	fn first(&self) -> Option<&Item> {
		self.as_slice().first()
	}

	/// Returns a reference to the last element, if any.
	fn last(&self) -> Option<&Item> {
		self.as_slice().last()
	}
}
