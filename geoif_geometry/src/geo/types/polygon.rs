use super::{
	CompositeGeometryTrait, Coordinates, FromGeoInterface, GeometryTrait, HasGeoInterface, LinearRing, MultiPolygon,
	SingleGeometryTrait, check_dimensions, write_tuple,
};
use crate::{GeoCoordinates, GeoInterface, Geometry, GeometryError, math};
use anyhow::{Result, ensure};
use std::fmt::Debug;

/// A planar surface bounded by an exterior ring, optionally with holes.
///
/// Rings are stored exterior first. A polygon without rings is empty.
#[derive(Clone, Default, PartialEq)]
pub struct Polygon(Vec<LinearRing>);

impl Polygon {
	/// Creates a polygon from its exterior ring and interior rings (holes).
	///
	/// All rings must share one dimensionality. An empty exterior yields an empty polygon,
	/// which cannot have holes.
	pub fn new(exterior: LinearRing, interiors: Vec<LinearRing>) -> Result<Self> {
		if exterior.is_empty() {
			ensure!(
				interiors.is_empty(),
				GeometryError::Parse(String::from("a polygon with interior rings needs an exterior ring"))
			);
			return Ok(Self::default());
		}
		let mut rings = Vec::with_capacity(interiors.len() + 1);
		rings.push(exterior);
		rings.extend(interiors);
		check_dimensions(rings.iter().filter_map(|r| r.sequence().dimension()))?;
		Ok(Self(rings))
	}

	/// Creates a polygon from a list of rings, exterior first.
	pub fn from_rings(rings: Vec<LinearRing>) -> Result<Self> {
		let mut rings = rings.into_iter();
		let exterior = rings.next().unwrap_or_default();
		Self::new(exterior, rings.collect())
	}

	#[must_use]
	pub fn exterior(&self) -> Option<&LinearRing> {
		self.0.first()
	}

	#[must_use]
	pub fn interiors(&self) -> &[LinearRing] {
		self.0.get(1..).unwrap_or_default()
	}

	/// Enclosed area: the exterior minus the holes.
	#[must_use]
	pub fn area(&self) -> f64 {
		let mut rings = self.0.iter();
		let Some(exterior) = rings.next() else {
			return 0.0;
		};
		rings.fold(exterior.signed_area().abs(), |sum, hole| sum - hole.signed_area().abs())
	}
}

impl GeometryTrait for Polygon {
	fn geometry_type(&self) -> &'static str {
		Self::GEOMETRY_TYPE
	}

	fn has_z(&self) -> bool {
		self.exterior().is_some_and(GeometryTrait::has_z)
	}

	fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	fn flat_coords(&self) -> Vec<&Coordinates> {
		self.0.iter().flat_map(LinearRing::coords).collect()
	}

	/// Holes lie inside the exterior, so it alone spans the bounding box.
	fn bounds(&self) -> Option<[f64; 4]> {
		self.exterior().and_then(GeometryTrait::bounds)
	}

	fn convex_hull(&self) -> Option<Geometry> {
		math::convex_hull(self.exterior()?.coords())
	}

	fn wkt_coords(&self, precision: Option<u8>) -> String {
		self
			.0
			.iter()
			.map(|ring| format!("({})", ring.wkt_coords(precision)))
			.collect::<Vec<_>>()
			.join(", ")
	}

	fn wkt_inset(&self) -> &'static str {
		" "
	}
}

impl HasGeoInterface for Polygon {
	/// Coordinates are `[exterior, *interiors]`.
	fn geo_interface(&self) -> GeoInterface {
		GeoInterface::new(Self::GEOMETRY_TYPE, self.to_geo_coordinates()).with_bbox(self.bounds())
	}
}

impl Polygon {
	/// Wraps rings, exterior first, that already share one dimensionality.
	pub(crate) fn new_unchecked(rings: Vec<LinearRing>) -> Self {
		match rings.first() {
			Some(exterior) if !exterior.is_empty() => Self(rings),
			_ => Self::default(),
		}
	}

	pub(crate) fn to_geo_coordinates(&self) -> GeoCoordinates {
		GeoCoordinates::List(self.0.iter().map(|r| r.sequence().to_geo_coordinates()).collect())
	}

	pub(crate) fn from_geo_coordinates(coordinates: &GeoCoordinates) -> Result<Self> {
		let rings = coordinates
			.as_list()?
			.iter()
			.map(|ring| LinearRing::new(ring.as_positions()?))
			.collect::<Result<Vec<_>>>()?;
		Self::from_rings(rings)
	}
}

impl FromGeoInterface for Polygon {
	const GEOMETRY_TYPE: &'static str = "Polygon";

	fn from_mapping(dict: &GeoInterface) -> Result<Self> {
		Self::from_geo_coordinates(dict.coordinates()?)
	}
}

impl CompositeGeometryTrait<LinearRing> for Polygon {
	fn as_slice(&self) -> &[LinearRing] {
		&self.0
	}

	fn into_inner(self) -> Vec<LinearRing> {
		self.0
	}
}

impl SingleGeometryTrait<MultiPolygon> for Polygon {
	fn into_multi(self) -> MultiPolygon {
		MultiPolygon::new_unchecked(vec![self])
	}
}

impl Debug for Polygon {
	/// `Polygon(<shell>)` or `Polygon(<shell>, (<hole>, ...))`, each ring written as a
	/// tuple of coordinate tuples.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self.0.split_first() {
			None => f.write_str("Polygon(())"),
			Some((exterior, [])) => write!(f, "Polygon({:?})", exterior.sequence()),
			Some((exterior, interiors)) => {
				write!(f, "Polygon({:?}, ", exterior.sequence())?;
				write_tuple(f, interiors.iter().map(LinearRing::sequence))?;
				f.write_str(")")
			}
		}
	}
}

crate::impl_geo_interface_eq!(Polygon);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::from_repr;
	use approx::assert_relative_eq;
	use pretty_assertions::assert_eq;

	fn ring(coords: &[[i32; 2]]) -> LinearRing {
		LinearRing::new(coords.iter()).unwrap()
	}

	fn square() -> Polygon {
		Polygon::new(ring(&[[0, 0], [4, 0], [4, 4], [0, 4]]), vec![]).unwrap()
	}

	fn square_with_hole() -> Polygon {
		Polygon::new(
			ring(&[[0, 0], [4, 0], [4, 4], [0, 4]]),
			vec![ring(&[[1, 1], [1, 2], [2, 2], [2, 1]])],
		)
		.unwrap()
	}

	#[test]
	fn exterior_and_interiors() {
		let polygon = square_with_hole();
		assert_eq!(polygon.exterior().unwrap().len(), 5);
		assert_eq!(polygon.interiors().len(), 1);
		assert_eq!(polygon.len(), 2);
		assert!(square().interiors().is_empty());
		assert!(Polygon::default().interiors().is_empty());
	}

	#[test]
	fn wkt() {
		assert_eq!(square().wkt(), "POLYGON ((0 0, 4 0, 4 4, 0 4, 0 0))");
		assert_eq!(
			square_with_hole().wkt(),
			"POLYGON ((0 0, 4 0, 4 4, 0 4, 0 0), (1 1, 1 2, 2 2, 2 1, 1 1))"
		);
		assert_eq!(Polygon::default().wkt(), "POLYGON EMPTY");
	}

	#[test]
	fn wkt_3d() {
		let polygon = Polygon::new(LinearRing::new([[0, 0, 1], [1, 0, 1], [0, 1, 1]]).unwrap(), vec![]).unwrap();
		assert!(polygon.has_z());
		assert_eq!(polygon.wkt(), "POLYGON Z ((0 0 1, 1 0 1, 0 1 1, 0 0 1))");
	}

	#[test]
	fn rejects_mixed_dimensions() {
		let error = Polygon::new(
			ring(&[[0, 0], [4, 0], [4, 4]]),
			vec![LinearRing::new([[1, 1, 1], [2, 1, 1], [1, 2, 1]]).unwrap()],
		)
		.unwrap_err();
		assert_eq!(error.downcast_ref::<GeometryError>(), Some(&GeometryError::Dimension));
	}

	#[test]
	fn rejects_holes_without_exterior() {
		let error = Polygon::new(LinearRing::default(), vec![ring(&[[1, 1], [2, 1], [1, 2]])]).unwrap_err();
		assert!(matches!(error.downcast_ref::<GeometryError>(), Some(GeometryError::Parse(_))));
	}

	#[test]
	fn bounds_come_from_exterior() {
		assert_eq!(square_with_hole().bounds(), Some([0.0, 0.0, 4.0, 4.0]));
		assert_eq!(Polygon::default().bounds(), None);
	}

	#[test]
	fn area() {
		assert_relative_eq!(square().area(), 16.0);
		assert_relative_eq!(square_with_hole().area(), 15.0);
		assert_relative_eq!(Polygon::default().area(), 0.0);
	}

	#[test]
	fn convex_hull_is_hull_of_exterior() {
		let polygon = Polygon::new(ring(&[[0, 0], [4, 0], [2, 1], [4, 4], [0, 4]]), vec![]).unwrap();
		assert_eq!(polygon.convex_hull().unwrap().wkt(), "LINEARRING (0 0, 4 0, 4 4, 0 4, 0 0)");
		assert_eq!(Polygon::default().convex_hull(), None);
	}

	#[test]
	fn geo_interface() -> Result<()> {
		let expected = GeoInterface::from_json(
			r#"{"type": "Polygon", "bbox": [0, 0, 4, 4], "coordinates": [
				[[0, 0], [4, 0], [4, 4], [0, 4], [0, 0]],
				[[1, 1], [1, 2], [2, 2], [2, 1], [1, 1]]
			]}"#,
		)?;
		assert_eq!(square_with_hole().geo_interface(), expected);
		assert_eq!(Polygon::from_dict(&expected)?, square_with_hole());
		Ok(())
	}

	#[test]
	fn from_dict_closes_rings() -> Result<()> {
		let dict = GeoInterface::from_json(r#"{"type": "Polygon", "coordinates": [[[0, 0], [4, 0], [4, 4], [0, 4]]]}"#)?;
		assert_eq!(Polygon::from_dict(&dict)?, square());
		Ok(())
	}

	#[test]
	fn from_dict_empty() -> Result<()> {
		let dict = GeoInterface::from_json(r#"{"type": "Polygon", "coordinates": []}"#)?;
		assert!(Polygon::from_dict(&dict)?.is_empty());
		Ok(())
	}

	#[test]
	fn debug() {
		assert_eq!(
			format!("{:?}", square()),
			"Polygon(((0, 0), (4, 0), (4, 4), (0, 4), (0, 0)))"
		);
		assert_eq!(
			format!("{:?}", square_with_hole()),
			"Polygon(((0, 0), (4, 0), (4, 4), (0, 4), (0, 0)), (((1, 1), (1, 2), (2, 2), (2, 1), (1, 1)),))"
		);
		assert_eq!(format!("{:?}", Polygon::default()), "Polygon(())");
	}

	#[test]
	fn repr_round_trip() -> Result<()> {
		for polygon in [square(), square_with_hole(), Polygon::default()] {
			let parsed = from_repr(&format!("{polygon:?}"))?;
			assert_eq!(parsed.geo_interface(), polygon.geo_interface());
		}
		Ok(())
	}

	#[test]
	fn into_multi() {
		assert_eq!(
			square().into_multi().wkt(),
			"MULTIPOLYGON (((0 0, 4 0, 4 4, 0 4, 0 0)))"
		);
	}
}
