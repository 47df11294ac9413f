use super::{
	CompositeGeometryTrait, CoordinateSequence, Coordinates, FromGeoInterface, GeometryTrait, HasGeoInterface,
	MultiLineString, Point, SingleGeometryTrait,
};
use crate::GeoInterface;
use anyhow::Result;
use std::fmt::Debug;

/// An ordered sequence of connected coordinates forming a line.
///
/// All coordinates share one dimensionality. The sequence may be empty.
#[derive(Clone, Default, PartialEq)]
pub struct LineString(CoordinateSequence);

impl LineString {
	/// Creates a line from coordinate tuples.
	///
	/// Fails with [`GeometryError::Dimension`](crate::GeometryError::Dimension) if 2D and 3D
	/// coordinates are mixed.
	pub fn new<C: Into<Coordinates>>(coords: impl IntoIterator<Item = C>) -> Result<Self> {
		let coords = coords.into_iter().map(Into::into).collect();
		Ok(Self(CoordinateSequence::new(coords)?))
	}

	pub(crate) fn new_unchecked(coords: Vec<Coordinates>) -> Self {
		Self(CoordinateSequence::new_unchecked(coords))
	}

	/// Creates a line through the given points, in order.
	///
	/// All points must share the dimensionality of the first one.
	pub fn from_points(points: &[Point]) -> Result<Self> {
		Self::new(points.iter().map(Point::coords))
	}

	/// Returns the stored coordinates in input order.
	#[must_use]
	pub fn coords(&self) -> &[Coordinates] {
		self.0.as_slice()
	}

	/// Replaces all coordinates after validating them.
	///
	/// On failure the line keeps its previous coordinates.
	pub fn set_coords<C: Into<Coordinates>>(&mut self, coords: impl IntoIterator<Item = C>) -> Result<()> {
		*self = Self::new(coords)?;
		Ok(())
	}

	/// Returns the underlying validated sequence.
	#[must_use]
	pub fn sequence(&self) -> &CoordinateSequence {
		&self.0
	}
}

impl GeometryTrait for LineString {
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

impl HasGeoInterface for LineString {
	/// `{"type": "LineString", "bbox": [...], "coordinates": [...]}`; the bbox is left out
	/// only when the line is empty.
	fn geo_interface(&self) -> GeoInterface {
		GeoInterface::new(Self::GEOMETRY_TYPE, self.0.to_geo_coordinates()).with_bbox(self.bounds())
	}
}

impl FromGeoInterface for LineString {
	const GEOMETRY_TYPE: &'static str = "LineString";

	fn from_mapping(dict: &GeoInterface) -> Result<Self> {
		Ok(Self(CoordinateSequence::from_geo_coordinates(dict.coordinates()?)?))
	}
}

impl CompositeGeometryTrait<Coordinates> for LineString {
	fn as_slice(&self) -> &[Coordinates] {
		self.0.as_slice()
	}

	fn into_inner(self) -> Vec<Coordinates> {
		self.0.into_inner()
	}
}

impl SingleGeometryTrait<MultiLineString> for LineString {
	fn into_multi(self) -> MultiLineString {
		MultiLineString::new_unchecked(vec![self])
	}
}

impl Debug for LineString {
	/// Formats the line as a constructor call, e.g. `LineString(((0, 0), (1, 1)))`.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "LineString({:?})", self.0)
	}
}

crate::impl_geo_interface_eq!(LineString);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Geometry, GeometryError, from_repr};
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	fn c2(x: f64, y: f64) -> Coordinates {
		Coordinates::new(x, y)
	}

	fn c3(x: f64, y: f64, z: f64) -> Coordinates {
		Coordinates::new_3d(x, y, z)
	}

	fn line_2d() -> LineString {
		LineString::new([[0, 0], [1, 1], [2, 2]]).unwrap()
	}

	fn line_3d() -> LineString {
		LineString::new([[0, 0, 0], [1, 1, 3], [2, 2, 6]]).unwrap()
	}

	fn assert_dimension_error(result: Result<impl Debug>) {
		let error = result.unwrap_err();
		assert_eq!(error.downcast_ref::<GeometryError>(), Some(&GeometryError::Dimension));
		assert_eq!(error.to_string(), "All coordinates must have the same dimension");
	}

	#[test]
	fn coords_2d() {
		let line = LineString::new([[0, 0], [1, 1]]).unwrap();
		assert_eq!(line.coords(), &[c2(0.0, 0.0), c2(1.0, 1.0)]);
	}

	#[test]
	fn coords_3d() {
		let line = LineString::new([[0, 0, 0], [1, 1, 1]]).unwrap();
		assert_eq!(line.coords(), &[c3(0.0, 0.0, 0.0), c3(1.0, 1.0, 1.0)]);
	}

	#[test]
	fn new_rejects_mixed_dimensions() {
		assert_dimension_error(LineString::new([c3(0.0, 0.0, 0.0), c2(1.0, 1.0)]));
	}

	#[test]
	fn set_coords_2d() -> Result<()> {
		let mut line = LineString::new([[0, 0], [1, 2]])?;
		line.set_coords([(0.0, 0.0), (1.0, 1.0)])?;
		assert_eq!(line.coords(), &[c2(0.0, 0.0), c2(1.0, 1.0)]);
		Ok(())
	}

	#[test]
	fn set_coords_changes_dimension() -> Result<()> {
		let mut line = LineString::new([[0, 0], [1, 0]])?;
		line.set_coords([(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)])?;
		assert_eq!(line.coords(), &[c3(0.0, 0.0, 0.0), c3(1.0, 1.0, 1.0)]);
		assert!(line.has_z());
		Ok(())
	}

	#[test]
	fn set_coords_failure_keeps_previous_state() -> Result<()> {
		let mut line = LineString::new([[0, 0], [1, 0]])?;
		assert_dimension_error(line.set_coords([c3(0.0, 0.0, 0.0), c2(1.0, 1.0)]));
		assert_eq!(line.coords(), &[c2(0.0, 0.0), c2(1.0, 0.0)]);
		Ok(())
	}

	#[test]
	fn geo_interface() {
		let line = LineString::new([[0, 0], [1, 1]]).unwrap();
		let expected = GeoInterface::from_json(
			r#"{"type": "LineString", "bbox": [0.0, 0.0, 1.0, 1.0], "coordinates": [[0.0, 0.0], [1.0, 1.0]]}"#,
		)
		.unwrap();
		assert_eq!(line.geo_interface(), expected);
	}

	#[test]
	fn bounds() {
		assert_eq!(LineString::new([[0, 0], [1, 1]]).unwrap().bounds(), Some([0.0, 0.0, 1.0, 1.0]));
		assert_eq!(line_2d().bounds(), Some([0.0, 0.0, 2.0, 2.0]));
	}

	#[test]
	fn bounds_3d_ignores_z() {
		assert_eq!(line_3d().bounds(), Some([0.0, 0.0, 2.0, 2.0]));
	}

	#[test]
	fn bounds_are_recomputed_after_set_coords() -> Result<()> {
		let mut line = line_2d();
		line.set_coords([[-5, 1], [3, 9]])?;
		assert_eq!(line.bounds(), Some([-5.0, 1.0, 3.0, 9.0]));
		Ok(())
	}

	#[test]
	fn wkt() {
		assert_eq!(line_2d().wkt(), "LINESTRING (0 0, 1 1, 2 2)");
	}

	#[test]
	fn wkt_3d() {
		assert_eq!(line_3d().wkt(), "LINESTRING Z (0 0 0, 1 1 3, 2 2 6)");
	}

	#[rstest]
	#[case(vec![[0.5, 0.25], [1.125, -3.0]], "LINESTRING (0.5 0.25, 1.125 -3)")]
	#[case(vec![[1e-7, 12345678.0]], "LINESTRING (0.0000001 12345678)")]
	fn wkt_number_formatting(#[case] coords: Vec<[f64; 2]>, #[case] expected: &str) {
		assert_eq!(LineString::new(coords).unwrap().wkt(), expected);
	}

	#[test]
	fn wkt_with_precision() {
		let line = LineString::new([[0.123456, 1.0], [2.5, 3.987654]]).unwrap();
		assert_eq!(line.to_wkt(Some(2)), "LINESTRING (0.12 1, 2.5 3.99)");
	}

	#[test]
	fn empty() {
		let line = LineString::new(Vec::<Coordinates>::new()).unwrap();
		assert!(line.is_empty());
		assert!(!line.has_z());
		assert_eq!(line.bounds(), None);
		assert_eq!(line.convex_hull(), None);
		assert_eq!(line.wkt(), "LINESTRING EMPTY");
		assert_eq!(line.geo_interface().bbox, None);
		assert_eq!(format!("{line:?}"), "LineString(())");
	}

	#[test]
	fn from_dict() -> Result<()> {
		let dict = GeoInterface::from_json(
			r#"{"type": "LineString", "bbox": [0.0, 0.0, 1.0, 1.0], "coordinates": [[0.0, 0.0], [1.0, 1.0]]}"#,
		)?;
		let line = LineString::from_dict(&dict)?;
		assert_eq!(line.coords(), &[c2(0.0, 0.0), c2(1.0, 1.0)]);
		Ok(())
	}

	#[test]
	fn from_dict_ignores_stale_bbox() -> Result<()> {
		let dict = GeoInterface::from_json(r#"{"type": "LineString", "bbox": [9, 9, 9, 9], "coordinates": [[0, 0], [1, 1]]}"#)?;
		let line = LineString::from_dict(&dict)?;
		assert_eq!(line.bounds(), Some([0.0, 0.0, 1.0, 1.0]));
		Ok(())
	}

	#[rstest]
	#[case(r#"{"type": "Point", "coordinates": [[0, 0], [1, 1]]}"#)]
	#[case(r#"{"type": "linestring", "coordinates": [[0, 0], [1, 1]]}"#)]
	#[case(r#"{"type": "LineString"}"#)]
	#[case(r#"{"type": "LineString", "coordinates": [0, 0]}"#)]
	#[case(r#"{"type": "LineString", "coordinates": [[0], [1, 1]]}"#)]
	#[case(r#"{"type": "LineString", "coordinates": [[[0, 0]]]}"#)]
	fn from_dict_rejects(#[case] json: &str) {
		let dict = GeoInterface::from_json(json).unwrap();
		let error = LineString::from_dict(&dict).unwrap_err();
		assert!(error.downcast_ref::<GeometryError>().is_some());
	}

	#[test]
	fn from_dict_rejects_mixed_dimensions() {
		let dict = GeoInterface::from_json(r#"{"type": "LineString", "coordinates": [[0, 0, 0], [1, 1]]}"#).unwrap();
		assert_dimension_error(LineString::from_dict(&dict));
	}

	#[test]
	fn from_dict_round_trip() -> Result<()> {
		for line in [line_2d(), line_3d()] {
			let parsed = LineString::from_dict(&line.geo_interface())?;
			assert_eq!(parsed.geo_interface(), line.geo_interface());
		}
		Ok(())
	}

	#[test]
	fn from_compatible() -> Result<()> {
		struct NotAGeometry;
		impl HasGeoInterface for NotAGeometry {
			fn geo_interface(&self) -> GeoInterface {
				GeoInterface::from_json(r#"{"type": "LineString", "coordinates": [[0.0, 0.0, 1.0], [1.0, 1.0, 2.0]]}"#)
					.unwrap()
			}
		}

		let line = LineString::from_interface(&NotAGeometry)?;
		assert_eq!(line.coords(), &[c3(0.0, 0.0, 1.0), c3(1.0, 1.0, 2.0)]);
		Ok(())
	}

	#[test]
	fn from_interface_accepts_other_type_spelling() -> Result<()> {
		let dict = GeoInterface::from_json(r#"{"type": "LINESTRING", "coordinates": [[0, 0], [1, 1]]}"#)?;
		assert!(LineString::from_dict(&dict).is_err());
		assert_eq!(LineString::from_interface(&dict)?, LineString::new([[0, 0], [1, 1]])?);
		Ok(())
	}

	#[test]
	fn repr_2d() {
		assert_eq!(format!("{:?}", line_2d()), "LineString(((0, 0), (1, 1), (2, 2)))");
	}

	#[test]
	fn repr_3d() {
		assert_eq!(format!("{:?}", line_3d()), "LineString(((0, 0, 0), (1, 1, 3), (2, 2, 6)))");
	}

	#[test]
	fn repr_eval() -> Result<()> {
		let line = line_3d();
		let parsed = from_repr(&format!("{line:?}"))?;
		assert_eq!(parsed.geo_interface(), line.geo_interface());
		Ok(())
	}

	#[test]
	fn has_z() {
		assert!(!line_2d().has_z());
		assert!(line_3d().has_z());
	}

	#[test]
	fn from_points() -> Result<()> {
		let line = LineString::from_points(&[Point::new(0.0, 0.0)?, Point::new(1.0, 1.0)?])?;
		assert_eq!(line.coords(), &[c2(0.0, 0.0), c2(1.0, 1.0)]);
		Ok(())
	}

	#[test]
	fn from_points_3d() -> Result<()> {
		let points = [Point::new_3d(0.0, 0.0, 1.0)?, Point::new_3d(1.0, 1.0, 2.0)?];
		let line = LineString::from_points(&points)?;
		assert_eq!(line.coords(), &[c3(0.0, 0.0, 1.0), c3(1.0, 1.0, 2.0)]);
		Ok(())
	}

	#[test]
	fn from_points_mixed() -> Result<()> {
		let points = [Point::new_3d(0.0, 0.0, 1.0)?, Point::new(1.0, 1.0)?];
		assert_dimension_error(LineString::from_points(&points));
		Ok(())
	}

	#[test]
	fn convex_hull() {
		assert_eq!(line_2d().convex_hull().unwrap().wkt(), "LINESTRING (0 0, 2 2)");
		let bent = LineString::new([[0, 0], [2, 0], [1, 3]]).unwrap();
		let hull = bent.convex_hull().unwrap();
		assert!(matches!(hull, Geometry::LinearRing(_)));
		assert_eq!(hull.wkt(), "LINEARRING (0 0, 2 0, 1 3, 0 0)");
	}

	#[test]
	fn equality_follows_interface() -> Result<()> {
		assert_eq!(line_2d(), LineString::new([(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)])?);
		assert_ne!(line_2d(), line_3d());
		assert!(line_2d() == line_2d().geo_interface());
		assert!(line_2d().geo_interface() != line_3d());
		Ok(())
	}

	#[test]
	fn composite_access() {
		let line = line_2d();
		assert_eq!(line.len(), 3);
		assert_eq!(line.first(), Some(&c2(0.0, 0.0)));
		assert_eq!(line.last(), Some(&c2(2.0, 2.0)));
		assert_eq!(line.iter().count(), 3);
		assert_eq!(line.into_inner().len(), 3);
	}

	#[test]
	fn into_multi() {
		let multi = line_2d().into_multi();
		assert_eq!(multi.wkt(), "MULTILINESTRING ((0 0, 1 1, 2 2))");
	}
}
