//! Conversions between this crate's geometries and the `geo-types` crate.

use crate::{Coordinates, GeoInterface, HasGeoInterface, LineString, LinearRing, Point, Polygon};
use anyhow::Result;

impl From<geo_types::Coord<f64>> for Coordinates {
	fn from(value: geo_types::Coord<f64>) -> Self {
		Coordinates::new(value.x, value.y)
	}
}

impl From<geo_types::Point<f64>> for Coordinates {
	fn from(value: geo_types::Point<f64>) -> Self {
		Coordinates::from(value.0)
	}
}

impl From<&Coordinates> for geo_types::Coord<f64> {
	/// Drops z, which `geo-types` does not carry.
	fn from(value: &Coordinates) -> Self {
		geo_types::Coord { x: value.x(), y: value.y() }
	}
}

fn to_coordinates(line: &geo_types::LineString<f64>) -> Vec<Coordinates> {
	line.0.iter().map(|c| Coordinates::from(*c)).collect()
}

fn to_line(coords: &[Coordinates]) -> geo_types::LineString<f64> {
	geo_types::LineString(coords.iter().map(geo_types::Coord::from).collect())
}

impl TryFrom<&geo_types::LineString<f64>> for LineString {
	type Error = anyhow::Error;

	fn try_from(value: &geo_types::LineString<f64>) -> Result<Self> {
		LineString::new(to_coordinates(value))
	}
}

impl TryFrom<&geo_types::Polygon<f64>> for Polygon {
	type Error = anyhow::Error;

	fn try_from(value: &geo_types::Polygon<f64>) -> Result<Self> {
		let exterior = LinearRing::new(to_coordinates(value.exterior()))?;
		let interiors = value
			.interiors()
			.iter()
			.map(|ring| LinearRing::new(to_coordinates(ring)))
			.collect::<Result<Vec<_>>>()?;
		Polygon::new(exterior, interiors)
	}
}

impl From<&Point> for geo_types::Point<f64> {
	fn from(value: &Point) -> Self {
		geo_types::Point(value.coords().into())
	}
}

impl From<&LineString> for geo_types::LineString<f64> {
	fn from(value: &LineString) -> Self {
		to_line(value.coords())
	}
}

impl From<&Polygon> for geo_types::Polygon<f64> {
	fn from(value: &Polygon) -> Self {
		let exterior = value.exterior().map_or_else(|| geo_types::LineString(vec![]), |ring| to_line(ring.coords()));
		let interiors = value.interiors().iter().map(|ring| to_line(ring.coords())).collect();
		geo_types::Polygon::new(exterior, interiors)
	}
}

impl HasGeoInterface for geo_types::Point<f64> {
	fn geo_interface(&self) -> GeoInterface {
		Point::new_unchecked(Coordinates::from(*self)).geo_interface()
	}
}

impl HasGeoInterface for geo_types::LineString<f64> {
	fn geo_interface(&self) -> GeoInterface {
		LineString::new_unchecked(to_coordinates(self)).geo_interface()
	}
}

impl HasGeoInterface for geo_types::Polygon<f64> {
	fn geo_interface(&self) -> GeoInterface {
		let rings = std::iter::once(self.exterior())
			.chain(self.interiors())
			.map(|ring| LinearRing::new_unchecked(to_coordinates(ring)))
			.collect();
		Polygon::new_unchecked(rings).geo_interface()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{FromGeoInterface, Geometry, GeometryTrait};
	use pretty_assertions::assert_eq;

	fn geo_square() -> geo_types::Polygon<f64> {
		geo_types::Polygon::new(
			geo_types::LineString::from(vec![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]),
			vec![geo_types::LineString::from(vec![(0.5, 0.5), (0.5, 1.0), (1.0, 1.0)])],
		)
	}

	#[test]
	fn coordinates() {
		let coord = geo_types::Coord { x: 11.0, y: 22.0 };
		assert_eq!(Coordinates::from(coord), Coordinates::new(11.0, 22.0));
		let back = geo_types::Coord::from(&Coordinates::new_3d(1.0, 2.0, 3.0));
		assert_eq!(back, geo_types::Coord { x: 1.0, y: 2.0 });
	}

	#[test]
	fn point() -> Result<()> {
		let point = Point::try_new(geo_types::Point::new(1.0, 2.0))?;
		assert_eq!(point, Point::new(1.0, 2.0)?);
		assert_eq!(geo_types::Point::from(&point), geo_types::Point::new(1.0, 2.0));
		assert_eq!(Point::from_interface(&geo_types::Point::new(1.0, 2.0))?, point);
		Ok(())
	}

	#[test]
	fn line_string() -> Result<()> {
		let geo_line = geo_types::LineString::from(vec![(0.0, 0.0), (1.0, 2.0)]);
		let line = LineString::try_from(&geo_line)?;
		assert_eq!(line.wkt(), "LINESTRING (0 0, 1 2)");
		assert_eq!(geo_types::LineString::from(&line), geo_line);
		assert_eq!(geo_line.geo_interface(), line.geo_interface());
		Ok(())
	}

	#[test]
	fn polygon() -> Result<()> {
		let polygon = Polygon::try_from(&geo_square())?;
		assert_eq!(
			polygon.wkt(),
			"POLYGON ((0 0, 2 0, 2 2, 0 2, 0 0), (0.5 0.5, 0.5 1, 1 1, 0.5 0.5))"
		);
		assert_eq!(geo_types::Polygon::from(&polygon), geo_square());
		assert_eq!(geo_square().geo_interface(), polygon.geo_interface());
		Ok(())
	}

	#[test]
	fn shape_from_foreign_geometry() -> Result<()> {
		let geometry = Geometry::from_interface(&geo_square())?;
		assert!(matches!(geometry, Geometry::Polygon(_)));
		assert_eq!(geometry.bounds(), Some([0.0, 0.0, 2.0, 2.0]));
		Ok(())
	}

	#[test]
	fn empty_polygon() {
		let empty = geo_types::Polygon::new(geo_types::LineString::new(vec![]), vec![]);
		assert_eq!(empty.geo_interface(), Polygon::default().geo_interface());
	}
}
