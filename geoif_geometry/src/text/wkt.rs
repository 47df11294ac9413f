use super::{as_parse_error, check_depth};
use crate::{
	Coordinates, Geometry, GeometryCollection, LineString, LinearRing, MultiLineString, MultiPoint, MultiPolygon, Point,
	Polygon,
};
use anyhow::Result;
use geoif_core::byte_iterator::{ByteIterator, parse_list_entries, parse_number_as, parse_word};
use log::trace;

/// Parses Well-Known Text into a geometry.
///
/// Keywords are case-insensitive. A `Z` marker requires three values per coordinate;
/// without it both 2D and 3D coordinates are read. `EMPTY` is accepted for every type
/// except `POINT`.
///
/// # Examples
/// ```
/// use geoif_geometry::{GeometryTrait, from_wkt};
///
/// let line = from_wkt("linestring z (0 0 0, 1 1 3)").unwrap();
/// assert_eq!(line.wkt(), "LINESTRING Z (0 0 0, 1 1 3)");
/// ```
pub fn from_wkt(text: &str) -> Result<Geometry> {
	let mut iter = ByteIterator::new(text);
	parse_geometry(&mut iter, 0)
		.and_then(|geometry| {
			iter.expect_end()?;
			Ok(geometry)
		})
		.map_err(as_parse_error)
}

fn parse_geometry(iter: &mut ByteIterator, depth: usize) -> Result<Geometry> {
	check_depth(iter, depth)?;
	let keyword = parse_word(iter)?.to_ascii_uppercase();
	trace!("parsing WKT {keyword} at position {}", iter.position());

	let mut has_z = false;
	loop {
		iter.skip_whitespace();
		if !iter.peek().is_some_and(|b| b.is_ascii_alphabetic()) {
			break;
		}
		match parse_word(iter)?.to_ascii_uppercase().as_str() {
			"Z" if !has_z => has_z = true,
			"EMPTY" => return empty_geometry(iter, &keyword),
			word => return Err(iter.format_error(&format!("unexpected keyword '{word}'"))),
		}
	}

	Ok(match keyword.as_str() {
		"POINT" => {
			iter.expect_byte(b'(')?;
			let coords = parse_coordinates(iter, has_z)?;
			iter.expect_byte(b')')?;
			Point::try_new(coords)?.into()
		}
		"LINESTRING" => LineString::new(parse_coordinate_list(iter, has_z)?)?.into(),
		"LINEARRING" => LinearRing::new(parse_coordinate_list(iter, has_z)?)?.into(),
		"POLYGON" => parse_polygon(iter, has_z)?.into(),
		"MULTIPOINT" => {
			let points = parse_list_entries(iter, |iter| Point::try_new(parse_multi_point_member(iter, has_z)?))?;
			MultiPoint::new(points)?.into()
		}
		"MULTILINESTRING" => {
			let lines = parse_list_entries(iter, |iter| LineString::new(parse_coordinate_list(iter, has_z)?))?;
			MultiLineString::new(lines)?.into()
		}
		"MULTIPOLYGON" => {
			let polygons = parse_list_entries(iter, |iter| parse_polygon(iter, has_z))?;
			MultiPolygon::new(polygons)?.into()
		}
		"GEOMETRYCOLLECTION" => {
			let members = parse_list_entries(iter, |iter| parse_geometry(iter, depth + 1))?;
			GeometryCollection::new(members).into()
		}
		_ => return Err(iter.format_error(&format!("unknown geometry type '{keyword}'"))),
	})
}

fn empty_geometry(iter: &ByteIterator, keyword: &str) -> Result<Geometry> {
	Ok(match keyword {
		"LINESTRING" => LineString::default().into(),
		"LINEARRING" => LinearRing::default().into(),
		"POLYGON" => Polygon::default().into(),
		"MULTIPOINT" => MultiPoint::default().into(),
		"MULTILINESTRING" => MultiLineString::default().into(),
		"MULTIPOLYGON" => MultiPolygon::default().into(),
		"GEOMETRYCOLLECTION" => GeometryCollection::default().into(),
		"POINT" => return Err(iter.format_error("a point cannot be empty")),
		_ => return Err(iter.format_error(&format!("unknown geometry type '{keyword}'"))),
	})
}

/// Reads `x y` or `x y z`.
fn parse_coordinates(iter: &mut ByteIterator, has_z: bool) -> Result<Coordinates> {
	let mut values = vec![parse_number_as::<f64>(iter)?, parse_number_as::<f64>(iter)?];
	iter.skip_whitespace();
	if iter.peek().is_some_and(|b| b.is_ascii_digit() || matches!(b, b'-' | b'+' | b'.')) {
		values.push(parse_number_as::<f64>(iter)?);
	}
	if has_z && values.len() != 3 {
		return Err(iter.format_error("expected a z value"));
	}
	Coordinates::try_from(values)
}

fn parse_coordinate_list(iter: &mut ByteIterator, has_z: bool) -> Result<Vec<Coordinates>> {
	parse_list_entries(iter, |iter| parse_coordinates(iter, has_z))
}

fn parse_polygon(iter: &mut ByteIterator, has_z: bool) -> Result<Polygon> {
	let rings = parse_list_entries(iter, |iter| LinearRing::new(parse_coordinate_list(iter, has_z)?))?;
	Polygon::from_rings(rings)
}

/// Members of a `MULTIPOINT` may be written bare (`0 0, 1 1`) or parenthesized
/// (`(0 0), (1 1)`).
fn parse_multi_point_member(iter: &mut ByteIterator, has_z: bool) -> Result<Coordinates> {
	iter.skip_whitespace();
	if iter.peek() != Some(b'(') {
		return parse_coordinates(iter, has_z);
	}
	iter.expect_byte(b'(')?;
	let coords = parse_coordinates(iter, has_z)?;
	iter.expect_byte(b')')?;
	Ok(coords)
}
