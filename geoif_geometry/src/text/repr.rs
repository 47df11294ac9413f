use super::{as_parse_error, check_depth};
use crate::{GeoCoordinates, GeoInterface, Geometry, GeometryCollection, GeometryError};
use anyhow::{Result, bail};
use geoif_core::byte_iterator::{ByteIterator, parse_list_entries, parse_number_as, parse_word};
use log::trace;

/// Parses the constructor-shaped text produced by the geometries' `Debug` output, such as
/// `LineString(((0, 0), (1, 1)))`, back into a geometry.
///
/// Reading the `Debug` text of a geometry yields a geometry with an equal interchange
/// mapping.
///
/// # Examples
/// ```
/// use geoif_geometry::{GeometryTrait, LineString, from_repr};
///
/// let line = LineString::new([[0, 0, 0], [1, 1, 3]]).unwrap();
/// let parsed = from_repr(&format!("{line:?}")).unwrap();
/// assert_eq!(parsed.wkt(), line.wkt());
/// ```
pub fn from_repr(text: &str) -> Result<Geometry> {
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
	let name = parse_word(iter)?;
	trace!("parsing {name} repr at position {}", iter.position());

	if name == "GeometryCollection" {
		iter.expect_byte(b'(')?;
		let members = parse_list_entries(iter, |iter| parse_geometry(iter, depth + 1))?;
		iter.expect_byte(b')')?;
		return Ok(GeometryCollection::new(members).into());
	}

	let arguments = parse_tuple(iter, depth + 1)?;
	let coordinates = match name.as_str() {
		"Point" => arguments,
		"Polygon" => polygon_coordinates(arguments)?,
		_ => single_argument(arguments)?,
	};
	Geometry::from_dict(&GeoInterface::new(&name, coordinates))
}

enum Entry {
	Number(f64),
	Tuple(GeoCoordinates),
}

/// Reads a possibly nested tuple of numbers. A tuple of numbers becomes a position; a tuple
/// of tuples (or `()`) becomes a list.
fn parse_tuple(iter: &mut ByteIterator, depth: usize) -> Result<GeoCoordinates> {
	check_depth(iter, depth)?;
	let entries = parse_list_entries(iter, |iter| {
		iter.skip_whitespace();
		if iter.peek() == Some(b'(') {
			Ok(Entry::Tuple(parse_tuple(iter, depth + 1)?))
		} else {
			Ok(Entry::Number(parse_number_as::<f64>(iter)?))
		}
	})?;

	if entries.is_empty() {
		return Ok(GeoCoordinates::List(vec![]));
	}

	let mut numbers = Vec::new();
	let mut tuples = Vec::new();
	for entry in entries {
		match entry {
			Entry::Number(n) => numbers.push(n),
			Entry::Tuple(t) => tuples.push(t),
		}
	}
	match (numbers.is_empty(), tuples.is_empty()) {
		(false, true) => Ok(GeoCoordinates::Position(numbers)),
		(true, false) => Ok(GeoCoordinates::List(tuples)),
		_ => Err(iter.format_error("tuple mixes numbers and tuples")),
	}
}

/// Unwraps the argument list of a constructor taking exactly one tuple.
fn single_argument(arguments: GeoCoordinates) -> Result<GeoCoordinates> {
	match arguments {
		GeoCoordinates::List(mut list) if list.len() == 1 => Ok(list.remove(0)),
		_ => bail!(GeometryError::Parse(String::from("expected exactly one argument"))),
	}
}

/// `Polygon(shell)` or `Polygon(shell, holes)` to `[shell, *holes]`.
fn polygon_coordinates(arguments: GeoCoordinates) -> Result<GeoCoordinates> {
	let GeoCoordinates::List(arguments) = arguments else {
		bail!(GeometryError::Parse(String::from("expected a shell tuple")))
	};
	let mut arguments = arguments.into_iter();
	let (Some(shell), holes, None) = (arguments.next(), arguments.next(), arguments.next()) else {
		bail!(GeometryError::Parse(String::from("expected a shell and optional holes")))
	};
	let mut rings = vec![shell];
	if let Some(holes) = holes {
		rings.extend(holes.as_list()?.iter().cloned());
	}
	Ok(GeoCoordinates::List(rings))
}
