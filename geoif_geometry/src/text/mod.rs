//! Text readers: WKT and the constructor-shaped `Debug` form of the geometries.

mod repr;
mod wkt;

pub use repr::from_repr;
pub use wkt::from_wkt;

use crate::GeometryError;
use anyhow::{Error, Result};
use geoif_core::byte_iterator::ByteIterator;

/// Deepest nesting of parentheses or collections the readers accept.
const MAX_DEPTH: usize = 64;

fn check_depth(iter: &ByteIterator, depth: usize) -> Result<()> {
	if depth > MAX_DEPTH {
		return Err(iter.format_error("nesting too deep"));
	}
	Ok(())
}

/// Turns scanner failures into [`GeometryError::Parse`]; typed geometry errors (such as
/// mixed dimensions) are passed through unchanged.
fn as_parse_error(error: Error) -> Error {
	if error.downcast_ref::<GeometryError>().is_some() {
		error
	} else {
		GeometryError::Parse(format!("{error:#}")).into()
	}
}
