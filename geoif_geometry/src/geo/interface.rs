//! The interchange mapping ("geo interface"): a GeoJSON-like geometry object.

use crate::{Coordinates, GeometryError, HasGeoInterface};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Nested coordinate structure of an interchange mapping.
///
/// A position is a list of 2 or 3 numbers; lines, rings, polygons and multi-geometries
/// nest positions one or more levels deep.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeoCoordinates {
	Position(Vec<f64>),
	List(Vec<GeoCoordinates>),
}

impl GeoCoordinates {
	/// Interprets the value as a single coordinate tuple.
	pub fn as_position(&self) -> Result<Coordinates> {
		match self {
			GeoCoordinates::Position(values) => Coordinates::try_from(values.as_slice()),
			GeoCoordinates::List(_) => bail!(GeometryError::Parse(String::from(
				"expected a position, but got a nested list"
			))),
		}
	}

	/// Interprets the value as a list one nesting level down.
	///
	/// An empty position `[]` is read as an empty list, since JSON cannot tell them apart.
	pub fn as_list(&self) -> Result<&[GeoCoordinates]> {
		match self {
			GeoCoordinates::List(list) => Ok(list),
			GeoCoordinates::Position(values) if values.is_empty() => Ok(&[]),
			GeoCoordinates::Position(_) => bail!(GeometryError::Parse(String::from(
				"expected a list, but got a position"
			))),
		}
	}

	/// Interprets the value as a sequence of coordinate tuples.
	pub fn as_positions(&self) -> Result<Vec<Coordinates>> {
		self.as_list()?.iter().map(GeoCoordinates::as_position).collect()
	}
}

impl From<&Coordinates> for GeoCoordinates {
	fn from(value: &Coordinates) -> Self {
		GeoCoordinates::Position(value.to_vec())
	}
}

impl<T> FromIterator<T> for GeoCoordinates
where
	GeoCoordinates: From<T>,
{
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		GeoCoordinates::List(iter.into_iter().map(GeoCoordinates::from).collect())
	}
}

/// A geometry's interchange mapping.
///
/// Serializes to and from a GeoJSON geometry object:
/// `{"type": ..., "bbox": [...], "coordinates": [...]}`, or `"geometries"` instead of
/// `"coordinates"` for a collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoInterface {
	#[serde(rename = "type")]
	pub geometry_type: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub bbox: Option<[f64; 4]>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub coordinates: Option<GeoCoordinates>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub geometries: Option<Vec<GeoInterface>>,
}

impl GeoInterface {
	#[must_use]
	pub fn new(geometry_type: &str, coordinates: GeoCoordinates) -> Self {
		GeoInterface {
			geometry_type: geometry_type.to_string(),
			bbox: None,
			coordinates: Some(coordinates),
			geometries: None,
		}
	}

	#[must_use]
	pub fn new_collection(geometries: Vec<GeoInterface>) -> Self {
		GeoInterface {
			geometry_type: String::from("GeometryCollection"),
			bbox: None,
			coordinates: None,
			geometries: Some(geometries),
		}
	}

	/// Attaches a bounding box.
	#[must_use]
	pub fn with_bbox(mut self, bbox: Option<[f64; 4]>) -> Self {
		self.bbox = bbox;
		self
	}

	/// Returns the `coordinates` entry, failing with a parse error when it is missing.
	pub fn coordinates(&self) -> Result<&GeoCoordinates> {
		self.coordinates.as_ref().ok_or_else(|| {
			GeometryError::Parse(format!("{} must have coordinates", self.geometry_type)).into()
		})
	}

	/// Returns the `geometries` entry, failing with a parse error when it is missing.
	pub fn geometries(&self) -> Result<&[GeoInterface]> {
		self.geometries.as_deref().ok_or_else(|| {
			GeometryError::Parse(format!("{} must have geometries", self.geometry_type)).into()
		})
	}

	/// Serializes the mapping as a compact GeoJSON geometry object.
	pub fn to_json(&self) -> Result<String> {
		serde_json::to_string(self).context("while serializing a geo interface")
	}

	/// Parses a GeoJSON geometry object.
	pub fn from_json(json: &str) -> Result<GeoInterface> {
		serde_json::from_str(json).map_err(|e| GeometryError::Parse(format!("invalid geo interface JSON: {e}")).into())
	}
}

impl HasGeoInterface for GeoInterface {
	fn geo_interface(&self) -> GeoInterface {
		self.clone()
	}
}
