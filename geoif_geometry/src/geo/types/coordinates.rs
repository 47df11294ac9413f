use crate::GeometryError;
use anyhow::{Result, bail};
use std::fmt::Debug;

/// Number of components carried by every coordinate of a geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dimension {
	XY,
	XYZ,
}

impl Dimension {
	/// Returns the number of components, 2 or 3.
	#[must_use]
	pub fn size(self) -> usize {
		match self {
			Dimension::XY => 2,
			Dimension::XYZ => 3,
		}
	}

	#[must_use]
	pub fn has_z(self) -> bool {
		self == Dimension::XYZ
	}
}

/// An immutable 2D or 3D coordinate tuple.
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinates {
	x: f64,
	y: f64,
	z: Option<f64>,
}

impl Coordinates {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y, z: None }
	}

	#[must_use]
	pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
		Self { x, y, z: Some(z) }
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.x
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.y
	}

	#[must_use]
	pub fn z(&self) -> Option<f64> {
		self.z
	}

	#[must_use]
	pub fn has_z(&self) -> bool {
		self.z.is_some()
	}

	#[must_use]
	pub fn dimension(&self) -> Dimension {
		if self.z.is_some() { Dimension::XYZ } else { Dimension::XY }
	}

	/// Drops the z component.
	#[must_use]
	pub fn to_2d(&self) -> Coordinates {
		Coordinates::new(self.x, self.y)
	}

	/// Returns the components in order: `[x, y]` or `[x, y, z]`.
	#[must_use]
	pub fn to_vec(&self) -> Vec<f64> {
		match self.z {
			Some(z) => vec![self.x, self.y, z],
			None => vec![self.x, self.y],
		}
	}

	/// Fails with [`GeometryError::InvalidCoordinate`] if any component is NaN or infinite.
	pub fn verify(&self) -> Result<()> {
		if self.to_vec().iter().any(|v| !v.is_finite()) {
			bail!(GeometryError::InvalidCoordinate(format!("{self:?} has a non-finite component")))
		}
		Ok(())
	}

	/// Formats the coordinate as WKT: components separated by single spaces.
	#[must_use]
	pub fn to_wkt(&self, precision: Option<u8>) -> String {
		self
			.to_vec()
			.into_iter()
			.map(|v| format_number(v, precision))
			.collect::<Vec<_>>()
			.join(" ")
	}
}

/// Formats a coordinate component with the shortest text that parses back to the same
/// value. Whole numbers print without a fractional part (`2`, not `2.0`) and scientific
/// notation is never used.
///
/// With a `precision`, the value is first rounded to that many decimal places.
#[must_use]
pub fn format_number(value: f64, precision: Option<u8>) -> String {
	let value = match precision {
		Some(prec) => round_to(value, prec),
		None => value,
	};
	if value == 0.0 {
		// avoids "-0"
		return String::from("0");
	}
	format!("{value}")
}

/// Largest magnitude below which every `f64` can still carry a fractional part.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Rounds half away from zero to `precision` decimal places.
///
/// Values whose scaled magnitude leaves the exact integer range already have no digits at
/// that precision and are returned unchanged.
fn round_to(value: f64, precision: u8) -> f64 {
	let factor = 10f64.powi(i32::from(precision));
	let scaled = value * factor;
	if !scaled.is_finite() || scaled.abs() >= EXACT_INTEGER_LIMIT {
		return value;
	}
	scaled.round() / factor
}

impl TryFrom<&[f64]> for Coordinates {
	type Error = anyhow::Error;

	fn try_from(value: &[f64]) -> Result<Self> {
		let coordinates = match *value {
			[x, y] => Coordinates::new(x, y),
			[x, y, z] => Coordinates::new_3d(x, y, z),
			_ => bail!(GeometryError::InvalidCoordinate(format!(
				"expected 2 or 3 values, got {}",
				value.len()
			))),
		};
		coordinates.verify()?;
		Ok(coordinates)
	}
}

impl TryFrom<Vec<f64>> for Coordinates {
	type Error = anyhow::Error;

	fn try_from(value: Vec<f64>) -> Result<Self> {
		Coordinates::try_from(value.as_slice())
	}
}

impl<T> From<[T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: [T; 2]) -> Self {
		Coordinates::new(value[0].into(), value[1].into())
	}
}

impl<T> From<[T; 3]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: [T; 3]) -> Self {
		Coordinates::new_3d(value[0].into(), value[1].into(), value[2].into())
	}
}

impl<'a, T> From<&'a [T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Coordinates::from(*value)
	}
}

impl<'a, T> From<&'a [T; 3]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 3]) -> Self {
		Coordinates::from(*value)
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates::new(value.0, value.1)
	}
}

impl From<(f64, f64, f64)> for Coordinates {
	fn from(value: (f64, f64, f64)) -> Self {
		Coordinates::new_3d(value.0, value.1, value.2)
	}
}

impl From<&Coordinates> for Coordinates {
	fn from(value: &Coordinates) -> Self {
		*value
	}
}

impl Debug for Coordinates {
	/// Formats the coordinate as a tuple, e.g. `(1, 2.5)` or `(1, 2.5, 3)`.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let parts: Vec<String> = self.to_vec().into_iter().map(|v| format_number(v, None)).collect();
		write!(f, "({})", parts.join(", "))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn new_and_accessors() {
		let c = Coordinates::new(13.404954, 52.520008);
		assert_eq!(c.x(), 13.404954);
		assert_eq!(c.y(), 52.520008);
		assert_eq!(c.z(), None);
		assert!(!c.has_z());
		assert_eq!(c.dimension(), Dimension::XY);

		let c = Coordinates::new_3d(1.0, 2.0, 3.0);
		assert_eq!(c.z(), Some(3.0));
		assert!(c.has_z());
		assert_eq!(c.dimension(), Dimension::XYZ);
		assert_eq!(c.to_2d(), Coordinates::new(1.0, 2.0));
	}

	#[test]
	fn dimension_size() {
		assert_eq!(Dimension::XY.size(), 2);
		assert_eq!(Dimension::XYZ.size(), 3);
		assert!(Dimension::XYZ.has_z());
		assert!(!Dimension::XY.has_z());
	}

	#[test]
	fn from_arrays_and_tuples() {
		assert_eq!(Coordinates::from([1, 2]), Coordinates::new(1.0, 2.0));
		assert_eq!(Coordinates::from(&[1, 2, 3]), Coordinates::new_3d(1.0, 2.0, 3.0));
		assert_eq!(Coordinates::from([1.5f32, 2.5f32]), Coordinates::new(1.5, 2.5));
		assert_eq!(Coordinates::from((3.0, 4.0)), Coordinates::new(3.0, 4.0));
		assert_eq!(Coordinates::from((3.0, 4.0, 5.0)), Coordinates::new_3d(3.0, 4.0, 5.0));
	}

	#[test]
	fn try_from_slice() -> Result<()> {
		assert_eq!(Coordinates::try_from(vec![1.0, 2.0])?, Coordinates::new(1.0, 2.0));
		assert_eq!(
			Coordinates::try_from([1.0, 2.0, 3.0].as_slice())?,
			Coordinates::new_3d(1.0, 2.0, 3.0)
		);
		Ok(())
	}

	#[rstest]
	#[case(vec![])]
	#[case(vec![1.0])]
	#[case(vec![1.0, 2.0, 3.0, 4.0])]
	#[case(vec![f64::NAN, 2.0])]
	#[case(vec![1.0, f64::INFINITY, 3.0])]
	fn try_from_slice_rejects(#[case] values: Vec<f64>) {
		let error = Coordinates::try_from(values).unwrap_err();
		assert!(matches!(
			error.downcast_ref::<GeometryError>(),
			Some(GeometryError::InvalidCoordinate(_))
		));
	}

	#[test]
	fn to_vec() {
		assert_eq!(Coordinates::new(1.0, 2.0).to_vec(), vec![1.0, 2.0]);
		assert_eq!(Coordinates::new_3d(1.0, 2.0, 3.0).to_vec(), vec![1.0, 2.0, 3.0]);
	}

	#[rstest]
	#[case(0.0, None, "0")]
	#[case(-0.0, None, "0")]
	#[case(2.0, None, "2")]
	#[case(-7.0, None, "-7")]
	#[case(1.5, None, "1.5")]
	#[case(0.1, None, "0.1")]
	#[case(1e21, None, "1000000000000000000000")]
	#[case(0.000001, None, "0.000001")]
	#[case(1.23456, Some(2), "1.23")]
	#[case(2.34567, Some(3), "2.346")]
	#[case(1.6, Some(0), "2")]
	#[case(-0.0001, Some(2), "0")]
	#[case(123456789012.5, Some(6), "123456789012.5")]
	#[case(-9007199254.75, Some(6), "-9007199254.75")]
	fn number_formatting(#[case] value: f64, #[case] precision: Option<u8>, #[case] expected: &str) {
		assert_eq!(format_number(value, precision), expected);
	}

	#[test]
	fn rounding_keeps_huge_values() {
		for value in [1e300, -f64::MAX, f64::MAX] {
			let text = format_number(value, Some(10));
			assert_eq!(text, format_number(value, None));
			assert_eq!(text.parse::<f64>().unwrap(), value);
		}
	}

	#[test]
	fn number_formatting_round_trips() {
		for value in [0.1, 1.0 / 3.0, 123456.789, -2.5e-7, 9007199254740993.0] {
			let text = format_number(value, None);
			assert_eq!(text.parse::<f64>().unwrap(), value);
		}
	}

	#[test]
	fn to_wkt() {
		assert_eq!(Coordinates::new(0.0, 1.5).to_wkt(None), "0 1.5");
		assert_eq!(Coordinates::new_3d(1.0, 1.0, 3.0).to_wkt(None), "1 1 3");
		assert_eq!(Coordinates::new(1.23456, 2.0).to_wkt(Some(1)), "1.2 2");
	}

	#[test]
	fn debug_formats_like_tuple() {
		assert_eq!(format!("{:?}", Coordinates::new(1.0, 2.5)), "(1, 2.5)");
		assert_eq!(format!("{:?}", Coordinates::new_3d(0.0, 0.0, 1.0)), "(0, 0, 1)");
	}

	#[test]
	fn verify() {
		assert!(Coordinates::new(1.0, 2.0).verify().is_ok());
		assert!(Coordinates::new(f64::NAN, 2.0).verify().is_err());
		assert!(Coordinates::new_3d(1.0, 2.0, f64::NEG_INFINITY).verify().is_err());
	}
}
