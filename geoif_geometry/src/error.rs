use std::fmt::{Display, Formatter};

/// Typed failure conditions raised while building or parsing geometries.
///
/// Values are carried inside [`anyhow::Error`] and can be recovered with
/// `error.downcast_ref::<GeometryError>()`.
#[derive(Clone, Debug, PartialEq)]
pub enum GeometryError {
	/// Coordinates of differing dimensionality were combined in one geometry.
	Dimension,
	/// A coordinate tuple with an arity other than 2 or 3, or a non-finite component.
	InvalidCoordinate(String),
	/// An interchange mapping or text that does not describe the requested geometry.
	Parse(String),
}

impl Display for GeometryError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			GeometryError::Dimension => f.write_str("All coordinates must have the same dimension"),
			GeometryError::InvalidCoordinate(msg) => write!(f, "invalid coordinate: {msg}"),
			GeometryError::Parse(msg) => write!(f, "{msg}"),
		}
	}
}

impl std::error::Error for GeometryError {}
