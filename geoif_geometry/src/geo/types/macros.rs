/// Lets a geometry be compared with a raw interchange mapping: equal iff its own mapping
/// is equal to it.
#[macro_export]
macro_rules! impl_geo_interface_eq {
	($($t:ty),*) => {$(
		impl PartialEq<$crate::GeoInterface> for $t {
			fn eq(&self, other: &$crate::GeoInterface) -> bool {
				$crate::HasGeoInterface::geo_interface(self) == *other
			}
		}

		impl PartialEq<$t> for $crate::GeoInterface {
			fn eq(&self, other: &$t) -> bool {
				*self == $crate::HasGeoInterface::geo_interface(other)
			}
		}
	)*}
}

/// Wraps a concrete geometry into the matching [`Geometry`](crate::Geometry) variant.
#[macro_export]
macro_rules! impl_into_geometry {
	($($t:ident),*) => {$(
		impl From<$t> for $crate::Geometry {
			fn from(value: $t) -> Self {
				$crate::Geometry::$t(value)
			}
		}
	)*}
}
