use crate::{Coordinates, Geometry, LineString, LinearRing, Point};

/// Computes the convex hull of the planar projection of `coords` (monotone chain).
///
/// - no coordinates: `None`
/// - one distinct point: a [`Point`]
/// - two distinct points, or any number of collinear ones: a [`LineString`] between
///   the two extremal points
/// - otherwise: a closed, counterclockwise [`LinearRing`]
///
/// The result is always 2D; z components are ignored.
pub fn convex_hull<'a>(coords: impl IntoIterator<Item = &'a Coordinates>) -> Option<Geometry> {
	let mut points: Vec<Coordinates> = coords.into_iter().map(planar).collect();
	points.sort_by(|a, b| a.x().total_cmp(&b.x()).then(a.y().total_cmp(&b.y())));
	points.dedup();

	match points.as_slice() {
		[] => return None,
		[single] => return Some(Geometry::Point(Point::new_unchecked(*single))),
		_ => {}
	}

	let mut lower = half_hull(points.iter());
	let mut upper = half_hull(points.iter().rev());

	// each chain ends where the other one starts
	lower.pop();
	upper.pop();
	lower.append(&mut upper);

	if lower.len() < 3 {
		let first = points[0];
		let last = points[points.len() - 1];
		return Some(Geometry::LineString(LineString::new_unchecked(vec![first, last])));
	}

	Some(Geometry::LinearRing(LinearRing::new_unchecked(lower)))
}

/// 2D projection with `-0` folded into `0`, so sorting and deduplication agree.
fn planar(c: &Coordinates) -> Coordinates {
	Coordinates::new(c.x() + 0.0, c.y() + 0.0)
}

/// Builds one chain of the hull, keeping only strict left turns.
fn half_hull<'a>(points: impl Iterator<Item = &'a Coordinates>) -> Vec<Coordinates> {
	let mut chain: Vec<Coordinates> = Vec::new();
	for p in points {
		while let [.., a, b] = chain.as_slice() {
			if cross(a, b, p) > 0.0 {
				break;
			}
			chain.pop();
		}
		chain.push(*p);
	}
	chain
}

/// Z component of the cross product of `o -> a` and `o -> b`; positive for a left turn.
fn cross(o: &Coordinates, a: &Coordinates, b: &Coordinates) -> f64 {
	(a.x() - o.x()) * (b.y() - o.y()) - (a.y() - o.y()) * (b.x() - o.x())
}
