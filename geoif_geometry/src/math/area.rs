use crate::Coordinates;

/// Computes the signed area of a ring using the shoelace formula.
///
/// The area is positive if the ring is oriented counterclockwise and negative if
/// clockwise. The ring may be given open or closed; z is ignored.
pub fn signed_area(ring: &[Coordinates]) -> f64 {
	let mut sum = 0f64;
	if let Some(mut p2) = ring.last() {
		for p1 in ring {
			sum += (p2.x() - p1.x()) * (p1.y() + p2.y());
			p2 = p1;
		}
	}
	sum / 2.0
}
