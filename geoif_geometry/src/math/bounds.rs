use crate::Coordinates;

/// Computes `[x_min, y_min, x_max, y_max]` over `coords`, or `None` if there are none.
pub fn compute_bounds<'a>(coords: impl IntoIterator<Item = &'a Coordinates>) -> Option<[f64; 4]> {
	let mut iter = coords.into_iter();
	let first = iter.next()?;

	let mut x_min = first.x();
	let mut y_min = first.y();
	let mut x_max = first.x();
	let mut y_max = first.y();

	for coord in iter {
		x_min = x_min.min(coord.x());
		y_min = y_min.min(coord.y());
		x_max = x_max.max(coord.x());
		y_max = y_max.max(coord.y());
	}

	Some([x_min, y_min, x_max, y_max])
}

/// Merges bounding boxes into the box enclosing all of them. Missing boxes are skipped.
pub fn merge_bounds(bounds: impl IntoIterator<Item = Option<[f64; 4]>>) -> Option<[f64; 4]> {
	bounds.into_iter().flatten().reduce(|a, b| {
		[a[0].min(b[0]), a[1].min(b[1]), a[2].max(b[2]), a[3].max(b[3])]
	})
}
