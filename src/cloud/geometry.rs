//! Canvas-space geometry: points, sizes, rectangles and the word box
//! estimator used instead of real text measurement.

use std::ops::{Add, Sub};

use log::debug;
use rand::Rng;

/// Font size substituted when a caller passes a non-positive one.
pub const DEFAULT_FONT_SIZE: f64 = 30.0;

/// Upper bound on rejection-sampling rounds before giving up on the
/// minimum distance.
pub const MAX_SAMPLE_ATTEMPTS: usize = 256;

/// A position in canvas space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Euclidean distance to `other`.
	pub fn distance(self, other: Point) -> f64 {
		(self.x - other.x).hypot(self.y - other.y)
	}
}

impl Add for Point {
	type Output = Point;

	fn add(self, rhs: Point) -> Point {
		Point::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl Sub for Point {
	type Output = Point;

	fn sub(self, rhs: Point) -> Point {
		Point::new(self.x - rhs.x, self.y - rhs.y)
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
	pub width: f64,
	pub height: f64,
}

impl Size {
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// The same box turned by 90 degrees.
	pub fn transposed(self) -> Self {
		Self::new(self.height, self.width)
	}

	pub fn diagonal(self) -> f64 {
		self.width.hypot(self.height)
	}
}

/// Axis-aligned box anchored at its top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

impl Rect {
	pub fn new(origin: Point, size: Size) -> Self {
		Self {
			x: origin.x,
			y: origin.y,
			width: size.width,
			height: size.height,
		}
	}

	pub fn origin(&self) -> Point {
		Point::new(self.x, self.y)
	}

	pub fn right(&self) -> f64 {
		self.x + self.width
	}

	pub fn bottom(&self) -> f64 {
		self.y + self.height
	}

	pub fn center(&self) -> Point {
		Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
	}

	/// Strict overlap test; boxes that only share an edge do not intersect.
	pub fn intersects(&self, other: &Rect) -> bool {
		self.x < other.right()
			&& other.x < self.right()
			&& self.y < other.bottom()
			&& other.y < self.bottom()
	}

	/// Grows the box by `by` on every side.
	pub fn inflate(&self, by: f64) -> Rect {
		Rect {
			x: self.x - by,
			y: self.y - by,
			width: self.width + 2.0 * by,
			height: self.height + 2.0 * by,
		}
	}

	pub fn contains_point(&self, p: Point) -> bool {
		p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
	}

	/// Containment test tolerant of rounding at the far edges.
	pub fn contains_rect(&self, other: &Rect) -> bool {
		const EPS: f64 = 1e-9;
		other.x >= self.x - EPS
			&& other.y >= self.y - EPS
			&& other.right() <= self.right() + EPS
			&& other.bottom() <= self.bottom() + EPS
	}
}

/// Parameters of the approximate text box.
///
/// Words longer than two characters are assumed to be narrower per glyph
/// than very short ones, which are usually capitals or digits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxMetrics {
	/// Horizontal slack added to every word.
	pub padding: f64,
	/// Box height as a multiple of the font size.
	pub line_factor: f64,
}

impl BoxMetrics {
	/// Compact boxes used by the cloud view.
	pub const COMPACT: BoxMetrics = BoxMetrics {
		padding: 10.0,
		line_factor: 1.2,
	};

	/// Roomier boxes that leave space for the inline delete control.
	pub const EDITABLE: BoxMetrics = BoxMetrics {
		padding: 20.0,
		line_factor: 1.5,
	};

	pub fn estimate(&self, text: &str, font_size: f64) -> Size {
		let font_size = valid_font_size(font_size);
		let len = text.chars().count().max(1) as f64;
		let width = if len > 2.0 {
			len * font_size * 0.7 + self.padding
		} else {
			len * font_size + self.padding
		};
		Size::new(width, font_size * self.line_factor)
	}
}

impl Default for BoxMetrics {
	fn default() -> Self {
		Self::COMPACT
	}
}

fn valid_font_size(font_size: f64) -> f64 {
	if font_size.is_finite() && font_size > 0.0 {
		font_size
	} else {
		DEFAULT_FONT_SIZE
	}
}

/// Estimated box of `text` at `font_size` with the default metrics.
pub fn estimate_size(text: &str, font_size: f64) -> Size {
	BoxMetrics::default().estimate(text, font_size)
}

/// Moves `origin` so a box of `size` stays inside `canvas`. Boxes larger than
/// the canvas are pinned to the top-left corner.
pub fn clamp_origin(origin: Point, size: Size, canvas: Size) -> Point {
	let max_x = (canvas.width - size.width).max(0.0);
	let max_y = (canvas.height - size.height).max(0.0);
	Point::new(origin.x.clamp(0.0, max_x), origin.y.clamp(0.0, max_y))
}

fn random_point<R: Rng>(canvas: Size, rng: &mut R) -> Point {
	Point::new(
		rng.random::<f64>() * canvas.width.max(0.0),
		rng.random::<f64>() * canvas.height.max(0.0),
	)
}

/// Rejection-samples a point at least `min_distance` away from every anchor,
/// or `None` once [`MAX_SAMPLE_ATTEMPTS`] candidates were rejected.
pub fn try_sample_non_colliding_point<R: Rng>(
	anchors: &[Point],
	canvas: Size,
	min_distance: f64,
	rng: &mut R,
) -> Option<Point> {
	(0..MAX_SAMPLE_ATTEMPTS)
		.map(|_| random_point(canvas, rng))
		.find(|p| anchors.iter().all(|a| p.distance(*a) >= min_distance))
}

/// Like [`try_sample_non_colliding_point`] but always terminates with a
/// point: when the canvas is too crowded the distance constraint is dropped.
pub fn sample_non_colliding_point<R: Rng>(
	anchors: &[Point],
	canvas: Size,
	min_distance: f64,
	rng: &mut R,
) -> Point {
	try_sample_non_colliding_point(anchors, canvas, min_distance, rng).unwrap_or_else(|| {
		debug!(
			"no point {min_distance}px away from {} anchors, sampling unconstrained",
			anchors.len()
		);
		random_point(canvas, rng)
	})
}
