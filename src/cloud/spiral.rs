//! Outward spiral walks used to search for free slots.

use super::geometry::{Point, Size};

/// Step between two points of the rectangular spiral, in pixels.
const RECT_STEP: f64 = 4.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpiralShape {
	/// Smooth spiral stretched to the canvas aspect ratio.
	#[default]
	Archimedean,
	/// Square-cornered spiral, denser along the canvas edges.
	Rectangular,
}

impl SpiralShape {
	/// Infinite sequence of offsets from the spiral's centre, starting
	/// just outside it.
	pub fn walk(self, canvas: Size) -> SpiralWalk {
		SpiralWalk {
			shape: self,
			aspect: aspect(canvas),
			step: 0,
			cursor: Point::default(),
		}
	}

	/// Number of steps after which the walk over `canvas` never comes back
	/// within `radius` of its centre.
	pub fn steps_to_leave(self, canvas: Size, radius: f64) -> usize {
		let squeeze = aspect(canvas).min(1.0);
		let radius = radius.max(0.0);
		let steps = match self {
			// The radius along the shorter axis is `squeeze * t`, `t = step / 10`.
			Self::Archimedean => (10.0 * radius / squeeze).ceil() + 1.0,
			// Every grid cell of the enclosing square is visited once.
			Self::Rectangular => {
				let side = 2.0 * radius / (RECT_STEP * squeeze) + 2.0;
				(side * side).ceil()
			}
		};
		steps as usize
	}
}

fn aspect(canvas: Size) -> f64 {
	if canvas.height > 0.0 && canvas.width > 0.0 {
		canvas.width / canvas.height
	} else {
		1.0
	}
}

#[derive(Clone, Debug)]
pub struct SpiralWalk {
	shape: SpiralShape,
	aspect: f64,
	step: u64,
	cursor: Point,
}

impl Iterator for SpiralWalk {
	type Item = Point;

	fn next(&mut self) -> Option<Point> {
		self.step += 1;
		match self.shape {
			SpiralShape::Archimedean => {
				let t = self.step as f64 * 0.1;
				Some(Point::new(self.aspect * t * t.cos(), t * t.sin()))
			}
			SpiralShape::Rectangular => {
				let (dx, dy) = (RECT_STEP * self.aspect, RECT_STEP);
				// Leg index grows with the square root of the step, so
				// each side of the spiral is one step longer than the last.
				let leg = ((1.0 + 4.0 * self.step as f64).sqrt() - 1.0) as u64;
				match leg & 3 {
					0 => self.cursor.x += dx,
					1 => self.cursor.y += dy,
					2 => self.cursor.x -= dx,
					_ => self.cursor.y -= dy,
				}
				Some(self.cursor)
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn archimedean_moves_outward() {
		let radii: Vec<f64> = SpiralShape::Archimedean
			.walk(Size::new(100.0, 100.0))
			.take(200)
			.map(|p| p.x.hypot(p.y))
			.collect();
		assert!(radii[0] < 1.0);
		assert!(radii[199] > radii[0] * 10.0);
	}

	#[test]
	fn archimedean_stretches_with_aspect_ratio() {
		let first = SpiralShape::Archimedean.walk(Size::new(200.0, 100.0)).next().unwrap();
		let t = 0.1_f64;
		assert!((first.x - 2.0 * t * t.cos()).abs() < 1e-12);
		assert!((first.y - t * t.sin()).abs() < 1e-12);
	}

	#[test]
	fn rectangular_walks_square_corners() {
		let points: Vec<Point> = SpiralShape::Rectangular
			.walk(Size::new(100.0, 100.0))
			.take(6)
			.collect();
		assert_eq!(
			points,
			vec![
				Point::new(0.0, 4.0),
				Point::new(-4.0, 4.0),
				Point::new(-8.0, 4.0),
				Point::new(-8.0, 0.0),
				Point::new(-8.0, -4.0),
				Point::new(-4.0, -4.0),
			]
		);
	}

	#[test]
	fn degenerate_canvas_uses_square_aspect() {
		let first = SpiralShape::Rectangular.walk(Size::new(0.0, 0.0)).next().unwrap();
		assert_eq!(first, Point::new(0.0, 4.0));
	}

	#[test]
	fn walks_are_past_the_radius_after_their_budget() {
		let canvas = Size::new(300.0, 200.0);
		for shape in [SpiralShape::Archimedean, SpiralShape::Rectangular] {
			let budget = shape.steps_to_leave(canvas, canvas.diagonal());
			let last = shape.walk(canvas).nth(budget).unwrap();
			assert!(last.x.hypot(last.y) > canvas.diagonal(), "{shape:?} at {last:?}");
		}
	}
}
