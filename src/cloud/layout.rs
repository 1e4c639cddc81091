//! Spiral placement of words on a canvas.
//!
//! Words are placed one at a time, in the order given. Each word starts at an
//! anchor near the middle of the canvas and walks an outward spiral until its
//! box fits inside the canvas without touching anything placed before it. A
//! word that finds no such slot is still placed, clamped into the canvas, and
//! reported through [`PlacementList::overflowed`].

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::geometry::{self, BoxMetrics, Point, Rect, Size};
use super::settings::Settings;
use super::spiral::SpiralShape;

/// Stable reference to a word: its index in the list a pass was computed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordId(pub usize);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
	#[default]
	Upright,
	/// Turned by 90 degrees; the box is transposed.
	Vertical,
}

impl Rotation {
	pub fn radians(self) -> f64 {
		match self {
			Self::Upright => 0.0,
			Self::Vertical => std::f64::consts::FRAC_PI_2,
		}
	}
}

/// A word with its position on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
	pub id: WordId,
	pub text: String,
	/// Top-left corner.
	pub x: f64,
	pub y: f64,
	/// Effective box after rotation.
	pub size: Size,
	pub rotation: Rotation,
}

impl Placement {
	pub fn origin(&self) -> Point {
		Point::new(self.x, self.y)
	}

	pub fn bounds(&self) -> Rect {
		Rect::new(self.origin(), self.size)
	}
}

/// How candidate positions are generated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LayoutMode {
	Spiral(SpiralShape),
	/// Uniformly random positions kept `min_distance` apart. Boxes may
	/// overlap; only their corners are spread out.
	Scatter { min_distance: f64 },
}

impl Default for LayoutMode {
	fn default() -> Self {
		Self::Spiral(SpiralShape::default())
	}
}

/// Gap kept between scattered words, in pixels.
pub const SCATTER_DISTANCE: f64 = 30.0;

impl LayoutMode {
	/// Tags accepted by [`LayoutMode::from_tag`], in menu order.
	pub const TAGS: &[&str] = &["archimedean", "rectangular", "scatter"];

	pub fn from_tag(tag: &str) -> Option<Self> {
		match tag {
			"archimedean" => Some(Self::Spiral(SpiralShape::Archimedean)),
			"rectangular" => Some(Self::Spiral(SpiralShape::Rectangular)),
			"scatter" => Some(Self::Scatter {
				min_distance: SCATTER_DISTANCE,
			}),
			_ => None,
		}
	}

	pub fn tag(&self) -> &'static str {
		match self {
			Self::Spiral(SpiralShape::Archimedean) => "archimedean",
			Self::Spiral(SpiralShape::Rectangular) => "rectangular",
			Self::Scatter { .. } => "scatter",
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutOptions {
	pub mode: LayoutMode,
	/// Minimum free space around every word.
	pub padding: f64,
	/// Chance of a word being turned vertical, in `[0, 1]`.
	pub vertical_probability: f64,
	/// Spiral steps tried per word before giving up. `None` walks until the
	/// spiral is a canvas diagonal away from its start.
	pub max_steps: Option<usize>,
	pub metrics: BoxMetrics,
	pub seed: u64,
}

impl Default for LayoutOptions {
	fn default() -> Self {
		Self {
			mode: LayoutMode::default(),
			padding: 5.0,
			vertical_probability: 0.0,
			max_steps: None,
			metrics: BoxMetrics::default(),
			seed: 0x5eed,
		}
	}
}

impl LayoutOptions {
	/// Roomy boxes on a rectangular spiral, with half the words turned
	/// vertical. Leaves space around each word for the delete control.
	pub fn editable() -> Self {
		Self {
			mode: LayoutMode::Spiral(SpiralShape::Rectangular),
			padding: 20.0,
			vertical_probability: 0.5,
			metrics: BoxMetrics::EDITABLE,
			..Self::default()
		}
	}
}

/// Result of one layout pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlacementList {
	placements: Vec<Placement>,
	canvas: Size,
	overflowed: Vec<WordId>,
}

impl PlacementList {
	pub fn empty(canvas: Size) -> Self {
		Self {
			placements: Vec::new(),
			canvas,
			overflowed: Vec::new(),
		}
	}

	/// Placements in draw order; the last one is on top.
	pub fn placements(&self) -> &[Placement] {
		&self.placements
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Placement> {
		self.placements.iter()
	}

	pub fn len(&self) -> usize {
		self.placements.len()
	}

	pub fn is_empty(&self) -> bool {
		self.placements.is_empty()
	}

	pub fn canvas(&self) -> Size {
		self.canvas
	}

	/// Words placed best-effort because no free slot was found.
	pub fn overflowed(&self) -> &[WordId] {
		&self.overflowed
	}

	pub fn has_overflow(&self) -> bool {
		!self.overflowed.is_empty()
	}

	pub fn get(&self, id: WordId) -> Option<&Placement> {
		self.placements.iter().find(|p| p.id == id)
	}

	pub(crate) fn get_mut(&mut self, id: WordId) -> Option<&mut Placement> {
		self.placements.iter_mut().find(|p| p.id == id)
	}

	/// Moves a word to the top of the draw order.
	pub(crate) fn raise(&mut self, id: WordId) {
		if let Some(pos) = self.placements.iter().position(|p| p.id == id) {
			let placement = self.placements.remove(pos);
			self.placements.push(placement);
		}
	}

	pub(crate) fn remove(&mut self, id: WordId) -> Option<Placement> {
		let pos = self.placements.iter().position(|p| p.id == id)?;
		self.overflowed.retain(|o| *o != id);
		Some(self.placements.remove(pos))
	}
}

impl<'a> IntoIterator for &'a PlacementList {
	type Item = &'a Placement;
	type IntoIter = std::slice::Iter<'a, Placement>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Places `words` on a canvas of size `canvas`.
pub fn layout<S: AsRef<str>>(
	words: &[S],
	canvas: Size,
	settings: &Settings,
	options: &LayoutOptions,
) -> PlacementList {
	let mut list = PlacementList::empty(canvas);
	if words.is_empty() {
		return list;
	}

	let mut rng = StdRng::seed_from_u64(options.seed);
	for (index, word) in words.iter().enumerate() {
		let id = WordId(index);
		let text = word.as_ref();
		let rotation = if options.vertical_probability > 0.0
			&& rng.random::<f64>() < options.vertical_probability
		{
			Rotation::Vertical
		} else {
			Rotation::Upright
		};
		let mut size = options.metrics.estimate(text, settings.font_size);
		if rotation == Rotation::Vertical {
			size = size.transposed();
		}

		let found = match options.mode {
			LayoutMode::Spiral(shape) => {
				spiral_search(&list.placements, canvas, size, shape, options, &mut rng)
			}
			LayoutMode::Scatter { min_distance } => {
				scatter_search(&list.placements, canvas, size, min_distance, &mut rng)
			}
		};
		let origin = match found {
			Ok(origin) => origin,
			Err(last_tried) => {
				warn!("no free slot for {text:?}, placing it over other words");
				list.overflowed.push(id);
				geometry::clamp_origin(last_tried, size, canvas)
			}
		};

		list.placements.push(Placement {
			id,
			text: text.to_owned(),
			x: origin.x,
			y: origin.y,
			size,
			rotation,
		});
	}

	debug!(
		"laid out {} words on {}x{} ({} overflowed)",
		list.len(),
		canvas.width,
		canvas.height,
		list.overflowed.len()
	);
	list
}

/// Centre of the next word, jittered inside the middle half of the canvas.
fn jittered_anchor(canvas: Size, rng: &mut StdRng) -> Point {
	Point::new(
		canvas.width * (rng.random::<f64>() + 0.5) / 2.0,
		canvas.height * (rng.random::<f64>() + 0.5) / 2.0,
	)
}

/// `Ok(origin)` of the first free slot, or `Err(last tried origin)`.
fn spiral_search(
	placed: &[Placement],
	canvas: Size,
	size: Size,
	shape: SpiralShape,
	options: &LayoutOptions,
	rng: &mut StdRng,
) -> Result<Point, Point> {
	let area = Rect::new(Point::default(), canvas);
	let anchor = jittered_anchor(canvas, rng);
	let start = Point::new(anchor.x - size.width / 2.0, anchor.y - size.height / 2.0);
	let max_delta = canvas.diagonal();

	let mut last_tried = start;
	let offsets = std::iter::once(Point::default()).chain(shape.walk(canvas));
	let budget = options
		.max_steps
		.unwrap_or_else(|| shape.steps_to_leave(canvas, max_delta));
	for offset in offsets.take(budget.max(1)) {
		if offset.x.hypot(offset.y) > max_delta {
			break;
		}
		let origin = start + offset;
		last_tried = origin;
		let candidate = Rect::new(origin, size);
		if !area.contains_rect(&candidate) {
			continue;
		}
		let padded = candidate.inflate(options.padding);
		if placed.iter().all(|p| !p.bounds().intersects(&padded)) {
			return Ok(origin);
		}
	}
	Err(last_tried)
}

fn scatter_search(
	placed: &[Placement],
	canvas: Size,
	size: Size,
	min_distance: f64,
	rng: &mut StdRng,
) -> Result<Point, Point> {
	let anchors: Vec<Point> = placed.iter().map(Placement::origin).collect();
	match geometry::try_sample_non_colliding_point(&anchors, canvas, min_distance, rng) {
		Some(p) => Ok(geometry::clamp_origin(p, size, canvas)),
		None => Err(geometry::sample_non_colliding_point(&[], canvas, 0.0, rng)),
	}
}
