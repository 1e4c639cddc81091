//! Gesture handling over a live [`PlacementList`].
//!
//! The controller never persists anything. Edits that should outlive the
//! current pass come out as [`WordEvent`]s; the caller forwards them to the
//! store and lays out the updated word list again.

use log::{debug, trace};

use super::geometry::{self, Point, Rect, Size};
use super::layout::{Placement, PlacementList, WordId};

/// Side of the square delete control in the top-right corner of a hovered
/// word.
pub const DELETE_CONTROL_SIZE: f64 = 14.0;

/// Change requested by the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WordEvent {
	Renamed { old: String, new: String },
	Deleted { text: String },
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct DragState {
	id: WordId,
	/// Pointer position relative to the word's origin when the drag began.
	grab: Point,
}

/// Text typed into an inline editor but not yet committed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingEdit {
	pub id: WordId,
	/// Text of the word when the editor opened.
	pub original: String,
	pub text: String,
}

#[derive(Clone, Debug, Default)]
pub struct InteractionController {
	placements: PlacementList,
	drag: Option<DragState>,
	edit: Option<PendingEdit>,
	hover: Option<WordId>,
}

impl InteractionController {
	pub fn new(placements: PlacementList) -> Self {
		Self {
			placements,
			..Self::default()
		}
	}

	/// The live placements, including drags and optimistic deletes.
	pub fn placements(&self) -> &PlacementList {
		&self.placements
	}

	/// Swaps in the result of a newer layout pass. Ids are positions in the
	/// pass's word list, so gesture state follows its word's text into the
	/// new pass and is dropped when that word is gone.
	pub fn replace_layout(&mut self, placements: PlacementList) {
		let previous = std::mem::replace(&mut self.placements, placements);
		let text_of = |id: WordId| previous.get(id).map(|p| p.text.clone());

		self.drag = self.drag.and_then(|d| {
			let id = self.retarget(d.id, &text_of(d.id)?)?;
			Some(DragState { id, ..d })
		});
		self.hover = self
			.hover
			.and_then(|id| self.retarget(id, &text_of(id)?));
		self.edit = self.edit.take().and_then(|edit| {
			let id = self.retarget(edit.id, &edit.original)?;
			if id != edit.id {
				debug!("editor on {:?} moved to {id:?}", edit.original);
			}
			Some(PendingEdit { id, ..edit })
		});
	}

	/// Id of the word showing `text` in the live placements, preferring
	/// `id` when it still holds that text.
	fn retarget(&self, id: WordId, text: &str) -> Option<WordId> {
		if self.placements.get(id).is_some_and(|p| p.text == text) {
			return Some(id);
		}
		self.placements.iter().find(|p| p.text == text).map(|p| p.id)
	}

	/// Top-most word under `point`.
	pub fn word_at(&self, point: Point) -> Option<WordId> {
		self.placements
			.iter()
			.rev()
			.find(|p| p.bounds().contains_point(point))
			.map(|p| p.id)
	}

	pub fn delete_control_rect(&self, id: WordId) -> Option<Rect> {
		let bounds = self.placements.get(id)?.bounds();
		let side = DELETE_CONTROL_SIZE.min(bounds.width).min(bounds.height);
		Some(Rect::new(
			Point::new(bounds.right() - side, bounds.y),
			Size::new(side, side),
		))
	}

	/// The hovered word whose delete control is under `point`. The control
	/// is only live while its word is hovered.
	pub fn delete_control_at(&self, point: Point) -> Option<WordId> {
		let id = self.hover?;
		self.delete_control_rect(id)
			.filter(|r| r.contains_point(point))
			.map(|_| id)
	}

	pub fn on_pointer_enter(&mut self, id: WordId) {
		if self.placements.get(id).is_some() {
			self.hover = Some(id);
		}
	}

	pub fn on_pointer_leave(&mut self) {
		self.hover = None;
	}

	pub fn hovered(&self) -> Option<WordId> {
		self.hover
	}

	/// Starts dragging `id`, grabbed at `pointer`, and raises it above the
	/// other words. Returns `false` for unknown words.
	pub fn on_drag_start(&mut self, id: WordId, pointer: Point) -> bool {
		let Some(origin) = self.placements.get(id).map(Placement::origin) else {
			return false;
		};
		self.placements.raise(id);
		self.drag = Some(DragState {
			id,
			grab: pointer - origin,
		});
		true
	}

	/// Moves `id` so its top-left corner is as close to `(x, y)` as the
	/// canvas allows. Overlap with other words is not checked.
	pub fn on_drag_move(&mut self, id: WordId, x: f64, y: f64) -> Option<Point> {
		let canvas = self.placements.canvas();
		let placement = self.placements.get_mut(id)?;
		let origin = geometry::clamp_origin(Point::new(x, y), placement.size, canvas);
		placement.x = origin.x;
		placement.y = origin.y;
		trace!("dragged {:?} to {origin:?}", placement.text);
		Some(origin)
	}

	/// Routes pointer motion: moves the dragged word, or updates the hover
	/// target when nothing is being dragged.
	pub fn on_pointer_move(&mut self, pointer: Point) {
		match self.drag {
			Some(drag) => {
				let target = pointer - drag.grab;
				self.on_drag_move(drag.id, target.x, target.y);
			}
			None => {
				self.hover = self.word_at(pointer);
			}
		}
	}

	pub fn on_drag_end(&mut self) {
		self.drag = None;
	}

	pub fn dragging(&self) -> Option<WordId> {
		self.drag.map(|d| d.id)
	}

	/// Opens the inline editor on `id`, seeded with its current text.
	pub fn begin_edit(&mut self, id: WordId) -> Option<&PendingEdit> {
		let text = self.placements.get(id)?.text.clone();
		self.drag = None;
		self.edit = Some(PendingEdit {
			id,
			original: text.clone(),
			text,
		});
		self.edit.as_ref()
	}

	/// Records a keystroke. Nothing is emitted until the edit is committed.
	pub fn on_text_input(&mut self, text: &str) {
		if let Some(edit) = self.edit.as_mut() {
			edit.text.clear();
			edit.text.push_str(text);
		}
	}

	pub fn pending_edit(&self) -> Option<&PendingEdit> {
		self.edit.as_ref()
	}

	pub fn is_editing(&self, id: WordId) -> bool {
		self.edit.as_ref().is_some_and(|e| e.id == id)
	}

	/// Commits `new_text` for `id`. Emits [`WordEvent::Renamed`] only when
	/// the trimmed text is non-empty and differs from the word's text when
	/// the editor opened (or its current text without an open editor). The
	/// placements are left alone; the renamed word appears with the next
	/// layout pass.
	pub fn on_text_commit(&mut self, id: WordId, new_text: &str) -> Option<WordEvent> {
		match self.edit.take_if(|e| e.id == id) {
			Some(edit) => rename(edit.original, new_text),
			None => rename(self.placements.get(id)?.text.clone(), new_text),
		}
	}

	/// Commits the pending edit, if any (blur or Enter).
	pub fn commit_pending(&mut self) -> Option<WordEvent> {
		let edit = self.edit.take()?;
		rename(edit.original, &edit.text)
	}

	/// Drops the pending edit (Escape).
	pub fn cancel_edit(&mut self) {
		self.edit = None;
	}

	/// Removes `id` from the live placements right away and reports the
	/// deletion.
	pub fn on_delete_requested(&mut self, id: WordId) -> Option<WordEvent> {
		let removed = self.placements.remove(id)?;
		if self.hover == Some(id) {
			self.hover = None;
		}
		if self.drag.is_some_and(|d| d.id == id) {
			self.drag = None;
		}
		if self.is_editing(id) {
			self.edit = None;
		}
		debug!("deleting {:?}", removed.text);
		Some(WordEvent::Deleted { text: removed.text })
	}
}

fn rename(old: String, new_text: &str) -> Option<WordEvent> {
	let new = new_text.trim();
	if new.is_empty() || new == old {
		return None;
	}
	debug!("renaming {old:?} to {new:?}");
	Some(WordEvent::Renamed {
		old,
		new: new.to_owned(),
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::cloud::geometry::Size;
	use crate::cloud::layout::{LayoutOptions, layout};
	use crate::cloud::settings::Settings;

	fn controller(words: &[&str]) -> InteractionController {
		let settings = Settings {
			font_size: 20.0,
			..Settings::default()
		};
		InteractionController::new(layout(
			words,
			Size::new(800.0, 600.0),
			&settings,
			&LayoutOptions::default(),
		))
	}

	#[test]
	fn commit_with_same_text_emits_nothing() {
		let mut c = controller(&["alpha", "beta"]);
		assert_eq!(c.on_text_commit(WordId(0), "alpha"), None);
		assert_eq!(c.on_text_commit(WordId(0), "  alpha "), None);
		assert_eq!(c.on_text_commit(WordId(0), "   "), None);
	}

	#[test]
	fn commit_with_new_text_emits_one_rename() {
		let mut c = controller(&["alpha", "beta"]);
		assert_eq!(
			c.on_text_commit(WordId(1), " gamma "),
			Some(WordEvent::Renamed {
				old: "beta".into(),
				new: "gamma".into()
			})
		);
		assert_eq!(c.placements().get(WordId(1)).unwrap().text, "beta");
	}

	#[test]
	fn keystrokes_only_emit_on_commit() {
		let mut c = controller(&["alpha"]);
		assert_eq!(c.begin_edit(WordId(0)).map(|e| e.text.as_str()), Some("alpha"));
		c.on_text_input("alp");
		c.on_text_input("alpine");
		assert_eq!(c.pending_edit().map(|e| e.text.as_str()), Some("alpine"));
		assert_eq!(
			c.commit_pending(),
			Some(WordEvent::Renamed {
				old: "alpha".into(),
				new: "alpine".into()
			})
		);
		assert_eq!(c.pending_edit(), None);
		assert_eq!(c.commit_pending(), None);
	}

	#[test]
	fn cancelled_edit_emits_nothing() {
		let mut c = controller(&["alpha"]);
		c.begin_edit(WordId(0));
		c.on_text_input("omega");
		c.cancel_edit();
		assert_eq!(c.commit_pending(), None);
	}

	#[test]
	fn drag_is_clamped_to_canvas() {
		let mut c = controller(&["alpha"]);
		let size = c.placements().get(WordId(0)).unwrap().size;
		let origin = c.on_drag_move(WordId(0), 5000.0, -300.0).unwrap();
		assert_eq!(origin, Point::new(800.0 - size.width, 0.0));
		let p = c.placements().get(WordId(0)).unwrap();
		assert!(p.x >= 0.0 && p.x <= 800.0 - p.size.width);
		assert!(p.y >= 0.0 && p.y <= 600.0 - p.size.height);
	}

	#[test]
	fn pointer_drag_keeps_grab_offset() {
		let mut c = controller(&["alpha", "beta"]);
		let start = c.placements().get(WordId(0)).unwrap().origin();
		let grab = start + Point::new(3.0, 2.0);
		assert!(c.on_drag_start(WordId(0), grab));
		assert_eq!(c.placements().placements().last().unwrap().id, WordId(0));
		c.on_pointer_move(grab + Point::new(10.0, 10.0));
		let moved = c.placements().get(WordId(0)).unwrap().origin();
		assert!((moved.x - (start.x + 10.0)).abs() < 1e-9);
		assert!((moved.y - (start.y + 10.0)).abs() < 1e-9);
		c.on_drag_end();
		assert_eq!(c.dragging(), None);
	}

	#[test]
	fn delete_is_optimistic() {
		let mut c = controller(&["alpha", "beta"]);
		c.on_pointer_enter(WordId(0));
		assert_eq!(
			c.on_delete_requested(WordId(0)),
			Some(WordEvent::Deleted {
				text: "alpha".into()
			})
		);
		assert_eq!(c.placements().len(), 1);
		assert_eq!(c.hovered(), None);
		assert_eq!(c.on_delete_requested(WordId(0)), None);
	}

	#[test]
	fn delete_control_only_for_hovered_word() {
		let mut c = controller(&["alpha"]);
		let control = c.delete_control_rect(WordId(0)).unwrap();
		let inside = control.center();
		assert_eq!(c.delete_control_at(inside), None);
		c.on_pointer_move(inside);
		assert_eq!(c.hovered(), Some(WordId(0)));
		assert_eq!(c.delete_control_at(inside), Some(WordId(0)));
		c.on_pointer_leave();
		assert_eq!(c.delete_control_at(inside), None);
	}

	#[test]
	fn hit_testing_prefers_top_word() {
		let mut c = controller(&["alpha", "beta"]);
		let target = c.placements().get(WordId(1)).unwrap().origin();
		c.on_drag_move(WordId(0), target.x, target.y);
		let overlap = target + Point::new(1.0, 1.0);
		assert_eq!(c.word_at(overlap), Some(WordId(1)));
		c.on_drag_start(WordId(0), overlap);
		assert_eq!(c.word_at(overlap), Some(WordId(0)));
	}

	#[test]
	fn relayout_drops_stale_gestures() {
		let mut c = controller(&["alpha", "beta"]);
		c.on_pointer_enter(WordId(1));
		c.begin_edit(WordId(1));
		c.replace_layout(controller(&["alpha"]).placements().clone());
		assert_eq!(c.hovered(), None);
		assert_eq!(c.pending_edit(), None);
	}

	#[test]
	fn edit_follows_its_word_across_relayout() {
		let mut c = controller(&["alpha", "beta", "gamma"]);
		c.begin_edit(WordId(1));
		c.on_text_input("bee");
		c.on_pointer_enter(WordId(2));
		c.on_delete_requested(WordId(0));
		c.replace_layout(controller(&["beta", "gamma"]).placements().clone());
		assert!(c.is_editing(WordId(0)));
		assert_eq!(c.hovered(), Some(WordId(1)));
		assert_eq!(
			c.commit_pending(),
			Some(WordEvent::Renamed {
				old: "beta".into(),
				new: "bee".into()
			})
		);
	}

	#[test]
	fn edit_is_dropped_when_its_word_is_gone() {
		let mut c = controller(&["alpha", "beta"]);
		c.begin_edit(WordId(0));
		c.replace_layout(controller(&["omega", "beta"]).placements().clone());
		assert_eq!(c.pending_edit(), None);
		assert_eq!(
			c.on_text_commit(WordId(0), "alpine"),
			Some(WordEvent::Renamed {
				old: "omega".into(),
				new: "alpine".into()
			})
		);

		c.begin_edit(WordId(1));
		assert_eq!(
			c.on_text_commit(WordId(1), "bravo"),
			Some(WordEvent::Renamed {
				old: "beta".into(),
				new: "bravo".into()
			})
		);
	}
}
