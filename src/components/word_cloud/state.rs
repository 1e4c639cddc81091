use log::debug;

use crate::cloud::{
	InteractionController, LayoutOptions, Point, Settings, Size, WordEvent, WordId, layout,
};

/// Everything the canvas needs between frames.
pub struct WordCloudState {
	pub controller: InteractionController,
	pub settings: Settings,
	pub options: LayoutOptions,
	pub words: Vec<String>,
	pub width: f64,
	pub height: f64,
	pending_resize: Option<(f64, f64)>,
}

impl WordCloudState {
	pub fn new(
		words: Vec<String>,
		settings: Settings,
		options: LayoutOptions,
		width: f64,
		height: f64,
	) -> Self {
		let mut state = Self {
			controller: InteractionController::default(),
			settings: settings.sanitized(),
			options,
			words,
			width,
			height,
			pending_resize: None,
		};
		state.relayout();
		state
	}

	/// Lays the current words out from scratch.
	pub fn relayout(&mut self) {
		let list = layout(
			&self.words,
			Size::new(self.width, self.height),
			&self.settings,
			&self.options,
		);
		debug!("relayout: {} words", list.len());
		self.controller.replace_layout(list);
	}

	/// Takes a new word list, settings or layout options. Unchanged input
	/// keeps the current placements, drags included.
	pub fn set_source(
		&mut self,
		words: Vec<String>,
		settings: Settings,
		options: LayoutOptions,
	) {
		let settings = settings.sanitized();
		if words == self.words && settings == self.settings && options == self.options {
			return;
		}
		self.words = words;
		self.settings = settings;
		self.options = options;
		self.relayout();
	}

	/// Records a resize; several resizes within one frame collapse into a
	/// single relayout in [`Self::apply_pending_resize`].
	pub fn resize(&mut self, width: f64, height: f64) {
		self.pending_resize = Some((width, height));
	}

	pub fn apply_pending_resize(&mut self) -> bool {
		let Some((width, height)) = self.pending_resize.take() else {
			return false;
		};
		if (width, height) == (self.width, self.height) {
			return false;
		}
		self.width = width;
		self.height = height;
		self.relayout();
		true
	}

	/// Handles a press: the delete control wins over starting a drag.
	pub fn press(&mut self, pointer: Point) -> Option<WordEvent> {
		if let Some(id) = self.controller.delete_control_at(pointer) {
			return self.controller.on_delete_requested(id);
		}
		if let Some(id) = self.controller.word_at(pointer) {
			self.controller.on_drag_start(id, pointer);
		}
		None
	}

	pub fn color_of(&self, id: WordId) -> String {
		self.settings.color_for(id.0, self.words.len())
	}
}
