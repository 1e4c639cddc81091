use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::WordCloudState;
use crate::cloud::{Placement, WordId};

const HOVER_STROKE: &str = "rgba(0, 0, 0, 0.8)";
const DELETE_COLOR: &str = "#d62728";

pub fn render(state: &WordCloudState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(&state.settings.background_color);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);

	ctx.set_font(&state.settings.font());
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	let placements = state.controller.placements();
	for placement in placements {
		// The inline editor shows the text while it is being edited.
		if state.controller.is_editing(placement.id) {
			continue;
		}
		draw_word(ctx, placement, &state.color_of(placement.id));
	}

	if let Some(id) = state.controller.hovered() {
		if !state.controller.is_editing(id) {
			draw_hover(state, ctx, id);
		}
	}
}

fn draw_word(ctx: &CanvasRenderingContext2d, placement: &Placement, color: &str) {
	let center = placement.bounds().center();
	ctx.save();
	let _ = ctx.translate(center.x, center.y);
	let _ = ctx.rotate(placement.rotation.radians());
	ctx.set_fill_style_str(color);
	let _ = ctx.fill_text(&placement.text, 0.0, 0.0);
	ctx.restore();
}

fn draw_hover(state: &WordCloudState, ctx: &CanvasRenderingContext2d, id: WordId) {
	let Some(placement) = state.controller.placements().get(id) else {
		return;
	};
	let bounds = placement.bounds();

	ctx.set_stroke_style_str(HOVER_STROKE);
	ctx.set_line_width(1.0);
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(4.0),
		&JsValue::from_f64(2.0),
	));
	ctx.begin_path();
	ctx.rect(bounds.x, bounds.y, bounds.width, bounds.height);
	ctx.stroke();
	let _ = ctx.set_line_dash(&js_sys::Array::new());

	if let Some(control) = state.controller.delete_control_rect(id) {
		let inset = control.width * 0.25;
		ctx.set_stroke_style_str(DELETE_COLOR);
		ctx.set_line_width(2.0);
		ctx.begin_path();
		ctx.move_to(control.x + inset, control.y + inset);
		ctx.line_to(control.right() - inset, control.bottom() - inset);
		ctx.move_to(control.right() - inset, control.y + inset);
		ctx.line_to(control.x + inset, control.bottom() - inset);
		ctx.stroke();
	}
}
