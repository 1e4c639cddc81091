use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::info;
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, FocusEvent, HtmlCanvasElement, KeyboardEvent, MouseEvent, Window,
};

use super::render;
use super::state::WordCloudState;
use crate::cloud::{LayoutOptions, Point, Rect, Settings, WordEvent};

/// Box and seed text of the inline word editor.
#[derive(Clone, Debug, PartialEq)]
struct EditorBox {
	rect: Rect,
	text: String,
}

fn canvas_point(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<Point> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some(Point::new(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

fn measure(
	canvas: &HtmlCanvasElement,
	window: &Window,
	fullscreen: bool,
	width: Option<f64>,
	height: Option<f64>,
) -> (f64, f64) {
	if fullscreen {
		return (
			window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(800.0),
			window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(600.0),
		);
	}
	(
		width.unwrap_or_else(|| {
			canvas
				.parent_element()
				.map(|p| p.client_width() as f64)
				.filter(|w| *w > 0.0)
				.unwrap_or(800.0)
		}),
		height.unwrap_or_else(|| {
			canvas
				.parent_element()
				.map(|p| p.client_height() as f64)
				.filter(|h| *h > 0.0)
				.unwrap_or(600.0)
		}),
	)
}

fn editor_style(editor: Option<EditorBox>, settings: &Settings) -> String {
	match editor {
		Some(EditorBox { rect, .. }) => format!(
			"position: absolute; left: {}px; top: {}px; width: {}px; height: {}px; \
			 font: {}; text-align: center; border: 1px solid black; border-radius: 4px; \
			 background: transparent; padding: 0; box-sizing: border-box;",
			rect.x,
			rect.y,
			rect.width,
			rect.height,
			settings.font()
		),
		None => "display: none;".into(),
	}
}

/// Canvas that lays out `words`, lets the user drag, rename and delete them,
/// and reports renames and deletions through `on_event`.
#[component]
pub fn WordCloudCanvas(
	#[prop(into)] words: Signal<Vec<String>>,
	#[prop(into)] settings: Signal<Settings>,
	#[prop(into)] on_event: Callback<WordEvent>,
	#[prop(into, default = Signal::stored(LayoutOptions::default()))]
	options: Signal<LayoutOptions>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let input_ref = NodeRef::<leptos::html::Input>::new();
	let (editor, set_editor) = signal(None::<EditorBox>);
	let state: Rc<RefCell<Option<WordCloudState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if state_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = measure(&canvas, &window, fullscreen, width, height);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();
		*state_init.borrow_mut() = Some(WordCloudState::new(
			words.get_untracked(),
			settings.get_untracked(),
			options.get_untracked(),
			w,
			h,
		));
		info!("word cloud canvas ready at {w}x{h}");

		let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let win: Window = web_sys::window().unwrap();
			let (nw, nh) = measure(&canvas_resize, &win, fullscreen, width, height);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.apply_pending_resize();
				render::render(s, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	// A new word list, settings or options start a fresh layout pass.
	let state_src = state.clone();
	Effect::new(move |_| {
		let (words, settings, options) = (words.get(), settings.get(), options.get());
		if let Some(ref mut s) = *state_src.borrow_mut() {
			s.set_source(words, settings, options);
		}
	});

	Effect::new(move |_| {
		if editor.with(Option::is_some) {
			if let Some(input) = input_ref.get_untracked() {
				let _ = input.focus();
				input.select();
			}
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(p) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		let event = state_md.borrow_mut().as_mut().and_then(|s| s.press(p));
		if let Some(event) = event {
			on_event.run(event);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(p) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			s.controller.on_pointer_move(p);
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.controller.on_drag_end();
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.controller.on_drag_end();
			s.controller.on_pointer_leave();
		}
	};

	let state_dc = state.clone();
	let on_dblclick = move |ev: MouseEvent| {
		let Some(p) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		let opened = state_dc.borrow_mut().as_mut().and_then(|s| {
			let id = s.controller.word_at(p)?;
			s.controller.on_drag_end();
			let rect = s.controller.placements().get(id)?.bounds();
			let text = s.controller.begin_edit(id)?.text.clone();
			Some(EditorBox { rect, text })
		});
		if opened.is_some() {
			set_editor.set(opened);
		}
	};

	let state_in = state.clone();

	// Blur is the commit point; Enter blurs the editor.
	let state_bl = state.clone();
	let on_blur = move |_: FocusEvent| {
		let event = state_bl
			.borrow_mut()
			.as_mut()
			.and_then(|s| s.controller.commit_pending());
		set_editor.set(None);
		if let Some(event) = event {
			on_event.run(event);
		}
	};

	let state_kd = state.clone();
	let on_keydown = move |ev: KeyboardEvent| match ev.key().as_str() {
		"Enter" => {
			ev.prevent_default();
			if let Some(input) = input_ref.get_untracked() {
				let _ = input.blur();
			}
		}
		"Escape" => {
			if let Some(ref mut s) = *state_kd.borrow_mut() {
				s.controller.cancel_edit();
			}
			set_editor.set(None);
		}
		_ => {}
	};

	view! {
		<div class="word-cloud" style="position: relative; width: 100%; height: 100%;">
			<canvas
				node_ref=canvas_ref
				class="word-cloud-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:dblclick=on_dblclick
				style="display: block; cursor: grab;"
			/>
			<input
				node_ref=input_ref
				type="text"
				class="word-cloud-editor"
				prop:value=move || editor.get().map(|e| e.text).unwrap_or_default()
				style=move || editor_style(editor.get(), &settings.get())
				on:input=move |ev| {
					let text = event_target_value(&ev);
					if let Some(ref mut s) = *state_in.borrow_mut() {
						s.controller.on_text_input(&text);
					}
				}
				on:blur=on_blur
				on:keydown=on_keydown
			/>
		</div>
	}
}
