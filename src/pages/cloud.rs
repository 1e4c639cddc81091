use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use log::{error, warn};

use crate::cloud::settings::{DEFAULT_BACKGROUND, DEFAULT_FONT_FAMILY};
use crate::cloud::style::DEFAULT_SINGLE_COLOR;
use crate::cloud::{
	CloudId, CloudStore, ColorScheme, LayoutMode, LayoutOptions, MemoryStore, Settings,
	WordCloud, WordEvent, apply_event,
};
use crate::components::word_cloud::WordCloudCanvas;
use crate::pages::not_found::NotFound;

/// Raw values of the display controls above the canvas.
#[derive(Clone, Debug, PartialEq)]
struct DisplayForm {
	font_size: String,
	font_family: String,
	scheme: String,
	single_color: String,
	background: String,
	placement: String,
	rotate: bool,
	roomy: bool,
}

impl Default for DisplayForm {
	fn default() -> Self {
		Self {
			font_size: "30".into(),
			font_family: DEFAULT_FONT_FAMILY.into(),
			scheme: "single-color".into(),
			single_color: DEFAULT_SINGLE_COLOR.into(),
			background: DEFAULT_BACKGROUND.into(),
			placement: LayoutMode::default().tag().into(),
			rotate: false,
			roomy: false,
		}
	}
}

impl DisplayForm {
	fn settings(&self) -> Settings {
		let font_size = self.font_size.trim().parse().unwrap_or(f64::NAN);
		Settings::resolve(
			font_size,
			&self.font_family,
			&self.scheme,
			Some(&self.single_color),
			Some(&self.background),
		)
	}

	fn options(&self) -> LayoutOptions {
		let mode = LayoutMode::from_tag(&self.placement).unwrap_or_else(|| {
			warn!("unknown placement {:?}, using the default", self.placement);
			LayoutMode::default()
		});
		let base = if self.roomy {
			LayoutOptions::editable()
		} else {
			LayoutOptions::default()
		};
		LayoutOptions {
			mode,
			vertical_probability: if self.rotate { 0.5 } else { 0.0 },
			..base
		}
	}
}

/// One cloud on a canvas, with its renames and deletions written back to the
/// store.
#[component]
pub fn CloudView() -> impl IntoView {
	let store = expect_context::<RwSignal<MemoryStore>>();
	let params = use_params_map();
	let cloud_id = Memo::new(move |_| {
		params
			.with(|p| p.get("id"))
			.and_then(|id| id.parse::<u64>().ok())
			.map(CloudId)
	});
	let cloud: Memo<Option<WordCloud>> = Memo::new(move |_| {
		let id = cloud_id.get()?;
		store.with(|s| s.fetch_word_cloud(id).ok())
	});
	let words = Signal::derive(move || {
		cloud.with(|c| c.as_ref().map(|c| c.words.clone()).unwrap_or_default())
	});

	let (form, set_form) = signal(DisplayForm::default());
	let settings = Memo::new(move |_| form.with(DisplayForm::settings));
	let options = Memo::new(move |_| form.with(DisplayForm::options));
	let (new_words, set_new_words) = signal(String::new());

	let on_event = Callback::new(move |event: WordEvent| {
		let Some(id) = cloud_id.get_untracked() else {
			return;
		};
		store.update(|s| {
			if let Err(err) = apply_event(s, id, &event) {
				error!("could not apply {event:?} to cloud {id}: {err}");
			}
		});
	});

	let add_words = move || {
		let Some(id) = cloud_id.get_untracked() else {
			return;
		};
		let text = new_words.get_untracked();
		match store.try_update(|s| s.add_text(id, &text)) {
			Some(Ok(_)) => set_new_words.set(String::new()),
			Some(Err(err)) => error!("could not add {text:?} to cloud {id}: {err}"),
			None => {}
		}
	};

	view! {
		<Show when=move || cloud.with(Option::is_some) fallback=|| view! { <NotFound /> }>
			<div class="cloud-view">
				<header class="cloud-header">
					<A href="/">"All clouds"</A>
					<h1>{move || cloud.with(|c| c.as_ref().map(|c| c.name.clone()))}</h1>
					<span class="category">
						{move || cloud.with(|c| c.as_ref().map(|c| c.category.clone()))}
					</span>
				</header>
				<div class="cloud-controls">
					<label>
						"Size "
						<input
							type="number"
							min="1"
							prop:value=move || form.with(|f| f.font_size.clone())
							on:input=move |ev| {
								set_form.update(|f| f.font_size = event_target_value(&ev))
							}
						/>
					</label>
					<label>
						"Font "
						<input
							type="text"
							prop:value=move || form.with(|f| f.font_family.clone())
							on:change=move |ev| {
								set_form.update(|f| f.font_family = event_target_value(&ev))
							}
						/>
					</label>
					<label>
						"Colours "
						<select on:change=move |ev| {
							set_form.update(|f| f.scheme = event_target_value(&ev))
						}>
							{ColorScheme::TAGS
								.iter()
								.copied()
								.map(|tag| {
									view! {
										<option
											value=tag
											selected=move || form.with(|f| f.scheme == tag)
										>
											{tag}
										</option>
									}
								})
								.collect_view()}
						</select>
					</label>
					<input
						type="color"
						title="Single colour"
						prop:value=move || form.with(|f| f.single_color.clone())
						on:input=move |ev| {
							set_form.update(|f| f.single_color = event_target_value(&ev))
						}
					/>
					<label>
						"Background "
						<input
							type="color"
							prop:value=move || form.with(|f| f.background.clone())
							on:input=move |ev| {
								set_form.update(|f| f.background = event_target_value(&ev))
							}
						/>
					</label>
					<label>
						"Placement "
						<select on:change=move |ev| {
							set_form.update(|f| f.placement = event_target_value(&ev))
						}>
							{LayoutMode::TAGS
								.iter()
								.copied()
								.map(|tag| {
									view! {
										<option
											value=tag
											selected=move || form.with(|f| f.placement == tag)
										>
											{tag}
										</option>
									}
								})
								.collect_view()}
						</select>
					</label>
					<label>
						<input
							type="checkbox"
							prop:checked=move || form.with(|f| f.rotate)
							on:change=move |ev| {
								set_form.update(|f| f.rotate = event_target_checked(&ev))
							}
						/>
						" Rotate"
					</label>
					<label>
						<input
							type="checkbox"
							prop:checked=move || form.with(|f| f.roomy)
							on:change=move |ev| {
								set_form.update(|f| f.roomy = event_target_checked(&ev))
							}
						/>
						" Roomy"
					</label>
				</div>
				<form
					class="add-words"
					on:submit=move |ev| {
						ev.prevent_default();
						add_words();
					}
				>
					<input
						type="text"
						placeholder="Add words"
						prop:value=move || new_words.get()
						on:input=move |ev| set_new_words.set(event_target_value(&ev))
					/>
					<button type="submit">"Add"</button>
				</form>
				<div class="cloud-canvas">
					<WordCloudCanvas
						words=words
						settings=settings
						options=options
						on_event=on_event
					/>
				</div>
			</div>
		</Show>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::cloud::SpiralShape;
	use crate::cloud::geometry::BoxMetrics;

	#[test]
	fn default_form_matches_default_settings() {
		let form = DisplayForm::default();
		assert_eq!(form.settings(), Settings::default());
		assert_eq!(form.options(), LayoutOptions::default());
	}

	#[test]
	fn form_input_resolves_with_fallbacks() {
		let form = DisplayForm {
			font_size: "abc".into(),
			font_family: " ".into(),
			scheme: "plaid".into(),
			background: String::new(),
			..DisplayForm::default()
		};
		let settings = form.settings();
		assert_eq!(settings.font_size, 30.0);
		assert_eq!(settings.font_family, DEFAULT_FONT_FAMILY);
		assert_eq!(settings.color_scheme, ColorScheme::Random);
		assert_eq!(settings.background_color, DEFAULT_BACKGROUND);

		let form = DisplayForm {
			font_size: " 18 ".into(),
			scheme: "single-color".into(),
			single_color: "#336699".into(),
			..DisplayForm::default()
		};
		let settings = form.settings();
		assert_eq!(settings.font_size, 18.0);
		assert_eq!(settings.color_scheme, ColorScheme::SingleColor("#336699".into()));
	}

	#[test]
	fn form_picks_placement_and_rotation() {
		let form = DisplayForm {
			placement: "rectangular".into(),
			rotate: true,
			roomy: true,
			..DisplayForm::default()
		};
		let options = form.options();
		assert_eq!(options.mode, LayoutMode::Spiral(SpiralShape::Rectangular));
		assert_eq!(options.vertical_probability, 0.5);
		assert_eq!(options.metrics, BoxMetrics::EDITABLE);
		assert_eq!(options.padding, 20.0);

		let form = DisplayForm {
			placement: "scatter".into(),
			..DisplayForm::default()
		};
		assert!(matches!(form.options().mode, LayoutMode::Scatter { .. }));
		assert_eq!(form.options().vertical_probability, 0.0);
	}
}
