//! Leptos client-side word cloud editor: app wiring, routes and the sample
//! clouds the in-memory store starts with.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

pub mod cloud;
mod components;
mod pages;

use crate::cloud::{MemoryStore, NewWordCloud};
use crate::pages::cloud::CloudView;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

fn sample_clouds() -> Vec<NewWordCloud> {
	let cloud = |name: &str, category: &str, words: &[&str]| NewWordCloud {
		name: name.into(),
		category: category.into(),
		words: words.iter().map(|w| w.to_string()).collect(),
	};
	vec![
		cloud(
			"Rust",
			"Programming",
			&[
				"ownership", "borrowing", "lifetimes", "traits", "generics", "macros", "cargo",
				"crates", "async", "unsafe", "closures", "iterators", "enums", "match",
			],
		),
		cloud(
			"Seasons",
			"Nature",
			&["spring", "summer", "autumn", "winter", "rain", "snow", "sun", "wind"],
		),
	]
}

/// An app router which renders the cloud list, single clouds, and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();
	provide_context(RwSignal::new(MemoryStore::with_clouds(sample_clouds())));

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text="Word Clouds" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
				<Route path=path!("/clouds/:id") view=CloudView />
			</Routes>
		</Router>
	}
}
