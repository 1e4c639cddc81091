use leptos::prelude::*;
use leptos_router::components::A;

/// 404 page, also shown for cloud ids that do not exist.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="not-found">
			<h1>"Nothing here"</h1>
			<A href="/">"Back to all clouds"</A>
		</div>
	}
}
