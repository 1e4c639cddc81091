use leptos::prelude::*;
use leptos_router::components::A;
use log::error;

use crate::cloud::{CloudError, CloudId, CloudStore, MemoryStore, NewWordCloud, WordCloud};

/// Stores a cloud from the create form's raw fields.
fn create_cloud(
	store: &mut impl CloudStore,
	name: &str,
	category: &str,
	text: &str,
) -> Result<CloudId, CloudError> {
	let cloud = NewWordCloud::from_input(name, category, text)?;
	Ok(store.add_cloud(cloud).id)
}

/// Lists every stored cloud, with forms to create and delete them.
#[component]
pub fn Home() -> impl IntoView {
	let store = expect_context::<RwSignal<MemoryStore>>();
	let clouds = move || store.with(|s| s.list_clouds());

	let (name, set_name) = signal(String::new());
	let (category, set_category) = signal(String::new());
	let (text, set_text) = signal(String::new());

	let create = move || {
		let (n, c, t) = (name.get_untracked(), category.get_untracked(), text.get_untracked());
		match store.try_update(|s| create_cloud(s, &n, &c, &t)) {
			Some(Ok(_)) => {
				set_name.set(String::new());
				set_category.set(String::new());
				set_text.set(String::new());
			}
			Some(Err(err)) => error!("could not create cloud {n:?}: {err}"),
			None => {}
		}
	};

	view! {
		<div class="cloud-list">
			<h1>"Word Clouds"</h1>
			<p class="subtitle">
				"Drag words to move them. Double-click to rename. "
				"Hover and click the cross to delete."
			</p>
			<ul>
				<For
					each=clouds
					key=|cloud: &WordCloud| cloud.id
					children=move |cloud: WordCloud| {
						let id = cloud.id;
						view! {
							<li>
								<A href=format!("/clouds/{}", id.0)>{cloud.name.clone()}</A>
								<span class="category">{cloud.category.clone()}</span>
								<span class="count">{format!("{} words", cloud.words.len())}</span>
								<button
									class="delete"
									on:click=move |_| {
										store.update(|s| {
											if let Err(err) = s.delete_cloud(id) {
												error!("could not delete cloud {id}: {err}");
											}
										})
									}
								>
									"Delete"
								</button>
							</li>
						}
					}
				/>
			</ul>
			<form
				class="new-cloud"
				on:submit=move |ev| {
					ev.prevent_default();
					create();
				}
			>
				<input
					type="text"
					placeholder="Name"
					prop:value=move || name.get()
					on:input=move |ev| set_name.set(event_target_value(&ev))
				/>
				<input
					type="text"
					placeholder="Category"
					prop:value=move || category.get()
					on:input=move |ev| set_category.set(event_target_value(&ev))
				/>
				<input
					type="text"
					placeholder="Words"
					prop:value=move || text.get()
					on:input=move |ev| set_text.set(event_target_value(&ev))
				/>
				<button type="submit">"Create"</button>
			</form>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn created_cloud_is_listed() {
		let mut store = MemoryStore::new();
		let id = create_cloud(&mut store, "Fruit", "Food", "apple pear").unwrap();
		let cloud = store.fetch_word_cloud(id).unwrap();
		assert_eq!(cloud.name, "Fruit");
		assert_eq!(cloud.words, ["apple", "pear"]);

		assert_eq!(create_cloud(&mut store, "", "Food", "kiwi"), Err(CloudError::EmptyName));
		assert_eq!(store.len(), 1);
	}
}
