//! The persistence boundary.
//!
//! [`CloudStore`] is the contract the UI talks to; [`MemoryStore`] keeps
//! clouds for the lifetime of the page. Writes replace whole snapshots, so
//! the last write wins.

use std::collections::BTreeMap;

use log::{debug, info};

use super::error::{StoreError, StoreResult};
use super::interaction::WordEvent;
use super::model::{self, CloudId, NewWordCloud, WordCloud};

pub trait CloudStore {
	fn list_clouds(&self) -> Vec<WordCloud>;

	fn fetch_word_cloud(&self, id: CloudId) -> StoreResult<WordCloud>;

	fn add_cloud(&mut self, cloud: NewWordCloud) -> WordCloud;

	/// Overwrites the stored snapshot with the same id.
	fn update_cloud(&mut self, cloud: WordCloud) -> StoreResult<()>;

	fn delete_cloud(&mut self, id: CloudId) -> StoreResult<()>;

	fn rename_word(&mut self, id: CloudId, old: &str, new: &str) -> StoreResult<WordCloud> {
		let next = self.fetch_word_cloud(id)?.renamed(old, new)?;
		self.update_cloud(next.clone())?;
		Ok(next)
	}

	fn delete_word(&mut self, id: CloudId, text: &str) -> StoreResult<WordCloud> {
		let next = self.fetch_word_cloud(id)?.without_word(text);
		self.update_cloud(next.clone())?;
		Ok(next)
	}

	fn add_words(&mut self, id: CloudId, words: &[String]) -> StoreResult<WordCloud> {
		let next = self.fetch_word_cloud(id)?.with_words(words)?;
		self.update_cloud(next.clone())?;
		Ok(next)
	}

	/// Adds every word in free `text`, as typed into the add-words box.
	fn add_text(&mut self, id: CloudId, text: &str) -> StoreResult<WordCloud> {
		self.add_words(id, &model::split_text(text))
	}
}

/// Forwards an interaction event to `store`.
pub fn apply_event<S: CloudStore + ?Sized>(
	store: &mut S,
	id: CloudId,
	event: &WordEvent,
) -> StoreResult<WordCloud> {
	debug!("applying {event:?} to cloud {id}");
	match event {
		WordEvent::Renamed { old, new } => store.rename_word(id, old, new),
		WordEvent::Deleted { text } => store.delete_word(id, text),
	}
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
	clouds: BTreeMap<CloudId, WordCloud>,
	next_id: u64,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_clouds(clouds: impl IntoIterator<Item = NewWordCloud>) -> Self {
		let mut store = Self::new();
		for cloud in clouds {
			store.add_cloud(cloud);
		}
		store
	}

	pub fn len(&self) -> usize {
		self.clouds.len()
	}

	pub fn is_empty(&self) -> bool {
		self.clouds.is_empty()
	}
}

impl CloudStore for MemoryStore {
	fn list_clouds(&self) -> Vec<WordCloud> {
		self.clouds.values().cloned().collect()
	}

	fn fetch_word_cloud(&self, id: CloudId) -> StoreResult<WordCloud> {
		self.clouds.get(&id).cloned().ok_or(StoreError::NotFound(id))
	}

	fn add_cloud(&mut self, cloud: NewWordCloud) -> WordCloud {
		self.next_id += 1;
		let cloud = WordCloud {
			id: CloudId(self.next_id),
			name: cloud.name,
			category: cloud.category,
			words: cloud.words,
		};
		info!("added cloud {} {:?}", cloud.id, cloud.name);
		self.clouds.insert(cloud.id, cloud.clone());
		cloud
	}

	fn update_cloud(&mut self, cloud: WordCloud) -> StoreResult<()> {
		let slot = self
			.clouds
			.get_mut(&cloud.id)
			.ok_or(StoreError::NotFound(cloud.id))?;
		*slot = cloud;
		Ok(())
	}

	fn delete_cloud(&mut self, id: CloudId) -> StoreResult<()> {
		self.clouds
			.remove(&id)
			.map(|_| info!("deleted cloud {id}"))
			.ok_or(StoreError::NotFound(id))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::cloud::error::CloudError;

	fn store() -> (MemoryStore, CloudId) {
		let mut store = MemoryStore::new();
		let cloud = store.add_cloud(NewWordCloud {
			name: "Colours".into(),
			category: "Art".into(),
			words: vec!["red".into(), "green".into()],
		});
		(store, cloud.id)
	}

	#[test]
	fn ids_are_assigned_in_order() {
		let (mut store, first) = store();
		let second = store.add_cloud(NewWordCloud::default()).id;
		assert!(second > first);
		assert_eq!(store.list_clouds().len(), 2);
	}

	#[test]
	fn events_round_trip_through_store() {
		let (mut store, id) = store();
		apply_event(
			&mut store,
			id,
			&WordEvent::Renamed {
				old: "green".into(),
				new: "teal".into(),
			},
		)
		.unwrap();
		apply_event(&mut store, id, &WordEvent::Deleted { text: "red".into() }).unwrap();
		assert_eq!(store.fetch_word_cloud(id).unwrap().words, ["teal"]);
	}

	#[test]
	fn missing_cloud_is_reported() {
		let (mut store, _) = store();
		let missing = CloudId(99);
		assert_eq!(store.fetch_word_cloud(missing), Err(StoreError::NotFound(missing)));
		assert_eq!(store.delete_word(missing, "red"), Err(StoreError::NotFound(missing)));
		assert_eq!(store.delete_cloud(missing), Err(StoreError::NotFound(missing)));
	}

	#[test]
	fn add_words_rejects_duplicates_without_writing() {
		let (mut store, id) = store();
		assert_eq!(
			store.add_words(id, &["blue".into(), "red".into()]),
			Err(StoreError::Cloud(CloudError::DuplicateWord("red".into())))
		);
		assert_eq!(store.fetch_word_cloud(id).unwrap().words, ["red", "green"]);
	}

	#[test]
	fn delete_cloud_removes_it() {
		let (mut store, id) = store();
		store.delete_cloud(id).unwrap();
		assert!(store.is_empty());
	}

	#[test]
	fn add_text_splits_and_normalizes() {
		let (mut store, id) = store();
		let cloud = store.add_text(id, "Coral, navy!").unwrap();
		assert_eq!(&cloud.words[cloud.words.len() - 2..], ["Coral", "navy"]);
		assert_eq!(store.fetch_word_cloud(id).unwrap(), cloud);
		assert_eq!(
			store.add_text(id, "coral navy"),
			Err(StoreError::Cloud(CloudError::DuplicateWord("navy".into())))
		);
	}
}
