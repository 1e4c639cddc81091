use std::fmt;

use super::error::CloudError;
use super::interaction::WordEvent;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CloudId(pub u64);

impl fmt::Display for CloudId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// A named, categorised word list. Snapshots are never edited in place; every
/// change produces a new value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordCloud {
	pub id: CloudId,
	pub name: String,
	pub category: String,
	pub words: Vec<String>,
}

/// A cloud that has not been stored yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewWordCloud {
	pub name: String,
	pub category: String,
	pub words: Vec<String>,
}

impl NewWordCloud {
	/// Builds a cloud from the create form: a name, a category and free text
	/// holding the words.
	pub fn from_input(name: &str, category: &str, text: &str) -> Result<Self, CloudError> {
		let name = name.trim();
		if name.is_empty() {
			return Err(CloudError::EmptyName);
		}
		let mut words: Vec<String> = Vec::new();
		for word in split_text(text) {
			if words.contains(&word) {
				return Err(CloudError::DuplicateWord(word));
			}
			words.push(word);
		}
		Ok(Self {
			name: name.to_owned(),
			category: category.trim().to_owned(),
			words,
		})
	}
}

impl WordCloud {
	pub fn contains(&self, word: &str) -> bool {
		self.words.iter().any(|w| w == word)
	}

	/// Replaces every occurrence of `old` with `new`.
	pub fn renamed(&self, old: &str, new: &str) -> Result<Self, CloudError> {
		let new = new.trim();
		if new.is_empty() {
			return Err(CloudError::EmptyWord);
		}
		if !self.contains(old) {
			return Err(CloudError::WordNotFound(old.to_owned()));
		}
		let words = self
			.words
			.iter()
			.map(|w| if w == old { new.to_owned() } else { w.clone() })
			.collect();
		Ok(Self {
			words,
			..self.clone()
		})
	}

	/// Drops every occurrence of `text`. Missing words are ignored.
	pub fn without_word(&self, text: &str) -> Self {
		Self {
			words: self.words.iter().filter(|w| *w != text).cloned().collect(),
			..self.clone()
		}
	}

	/// Appends `words` after normalising them. Fails on empty words and on
	/// words already in the cloud or repeated within `words`.
	pub fn with_words<I, S>(&self, words: I) -> Result<Self, CloudError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut next = self.clone();
		for word in words {
			let word = normalize_word(word.as_ref());
			if word.is_empty() {
				return Err(CloudError::EmptyWord);
			}
			if next.contains(&word) {
				return Err(CloudError::DuplicateWord(word));
			}
			next.words.push(word);
		}
		Ok(next)
	}

	pub fn apply(&self, event: &WordEvent) -> Result<Self, CloudError> {
		match event {
			WordEvent::Renamed { old, new } => self.renamed(old, new),
			WordEvent::Deleted { text } => Ok(self.without_word(text)),
		}
	}
}

/// Strips punctuation and surrounding whitespace from a single word.
pub fn normalize_word(input: &str) -> String {
	input
		.chars()
		.filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
		.collect::<String>()
		.trim()
		.to_owned()
}

/// Splits free text into normalised words, dropping empty ones.
pub fn split_text(input: &str) -> Vec<String> {
	normalize_word(input)
		.split_whitespace()
		.map(str::to_owned)
		.collect()
}
