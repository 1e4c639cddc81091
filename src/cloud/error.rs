//! Error types for settings, cloud snapshots and the cloud store.

use super::model::CloudId;

/// Invalid rendering settings. Always recovered by substituting a default.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
	#[error("font size must be a positive number, got {0}")]
	InvalidFontSize(f64),
	#[error("font family must not be empty")]
	EmptyFontFamily,
	#[error("unknown color scheme: {0:?}")]
	UnknownColorScheme(String),
	#[error("the single-color scheme requires a color")]
	MissingSingleColor,
}

/// Rejected edits to a word cloud's word list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CloudError {
	#[error("cloud name must not be empty")]
	EmptyName,
	#[error("word must not be empty")]
	EmptyWord,
	#[error("word {0:?} is already in the cloud")]
	DuplicateWord(String),
	#[error("word {0:?} is not in the cloud")]
	WordNotFound(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
	#[error("word cloud {0} does not exist")]
	NotFound(CloudId),
	#[error(transparent)]
	Cloud(#[from] CloudError),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
