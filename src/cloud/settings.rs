use log::warn;

use super::error::SettingsError;
use super::geometry::DEFAULT_FONT_SIZE;
use super::style::{self, ColorScheme, DEFAULT_SINGLE_COLOR};

pub const DEFAULT_FONT_FAMILY: &str = "Arial";
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

/// How a cloud is drawn. Pure configuration; changing it triggers a fresh
/// layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
	pub font_size: f64,
	pub font_family: String,
	pub color_scheme: ColorScheme,
	pub background_color: String,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			font_size: DEFAULT_FONT_SIZE,
			font_family: DEFAULT_FONT_FAMILY.into(),
			color_scheme: ColorScheme::SingleColor(DEFAULT_SINGLE_COLOR.into()),
			background_color: DEFAULT_BACKGROUND.into(),
		}
	}
}

impl Settings {
	/// Builds settings from raw user input, substituting defaults for
	/// anything invalid.
	pub fn resolve(
		font_size: f64,
		font_family: &str,
		scheme_tag: &str,
		single_color: Option<&str>,
		background_color: Option<&str>,
	) -> Self {
		let color_scheme = match ColorScheme::from_tag(scheme_tag, single_color) {
			Ok(scheme) => scheme,
			Err(SettingsError::MissingSingleColor) => {
				warn!("{}, using {DEFAULT_SINGLE_COLOR}", SettingsError::MissingSingleColor);
				ColorScheme::SingleColor(DEFAULT_SINGLE_COLOR.into())
			}
			Err(err) => {
				warn!("{err}, using random");
				ColorScheme::Random
			}
		};
		Self {
			font_size,
			font_family: font_family.trim().to_owned(),
			color_scheme,
			background_color: background_color
				.map(str::trim)
				.filter(|c| !c.is_empty())
				.unwrap_or(DEFAULT_BACKGROUND)
				.to_owned(),
		}
		.sanitized()
	}

	/// Every problem with these settings, in field order.
	pub fn problems(&self) -> Vec<SettingsError> {
		let mut problems = Vec::new();
		if !(self.font_size.is_finite() && self.font_size > 0.0) {
			problems.push(SettingsError::InvalidFontSize(self.font_size));
		}
		if self.font_family.trim().is_empty() {
			problems.push(SettingsError::EmptyFontFamily);
		}
		if let ColorScheme::SingleColor(color) = &self.color_scheme {
			if color.trim().is_empty() {
				problems.push(SettingsError::MissingSingleColor);
			}
		}
		problems
	}

	pub fn validate(&self) -> Result<(), SettingsError> {
		match self.problems().into_iter().next() {
			Some(err) => Err(err),
			None => Ok(()),
		}
	}

	/// Replaces invalid fields with their defaults.
	pub fn sanitized(mut self) -> Self {
		for problem in self.problems() {
			warn!("invalid settings: {problem}");
			match problem {
				SettingsError::InvalidFontSize(_) => self.font_size = DEFAULT_FONT_SIZE,
				SettingsError::EmptyFontFamily => self.font_family = DEFAULT_FONT_FAMILY.into(),
				SettingsError::MissingSingleColor => {
					self.color_scheme = ColorScheme::SingleColor(DEFAULT_SINGLE_COLOR.into())
				}
				SettingsError::UnknownColorScheme(_) => self.color_scheme = ColorScheme::Random,
			}
		}
		self
	}

	/// CSS font shorthand for canvas text.
	pub fn font(&self) -> String {
		format!("{}px {}", self.font_size, self.font_family)
	}

	pub fn color_for(&self, index: usize, total: usize) -> String {
		style::color_for(index, total, &self.color_scheme)
	}
}
