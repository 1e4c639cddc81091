//! Per-word colours.

use std::fmt;
use std::str::FromStr;

use super::error::SettingsError;

/// Ten-colour categorical palette.
pub const CATEGORY10: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

pub const VIBRANT: &[&str] = &["#FF5733", "#33FF57", "#3357FF", "#FF33A1", "#FF8C33", "#33FFF5"];

/// Colour used when a scheme tag is not recognised.
pub const FALLBACK_COLOR: &str = "black";

pub const DEFAULT_SINGLE_COLOR: &str = "#0d0d0d";

/// Rule mapping a word's position in the cloud to a colour.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ColorScheme {
	#[default]
	Random,
	Gradient,
	Monochrome,
	Pastel,
	Dark,
	Vibrant,
	SingleColor(String),
}

impl ColorScheme {
	/// Tags accepted by [`ColorScheme::from_tag`], in menu order.
	pub const TAGS: &[&str] = &[
		"random",
		"gradient",
		"monochrome",
		"pastel",
		"dark",
		"vibrant",
		"single-color",
	];

	/// Parses a scheme tag. `single_color` is only consulted for
	/// `"single-color"`.
	pub fn from_tag(tag: &str, single_color: Option<&str>) -> Result<Self, SettingsError> {
		Ok(match tag {
			"random" => Self::Random,
			"gradient" => Self::Gradient,
			"monochrome" => Self::Monochrome,
			"pastel" => Self::Pastel,
			"dark" => Self::Dark,
			"vibrant" => Self::Vibrant,
			"single-color" => match single_color.map(str::trim) {
				Some(color) if !color.is_empty() => Self::SingleColor(color.to_owned()),
				_ => return Err(SettingsError::MissingSingleColor),
			},
			other => return Err(SettingsError::UnknownColorScheme(other.to_owned())),
		})
	}

	pub fn tag(&self) -> &'static str {
		match self {
			Self::Random => "random",
			Self::Gradient => "gradient",
			Self::Monochrome => "monochrome",
			Self::Pastel => "pastel",
			Self::Dark => "dark",
			Self::Vibrant => "vibrant",
			Self::SingleColor(_) => "single-color",
		}
	}
}

impl fmt::Display for ColorScheme {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.tag())
	}
}

/// Accepts the plain tags, with `single-color:<colour>` to carry a colour.
/// A bare `single-color` uses [`DEFAULT_SINGLE_COLOR`].
impl FromStr for ColorScheme {
	type Err = SettingsError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().split_once(':') {
			Some(("single-color", color)) => Self::from_tag("single-color", Some(color)),
			_ if s.trim() == "single-color" => {
				Self::from_tag("single-color", Some(DEFAULT_SINGLE_COLOR))
			}
			_ => Self::from_tag(s.trim(), None),
		}
	}
}

/// Colour of the `index`-th of `total` words.
pub fn color_for(index: usize, total: usize, scheme: &ColorScheme) -> String {
	let t = if total == 0 {
		0.0
	} else {
		index as f64 / total as f64
	};
	match scheme {
		ColorScheme::Random => CATEGORY10[index % CATEGORY10.len()].to_owned(),
		ColorScheme::Gradient => rainbow(t),
		ColorScheme::Monochrome => {
			let v = (255.0 * t).floor();
			format!("rgb({v}, {v}, {v})")
		}
		ColorScheme::Pastel => {
			let v = (255.0 * t).floor();
			format!("rgb({}, 255, {v})", 255.0 - v)
		}
		ColorScheme::Dark => {
			let v = 100.0 + (t * 100.0).floor();
			format!("rgb({v}, {v}, {v})")
		}
		ColorScheme::Vibrant => VIBRANT[index % VIBRANT.len()].to_owned(),
		ColorScheme::SingleColor(color) => color.clone(),
	}
}

/// [`color_for`] keyed by a raw scheme tag; unknown tags resolve to
/// [`FALLBACK_COLOR`].
pub fn color_for_tag(index: usize, total: usize, tag: &str, single_color: Option<&str>) -> String {
	match ColorScheme::from_tag(tag, single_color) {
		Ok(scheme) => color_for(index, total, &scheme),
		Err(_) => FALLBACK_COLOR.to_owned(),
	}
}

/// Cyclical cubehelix rainbow. `t` wraps around outside `[0, 1]`.
fn rainbow(t: f64) -> String {
	let t = if (0.0..=1.0).contains(&t) {
		t
	} else {
		t - t.floor()
	};
	let ts = (t - 0.5).abs();
	let hue = (360.0 * t - 100.0 + 120.0).to_radians();
	let saturation = 1.5 - 1.5 * ts;
	let lightness = 0.8 - 0.9 * ts;
	let amp = saturation * lightness * (1.0 - lightness);
	let (cos_h, sin_h) = (hue.cos(), hue.sin());

	let r = 255.0 * (lightness + amp * (-0.14861 * cos_h + 1.78277 * sin_h));
	let g = 255.0 * (lightness + amp * (-0.29227 * cos_h - 0.90649 * sin_h));
	let b = 255.0 * (lightness + amp * (1.97294 * cos_h));
	format!("rgb({}, {}, {})", channel(r), channel(g), channel(b))
}

fn channel(v: f64) -> u8 {
	v.round().clamp(0.0, 255.0) as u8
}
