use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;

use crate::palettes::palette::PaletteError;

static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^\(?\s*(?P<red>\d+)\s*[,\s]\s*(?P<green>\d+)\s*[,\s]\s*(?P<blue>\d+)\s*\)?$").unwrap()
});

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Color {
	pub const BLACK: Color = Color::new(0, 0, 0);

	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// Formats the color as `#RRGGBB`.
	pub fn to_hex(self) -> String {
		let mut rgb = self.r as u32;
		rgb = (rgb << 8) | self.g as u32;
		rgb = (rgb << 8) | self.b as u32;
		format!("#{:06X}", rgb)
	}
}

impl From<[u8; 3]> for Color {
	fn from(v: [u8; 3]) -> Self {
		Self {
			r: v[0],
			g: v[1],
			b: v[2],
		}
	}
}

impl From<u32> for Color {
	fn from(v: u32) -> Self {
		Self {
			r: ((v >> 16) & 0xFF) as u8,
			g: ((v >> 8) & 0xFF) as u8,
			b: (v & 0xFF) as u8,
		}
	}
}

impl Display for Color {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "({}, {}, {})", self.r, self.g, self.b)
	}
}

fn parse_hex(s: &str) -> Option<Color> {
	let stripped = s.strip_prefix("0x").unwrap_or(s);
	let stripped = stripped.strip_prefix("#").unwrap_or(stripped);

	if stripped.len() != 6 || !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
		return None;
	}

	u32::from_str_radix(stripped, 16).ok().map(Color::from)
}

fn parse_channel(groups: &Captures, name: &str, input: &str) -> Result<u8, PaletteError> {
	let value = groups.name(name).map(|m| m.as_str()).unwrap_or_default();
	value.parse::<u8>().map_err(|_| PaletteError::InvalidColor {
		input: input.to_string(),
		msg: format!("{name} value {value} is outside of 0-255"),
	})
}

/// Parses either the `(r, g, b)` notation produced by [Display] or a hexadecimal
/// `#RRGGBB`/`0xRRGGBB`/`RRGGBB` value.
impl FromStr for Color {
	type Err = PaletteError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		if trimmed.is_empty() {
			return Err(PaletteError::InvalidColor { input: s.to_string(), msg: "empty color string".to_string() });
		}

		if let Some(groups) = RGB_RE.captures(trimmed) {
			return Ok(Color {
				r: parse_channel(&groups, "red", trimmed)?,
				g: parse_channel(&groups, "green", trimmed)?,
				b: parse_channel(&groups, "blue", trimmed)?,
			});
		}

		parse_hex(trimmed).ok_or_else(|| PaletteError::InvalidColor {
			input: trimmed.to_string(),
			msg: "not an (r, g, b) triple or a hexadecimal color value".to_string(),
		})
	}
}
