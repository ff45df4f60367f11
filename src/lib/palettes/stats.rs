use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::palettes::color::Color;
use crate::palettes::palette::Palette;

impl Palette {
	/// Blends all colors into one by averaging each channel.
	///
	/// Channel averages are truncated, not rounded: `(255, 0, 0)` and `(0, 0, 1)` average to `(127, 0, 0)`.
	/// An empty palette yields black.
	pub fn average_color(&self) -> Color {
		if self.is_empty() {
			return Color::BLACK;
		}

		let (mut total_r, mut total_g, mut total_b) = (0_u32, 0_u32, 0_u32);
		for c in self {
			total_r += c.r as u32;
			total_g += c.g as u32;
			total_b += c.b as u32;
		}

		let count = self.len() as u32;
		Color {
			r: (total_r / count) as u8,
			g: (total_g / count) as u8,
			b: (total_b / count) as u8,
		}
	}

	/// Returns the color that occurs most often, or black if the palette is empty.
	/// When several colors are tied, the one added first wins.
	pub fn most_frequent(&self) -> Color {
		let colors = self.colors();

		let mut result = Color::BLACK;
		let mut max_count = 0;

		for (i, c) in colors.iter().enumerate() {
			// only looking forward is enough: the first occurrence of a color always sees all of them
			let current_count = colors[i..].iter().filter(|other| *other == c).count();
			if current_count > max_count {
				max_count = current_count;
				result = *c;
			}
		}

		result
	}

	pub fn summary(&self) -> Summary {
		Summary {
			colors: self.colors().to_vec(),
			average: self.average_color(),
			most_frequent: self.most_frequent(),
			size: self.len(),
			is_empty: self.is_empty(),
		}
	}
}

/// A snapshot of a palette and its derived values.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
	pub colors: Vec<Color>,
	pub average: Color,
	pub most_frequent: Color,
	pub size: usize,
	pub is_empty: bool,
}

impl Display for Summary {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		writeln!(f, "Average color: {}", self.average)?;
		writeln!(f, "Most frequent color: {}", self.most_frequent)?;
		writeln!(f, "Palette size: {}", self.size)?;
		writeln!(f, "Is empty? {}", self.is_empty)
	}
}
