use std::fmt::{Display, Formatter};
use std::io::Write;

use crate::palettes::MAX_PALETTE_COLORS;
use crate::palettes::color::Color;

/// A bounded, ordered collection of up to [MAX_PALETTE_COLORS] colors.
///
/// Colors are appended at the end and removed from the end, so the palette behaves like a stack.
/// Adding to a full palette or removing from an empty one is a programming error and panics;
/// use [Palette::is_full] and [Palette::is_empty] to check beforehand.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
	colors: [Color; MAX_PALETTE_COLORS],
	count: usize,
}

impl Default for Palette {
	fn default() -> Self {
		Self::new()
	}
}

impl Palette {
	pub const fn new() -> Self {
		Self {
			colors: [Color::BLACK; MAX_PALETTE_COLORS],
			count: 0,
		}
	}

	/// Appends `c` to the palette.
	///
	/// # Panics
	/// Panics if the palette already holds [MAX_PALETTE_COLORS] colors.
	pub fn add_color(&mut self, c: Color) {
		assert!(self.count < MAX_PALETTE_COLORS, "Violation of: palette size < {MAX_PALETTE_COLORS}");

		self.colors[self.count] = c;
		self.count += 1;
	}

	/// Removes and returns the most recently added color.
	///
	/// # Panics
	/// Panics if the palette is empty.
	pub fn remove_color(&mut self) -> Color {
		assert!(self.count > 0, "Violation of: palette is not empty");

		self.count -= 1;
		self.colors[self.count]
	}

	pub fn contains(&self, c: Color) -> bool {
		self.colors().contains(&c)
	}

	pub fn len(&self) -> usize {
		self.count
	}

	pub fn is_empty(&self) -> bool {
		self.count == 0
	}

	pub fn is_full(&self) -> bool {
		self.count == MAX_PALETTE_COLORS
	}

	/// The colors currently in the palette, in insertion order.
	pub fn colors(&self) -> &[Color] {
		&self.colors[..self.count]
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Color> {
		self.colors().iter()
	}

	/// Writes the header line followed by one `(r, g, b)` line per color.
	pub fn display<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
		write!(out, "{self}")
	}
}

// slots past `count` are unused storage and don't take part in equality
impl PartialEq for Palette {
	fn eq(&self, other: &Self) -> bool {
		self.colors() == other.colors()
	}
}

impl Eq for Palette {}

impl Display for Palette {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		writeln!(f, "Current Colors in Palette:")?;
		for c in self {
			writeln!(f, "{c}")?;
		}
		Ok(())
	}
}

impl<'a> IntoIterator for &'a Palette {
	type Item = &'a Color;
	type IntoIter = std::slice::Iter<'a, Color>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl TryFrom<&[Color]> for Palette {
	type Error = PaletteError;

	fn try_from(v: &[Color]) -> Result<Self, Self::Error> {
		if v.len() > MAX_PALETTE_COLORS {
			return Err(PaletteError::TooManyColors);
		}

		let mut pal = Palette::new();
		for c in v {
			pal.add_color(*c);
		}
		Ok(pal)
	}
}

impl TryFrom<Vec<Color>> for Palette {
	type Error = PaletteError;

	fn try_from(v: Vec<Color>) -> Result<Self, Self::Error> {
		Palette::try_from(v.as_slice())
	}
}

#[derive(Debug)]
pub enum PaletteError {
	TooManyColors,
	InvalidColor { input: String, msg: String },
}

impl Display for PaletteError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PaletteError::TooManyColors => write!(f, "A palette can't hold more than {MAX_PALETTE_COLORS} colors"),
			PaletteError::InvalidColor { input, msg } => write!(f, "Invalid color \"{input}\": {msg}"),
		}
	}
}

impl std::error::Error for PaletteError {}
