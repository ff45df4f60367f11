use std::io::{BufRead, Write};

use anyhow::{Context, Result, anyhow};
use colored::{ColoredString, Colorize};

use crate::palettes::MAX_PALETTE_COLORS;
use crate::palettes::color::Color;
use crate::palettes::palette::Palette;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ReportStyle {
	/// `(r, g, b)` lines only.
	#[default]
	Plain,
	/// Like [ReportStyle::Plain] with a block of the actual color after every value.
	Swatches,
	Json,
}

/// Prompts for colors on a line-oriented text stream and builds a [Palette] from the answers.
pub struct Console<R, W> {
	input: R,
	output: W,
	debug: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
	pub fn new(input: R, output: W) -> Self {
		Self { input, output, debug: false }
	}

	pub fn debug(mut self, debug: bool) -> Self {
		self.debug = debug;
		self
	}

	fn read_integer(&mut self) -> Result<i64> {
		let mut line = String::new();
		let read = self.input.read_line(&mut line).context("Can't read from input")?;
		if read == 0 {
			anyhow::bail!("Unexpected end of input")
		}

		let trimmed = line.trim();
		trimmed.parse::<i64>().with_context(|| format!("\"{trimmed}\" is not an integer"))
	}

	fn prompt_integer(&mut self, prompt: &str) -> Result<i64> {
		write!(self.output, "{prompt}")?;
		self.output.flush()?;
		self.read_integer()
	}

	fn prompt_channel(&mut self, name: &str) -> Result<u8> {
		let value = self.prompt_integer(&format!("{name} (0–255): "))?;
		u8::try_from(value).map_err(|_| anyhow!("{name} value {value} is outside of 0-255"))
	}

	/// Asks how many colors to add (at most [MAX_PALETTE_COLORS]), then asks for the
	/// red, green and blue values of each one.
	pub fn read_palette(&mut self) -> Result<Palette> {
		let num_colors = self.prompt_integer(&format!("How many colors would you like to add (max {MAX_PALETTE_COLORS})? "))?;
		let num_colors = num_colors.clamp(0, MAX_PALETTE_COLORS as i64) as usize;

		let mut palette = Palette::new();
		for i in 0..num_colors {
			writeln!(self.output, "Enter RGB values for color {}: ", i + 1)?;
			let r = self.prompt_channel("Red")?;
			let g = self.prompt_channel("Green")?;
			let b = self.prompt_channel("Blue")?;

			let c = Color::new(r, g, b);
			palette.add_color(c);

			if self.debug {
				eprintln!("added {c} {} ({}/{MAX_PALETTE_COLORS})", c.to_hex(), palette.len());
			}
		}

		writeln!(self.output)?;
		Ok(palette)
	}

	pub fn write_report(&mut self, palette: &Palette, style: ReportStyle) -> Result<()> {
		write_report(&mut self.output, palette, style)
	}
}

fn swatch(c: Color) -> ColoredString {
	"    ".on_truecolor(c.r, c.g, c.b)
}

/// Writes the palette contents followed by its average color, most frequent color, size and emptiness.
pub fn write_report<W: Write>(out: &mut W, palette: &Palette, style: ReportStyle) -> Result<()> {
	let summary = palette.summary();

	match style {
		ReportStyle::Plain => {
			palette.display(out)?;
			writeln!(out)?;
			write!(out, "{summary}")?;
		}
		ReportStyle::Swatches => {
			writeln!(out, "Current Colors in Palette:")?;
			for c in palette {
				writeln!(out, "{c} {}", swatch(*c))?;
			}
			writeln!(out)?;
			writeln!(out, "Average color: {} {}", summary.average, swatch(summary.average))?;
			writeln!(out, "Most frequent color: {} {}", summary.most_frequent, swatch(summary.most_frequent))?;
			writeln!(out, "Palette size: {}", summary.size)?;
			writeln!(out, "Is empty? {}", summary.is_empty)?;
		}
		ReportStyle::Json => {
			serde_json::to_writer_pretty(&mut *out, &summary).context("Can't serialize the palette summary")?;
			writeln!(out)?;
		}
	}

	out.flush()?;
	Ok(())
}
