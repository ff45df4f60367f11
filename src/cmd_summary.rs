use std::io;

use anyhow::Result;
use palette_rs::console::write_report;
use palette_rs::palettes::palette::Palette;

use crate::commands::{Cli, SummaryArgs};

pub(crate) fn palette_summary(cli: &Cli, args: &SummaryArgs) -> Result<()> {
	let palette = Palette::try_from(args.colors.as_slice())?;

	if cli.debug {
		for (i, c) in palette.iter().enumerate() {
			eprintln!("color {}: {c} {}", i + 1, c.to_hex());
		}
	}

	let mut stdout = io::stdout().lock();
	write_report(&mut stdout, &palette, cli.report_style())
}
