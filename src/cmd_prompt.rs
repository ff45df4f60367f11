use std::io;

use anyhow::Result;
use palette_rs::console::Console;

use crate::commands::Cli;

pub(crate) fn palette_prompt(cli: &Cli) -> Result<()> {
	let stdin = io::stdin();
	let stdout = io::stdout();

	let mut console = Console::new(stdin.lock(), stdout.lock()).debug(cli.debug);
	let palette = console.read_palette()?;

	console.write_report(&palette, cli.report_style())
}
