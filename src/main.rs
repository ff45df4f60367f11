use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use crate::cmd_prompt::palette_prompt;
use crate::cmd_summary::palette_summary;
use crate::commands::{Cli, Commands};

mod cmd_prompt;
mod cmd_summary;
mod commands;

fn main() -> ExitCode {
	let cli = Cli::parse();

	// swatches were asked for explicitly, so show them even when stdout isn't a terminal
	if cli.swatches {
		colored::control::set_override(true);
	}

	let result = match &cli.command {
		Some(Commands::Summary(args)) => palette_summary(&cli, args),
		Some(Commands::Prompt) | None => palette_prompt(&cli),
	};

	match result {
		Ok(_) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("{} {e:#}", "execution failed:".red());
			ExitCode::FAILURE
		}
	}
}
