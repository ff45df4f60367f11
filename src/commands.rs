use clap::Parser;
use clap::Subcommand;
use const_format::formatcp;

use palette_rs::console::ReportStyle;
use palette_rs::palettes::color::Color;

const GIT_HASH: &str = env!("GIT_HASH");
const GIT_BRANCH: &str = env!("GIT_BRANCH");
const GIT_VERSION: &str = env!("GIT_VERSION");
const BUILD_DATE: &str = env!("BUILD_DATE");

const CLAP_VERSION: &str = formatcp!("{GIT_VERSION} [{GIT_BRANCH}, {GIT_HASH}, {BUILD_DATE}]");

#[derive(Parser, Debug, Clone)]
#[command(version = CLAP_VERSION, about = "Collects up to 10 colors and reports their average and most frequent color")]
pub(crate) struct Cli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	#[arg(long, global = true, conflicts_with = "swatches", help = "Prints the summary as JSON.")]
	pub json: bool,
	#[arg(long, global = true, help = "Shows a swatch next to every color.")]
	pub swatches: bool,

	#[arg(long, global = true)]
	pub debug: bool,
}

impl Cli {
	pub(crate) fn report_style(&self) -> ReportStyle {
		if self.json {
			ReportStyle::Json
		} else if self.swatches {
			ReportStyle::Swatches
		} else {
			ReportStyle::Plain
		}
	}
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
	#[command(about = "Asks for colors on the terminal. This is the default.")]
	Prompt,
	#[command(about = "Summarizes the colors given as arguments.")]
	Summary(SummaryArgs),
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct SummaryArgs {
	#[arg(required = true, help = "The colors, either as \"(r, g, b)\" or #RRGGBB.")]
	pub colors: Vec<Color>,
}
