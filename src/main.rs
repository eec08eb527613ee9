//! Unseen - prune components nobody renders
//!
//! Reads a usage-tracker's list of unseen components, checks which of them
//! still exist under app/components, and reports or deletes them.

use anyhow::Result;

use unseen::cli::Cli;
use unseen::commands;
use unseen::config::{self, Paths};
use unseen::ui::{self, Log};

fn main() -> Result<()> {
	let cli = Cli::parse_args();

	Log::set_verbose(cli.verbose);

	let options = cli.options();
	if !options.json {
		ui::print_logo();
	}

	let unseen_path = config::unseen_path(cli.unseen.as_deref());
	let paths = Paths::new(&cli.project, unseen_path);

	if commands::run(&options, &paths)?.is_none() {
		ui::debug(&format!("No unseen file at {}", paths.unseen.display()));
	}

	Ok(())
}
