//! Report output

use anyhow::{Context, Result};
use colored::*;

use super::{DeleteSummary, Options, Outcome};
use crate::ui;

/// Print the deletion summary (if any) and the requested lists.
pub fn print(outcome: &Outcome, options: &Options) {
	if let Some(deleted) = &outcome.deleted {
		summary(outcome.unseen, outcome.resolution.found.len(), deleted);
	}

	if options.show_found {
		println!("\n{}", "Found components:".bright_green().bold());
		for name in &outcome.resolution.found {
			ui::item(&name.bright_green());
		}
	}

	if options.show_not_found {
		println!("\n{}", "Not found components:".bright_red().bold());
		for name in &outcome.resolution.not_found {
			ui::item(&name.bright_red());
		}
	}
}

pub fn summary(unseen: usize, found: usize, deleted: &DeleteSummary) {
	if found == 0 {
		ui::warn("No unseen component has a source file, nothing deleted");
	}

	ui::success(&format!("Unseen {} components", unseen));
	ui::success(&format!("Found {} components", found));
	ui::success(&format!("Deleted {} js components", deleted.js));
	ui::success(&format!("Deleted {} ts components", deleted.ts));
	ui::success(&format!("Deleted {} hbs components", deleted.hbs));
	ui::success(&format!("Deleted {} tests", deleted.tests));
}

pub fn print_json(outcome: &Outcome) -> Result<()> {
	let json = serde_json::to_string_pretty(outcome).context("Failed to serialize report")?;
	println!("{}", json);
	Ok(())
}
