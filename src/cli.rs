use clap::{builder::Styles, Parser};
use colored::Colorize;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::commands::Options;

/// Two-letter short flag kept for compatibility; clap only has single-char shorts.
const LEGACY_NOT_FOUND: &str = "-nf";

fn styles() -> Styles {
	Styles::styled()
		.header(anstyle::Style::new().bold().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.usage(anstyle::Style::new().bold().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))))
		.valid(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.invalid(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))))
}

#[derive(Parser, Debug)]
#[command(
	name = "unseen",
	author,
	version,
	about = "Find and prune components reported as unseen",
	styles = styles(),
	after_help = format!(
		"{title}
  {unseen}                 {all_desc}
  {unseen} {nf}             {nf_desc}
  {unseen} {delete}              {delete_desc}
  {unseen} {json} {project}  {json_desc}",
		title = "Examples:".bright_blue().bold(),
		unseen = "unseen".bright_blue(),
		all_desc = "List found and not found components".dimmed(),
		nf = "-nf".yellow(),
		nf_desc = "List components with no source file".dimmed(),
		delete = "-d".yellow(),
		delete_desc = "Delete found components and their tests".dimmed(),
		json = "--json".yellow(),
		project = "-p ../web",
		json_desc = "Machine-readable report for another project".dimmed(),
	),
)]
pub struct Cli {
	/// Delete found components and their unit/integration tests
	#[arg(short = 'd', long = "delete-found-components")]
	pub delete_found_components: bool,

	/// Show found components
	#[arg(short = 'f', long = "found")]
	pub found: bool,

	/// Show not found components (also accepted as -nf)
	#[arg(long = "not-found")]
	pub not_found: bool,

	/// Print the outcome as JSON instead of the colored report
	#[arg(long = "json")]
	pub json: bool,

	/// Unseen list to reconcile (default: unseen.json next to the executable, or $UNSEEN_PATH)
	#[arg(long = "unseen", value_name = "PATH")]
	pub unseen: Option<PathBuf>,

	/// Project root containing app/ and tests/
	#[arg(short = 'p', long = "project", value_name = "DIR", default_value = ".")]
	pub project: PathBuf,

	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose")]
	pub verbose: bool,
}

impl Cli {
	/// Parse process arguments, accepting the legacy `-nf` flag.
	pub fn parse_args() -> Self {
		Self::parse_from(legacy_args(std::env::args_os()))
	}

	pub fn options(&self) -> Options {
		Options {
			json: self.json,
			..Options::from_flags(self.delete_found_components, self.found, self.not_found)
		}
	}
}

/// Options whose next argument is a value, never a flag.
const VALUE_OPTIONS: &[&str] = &["--unseen", "-p", "--project"];

/// Rewrite `-nf` to `--not-found` so clap does not read it as `-n -f`.
///
/// Only flag positions are rewritten: option values and anything after `--`
/// pass through untouched.
pub fn legacy_args<I>(args: I) -> Vec<OsString>
where
	I: IntoIterator<Item = OsString>,
{
	let mut expects_value = false;
	let mut positional = false;

	args.into_iter()
		.map(|arg| {
			let is_flag = !expects_value && !positional;
			expects_value = is_flag && VALUE_OPTIONS.iter().any(|opt| arg == *opt);
			positional = positional || (is_flag && arg == "--");

			if is_flag && arg == LEGACY_NOT_FOUND {
				OsString::from("--not-found")
			} else {
				arg
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn parse(args: &[&str]) -> Cli {
		let args = std::iter::once("unseen").chain(args.iter().copied()).map(OsString::from);
		Cli::try_parse_from(legacy_args(args)).unwrap()
	}

	#[test]
	fn legacy_not_found_flag() {
		let cli = parse(&["-nf"]);
		assert!(cli.not_found);
		assert!(!cli.found);

		let options = cli.options();
		assert!(options.show_not_found);
		assert!(!options.show_found);
	}

	#[test]
	fn no_flags_enable_both_reports() {
		let options = parse(&[]).options();
		assert!(options.show_found && options.show_not_found);
		assert!(!options.delete_found);
	}

	#[test]
	fn supplementary_flags_do_not_count_as_actions() {
		let options = parse(&["--json", "-v", "-p", "web"]).options();
		assert!(options.json);
		assert!(options.show_found && options.show_not_found);
	}

	#[test]
	fn long_flags_combine() {
		let cli = parse(&["--delete-found-components", "--found"]);
		let options = cli.options();
		assert!(options.delete_found);
		assert!(options.show_found);
		assert!(!options.show_not_found);
	}

	#[test]
	fn unseen_and_project_paths() {
		let cli = parse(&["--unseen", "/tmp/list.json", "--project", "../web"]);
		assert_eq!(cli.unseen, Some(PathBuf::from("/tmp/list.json")));
		assert_eq!(cli.project, PathBuf::from("../web"));
	}

	#[test]
	fn legacy_flag_as_option_value_is_kept() {
		let args = legacy_args(["unseen", "--unseen", "-nf", "-nf"].map(OsString::from));
		assert_eq!(args, ["unseen", "--unseen", "-nf", "--not-found"].map(OsString::from));

		let args = legacy_args(["unseen", "-p", "-nf"].map(OsString::from));
		assert_eq!(args, ["unseen", "-p", "-nf"].map(OsString::from));
	}

	#[test]
	fn legacy_flag_after_separator_is_kept() {
		let args = legacy_args(["unseen", "--", "-nf"].map(OsString::from));
		assert_eq!(args, ["unseen", "--", "-nf"].map(OsString::from));
	}

	#[test]
	fn legacy_rewrite_leaves_values_alone() {
		let args = legacy_args(["unseen", "-f", "--unseen", "x.json"].map(OsString::from));
		assert_eq!(args, ["unseen", "-f", "--unseen", "x.json"].map(OsString::from));
	}
}
