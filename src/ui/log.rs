//! Unified logging system

use chrono::Local;
use colored::*;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

const LOGO: &str = r#"
 _   _ _ __  ___  ___  ___ _ __
| | | | '_ \/ __|/ _ \/ _ \ '_ \
| |_| | | | \__ \  __/  __/ | | |
 \__,_|_| |_|___/\___|\___|_| |_|"#;

const SLOGANS: &[&str] = &[
	"Out of sight, out of app/components",
	"If nobody renders it, does it exist?",
	"Marie Kondo for your component tree",
	"Dead code tells no tales",
	"Sparking joy since the last usage report",
	"Fewer templates, fewer problems",
	"git blame can't find what isn't there",
];

pub fn random_slogan() -> &'static str {
	let idx = rand::rng().random_range(0..SLOGANS.len());
	SLOGANS[idx]
}

pub fn print_logo() {
	println!("{}", LOGO.bright_blue().bold());
	println!("{}", random_slogan().dimmed().italic());
}

pub struct Log;

impl Log {
	pub fn set_verbose(enabled: bool) {
		VERBOSE.store(enabled, Ordering::Relaxed);
	}

	pub fn is_verbose() -> bool {
		VERBOSE.load(Ordering::Relaxed)
	}
}

fn timestamp() -> ColoredString {
	Local::now().format("%H:%M:%S").to_string().dimmed()
}

pub fn success(msg: &str) {
	println!("[{}] {} {}", timestamp(), "✓".bright_green().bold(), msg.bright_green());
}

pub fn warn(msg: &str) {
	println!("[{}] {} {}", timestamp(), "⚠".bright_yellow().bold(), msg.bright_white());
}

pub fn error(msg: &str) {
	println!("[{}] {} {}", timestamp(), "✗".bright_red().bold(), msg.bright_red());
}

pub fn debug(msg: &str) {
	if Log::is_verbose() {
		println!("[{}] {} {}", timestamp(), "⚙".bright_black().bold(), msg.dimmed());
	}
}

/// One list entry under a header, bare so scripts can read it line by line.
pub fn item(text: &ColoredString) {
	println!("{}", text);
}
