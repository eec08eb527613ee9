//! Unseen file loading

use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Load the unseen identifier list.
///
/// Returns `Ok(None)` when the file does not exist; that is not an error,
/// there is simply nothing to reconcile.
pub fn load(path: &Path) -> Result<Option<Vec<String>>> {
	let bytes = match fs::read(path) {
		Ok(bytes) => bytes,
		Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
		Err(e) => {
			return Err(e).with_context(|| format!("Failed to read {}", path.display()));
		}
	};

	let unseen: Vec<String> = serde_json::from_slice(&bytes)
		.with_context(|| format!("Failed to parse {}", path.display()))?;

	Ok(Some(unseen))
}
