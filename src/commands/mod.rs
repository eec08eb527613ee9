//! # Command Implementations
//!
//! A run loads the unseen list, resolves it against the project and then
//! deletes and/or reports according to [`Options`].

pub mod delete;
pub mod report;

use anyhow::Result;
use serde::Serialize;

use crate::config::Paths;
use crate::core::{self, Resolution};
use crate::storage;

pub use delete::{delete_found, DeleteSummary};

/// What a run should do once the list is resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub delete_found: bool,
    pub show_found: bool,
    pub show_not_found: bool,
    pub json: bool,
}

impl Options {
    /// With none of the three action flags set, both lists are shown.
    pub fn from_flags(delete_found: bool, show_found: bool, show_not_found: bool) -> Self {
        let none = !delete_found && !show_found && !show_not_found;
        Self {
            delete_found,
            show_found: show_found || none,
            show_not_found: show_not_found || none,
            json: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub unseen: usize,
    #[serde(flatten)]
    pub resolution: Resolution,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<DeleteSummary>,
}

/// Execute a full run. Returns `Ok(None)` when there is no unseen file.
pub fn run(options: &Options, paths: &Paths) -> Result<Option<Outcome>> {
    let Some(raw) = storage::load(&paths.unseen)? else {
        return Ok(None);
    };

    let names = core::normalize(&raw);
    let resolution = core::resolve(&names, paths);

    let deleted = if options.delete_found {
        Some(delete_found(&resolution.found, paths)?)
    } else {
        None
    };

    let outcome = Outcome {
        unseen: names.len(),
        resolution,
        deleted,
    };

    if options.json {
        report::print_json(&outcome)?;
    } else {
        report::print(&outcome, options);
    }

    Ok(Some(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn no_flags_shows_both_lists() {
        let options = Options::from_flags(false, false, false);
        assert!(options.show_found);
        assert!(options.show_not_found);
        assert!(!options.delete_found);
    }

    #[test]
    fn delete_alone_shows_nothing() {
        let options = Options::from_flags(true, false, false);
        assert!(options.delete_found);
        assert!(!options.show_found);
        assert!(!options.show_not_found);
    }

    #[test]
    fn single_list_flag_is_respected() {
        let options = Options::from_flags(false, false, true);
        assert!(!options.show_found);
        assert!(options.show_not_found);
    }

    #[test]
    fn missing_unseen_file_is_a_no_op() {
        let temp = tempdir().unwrap();
        let paths = Paths::new(temp.path(), temp.path().join("unseen.json"));

        let outcome = run(&Options::from_flags(true, false, false), &paths).unwrap();
        assert!(outcome.is_none());
    }

    #[test]
    fn reconciles_the_reference_scenario() {
        let temp = tempdir().unwrap();
        let paths = Paths::new(temp.path(), temp.path().join("unseen.json"));
        fs::write(
            &paths.unseen,
            r#"["component:alpha", "component:beta", "@scope/gamma"]"#,
        )
        .unwrap();
        fs::create_dir_all(&paths.components).unwrap();
        fs::write(paths.components.join("alpha.js"), "").unwrap();

        let outcome = run(&Options::from_flags(false, false, false), &paths)
            .unwrap()
            .unwrap();

        assert_eq!(outcome.unseen, 2);
        assert_eq!(outcome.resolution.found, vec!["alpha"]);
        assert_eq!(outcome.resolution.not_found, vec!["beta"]);
        assert!(outcome.deleted.is_none());
        assert!(paths.components.join("alpha.js").exists());
    }

    #[test]
    fn outcome_serializes_flat() {
        let outcome = Outcome {
            unseen: 2,
            resolution: Resolution {
                found: vec!["alpha".into()],
                not_found: vec!["beta".into()],
            },
            deleted: None,
        };

        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"unseen": 2, "found": ["alpha"], "not_found": ["beta"]})
        );
    }
}
