//! Resolve normalized identifiers against the components directory

use serde::Serialize;
use std::path::PathBuf;

use super::artifact::SourceKind;
use crate::config::Paths;
use crate::ui;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub found: Vec<String>,
    pub not_found: Vec<String>,
}

/// First existing source file for `name`, probing js, ts, then hbs.
pub fn locate(name: &str, paths: &Paths) -> Option<(SourceKind, PathBuf)> {
    SourceKind::ALL.into_iter().find_map(|kind| {
        let path = kind.source_path(&paths.components, name);
        path.exists().then_some((kind, path))
    })
}

/// Partition identifiers into found and not found, preserving input order.
pub fn resolve(names: &[String], paths: &Paths) -> Resolution {
    let mut resolution = Resolution::default();

    for name in names {
        match locate(name, paths) {
            Some((_, path)) => {
                ui::debug(&format!("Found {} at {}", name, path.display()));
                resolution.found.push(name.clone());
            }
            None => {
                ui::debug(&format!("No source for {}", name));
                resolution.not_found.push(name.clone());
            }
        }
    }

    resolution
}
