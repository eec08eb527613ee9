//! Delete command - remove found components and their tests

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;

use crate::config::Paths;
use crate::core::{artifacts, ArtifactKind, SourceKind};
use crate::ui;

/// Files removed per category.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeleteSummary {
    pub js: usize,
    pub ts: usize,
    pub hbs: usize,
    pub tests: usize,
}

impl DeleteSummary {
    fn record(&mut self, kind: ArtifactKind) {
        match kind {
            ArtifactKind::Source(SourceKind::Js) => self.js += 1,
            ArtifactKind::Source(SourceKind::Ts) => self.ts += 1,
            ArtifactKind::Source(SourceKind::Hbs) => self.hbs += 1,
            ArtifactKind::Test => self.tests += 1,
        }
    }
}

/// Delete every source and test file of each found component.
///
/// Stops at the first failed removal: the component is logged and the error
/// returned, leaving later components untouched.
pub fn delete_found(found: &[String], paths: &Paths) -> Result<DeleteSummary> {
    let mut summary = DeleteSummary::default();

    for name in found {
        for artifact in artifacts(name, paths) {
            if !artifact.path.exists() {
                continue;
            }

            if let Err(e) = fs::remove_file(&artifact.path) {
                ui::error(&format!("Error deleting component {}", name));
                return Err(e).with_context(|| {
                    format!("Failed to delete {} ({})", artifact.path.display(), name)
                });
            }

            ui::debug(&format!("Deleted: {}", artifact.path.display()));
            summary.record(artifact.kind);
        }
    }

    Ok(summary)
}
