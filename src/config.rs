//! Application configuration and constants

use std::path::{Path, PathBuf};

// === Input ===
pub const UNSEEN_FILE: &str = "unseen.json";
pub const UNSEEN_ENV: &str = "UNSEEN_PATH";

// === Identifiers ===
pub const COMPONENT_PREFIX: &str = "component:";
pub const SCOPE_MARKER: char = '@';

// === Project Layout ===
pub const COMPONENTS_DIR: &[&str] = &["app", "components"];
pub const UNIT_TESTS_DIR: &[&str] = &["tests", "unit", "components"];
pub const INTEGRATION_TESTS_DIR: &[&str] = &["tests", "integration", "components"];
pub const TEST_SUFFIX: &str = "-test";

/// Every location a run reads from or deletes in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub unseen: PathBuf,
    pub components: PathBuf,
    pub unit_tests: PathBuf,
    pub integration_tests: PathBuf,
}

impl Paths {
    pub fn new(project_root: &Path, unseen: PathBuf) -> Self {
        Self {
            unseen,
            components: join_all(project_root, COMPONENTS_DIR),
            unit_tests: join_all(project_root, UNIT_TESTS_DIR),
            integration_tests: join_all(project_root, INTEGRATION_TESTS_DIR),
        }
    }
}

fn join_all(root: &Path, segments: &[&str]) -> PathBuf {
    segments.iter().fold(root.to_path_buf(), |path, segment| path.join(segment))
}

/// Locate the unseen file: explicit path, then UNSEEN_PATH, then next to the executable.
pub fn unseen_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        crate::ui::debug(&format!("Using unseen file: {}", path.display()));
        return path.to_path_buf();
    }

    if let Ok(env_path) = std::env::var(UNSEEN_ENV) {
        if !env_path.is_empty() {
            crate::ui::debug(&format!("Using {}: {}", UNSEEN_ENV, env_path));
            return PathBuf::from(env_path);
        }
    }

    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            return dir.join(UNSEEN_FILE);
        }
    }

    PathBuf::from(UNSEEN_FILE)
}
