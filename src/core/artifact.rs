//! Component source kinds and deletion candidates

use std::path::{Component, Path, PathBuf};

use crate::config::{Paths, TEST_SUFFIX};

/// Source file kind, in probe priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
	Js,
	Ts,
	Hbs,
}

impl SourceKind {
	pub const ALL: [SourceKind; 3] = [SourceKind::Js, SourceKind::Ts, SourceKind::Hbs];

	/// Kinds that can have test files.
	pub const SCRIPTS: [SourceKind; 2] = [SourceKind::Js, SourceKind::Ts];

	pub fn extension(self) -> &'static str {
		match self {
			SourceKind::Js => "js",
			SourceKind::Ts => "ts",
			SourceKind::Hbs => "hbs",
		}
	}

	/// `<dir>/<name>.<ext>`; `name` may contain `/` for nested components.
	pub fn source_path(self, dir: &Path, name: &str) -> PathBuf {
		under(dir, &format!("{}.{}", name, self.extension()))
	}

	/// `<dir>/<name>-test.<ext>`
	pub fn test_path(self, dir: &Path, name: &str) -> PathBuf {
		under(dir, &format!("{}{}.{}", name, TEST_SUFFIX, self.extension()))
	}
}

/// Join `file` below `dir`. Root and drive prefixes are dropped so an
/// absolute identifier still lands inside `dir`.
fn under(dir: &Path, file: &str) -> PathBuf {
	Path::new(file)
		.components()
		.filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
		.fold(dir.to_path_buf(), |path, c| path.join(c))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
	Source(SourceKind),
	Test,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
	pub path: PathBuf,
	pub kind: ArtifactKind,
}

/// All seven files that belong to a component, in deletion order:
/// sources (js, ts, hbs), then unit tests, then integration tests.
pub fn artifacts(name: &str, paths: &Paths) -> Vec<Artifact> {
	let sources = SourceKind::ALL.into_iter().map(|kind| Artifact {
		path: kind.source_path(&paths.components, name),
		kind: ArtifactKind::Source(kind),
	});

	let tests = [&paths.unit_tests, &paths.integration_tests]
		.into_iter()
		.flat_map(|dir| {
			SourceKind::SCRIPTS.into_iter().map(move |kind| Artifact {
				path: kind.test_path(dir, name),
				kind: ArtifactKind::Test,
			})
		});

	sources.chain(tests).collect()
}
