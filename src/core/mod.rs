//! Core domain types

pub mod artifact;
pub mod identifier;
pub mod resolve;

pub use artifact::{artifacts, Artifact, ArtifactKind, SourceKind};
pub use identifier::normalize;
pub use resolve::{locate, resolve, Resolution};
