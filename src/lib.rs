//! # Unseen Library
//!
//! Reconciles a pre-computed list of unseen components against a project
//! tree. Identifiers are normalized, probed on disk, reported as found or
//! missing, and found components can be deleted along with their tests.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod storage;
pub mod ui;
