//! # User Interface
//!
//! Colored, timestamped terminal output and the startup banner.

pub mod log;

pub use log::{debug, error, item, print_logo, success, warn, Log};
