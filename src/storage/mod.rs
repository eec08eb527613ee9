//! Unseen list input

pub mod unseen;

pub use unseen::load;
