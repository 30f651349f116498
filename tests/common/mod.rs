//! Common utilities for integration tests

pub mod test_helpers;

// Re-export commonly used items
#[allow(unused_imports)]
pub use test_helpers::{is_non_increasing, is_within, relative_error, solve, textbook_parameters};
