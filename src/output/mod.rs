//! Output writers for job listings.
//!
//! This module handles writing produced jobs to disk as JSON and reading
//! them back for validation.

pub mod json;

// Re-export main functions
pub use json::{listing_to_string, read_listing, write_listing};
