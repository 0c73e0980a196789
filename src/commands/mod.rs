//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod read;
pub mod utils;

// Re-export main command functions
pub use read::{execute_read, generate_text_summary, validate_args, ReadArgs};
pub use utils::{display_version, validate_listing_file};
