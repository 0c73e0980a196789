use crate::output::read_listing;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::Path;

/// Validate a job listing JSON file
pub fn validate_listing_file(file_path: &Path) -> Result<()> {
    println!("Validating listing: {}", file_path.display());

    let listing = read_listing(file_path)
        .with_context(|| format!("Failed to load listing {}", file_path.display()))?;

    if listing.version != SCHEMA_VERSION {
        anyhow::bail!(
            "Unsupported listing version {} (expected {})",
            listing.version,
            SCHEMA_VERSION
        );
    }

    println!("✓ Valid job listing JSON");
    println!("  Version: {}", listing.version);
    println!("  Trace: {}", listing.source);
    println!("  Dialect: {}", listing.dialect);
    println!("  Range: {}..={}", listing.from, listing.to);
    match listing.max_proc_count {
        Some(count) => println!("  Max Processors: {}", count),
        None => println!("  Max Processors: unknown"),
    }
    println!("  Jobs: {}", listing.jobs.len());

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("GWF Trace v{}", env!("CARGO_PKG_VERSION"));
    println!("Listing Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Grid Workload Format trace reader for scheduling simulators.");
}
