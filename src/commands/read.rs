//! Read command implementation.
//!
//! The read command:
//! 1. Opens the trace with the Wiki/GWF dialect
//! 2. Produces the jobs of the requested window
//! 3. Optionally reads past the window to end of file
//! 4. Writes the JSON listing and prints a summary

use crate::output::write_listing;
use crate::parser::schema::{JobListing, JobSpec};
use crate::parser::wiki::{WikiDialect, WikiParams};
use crate::reader::{spec_factory, Dialect, JobFactory, Jobs, RangeSpec, TraceReader};
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the read command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReadArgs {
    /// Trace file to read
    pub trace_path: PathBuf,

    /// First TraceIndex to produce
    pub from: u64,

    /// Last TraceIndex to produce (None = end of file)
    pub to: Option<u64>,

    /// Continue past `to` once the window is done
    pub read_further: bool,

    /// PRNG seed for reproducible processor counts
    pub seed: Option<u64>,

    /// Placeholder job shape
    pub params: WikiParams,

    /// Output path for the JSON listing (optional)
    pub output_json: Option<PathBuf>,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Log malformed records and carry on instead of failing
    pub keep_going: bool,
}

impl Default for ReadArgs {
    fn default() -> Self {
        Self {
            trace_path: PathBuf::new(),
            from: 0,
            to: None,
            read_further: false,
            seed: None,
            params: WikiParams::default(),
            output_json: None,
            print_summary: false,
            keep_going: false,
        }
    }
}

impl ReadArgs {
    /// Range the reader is opened with
    pub fn range(&self) -> RangeSpec {
        RangeSpec {
            from: self.from,
            to: self.to.unwrap_or(u64::MAX),
            allow_reading_further: self.read_further,
        }
    }
}

/// Execute the read command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The listing of every produced job
///
/// # Errors
/// * Trace file cannot be opened
/// * Malformed records (unless `keep_going`)
/// * Listing write errors
pub fn execute_read(args: ReadArgs) -> Result<JobListing> {
    let start_time = Instant::now();

    info!("Reading trace: {}", args.trace_path.display());

    let dialect = WikiDialect::with_params(args.params.clone());
    let mut reader = TraceReader::open(&args.trace_path, args.range(), dialect, spec_factory())
        .context("Failed to open trace file")?;

    if let Some(seed) = args.seed {
        debug!("Seeding PRNG with {}", seed);
        reader = reader.with_seed(seed);
    }

    // Step 1: the requested window
    let mut jobs = drain_jobs(reader.produce_jobs(), args.keep_going)
        .context("Failed to read trace window")?;
    info!("Produced {} jobs from the window", jobs.len());

    // Step 2: the tail, if requested
    if args.read_further {
        let tail = drain_jobs(reader.read_further(), args.keep_going)
            .context("Failed to read past the trace window")?;
        info!("Produced {} more jobs past the window", tail.len());
        jobs.extend(tail);
    }

    let listing = JobListing {
        version: SCHEMA_VERSION.to_string(),
        source: args.trace_path.display().to_string(),
        dialect: reader.dialect().label().to_string(),
        from: args.from,
        to: reader.range().to,
        read_further: args.read_further,
        max_proc_count: reader.max_proc_count(),
        jobs,
        generated_at: chrono::Utc::now().to_rfc3339(),
    };
    reader.close();

    // Step 3: outputs
    if let Some(path) = &args.output_json {
        write_listing(&listing, path).context("Failed to write job listing")?;
        info!("✓ Listing written to: {}", path.display());
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("TRACE SUMMARY");
        println!("{}", "=".repeat(80));
        println!("{}", generate_text_summary(&listing));
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Read completed in {:.2}s", elapsed.as_secs_f64());

    Ok(listing)
}

/// Collect one pass, optionally skipping malformed records
///
/// **Private** - internal helper for execute_read
fn drain_jobs(
    jobs: Jobs<'_, WikiDialect, impl JobFactory<Job = JobSpec>>,
    keep_going: bool,
) -> Result<Vec<JobSpec>> {
    let mut produced = Vec::new();
    for job in jobs {
        match job {
            Ok(job) => produced.push(job),
            Err(e) if keep_going => warn!("Skipping record: {}", e),
            Err(e) => return Err(e.into()),
        }
    }
    Ok(produced)
}

/// Render a short text summary of a listing
///
/// **Public** - used by the `--summary` flag
pub fn generate_text_summary(listing: &JobListing) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Trace:          {}", listing.source));
    lines.push(format!("Jobs:           {}", listing.jobs.len()));

    match listing.max_proc_count {
        Some(count) => lines.push(format!("Max Processors: {}", count)),
        None => lines.push("Max Processors: unknown".to_string()),
    }

    let first = listing.jobs.iter().map(|j| j.submit_time).min();
    let last = listing.jobs.iter().map(|j| j.submit_time).max();
    if let (Some(first), Some(last)) = (first, last) {
        lines.push(format!("Submit Span:    {} .. {}", first, last));
    }

    let processors: i64 = listing.jobs.iter().map(|j| j.processor_count).sum();
    lines.push(format!("Processors Req: {}", processors));

    lines.join("\n")
}

/// Validate read arguments
///
/// **Public** - can be called before execute_read for early validation
pub fn validate_args(args: &ReadArgs) -> Result<()> {
    if args.trace_path.as_os_str().is_empty() {
        anyhow::bail!("Trace path cannot be empty");
    }

    if !args.trace_path.is_file() {
        anyhow::bail!("Trace file not found: {}", args.trace_path.display());
    }

    if let Some(to) = args.to {
        if to < args.from {
            anyhow::bail!("--to ({}) must not be less than --from ({})", to, args.from);
        }
    }

    Ok(())
}
