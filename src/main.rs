//! GWF Trace CLI
//!
//! Reads Grid Workload Format traces (Wiki/ASKALON variant) and lists the
//! jobs a simulator's scheduler would receive.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use gwf_trace::commands::{
    display_version, execute_read, validate_args, validate_listing_file, ReadArgs,
};
use gwf_trace::parser::wiki::{ProcsDistribution, WikiParams};
use gwf_trace::utils::config::{DEFAULT_RUNTIME, SEED_ENV_VAR};

/// GWF Trace - job listings from Grid Workload Format traces
#[derive(Parser, Debug)]
#[command(name = "gwf-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Read jobs from a trace file
    Read {
        /// Trace file to read
        file: PathBuf,

        /// First trace line (0-based, comments and blanks excluded)
        #[arg(long, default_value = "0")]
        from: u64,

        /// Last trace line to produce (defaults to end of file)
        #[arg(long)]
        to: Option<u64>,

        /// Keep reading past --to once the window is done
        #[arg(long)]
        further: bool,

        /// Seed for the processor count PRNG
        #[arg(long, env = SEED_ENV_VAR)]
        seed: Option<u64>,

        /// Use a fixed processor count instead of a random draw in [1, 4)
        #[arg(long, allow_hyphen_values = true)]
        procs: Option<i64>,

        /// Runtime assigned to every job
        #[arg(long, default_value_t = DEFAULT_RUNTIME, allow_hyphen_values = true)]
        runtime: i64,

        /// Output path for the JSON job listing (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Skip malformed records instead of failing
        #[arg(long)]
        keep_going: bool,
    },

    /// Validate a job listing JSON file
    Validate {
        /// Path to listing JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Read {
            file,
            from,
            to,
            further,
            seed,
            procs,
            runtime,
            output,
            summary,
            keep_going,
        } => {
            let mut params = WikiParams {
                runtime,
                ..WikiParams::default()
            };
            if let Some(procs) = procs {
                params.procs = ProcsDistribution::Fixed(procs);
            }

            let args = ReadArgs {
                trace_path: file,
                from,
                to,
                read_further: further,
                seed,
                params,
                output_json: output,
                print_summary: summary,
                keep_going,
            };

            // Validate args first
            validate_args(&args)?;

            execute_read(args)?;
        }

        Commands::Validate { file } => {
            validate_listing_file(&file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
