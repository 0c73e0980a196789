//! GWF Trace
//!
//! Line-oriented reader for Grid Workload Format traces, as exported for
//! Wiki/ASKALON workflows. Trace records are turned into job arguments
//! and handed to a caller-supplied job factory, one TraceIndex window at
//! a time.
//!
//! ## Getting Started
//!
//! ```no_run
//! use gwf_trace::reader::{open_wiki_trace, spec_factory};
//!
//! let mut reader = open_wiki_trace("wiki.gwf", 0, 99, true, spec_factory())?;
//! for job in reader.produce_jobs() {
//!     let job = job?;
//!     println!("{} submitted at {}", job.id, job.submit_time);
//! }
//! let tail = reader.read_further().count();
//! println!("{} more jobs, {:?} processors", tail, reader.max_proc_count());
//! # Ok::<(), gwf_trace::utils::ReaderError>(())
//! ```

pub mod commands;
pub mod output;
pub mod parser;
pub mod reader;
pub mod utils;
