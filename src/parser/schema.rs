//! Job record schema handed to job factories, and the JSON listing
//! written by the CLI.
//!
//! `JobSpec` is the fixed argument vector every dialect produces. Field
//! order mirrors the factory contract: id, submit time, queueing time,
//! execution time, processors, average execution time, memory, user,
//! group, executable, preceding job, preceding job delay.

use serde::{Deserialize, Serialize};

/// Arguments for constructing one job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSpec {
    /// Job identifier as written in the trace
    pub id: String,

    /// Submission time in the trace's time base
    pub submit_time: i64,

    /// Time spent queueing (never negative)
    pub queueing_time: i64,

    /// Time spent executing (never negative)
    pub execution_time: i64,

    /// Processors used (at least one)
    pub processor_count: i64,

    pub average_execution_time: i64,

    /// Memory requirement; dialects may carry a sentinel here
    pub memory: i64,

    pub user_name: String,
    pub group_name: String,
    pub executable_name: String,

    /// Identifier of the job this one waits on, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preceding_job: Option<String>,

    pub preceding_job_delay: i64,
}

/// Top-level job listing structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListing {
    /// Schema version for compatibility checking
    pub version: String,

    /// Trace file the jobs were read from
    pub source: String,

    /// Dialect label of the trace
    pub dialect: String,

    /// First TraceIndex requested
    pub from: u64,

    /// Last TraceIndex requested
    pub to: u64,

    /// True if records past `to` were read as well
    #[serde(default)]
    pub read_further: bool,

    /// Processor count announced by the trace comments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_proc_count: Option<i64>,

    /// Produced jobs, in TraceIndex order
    pub jobs: Vec<JobSpec>,

    /// Timestamp when the listing was generated
    pub generated_at: String,
}
