//! Wiki/GWF dialect.
//!
//! Reads the Grid Workload Format as exported for Wiki/ASKALON workflows.
//! Only fields 0 (job state), 1 (submit time) and 2 (job name) are used;
//! the rest of the job shape comes from `WikiParams`. Not the entire GWF
//! format is supported.

use super::fields::{drop_trailing_chars, parse_integer, textual_field, tokenise};
use super::metadata::{scan_processors, TraceMetadata};
use super::schema::JobSpec;
use crate::reader::dialect::{Dialect, RawRecord};
use crate::utils::config::{
    ASKALON_SUFFIX, DEFAULT_AVERAGE_EXECUTION_TIME, DEFAULT_MEMORY, DEFAULT_PROCS_RANGE,
    DEFAULT_RUNTIME, DEFAULT_WAIT_TIME, GWF_COMMENT_MARKER, GWF_DIALECT_LABEL, MIN_RECORD_FIELDS,
    NAME_SEPARATOR, SUBMIT_TIME_SUFFIX_LEN, UNSUPPORTED_REQUEST_SENTINEL,
};
use crate::utils::error::RecordError;
use log::debug;
use rand::rngs::StdRng;
use rand::Rng;
use std::ops::Range;

/// Source of the processor count of each job
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcsDistribution {
    /// Uniform draw from a half-open range
    Uniform(Range<i64>),
    /// The same value for every job
    Fixed(i64),
}

impl ProcsDistribution {
    /// Draw a processor count
    ///
    /// An empty uniform range degenerates to its start value.
    pub fn sample(&self, rng: &mut StdRng) -> i64 {
        match self {
            ProcsDistribution::Uniform(range) if range.is_empty() => range.start,
            ProcsDistribution::Uniform(range) => rng.random_range(range.clone()),
            ProcsDistribution::Fixed(value) => *value,
        }
    }
}

impl Default for ProcsDistribution {
    fn default() -> Self {
        ProcsDistribution::Uniform(DEFAULT_PROCS_RANGE)
    }
}

/// Job shape values the Wiki traces do not carry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiParams {
    pub procs: ProcsDistribution,
    pub runtime: i64,
    pub wait_time: i64,
    pub average_execution_time: i64,
    pub memory: i64,
}

impl Default for WikiParams {
    fn default() -> Self {
        Self {
            procs: ProcsDistribution::default(),
            runtime: DEFAULT_RUNTIME,
            wait_time: DEFAULT_WAIT_TIME,
            average_execution_time: DEFAULT_AVERAGE_EXECUTION_TIME,
            memory: DEFAULT_MEMORY,
        }
    }
}

/// The trace-derived part of a Wiki record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiRecord {
    /// Raw job identifier (field 0)
    pub id: String,
    /// Field 0 as a number; 1 means accepted
    pub job_state: i64,
    /// Field 1 without its sub-unit suffix
    pub submit_time: i64,
    /// Field 2 as written
    pub name: String,
    /// Prefix of `name` used as user, group and executable
    pub desired: String,
    /// Record ends with the ASKALON marker (millisecond time base)
    pub askalon: bool,
}

/// Wiki/GWF dialect with configurable placeholder values
#[derive(Debug, Clone, Default)]
pub struct WikiDialect {
    params: WikiParams,
}

impl WikiDialect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: WikiParams) -> Self {
        Self { params }
    }
}

impl Dialect for WikiDialect {
    fn label(&self) -> &str {
        GWF_DIALECT_LABEL
    }

    fn comment_marker(&self) -> &str {
        GWF_COMMENT_MARKER
    }

    fn scan_metadata(&self, line: &str, metadata: &mut TraceMetadata) {
        scan_processors(line, metadata);
    }

    fn build_job(
        &self,
        record: &RawRecord,
        rng: &mut StdRng,
    ) -> Result<Option<JobSpec>, RecordError> {
        build_wiki_job(&record.line, &self.params, rng)
    }
}

/// Split a Wiki record into its fields
///
/// **Public** - exposes the trace-derived values without building a job
///
/// # Returns
/// `Ok(None)` for unsupported-request records, which are never jobs
///
/// # Errors
/// * `RecordError::MissingFields` - fewer than three fields
/// * `RecordError::InvalidNumber` - job state or submit time not numeric
/// * `RecordError::MalformedName` - nothing left of the name prefix
/// * `RecordError::SubmitTimeTooShort` - submit time has no digits before its suffix
pub fn parse_wiki_record(line: &str) -> Result<Option<WikiRecord>, RecordError> {
    let Some(head) = split_wiki_head(line)? else {
        return Ok(None);
    };
    let desired = desired_name(head.name)?;
    let submit_time = submit_time(head.submit)?;

    Ok(Some(WikiRecord {
        id: head.id.to_string(),
        job_state: head.job_state,
        submit_time,
        name: head.name.to_string(),
        desired,
        askalon: head.askalon,
    }))
}

/// Build the job arguments for a Wiki record
///
/// **Public** - the Wiki/GWF job builder
///
/// Draws the processor count from `params.procs` between the job state and
/// the name checks, so a seeded PRNG replays the same sequence.
pub fn build_wiki_job(
    line: &str,
    params: &WikiParams,
    rng: &mut StdRng,
) -> Result<Option<JobSpec>, RecordError> {
    let Some(head) = split_wiki_head(line)? else {
        debug!("Rejecting unsupported request: {}", line.trim());
        return Ok(None);
    };

    let procs = params.procs.sample(rng);
    let runtime = params.runtime;
    let wait_time = params.wait_time;

    let desired = desired_name(head.name)?;
    let submit_time = submit_time(head.submit)?;

    if head.askalon {
        debug!("ASKALON record {} (millisecond time base)", head.id);
    }

    if head.job_state != 1 && (procs < 1 || runtime < 0) {
        debug!(
            "Rejecting job {}: state {}, {} processors, runtime {}",
            head.id, head.job_state, procs, runtime
        );
        return Ok(None);
    }

    Ok(Some(JobSpec {
        id: head.id.to_string(),
        submit_time,
        queueing_time: wait_time.max(0),
        execution_time: runtime.max(0),
        processor_count: procs.max(1),
        average_execution_time: params.average_execution_time,
        memory: params.memory,
        user_name: textual_field(&desired),
        group_name: textual_field(&desired),
        executable_name: textual_field(&desired),
        preceding_job: None,
        preceding_job_delay: 0,
    }))
}

/// Fields shared by parsing and building
///
/// **Private** - borrowed view of the first three fields
struct WikiHead<'a> {
    id: &'a str,
    job_state: i64,
    submit: &'a str,
    name: &'a str,
    askalon: bool,
}

/// Tokenise, screen out sentinel records and parse the job state
///
/// **Private** - shared prefix of parse_wiki_record and build_wiki_job
fn split_wiki_head(line: &str) -> Result<Option<WikiHead<'_>>, RecordError> {
    let askalon = line.ends_with(ASKALON_SUFFIX);
    let elements = tokenise(line);

    if elements.len() < MIN_RECORD_FIELDS {
        return Err(RecordError::MissingFields {
            expected: MIN_RECORD_FIELDS,
            found: elements.len(),
        });
    }

    if elements[2].contains(UNSUPPORTED_REQUEST_SENTINEL) {
        return Ok(None);
    }

    let job_state = parse_integer("job state", elements[0])?;

    Ok(Some(WikiHead {
        id: elements[0],
        job_state,
        submit: elements[1],
        name: elements[2],
        askalon,
    }))
}

/// Text before the first `w` of the name, minus its last character
///
/// **Private** - a name without `w` uses the whole token
fn desired_name(name: &str) -> Result<String, RecordError> {
    let prefix = name.split(NAME_SEPARATOR).next().unwrap_or_default();
    drop_trailing_chars(prefix, 1)
        .map(str::to_string)
        .ok_or_else(|| RecordError::MalformedName(name.to_string()))
}

/// Submit time without its trailing sub-unit characters
///
/// **Private** - internal helper for the builder
fn submit_time(token: &str) -> Result<i64, RecordError> {
    let digits = drop_trailing_chars(token, SUBMIT_TIME_SUFFIX_LEN)
        .ok_or_else(|| RecordError::SubmitTimeTooShort(token.to_string()))?;
    parse_integer("submit time", digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_plain_record() {
        let job = build_wiki_job("1 15000 abcwXYZ", &WikiParams::default(), &mut rng())
            .unwrap()
            .unwrap();

        assert_eq!(job.id, "1");
        assert_eq!(job.submit_time, 1);
        assert_eq!(job.queueing_time, 0);
        assert_eq!(job.execution_time, 400);
        assert!((1..=3).contains(&job.processor_count));
        assert_eq!(job.average_execution_time, 300);
        assert_eq!(job.memory, 300);
        assert_eq!(job.user_name, "ab");
        assert_eq!(job.group_name, "ab");
        assert_eq!(job.executable_name, "ab");
        assert_eq!(job.preceding_job, None);
        assert_eq!(job.preceding_job_delay, 0);
    }

    #[test]
    fn test_non_ascii_space_stays_in_name() {
        let record = parse_wiki_record("1 15000 ab\u{00a0}cwXYZ").unwrap().unwrap();
        assert_eq!(record.name, "ab\u{00a0}cwXYZ");
        assert_eq!(record.desired, "ab\u{00a0}");

        let job = build_wiki_job("1 15000 ab\u{00a0}cwXYZ", &WikiParams::default(), &mut rng())
            .unwrap()
            .unwrap();
        assert_eq!(job.user_name, "ab\u{00a0}");
    }

    #[test]
    fn test_sentinel_rejected() {
        let job = build_wiki_job(
            "1 15000 error:unsupported-request-method extra",
            &WikiParams::default(),
            &mut rng(),
        )
        .unwrap();
        assert!(job.is_none());
        assert_eq!(
            parse_wiki_record("x 1 prefix-error:unsupported-request-method").unwrap(),
            None
        );
    }

    #[test]
    fn test_askalon_flag() {
        let record = parse_wiki_record("1 15000 abcwXYZ ASKALON").unwrap().unwrap();
        assert!(record.askalon);
        assert_eq!(record.submit_time, 1);
        assert_eq!(record.desired, "ab");

        let plain = parse_wiki_record("1 15000 abcwXYZ").unwrap().unwrap();
        assert!(!plain.askalon);
    }

    #[test]
    fn test_missing_fields() {
        let err = build_wiki_job("1 15000", &WikiParams::default(), &mut rng()).unwrap_err();
        assert_eq!(err, RecordError::MissingFields { expected: 3, found: 2 });
    }

    #[test]
    fn test_non_numeric_fields() {
        let err = parse_wiki_record("one 15000 abcwXYZ").unwrap_err();
        assert!(matches!(err, RecordError::InvalidNumber { field: "job state", .. }));

        let err = parse_wiki_record("1 1x000 abcwXYZ").unwrap_err();
        assert!(matches!(err, RecordError::InvalidNumber { field: "submit time", .. }));
    }

    #[test]
    fn test_short_submit_time() {
        let err = parse_wiki_record("1 1500 abcwXYZ").unwrap_err();
        assert_eq!(err, RecordError::SubmitTimeTooShort("1500".to_string()));
    }

    #[test]
    fn test_name_edges() {
        // no separator: whole token is the prefix
        let record = parse_wiki_record("1 15000 abc").unwrap().unwrap();
        assert_eq!(record.desired, "ab");

        assert_eq!(
            parse_wiki_record("1 15000 wXYZ").unwrap_err(),
            RecordError::MalformedName("wXYZ".to_string())
        );
        assert_eq!(
            parse_wiki_record("1 15000 awXYZ").unwrap_err(),
            RecordError::MalformedName("awXYZ".to_string())
        );
    }

    #[test]
    fn test_not_applicable_name() {
        // "-1" + one dropped character
        let job = build_wiki_job("1 15000 -1xwfoo", &WikiParams::default(), &mut rng())
            .unwrap()
            .unwrap();
        assert_eq!(job.user_name, "N/A");
        assert_eq!(job.executable_name, "N/A");
    }

    #[test]
    fn test_rejection_predicate() {
        let params = WikiParams {
            procs: ProcsDistribution::Fixed(0),
            ..WikiParams::default()
        };
        assert!(build_wiki_job("0 15000 abcwXYZ", &params, &mut rng())
            .unwrap()
            .is_none());

        // accepted jobs are clamped instead
        let job = build_wiki_job("1 15000 abcwXYZ", &params, &mut rng())
            .unwrap()
            .unwrap();
        assert_eq!(job.processor_count, 1);
    }

    #[test]
    fn test_negative_runtime_clamped() {
        let params = WikiParams {
            runtime: -5,
            wait_time: -3,
            ..WikiParams::default()
        };
        let job = build_wiki_job("1 15000 abcwXYZ", &params, &mut rng())
            .unwrap()
            .unwrap();
        assert_eq!(job.execution_time, 0);
        assert_eq!(job.queueing_time, 0);

        assert!(build_wiki_job("2 15000 abcwXYZ", &params, &mut rng())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_uniform_range_bounds() {
        let mut rng = rng();
        let dist = ProcsDistribution::default();
        for _ in 0..200 {
            let procs = dist.sample(&mut rng);
            assert!((1..4).contains(&procs));
        }
        assert_eq!(ProcsDistribution::Uniform(5..5).sample(&mut rng), 5);
    }

    #[test]
    fn test_dialect_surface() {
        let dialect = WikiDialect::new();
        assert_eq!(dialect.label(), "Grid workload format");
        assert_eq!(dialect.comment_marker(), "#");

        let mut meta = TraceMetadata::new();
        dialect.scan_metadata("# Processors 42", &mut meta);
        assert_eq!(meta.max_proc_count, Some(42));
    }
}
