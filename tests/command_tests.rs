use gwf_trace::commands::{execute_read, validate_args, validate_listing_file, ReadArgs};
use gwf_trace::output::read_listing;
use gwf_trace::parser::wiki::{ProcsDistribution, WikiParams};
use gwf_trace::utils::error::OutputError;
use std::io::Write;
use tempfile::NamedTempFile;

const TRACE: &str = "\
# Wiki trace excerpt
# Processors 16

1 10000 alicewwiki
1 20000 bobwwiki
1 30000 error:unsupported-request-method
1 40000 carolwwiki ASKALON
";

fn trace_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(TRACE.as_bytes()).unwrap();
    file
}

#[test]
fn test_read_window_and_further_to_listing() {
    let file = trace_file();
    let out_dir = tempfile::tempdir().unwrap();
    let output = out_dir.path().join("listing/jobs.json");

    let args = ReadArgs {
        trace_path: file.path().to_path_buf(),
        from: 0,
        to: Some(1),
        read_further: true,
        seed: Some(42),
        output_json: Some(output.clone()),
        ..Default::default()
    };
    validate_args(&args).unwrap();

    let listing = execute_read(args).unwrap();
    let users: Vec<&str> = listing.jobs.iter().map(|j| j.user_name.as_str()).collect();
    assert_eq!(users, vec!["alic", "bo", "caro"]);
    assert_eq!(listing.max_proc_count, Some(16));
    assert!(listing.read_further);

    let loaded = read_listing(&output).unwrap();
    assert_eq!(loaded.jobs, listing.jobs);
    assert_eq!(loaded.dialect, "Grid workload format");

    assert!(validate_listing_file(&output).is_ok());
}

#[test]
fn test_read_window_only() {
    let file = trace_file();
    let args = ReadArgs {
        trace_path: file.path().to_path_buf(),
        from: 1,
        to: Some(2),
        params: WikiParams {
            procs: ProcsDistribution::Fixed(8),
            runtime: 60,
            ..WikiParams::default()
        },
        ..Default::default()
    };

    let listing = execute_read(args).unwrap();
    assert_eq!(listing.jobs.len(), 1);
    assert_eq!(listing.jobs[0].id, "1");
    assert_eq!(listing.jobs[0].submit_time, 2);
    assert_eq!(listing.jobs[0].processor_count, 8);
    assert_eq!(listing.jobs[0].execution_time, 60);
}

#[test]
fn test_same_seed_same_listing() {
    let file = trace_file();
    let args = ReadArgs {
        trace_path: file.path().to_path_buf(),
        seed: Some(7),
        ..Default::default()
    };

    let a = execute_read(args.clone()).unwrap();
    let b = execute_read(args).unwrap();
    assert_eq!(a.jobs, b.jobs);
}

#[test]
fn test_validate_rejects_garbage_listing() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"{ not json").unwrap();
    assert!(validate_listing_file(file.path()).is_err());
}

#[test]
fn test_validate_reports_missing_listing_as_read_failure() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("jobs.json");

    let err = validate_listing_file(&missing).unwrap_err();
    let cause = err
        .downcast_ref::<OutputError>()
        .expect("root cause should be an output error");
    assert!(matches!(cause, OutputError::ReadFailed { .. }));
    assert!(!format!("{:#}", err).contains("Failed to write"));
}
