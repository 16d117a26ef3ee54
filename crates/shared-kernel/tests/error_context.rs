// crates/shared-kernel/tests/error_context.rs
use std::io;

use sloc_census_shared_kernel::{ApplicationError, ErrorContext, SlocCensusError};

fn boom() -> std::result::Result<(), io::Error> {
    Err(io::Error::other("root-io"))
}

#[test]
fn context_wraps_and_formats() {
    let err = boom().map_err(SlocCensusError::from).context("reading report").unwrap_err();

    let display = err.to_string();
    assert!(display.starts_with("reading report: "));
    assert!(display.contains("Output error:"));
}

#[test]
fn with_context_is_lazy_and_keeps_source() {
    let err = Err::<(), _>(ApplicationError::NoReports)
        .with_context(|| format!("summarizing {} inputs", 0))
        .unwrap_err();

    assert_eq!(err.to_string(), "summarizing 0 inputs: Application error: No repository reports to summarize");
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn json_errors_convert_to_serialization_errors() {
    let parse = serde_json::from_str::<u32>("not json").unwrap_err();
    let err = SlocCensusError::from(parse);
    assert!(err.to_string().contains("Failed to parse JSON data"));
}
