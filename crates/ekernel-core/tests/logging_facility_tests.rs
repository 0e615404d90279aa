#![allow(clippy::unwrap_used, clippy::expect_used)]

use ekernel_core::diff::{diff_config_files, DiffOptions};
use ekernel_core::errors::KconfigError;
use ekernel_core::kconfig::{read_config_file, MemoryConfigSource, ParseMode};
use ekernel_core::logging_facility::test_capture::init_test_capture;
use ekernel_core::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_ADDED_LEN, FIELD_CHANGED_LEN,
    FIELD_DURATION_MS, FIELD_ERR_CODE, FIELD_ERR_KIND, FIELD_ERR_MESSAGE, FIELD_OPTION_COUNT,
    FIELD_PATH, FIELD_REMOVED_LEN, FIELD_UNCHANGED_COUNT,
};
use ekernel_core::{log_op_end, log_op_error, log_op_start};
use std::path::Path;

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    let start_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_START))
        .collect();

    assert!(
        !start_events.is_empty(),
        "Should have captured at least one start event"
    );
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].fields.get(FIELD_DURATION_MS), Some(&"42".to_string()));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = KconfigError::Parse {
        line: 1,
        content: "garbage".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let error_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();

    assert_eq!(error_events.len(), 1, "Should have exactly one error event");
    assert_eq!(
        error_events[0].fields.get(FIELD_ERR_CODE),
        Some(&"ERR_PARSE".to_string())
    );
    assert_eq!(
        error_events[0].fields.get(FIELD_ERR_KIND),
        Some(&"Parse".to_string())
    );
    let message = error_events[0].fields.get(FIELD_ERR_MESSAGE).unwrap();
    assert!(message.contains("in operation 'test_log_op_error_unique_3'"));
}

#[test]
fn test_read_config_file_logs_boundaries() {
    let capture = init_test_capture();
    let source = MemoryConfigSource::new().with_file("/logged/.config", "CONFIG_A=y\n");

    read_config_file(&source, Path::new("/logged/.config"), ParseMode::Lenient).unwrap();

    let events: Vec<_> = capture
        .events_for_op("read_config_file")
        .into_iter()
        .filter(|e| e.fields.get(FIELD_OPTION_COUNT).map(String::as_str) == Some("1"))
        .collect();
    assert!(!events.is_empty(), "Expected an end event with option_count=1");
}

#[test]
fn test_failed_diff_logs_read_error() {
    let capture = init_test_capture();
    let source = MemoryConfigSource::new();

    let result = diff_config_files(
        &source,
        Path::new("/missing-for-logging/old"),
        Path::new("/missing-for-logging/new"),
        ParseMode::Lenient,
        &DiffOptions::default(),
    );
    assert!(result.is_err());

    let found = capture.count_events(|e| {
        e.op.as_deref() == Some("diff_config_files")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.fields.get(FIELD_ERR_CODE).map(String::as_str) == Some("ERR_READ")
    });
    assert!(found >= 1, "Expected a diff_config_files error event");
}

#[test]
fn test_diff_end_event_reports_category_sizes() {
    let capture = init_test_capture();
    let source = MemoryConfigSource::new()
        .with_file("/sized/old", "CONFIG_A=y\nCONFIG_B=y\nCONFIG_C=y\n")
        .with_file("/sized/new", "CONFIG_A=y\nCONFIG_C=m\nCONFIG_D=y\n");

    diff_config_files(
        &source,
        Path::new("/sized/old"),
        Path::new("/sized/new"),
        ParseMode::Lenient,
        &DiffOptions::default(),
    )
    .unwrap();

    let end = capture
        .events_for_op("diff_config_files")
        .into_iter()
        .find(|e| {
            e.event.as_deref() == Some(EVENT_END)
                && e.fields.get(FIELD_UNCHANGED_COUNT).map(String::as_str) == Some("1")
                && e.fields.get(FIELD_CHANGED_LEN).map(String::as_str) == Some("1")
        })
        .expect("Expected a diff_config_files end event");
    assert_eq!(end.fields.get(FIELD_ADDED_LEN).map(String::as_str), Some("1"));
    assert_eq!(end.fields.get(FIELD_REMOVED_LEN).map(String::as_str), Some("1"));

    let starts = capture.count_events(|e| {
        e.op.as_deref() == Some("read_config_file")
            && e.event.as_deref() == Some(EVENT_START)
            && e.fields.get(FIELD_PATH).map(String::as_str) == Some("/sized/old")
    });
    assert!(starts >= 1);
}
