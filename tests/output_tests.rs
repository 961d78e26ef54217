use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::NamedTempFile;
use xdebug_trace_tree::output::{read_trace_json, validate_path, write_html, write_trace_json};
use xdebug_trace_tree::parser::{parse_content, ParseOptions, Trace};
use xdebug_trace_tree::utils::config::SCHEMA_VERSION;

fn create_test_trace() -> Trace {
    parse_content(
        "Version: 2.4.0
File format: 4

TRACE START [2017-03-14 14:34:51]
1\t0\t0\t0.000301\t369752\t{main}\t1\t\t./index.php\t0\t0
2\t1\t0\t0.000318\t369752\tdefine\t0\t\t./index.php\t20\t2\t'ENVIRONMENT'\t'production'
2\t1\t1\t0.000327\t369784
2\t1\tR\t\t\tTRUE
1\t0\t1\t0.162781\t385144
",
        &ParseOptions::new(),
    )
    .unwrap()
}

#[test]
fn test_write_and_read_trace_json() {
    let trace = create_test_trace();
    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    write_trace_json(&trace, path).unwrap();
    let loaded = read_trace_json(path).unwrap();

    assert_eq!(loaded.schema_version, SCHEMA_VERSION);
    assert_eq!(loaded.trace, trace);
}

#[test]
fn test_json_omits_missing_return() {
    let trace = create_test_trace();
    let temp_file = NamedTempFile::new().unwrap();

    write_trace_json(&trace, temp_file.path()).unwrap();
    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(temp_file.path()).unwrap()).unwrap();

    assert_eq!(raw["trace"]["calls"]["1"]["ret"], "TRUE");
    assert!(raw["trace"]["calls"]["0"].get("ret").is_none());
    assert_eq!(raw["trace"]["start_time"], "2017-03-14T14:34:51");
}

#[test]
fn test_validate_output_path_empty() {
    let result = validate_path(Path::new(""));
    assert!(result.is_err());
}

#[test]
fn test_validate_output_path_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let result = validate_path(temp_dir.path());
    assert!(result.is_err());
}

#[test]
fn test_write_html_creates_parent_dirs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested_path = temp_dir.path().join("nested/dirs/trace.html");

    write_html(&["<html>", "</html>"], &nested_path).unwrap();

    assert_eq!(std::fs::read_to_string(&nested_path).unwrap(), "<html>\n</html>\n");
}

#[test]
fn test_json_write_creates_parent_dirs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested_path = temp_dir.path().join("nested/dirs/trace.json");

    write_trace_json(&create_test_trace(), &nested_path).unwrap();

    assert!(nested_path.exists());
}
