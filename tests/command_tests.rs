use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use xdebug_trace_tree::commands::{
    default_html_path, execute_render, validate_args, validate_trace_file, RenderArgs,
};
use xdebug_trace_tree::parser::{HeaderPolicy, ParseOptions};

const TRACE: &str = "Version: 2.4.0
File format: 4

TRACE START [2017-03-14 14:34:51]
1\t0\t0\t0.000301\t369752\t{main}\t1\t\t./index.php\t0\t0
2\t1\t0\t0.000318\t369752\tdefine\t0\t\t./index.php\t20\t2\t'ENVIRONMENT'\t'production'
2\t1\t1\t0.000327\t369784
2\t1\tR\t\t\tTRUE
1\t0\t1\t0.162781\t385144
\t\t\t0.162800\t552
TRACE END   [2017-03-14 14:34:51]
";

fn write_trace(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn args_for(input: &Path, dir: &Path) -> RenderArgs {
    RenderArgs {
        input: input.to_path_buf(),
        output_html: dir.join("trace.html"),
        ..Default::default()
    }
}

#[test]
fn test_default_html_path() {
    assert_eq!(
        default_html_path(Path::new("/tmp/trace.xt")),
        PathBuf::from("/tmp/trace.xt.html")
    );
}

#[test]
fn test_validate_args_valid() {
    let trace = write_trace(TRACE);
    let dir = tempfile::tempdir().unwrap();

    assert!(validate_args(&args_for(trace.path(), dir.path())).is_ok());
}

#[test]
fn test_validate_args_empty_input() {
    let dir = tempfile::tempdir().unwrap();
    let args = args_for(Path::new(""), dir.path());

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let args = args_for(&dir.path().join("missing.xt"), dir.path());

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_output_overwrites_input() {
    let trace = write_trace(TRACE);
    let args = RenderArgs {
        input: trace.path().to_path_buf(),
        output_html: trace.path().to_path_buf(),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_summary_lines_zero() {
    let trace = write_trace(TRACE);
    let dir = tempfile::tempdir().unwrap();
    let args = RenderArgs {
        print_summary: true,
        summary_lines: 0,
        ..args_for(trace.path(), dir.path())
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_execute_render_writes_outputs() {
    let trace = write_trace(TRACE);
    let dir = tempfile::tempdir().unwrap();
    let args = RenderArgs {
        output_json: Some(dir.path().join("json/trace.json")),
        ..args_for(trace.path(), dir.path())
    };

    execute_render(args).unwrap();

    let html = std::fs::read_to_string(dir.path().join("trace.html")).unwrap();
    assert!(html.contains(r#"<span class="name">define</span>"#));
    assert!(dir.path().join("json/trace.json").exists());
}

#[test]
fn test_execute_render_rejects_bad_header() {
    let trace = write_trace("just\nsome\ntext\nhere\n");
    let dir = tempfile::tempdir().unwrap();

    let err = execute_render(args_for(trace.path(), dir.path())).unwrap_err();
    assert!(format!("{:#}", err).contains("Version"));
    assert!(!dir.path().join("trace.html").exists());
}

#[test]
fn test_execute_render_lenient_header() {
    let trace = write_trace("just\nsome\ntext\nhere\n1\t0\t0\t0.1\t10\t{main}\t1\t\tx.php\t0\t0\n");
    let dir = tempfile::tempdir().unwrap();
    let args = RenderArgs {
        parse_options: ParseOptions::new().with_header_policy(HeaderPolicy::Lenient),
        ..args_for(trace.path(), dir.path())
    };

    execute_render(args).unwrap();

    let html = std::fs::read_to_string(dir.path().join("trace.html")).unwrap();
    assert!(html.contains("{main}"));
}

#[test]
fn test_validate_trace_file() {
    let trace = write_trace(TRACE);

    assert!(validate_trace_file(trace.path(), &ParseOptions::new()).is_ok());
}

#[test]
fn test_validate_trace_file_truncated() {
    let trace = write_trace("Version: 2.4.0\n");

    assert!(validate_trace_file(trace.path(), &ParseOptions::new()).is_err());
}
