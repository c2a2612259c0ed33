use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;
use unchop::{run_unchop, Args, UnchopError};

fn input_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file.as_file_mut().sync_all().unwrap();
    file
}

fn run_to_string(inputs: Vec<String>) -> String {
    let out_file = NamedTempFile::new().unwrap();
    let args = Args {
        inputs,
        output: Some(out_file.path().to_str().unwrap().to_string()),
        verbose: false,
    };
    run_unchop(args).unwrap();
    fs::read_to_string(out_file.path()).unwrap()
}

#[test]
fn chain_collapses_to_single_edge() {
    let file = input_file("A\tB\nB\tC\nC\tD\n");
    let output = run_to_string(vec![file.path().to_str().unwrap().to_string()]);
    assert_eq!(output, "A\tD\n");
}

#[test]
fn branching_vertex_is_preserved() {
    let file = input_file("A\tB\nC\tB\nB\tD\n");
    let output = run_to_string(vec![file.path().to_str().unwrap().to_string()]);
    // B has indegree 2, so nothing contracts; vertices emit in
    // first-insertion order.
    assert_eq!(output, "A\tB\nB\tD\nC\tB\n");
}

#[test]
fn duplicate_edge_lines_emit_one_edge() {
    let file = input_file("X\tY\nX\tY\n");
    let output = run_to_string(vec![file.path().to_str().unwrap().to_string()]);
    assert_eq!(output, "X\tY\n");
}

#[test]
fn two_cycle_leaves_no_output() {
    let file = input_file("A\tB\nB\tA\n");
    let output = run_to_string(vec![file.path().to_str().unwrap().to_string()]);
    assert_eq!(output, "");
}

#[test]
fn multiple_input_files_concatenate() {
    let first = input_file("A\tB\n");
    let second = input_file("B\tC\nC\tD\n");
    let output = run_to_string(vec![
        first.path().to_str().unwrap().to_string(),
        second.path().to_str().unwrap().to_string(),
    ]);
    assert_eq!(output, "A\tD\n");
}

#[test]
fn symbols_keep_interior_whitespace() {
    let file = input_file("left end\tright end\nright end\tfar end\n");
    let output = run_to_string(vec![file.path().to_str().unwrap().to_string()]);
    assert_eq!(output, "left end\tfar end\n");
}

#[test]
fn empty_input_produces_empty_output() {
    let file = input_file("");
    let output = run_to_string(vec![file.path().to_str().unwrap().to_string()]);
    assert_eq!(output, "");
}

#[test]
fn malformed_line_is_fatal_with_location() {
    let file = input_file("A\tB\nnot-an-edge\nB\tC\n");
    let args = Args {
        inputs: vec![file.path().to_str().unwrap().to_string()],
        output: None,
        verbose: false,
    };
    let err = run_unchop(args).unwrap_err();
    match err {
        UnchopError::MalformedLine { line_no, line, .. } => {
            assert_eq!(line_no, 2);
            assert_eq!(line, "not-an-edge");
        }
        other => panic!("expected MalformedLine, got {other:?}"),
    }
}

#[test]
fn extra_field_is_fatal() {
    let file = input_file("A\tB\tC\n");
    let args = Args {
        inputs: vec![file.path().to_str().unwrap().to_string()],
        output: None,
        verbose: false,
    };
    assert!(matches!(
        run_unchop(args),
        Err(UnchopError::MalformedLine { line_no: 1, .. })
    ));
}

#[test]
fn missing_input_file_is_fatal() {
    let args = Args {
        inputs: vec!["/no/such/edge/list".to_string()],
        output: None,
        verbose: false,
    };
    assert!(matches!(run_unchop(args), Err(UnchopError::Io(_))));
}
