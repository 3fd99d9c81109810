//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use std::process::Output;

/// Assert the process exited with `expected`
pub fn assert_exit_code(output: &Output, expected: i32) {
    assert_eq!(
        output.status.code(),
        Some(expected),
        "Expected exit code {}, got {:?}. Stderr: {}",
        expected,
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Assert stdout is exactly `rows` lines of `columns` cells, each line
/// ending with a reset
pub fn assert_cell_grid(text: &str, columns: usize, rows: usize) {
    let lines: Vec<&str> = text.split_terminator('\n').collect();
    assert_eq!(lines.len(), rows, "row count");
    for (i, line) in lines.iter().enumerate() {
        assert!(line.ends_with("\x1b[0m"), "line {i} lacks reset: {line:?}");
        assert_eq!(line.matches("m ").count(), columns, "cells in line {i}");
    }
}

/// Assert every cell of `text` uses exactly `sequence`
pub fn assert_uniform_cells(text: &str, sequence: &str) {
    for (i, line) in text.split_terminator('\n').enumerate() {
        let body = line
            .strip_suffix("\x1b[0m")
            .unwrap_or_else(|| panic!("line {i} lacks reset: {line:?}"));
        assert!(
            body.split_inclusive("m ").all(|cell| cell == sequence),
            "line {i} has a cell other than {sequence:?}: {line:?}"
        );
    }
}
