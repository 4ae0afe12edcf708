//! Line reader tests against a plain text fixture.

use micrometa::{get_text_line, get_text_line_range, get_text_lines, ParseError, TextLineOptions};

use super::test_utils::jabberwocky;

const LINE_5: &str = "The jaws that bite, the claws that catch!";
const FIRST_LINE_ALPHABETICALLY: &str = "All mimsy were the borogoves,";

#[test]
fn test_get_text_line() {
    let options = TextLineOptions::default();
    assert_eq!(get_text_line(&jabberwocky(), 5, &options).unwrap(), LINE_5);
}

#[test]
fn test_get_text_line_keeping_empty_lines() {
    let options = TextLineOptions::default().with_remove_empty_lines(false);
    assert_eq!(get_text_line(&jabberwocky(), 6, &options).unwrap(), LINE_5);
}

#[test]
fn test_sorted_first_line() {
    let options = TextLineOptions::default().with_sort(true);
    let lines = get_text_lines(&jabberwocky(), &options).unwrap();
    assert_eq!(lines[0], FIRST_LINE_ALPHABETICALLY);
}

#[test]
fn test_reading_is_idempotent() {
    let options = TextLineOptions::default();
    let first = get_text_lines(&jabberwocky(), &options).unwrap();
    let second = get_text_lines(&jabberwocky(), &options).unwrap();
    assert_eq!(first, second);
    assert!(first.iter().all(|line| !line.is_empty()));
    assert!(first.iter().all(|line| line.trim() == line));
}

#[test]
fn test_line_range() {
    let options = TextLineOptions::default();
    let lines = get_text_line_range(&jabberwocky(), 4..6, &options).unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], LINE_5);

    // Clamped at the end of the file
    let all = get_text_lines(&jabberwocky(), &options).unwrap();
    let tail = get_text_line_range(&jabberwocky(), all.len() - 1..all.len() + 10, &options).unwrap();
    assert_eq!(tail.len(), 1);
}

#[test]
fn test_line_out_of_range() {
    let options = TextLineOptions::default();
    let err = get_text_line(&jabberwocky(), 10_000, &options).unwrap_err();
    assert!(matches!(err, ParseError::LineOutOfRange { index: 10_000, .. }));
}

#[test]
fn test_missing_file() {
    let err = get_text_lines(
        std::path::Path::new("/nonexistent/jabberwocky.txt"),
        &TextLineOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ParseError::Io { .. }));
}
