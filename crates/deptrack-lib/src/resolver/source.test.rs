use super::*;
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

#[test]
fn test_read_lines_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("deps.txt");
    fs::write(&path, "X depends on Y R\nY depends on Z\n").unwrap();

    let lines = read_lines(&path).unwrap();
    assert_eq!(lines, vec!["X depends on Y R", "Y depends on Z"]);
}

#[test]
fn test_trailing_newline_adds_no_phantom_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("deps.txt");
    fs::write(&path, "X depends on Y\n").unwrap();

    assert_eq!(read_lines(&path).unwrap().len(), 1);
}

#[test]
fn test_blank_interior_lines_are_kept_for_the_parser() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("deps.txt");
    fs::write(&path, "X depends on Y\n\nY depends on Z\n").unwrap();

    let lines = read_lines(&path).unwrap();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "");
}

#[test]
fn test_missing_file_is_unavailable() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no-such-file.txt");

    let err = read_lines(&path).unwrap_err();
    assert!(matches!(err, SourceError::Unavailable { .. }));
}

#[test]
fn test_empty_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();

    let err = read_lines(&path).unwrap_err();
    assert!(matches!(err, SourceError::Empty));
}

#[test]
fn test_collect_lines_from_reader() {
    let reader = Cursor::new("A depends on B\nB depends on C\n");
    let lines = collect_lines(reader).unwrap();
    assert_eq!(lines, vec!["A depends on B", "B depends on C"]);
}

#[test]
fn test_collect_lines_empty_reader_is_rejected() {
    let err = collect_lines(Cursor::new("")).unwrap_err();
    assert!(matches!(err, SourceError::Empty));
}

/// Reader whose every read fails
struct BrokenReader;

impl std::io::Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        Err(std::io::Error::other("stream interrupted"))
    }
}

#[test]
fn test_collect_lines_surfaces_stream_errors() {
    let err = collect_lines(std::io::BufReader::new(BrokenReader)).unwrap_err();
    assert!(matches!(err, SourceError::Stream { .. }));
}
