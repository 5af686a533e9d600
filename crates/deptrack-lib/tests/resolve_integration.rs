//! End-to-end pipeline tests: input file or stream to formatted report.

use deptrack_lib::resolver::{self, ResolveError, SourceError};
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_input(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_resolve_simple_input() {
    let dir = TempDir::new().unwrap();
    let path = write_input(&dir, "input1.txt", "X depends on Y R\nY depends on Z\n");

    let report = resolver::resolve_path(&path).unwrap();
    assert_eq!(report, "X depends on R Y Z\nY depends on Z");
}

#[test]
fn test_resolve_forward_references() {
    let dir = TempDir::new().unwrap();
    let path = write_input(
        &dir,
        "input2.txt",
        "Y depends on Z\nA depends on Q R S\nX depends on Y\nZ depends on A B\n",
    );

    let report = resolver::resolve_path(&path).unwrap();
    assert_eq!(
        report,
        "Y depends on A B Q R S Z\n\
         A depends on Q R S\n\
         X depends on A B Q R S Y Z\n\
         Z depends on A B Q R S"
    );
}

#[test]
fn test_resolve_diamond_input() {
    let dir = TempDir::new().unwrap();
    let path = write_input(
        &dir,
        "input3.txt",
        "A depends on B C\n\
         B depends on C E\n\
         C depends on G\n\
         D depends on A F\n\
         E depends on F\n\
         F depends on H\n",
    );

    let report = resolver::resolve_path(&path).unwrap();
    assert_eq!(
        report,
        "A depends on B C E F G H\n\
         B depends on C E F G H\n\
         C depends on G\n\
         D depends on A B C E F G H\n\
         E depends on F H\n\
         F depends on H"
    );
}

#[test]
fn test_resolve_cyclical_input() {
    let dir = TempDir::new().unwrap();
    let path = write_input(
        &dir,
        "cyclical.txt",
        "A depends on B\n\
         B depends on C\n\
         C depends on D\n\
         D depends on E\n\
         E depends on A\n",
    );

    let report = resolver::resolve_path(&path).unwrap();
    assert_eq!(
        report,
        "A depends on B C D E\n\
         B depends on A C D E\n\
         C depends on A B D E\n\
         D depends on A B C E\n\
         E depends on A B C D"
    );
}

#[test]
fn test_resolve_chained_alphabet() {
    // Every letter pulls in the next letter plus a spelled-out word; the
    // first library's closure spans the entire chain
    let letters: Vec<char> = ('A'..='Z').collect();
    let words = [
        "Alfa", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot", "Golf", "Hotel", "India",
        "Juliett", "Kilo", "Lima", "Mike", "November", "Oscar", "Papa", "Quebec", "Romeo",
        "Sierra", "Tango", "Uniform", "Victor", "Whiskey", "X-Ray", "Yankee", "Zulu",
    ];

    let mut input = String::new();
    for (i, letter) in letters.iter().enumerate() {
        if i + 1 < letters.len() {
            input.push_str(&format!("{letter} depends on {} {}\n", letters[i + 1], words[i]));
        } else {
            input.push_str(&format!("{letter} depends on {}\n", words[i]));
        }
    }

    let dir = TempDir::new().unwrap();
    let path = write_input(&dir, "chained.txt", &input);

    let report = resolver::resolve_path(&path).unwrap();
    assert!(report.starts_with(
        "A depends on Alfa B Bravo C Charlie D Delta E Echo F Foxtrot G Golf H Hotel \
         I India J Juliett K Kilo L Lima M Mike N November O Oscar P Papa Q Quebec \
         R Romeo S Sierra T Tango U Uniform V Victor W Whiskey X X-Ray Y Yankee Z Zulu"
    ));
}

#[test]
fn test_resolve_reader_matches_file_resolution() {
    let input = "X depends on Y R\nY depends on Z\n";
    let report = resolver::resolve_reader(Cursor::new(input)).unwrap();
    assert_eq!(report, "X depends on R Y Z\nY depends on Z");
}

#[test]
fn test_malformed_line_aborts_resolution() {
    let dir = TempDir::new().unwrap();
    let path = write_input(&dir, "bad.txt", "X depends on Y\nnot a declaration\n");

    let err = resolver::resolve_path(&path).unwrap_err();
    assert!(matches!(err, ResolveError::Parse { .. }));
}

#[test]
fn test_repeated_library_aborts_resolution() {
    let dir = TempDir::new().unwrap();
    let path = write_input(&dir, "repeated.txt", "A depends on B\nA depends on C\n");

    let err = resolver::resolve_path(&path).unwrap_err();
    assert!(matches!(err, ResolveError::Graph { .. }));
}

#[test]
fn test_empty_file_aborts_resolution() {
    let dir = TempDir::new().unwrap();
    let path = write_input(&dir, "empty.txt", "");

    let err = resolver::resolve_path(&path).unwrap_err();
    assert!(matches!(
        err,
        ResolveError::Source {
            source: SourceError::Empty
        }
    ));
}

#[test]
fn test_missing_file_aborts_resolution() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nonexistent.txt");

    let err = resolver::resolve_path(&path).unwrap_err();
    assert!(matches!(
        err,
        ResolveError::Source {
            source: SourceError::Unavailable { .. }
        }
    ));
}
