use super::*;

#[test]
fn test_parse_simple_line() {
    let (name, deps) = parse_line("A depends on B C D").unwrap();
    assert_eq!(name, "A");
    assert_eq!(deps, vec!["B", "C", "D"]);
}

#[test]
fn test_parse_single_dependency() {
    let (name, deps) = parse_line("X depends on Y").unwrap();
    assert_eq!(name, "X");
    assert_eq!(deps, vec!["Y"]);
}

#[test]
fn test_parse_deduplicates_preserving_first_seen_order() {
    let (_, deps) = parse_line("A depends on B C B D C B").unwrap();
    assert_eq!(deps, vec!["B", "C", "D"]);
}

#[test]
fn test_parse_accepts_arbitrarily_long_lists() {
    let tokens: Vec<String> = (0..500).map(|i| format!("dep{i}")).collect();
    let line = format!("A depends on {} {}", tokens.join(" "), tokens.join(" "));
    let (name, deps) = parse_line(&line).unwrap();
    assert_eq!(name, "A");
    assert_eq!(deps.len(), 500);
    assert_eq!(deps.first().map(String::as_str), Some("dep0"));
    assert_eq!(deps.last().map(String::as_str), Some("dep499"));
}

#[test]
fn test_parse_malformed_lines() {
    let malformed = ["A depende de B C D", "A depends on", "A", "depends on", "", "   "];
    for line in malformed {
        let err = parse_line(line).unwrap_err();
        assert!(
            matches!(err, ParseError::MalformedLine { .. }),
            "line {line:?} should be malformed"
        );
    }
}

#[test]
fn test_parse_connective_must_sit_after_the_name() {
    assert!(parse_line("A B depends on C").is_err());
    assert!(parse_line("depends on A B").is_err());
    assert!(parse_line("A on depends B").is_err());
}
