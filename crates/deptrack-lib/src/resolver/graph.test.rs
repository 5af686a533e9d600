// Tests for the dependency graph and closure engine

use super::*;

// ============================================================================
// Test Utilities
// ============================================================================

/// Build a graph from (library, dependencies) declarations
fn graph_from(declarations: &[(&str, &[&str])]) -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    for (name, deps) in declarations {
        let deps: Vec<String> = deps.iter().map(|d| d.to_string()).collect();
        graph.declare(name, &deps).unwrap();
    }
    graph
}

/// Closure of one library as a sorted Vec for compact assertions
fn closure_of<'a>(closures: &'a Closures, name: &str) -> Vec<&'a str> {
    closures[name].iter().map(String::as_str).collect()
}

// ============================================================================
// Basic Graph Operations
// ============================================================================

#[test]
fn test_new_graph_is_empty() {
    let graph = DependencyGraph::new();
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_declare_adds_nodes_and_edges() {
    let graph = graph_from(&[("A", &["B", "C"])]);
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    assert!(graph.contains("A"));
    assert!(graph.contains("B"));
    assert!(graph.is_declared("A"));
    assert!(!graph.is_declared("B"));
}

#[test]
fn test_immediate_dependencies_preserve_declaration_order() {
    let graph = graph_from(&[("A", &["C", "B", "D"])]);
    assert_eq!(graph.immediate_dependencies("A").unwrap(), vec!["C", "B", "D"]);
    assert_eq!(graph.immediate_dependencies("B").unwrap(), Vec::<&str>::new());
    assert!(graph.immediate_dependencies("missing").is_none());
}

#[test]
fn test_repeated_declaration_is_rejected() {
    let mut graph = DependencyGraph::new();
    graph.declare("A", &["B".to_string()]).unwrap();
    let err = graph.declare("A", &["C".to_string()]).unwrap_err();
    assert!(matches!(err, GraphError::LibraryRepeated { name } if name == "A"));
}

#[test]
fn test_forward_reference_then_declaration() {
    // B is referenced before its own line; it must not count as repeated
    let mut graph = DependencyGraph::new();
    graph.declare("A", &["B".to_string()]).unwrap();
    graph.declare("B", &["C".to_string()]).unwrap();
    assert!(graph.is_declared("B"));
    assert_eq!(
        graph.declared_names().collect::<Vec<_>>(),
        vec!["A", "B"]
    );
}

// ============================================================================
// Closure Computation
// ============================================================================

#[test]
fn test_simple_chain() {
    let graph = graph_from(&[("X", &["Y", "R"]), ("Y", &["Z"])]);
    let closures = graph.transitive_closures();

    assert_eq!(closures.len(), 2);
    assert_eq!(closure_of(&closures, "X"), vec!["R", "Y", "Z"]);
    assert_eq!(closure_of(&closures, "Y"), vec!["Z"]);
}

#[test]
fn test_forward_references_and_shared_subtrees() {
    let graph = graph_from(&[
        ("Y", &["Z"]),
        ("A", &["Q", "R", "S"]),
        ("X", &["Y"]),
        ("Z", &["A", "B"]),
    ]);
    let closures = graph.transitive_closures();

    assert_eq!(closure_of(&closures, "Y"), vec!["A", "B", "Q", "R", "S", "Z"]);
    assert_eq!(closure_of(&closures, "A"), vec!["Q", "R", "S"]);
    assert_eq!(closure_of(&closures, "X"), vec!["A", "B", "Q", "R", "S", "Y", "Z"]);
    assert_eq!(closure_of(&closures, "Z"), vec!["A", "B", "Q", "R", "S"]);
}

#[test]
fn test_diamond_dependencies() {
    let graph = graph_from(&[
        ("A", &["B", "C"]),
        ("B", &["C", "E"]),
        ("C", &["G"]),
        ("D", &["A", "F"]),
        ("E", &["F"]),
        ("F", &["H"]),
    ]);
    let closures = graph.transitive_closures();

    assert_eq!(closure_of(&closures, "A"), vec!["B", "C", "E", "F", "G", "H"]);
    assert_eq!(closure_of(&closures, "B"), vec!["C", "E", "F", "G", "H"]);
    assert_eq!(closure_of(&closures, "C"), vec!["G"]);
    assert_eq!(closure_of(&closures, "D"), vec!["A", "B", "C", "E", "F", "G", "H"]);
    assert_eq!(closure_of(&closures, "E"), vec!["F", "H"]);
    assert_eq!(closure_of(&closures, "F"), vec!["H"]);
}

#[test]
fn test_shared_arm_resolves_identically_for_all_dependents() {
    let graph = graph_from(&[("X", &["S"]), ("Y", &["S"]), ("S", &["T"])]);
    let closures = graph.transitive_closures();

    assert_eq!(closure_of(&closures, "X"), vec!["S", "T"]);
    assert_eq!(closure_of(&closures, "Y"), vec!["S", "T"]);
    assert_eq!(closure_of(&closures, "S"), vec!["T"]);
}

#[test]
fn test_long_chain() {
    let names: Vec<String> = (0..26).map(|i| format!("n{i:02}")).collect();
    let mut graph = DependencyGraph::new();
    for window in names.windows(2) {
        graph.declare(&window[0], &window[1..2]).unwrap();
    }
    let closures = graph.transitive_closures();

    assert_eq!(closures["n00"].len(), 25);
    assert_eq!(closure_of(&closures, "n24"), vec!["n25"]);
    assert!(closures["n00"].contains("n25"));
}

// ============================================================================
// Leaf Handling
// ============================================================================

#[test]
fn test_leaves_appear_in_closures_but_get_no_entry() {
    let graph = graph_from(&[("A", &["B"]), ("B", &["C"])]);
    let closures = graph.transitive_closures();

    assert!(closures["A"].contains("C"));
    assert!(closures["B"].contains("C"));
    assert!(!closures.contains_key("C"));
}

// ============================================================================
// Cycle Collapse
// ============================================================================

#[test]
fn test_two_node_cycle() {
    let graph = graph_from(&[("A", &["B"]), ("B", &["A"])]);
    let closures = graph.transitive_closures();

    assert_eq!(closure_of(&closures, "A"), vec!["B"]);
    assert_eq!(closure_of(&closures, "B"), vec!["A"]);
}

#[test]
fn test_five_node_cycle_is_symmetric() {
    let graph = graph_from(&[
        ("A", &["B"]),
        ("B", &["C"]),
        ("C", &["D"]),
        ("D", &["E"]),
        ("E", &["A"]),
    ]);
    let closures = graph.transitive_closures();

    assert_eq!(closure_of(&closures, "A"), vec!["B", "C", "D", "E"]);
    assert_eq!(closure_of(&closures, "B"), vec!["A", "C", "D", "E"]);
    assert_eq!(closure_of(&closures, "C"), vec!["A", "B", "D", "E"]);
    assert_eq!(closure_of(&closures, "D"), vec!["A", "B", "C", "E"]);
    assert_eq!(closure_of(&closures, "E"), vec!["A", "B", "C", "D"]);
}

#[test]
fn test_cycle_with_external_dependency() {
    let graph = graph_from(&[("A", &["B"]), ("B", &["A", "C"])]);
    let closures = graph.transitive_closures();

    assert_eq!(closure_of(&closures, "A"), vec!["B", "C"]);
    assert_eq!(closure_of(&closures, "B"), vec!["A", "C"]);
}

#[test]
fn test_entry_outside_the_cycle() {
    let graph = graph_from(&[("X", &["A"]), ("A", &["B"]), ("B", &["A"])]);
    let closures = graph.transitive_closures();

    assert_eq!(closure_of(&closures, "X"), vec!["A", "B"]);
    assert_eq!(closure_of(&closures, "A"), vec!["B"]);
    assert_eq!(closure_of(&closures, "B"), vec!["A"]);
}

#[test]
fn test_two_cycles_sharing_a_member() {
    // A <-> B and B <-> C form one strongly connected component through B
    let graph = graph_from(&[("A", &["B"]), ("B", &["A", "C"]), ("C", &["B"])]);
    let closures = graph.transitive_closures();

    assert_eq!(closure_of(&closures, "A"), vec!["B", "C"]);
    assert_eq!(closure_of(&closures, "B"), vec!["A", "C"]);
    assert_eq!(closure_of(&closures, "C"), vec!["A", "B"]);
}

#[test]
fn test_cycle_reached_through_memoized_prefix() {
    // P is processed first and memoized; the cycle Q <-> R is expanded later
    let graph = graph_from(&[("P", &["L"]), ("Q", &["R", "P"]), ("R", &["Q"])]);
    let closures = graph.transitive_closures();

    assert_eq!(closure_of(&closures, "P"), vec!["L"]);
    assert_eq!(closure_of(&closures, "Q"), vec!["L", "P", "R"]);
    assert_eq!(closure_of(&closures, "R"), vec!["L", "P", "Q"]);
}

// ============================================================================
// Engine Properties
// ============================================================================

#[test]
fn test_no_library_lists_itself() {
    let graph = graph_from(&[
        ("A", &["B"]),
        ("B", &["C"]),
        ("C", &["A"]),
        ("D", &["A", "D1"]),
    ]);
    let closures = graph.transitive_closures();

    for (name, closure) in &closures {
        assert!(!closure.contains(name), "{name} must not list itself");
    }
}

#[test]
fn test_resolution_is_idempotent() {
    let graph = graph_from(&[("A", &["B"]), ("B", &["C", "A"]), ("C", &["D"])]);
    let first = graph.transitive_closures();
    let second = graph.transitive_closures();
    assert_eq!(first, second);
}
