//! Library dependency graph and transitive closure engine
//!
//! Builds a directed graph from declaration lines, then flattens every
//! declared library into its full transitive dependency set. A dependency
//! shared by several libraries is expanded exactly once, and dependency
//! cycles collapse: each library on a cycle ends up with every other member
//! of the cycle plus everything the cycle reaches, never itself.

use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that can occur while building the graph
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Library declared more than once: {name}")]
    LibraryRepeated { name: String },
}

/// Closure table: declared library name to its resolved dependency set
pub type Closures = BTreeMap<String, BTreeSet<String>>;

/// A named library in the dependency graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryNode {
    /// Unique library name
    pub name: String,
    /// Whether the library had its own declaration line. Undeclared nodes are
    /// leaves: referenced as dependencies, never expanded further.
    pub declared: bool,
}

/// Dependency graph for transitive closure resolution
pub struct DependencyGraph {
    /// Directed graph: nodes = libraries, edges = dependent -> dependency
    graph: DiGraph<LibraryNode, ()>,
    /// Map from library name to node index for fast lookup
    node_map: HashMap<String, NodeIndex>,
    /// Declared libraries in declaration order (drives report ordering)
    declaration_order: Vec<NodeIndex>,
}

impl DependencyGraph {
    /// Create a new empty dependency graph
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_map: HashMap::new(),
            declaration_order: Vec::new(),
        }
    }

    /// Add a library node if not already present (idempotent)
    fn intern(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(LibraryNode {
            name: name.to_string(),
            declared: false,
        });
        self.node_map.insert(name.to_string(), idx);
        idx
    }

    /// Record one declaration: a library and its immediate dependencies.
    ///
    /// Dependencies may name libraries declared later in the input, or never
    /// declared at all (those stay leaves). Declaring the same library twice
    /// is an error.
    pub fn declare(&mut self, name: &str, dependencies: &[String]) -> Result<(), GraphError> {
        let idx = self.intern(name);
        if self.graph[idx].declared {
            return Err(GraphError::LibraryRepeated {
                name: name.to_string(),
            });
        }
        self.graph[idx].declared = true;
        self.declaration_order.push(idx);

        for dep in dependencies {
            let dep_idx = self.intern(dep);
            trace!(library = name, dependency = %dep, "recording immediate dependency");
            self.graph.add_edge(idx, dep_idx, ());
        }
        debug!(
            library = name,
            dependencies = dependencies.len(),
            "declared library"
        );
        Ok(())
    }

    /// Get the number of libraries in the graph (declared and leaves)
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get the number of immediate dependency edges in the graph
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Check if a library exists in the graph (declared or leaf)
    pub fn contains(&self, name: &str) -> bool {
        self.node_map.contains_key(name)
    }

    /// Check if a library was declared with its own line
    pub fn is_declared(&self, name: &str) -> bool {
        self.node_map
            .get(name)
            .is_some_and(|&idx| self.graph[idx].declared)
    }

    /// Declared library names in declaration order
    pub fn declared_names(&self) -> impl Iterator<Item = &str> {
        self.declaration_order
            .iter()
            .map(|&idx| self.graph[idx].name.as_str())
    }

    /// Immediate dependencies of a library, if it exists
    pub fn immediate_dependencies(&self, name: &str) -> Option<Vec<&str>> {
        let idx = *self.node_map.get(name)?;
        let mut deps: Vec<&str> = self
            .graph
            .neighbors(idx)
            .map(|dep| self.graph[dep].name.as_str())
            .collect();
        // Petgraph yields neighbors in reverse insertion order
        deps.reverse();
        Some(deps)
    }

    /// Compute the transitive closure of every declared library.
    ///
    /// Iterative depth-first expansion with an explicit visiting path.
    /// Resolved libraries are memoized, so a dependency shared by several
    /// libraries is expanded only once across the whole run. A back-edge onto
    /// the visiting path marks a cycle segment; when the library that opened
    /// the segment finishes, every library on the segment receives the union
    /// of everything the segment discovered, minus its own name.
    ///
    /// Cannot fail on a built graph, and leaves the graph untouched: running
    /// it twice yields identical tables.
    pub fn transitive_closures(&self) -> Closures {
        let mut memo: HashMap<NodeIndex, BTreeSet<String>> = HashMap::new();
        for &root in &self.declaration_order {
            if !memo.contains_key(&root) {
                self.expand(root, &mut memo);
            }
        }
        debug!(
            libraries = self.declaration_order.len(),
            resolved = memo.len(),
            "transitive closures computed"
        );
        self.declaration_order
            .iter()
            .map(|&idx| (self.graph[idx].name.clone(), memo[&idx].clone()))
            .collect()
    }

    /// Depth-first expansion of one library and everything reachable from it.
    ///
    /// Each node is pushed at most once and each edge followed at most once,
    /// so the walk terminates on any graph shape.
    fn expand(&self, root: NodeIndex, memo: &mut HashMap<NodeIndex, BTreeSet<String>>) {
        struct Frame {
            node: NodeIndex,
            targets: Vec<NodeIndex>,
            cursor: usize,
        }

        // The ordered visiting path, with per-slot bookkeeping: `position`
        // gives O(1) path membership, `low` tracks the earliest path slot a
        // subtree reaches back to, `gathered` collects dependency names
        // discovered for that slot.
        let mut path: Vec<NodeIndex> = vec![root];
        let mut position: HashMap<NodeIndex, usize> = HashMap::new();
        position.insert(root, 0);
        let mut low: Vec<usize> = vec![0];
        let mut gathered: Vec<BTreeSet<String>> = vec![BTreeSet::new()];

        let mut frames: Vec<Frame> = vec![Frame {
            node: root,
            targets: self.graph.neighbors(root).collect(),
            cursor: 0,
        }];

        while !frames.is_empty() {
            let (node, next_target) = {
                let frame = frames.last_mut().expect("loop guard keeps frames non-empty");
                let target = if frame.cursor < frame.targets.len() {
                    let target = frame.targets[frame.cursor];
                    frame.cursor += 1;
                    Some(target)
                } else {
                    None
                };
                (frame.node, target)
            };

            match next_target {
                Some(target) => {
                    let pos = position[&node];
                    gathered[pos].insert(self.graph[target].name.clone());

                    if let Some(resolved) = memo.get(&target) {
                        // Already fully resolved: reuse, never re-expand
                        gathered[pos].extend(resolved.iter().cloned());
                    } else if let Some(&ancestor) = position.get(&target) {
                        // Back-edge onto the visiting path: a cycle. Do not
                        // recurse; remember how far back it reaches.
                        trace!(
                            library = %self.graph[node].name,
                            cycles_to = %self.graph[target].name,
                            "cycle detected"
                        );
                        low[pos] = low[pos].min(ancestor);
                    } else {
                        let next = path.len();
                        path.push(target);
                        position.insert(target, next);
                        low.push(next);
                        gathered.push(BTreeSet::new());
                        frames.push(Frame {
                            node: target,
                            targets: self.graph.neighbors(target).collect(),
                            cursor: 0,
                        });
                    }
                }
                None => {
                    let pos = position[&node];
                    frames.pop();

                    if low[pos] == pos {
                        // This library closes its own segment. Everything from
                        // `pos` onward is one cycle segment (usually just this
                        // library) sharing one discovered set.
                        let mut union: BTreeSet<String> = BTreeSet::new();
                        for set in &gathered[pos..] {
                            union.extend(set.iter().cloned());
                        }
                        for &member in &path[pos..] {
                            let mut closure = union.clone();
                            closure.remove(&self.graph[member].name);
                            position.remove(&member);
                            memo.insert(member, closure);
                        }
                        path.truncate(pos);
                        low.truncate(pos);
                        gathered.truncate(pos);

                        // The parent sees the finished subtree as resolved
                        if let Some(parent) = frames.last() {
                            let parent_pos = position[&parent.node];
                            let resolved = memo[&node].clone();
                            gathered[parent_pos].extend(resolved);
                        }
                    } else {
                        // Mid-cycle: the library stays on the path until the
                        // segment closes; carry its reach up to the parent.
                        let parent = frames
                            .last()
                            .expect("mid-cycle library always has a parent frame");
                        let parent_pos = position[&parent.node];
                        low[parent_pos] = low[parent_pos].min(low[pos]);
                    }
                }
            }
        }
    }
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    include!("graph.test.rs");
}
