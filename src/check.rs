//! Consistency checks and statistics for generated embeddings.
//!
//! A valid output has one row per vertex with IDs `1..=N`, a symmetric
//! adjacency relation without loops or parallel edges, a single connected
//! component, and a rotation system whose face count satisfies Euler's
//! formula `V - E + F = 2`.

use crate::graph::{PlaneGraph, VertexId};
use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// A neighbor entry that breaks an invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadRef {
    pub from: VertexId,
    pub to: VertexId,
}

/// Problems with the set of row vertices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IdProblems {
    /// IDs in `1..=N` without a row.
    pub missing: Vec<VertexId>,
    /// Row vertices outside `1..=N`.
    pub out_of_range: Vec<VertexId>,
    /// Vertices with more than one row.
    pub duplicated: Vec<VertexId>,
}

impl IdProblems {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.out_of_range.is_empty() && self.duplicated.is_empty()
    }
}

/// Result of checking a generated graph.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckResult {
    pub ids: IdProblems,
    pub unknown_refs: Vec<BadRef>,
    pub asymmetric: Vec<BadRef>,
    pub loops: Vec<VertexId>,
    pub parallels: Vec<BadRef>,
    pub components: usize,
    pub faces: Option<usize>,
    pub euler_characteristic: Option<i64>,
    pub ok: bool,
}

impl CheckResult {
    /// One line per failed check, for diagnostics.
    pub fn problems(&self) -> Vec<String> {
        let mut out = Vec::new();
        if !self.ids.missing.is_empty() {
            out.push(format!("vertices without a row: {:?}", self.ids.missing));
        }
        if !self.ids.out_of_range.is_empty() {
            out.push(format!("row vertices out of range: {:?}", self.ids.out_of_range));
        }
        if !self.ids.duplicated.is_empty() {
            out.push(format!("vertices with several rows: {:?}", self.ids.duplicated));
        }
        for r in &self.unknown_refs {
            out.push(format!("{} lists unknown vertex {}", r.from, r.to));
        }
        for r in &self.asymmetric {
            out.push(format!("{} lists {} but not vice versa", r.from, r.to));
        }
        for v in &self.loops {
            out.push(format!("loop at {}", v));
        }
        for r in &self.parallels {
            out.push(format!("parallel edges between {} and {}", r.from, r.to));
        }
        if self.components != 1 {
            out.push(format!("{} connected components", self.components));
        }
        match self.euler_characteristic {
            Some(2) => {}
            Some(chi) => out.push(format!("embedding is not planar (V - E + F = {})", chi)),
            None => out.push("faces undefined for this adjacency list".to_string()),
        }
        out
    }
}

/// Check that row vertices are exactly `1..=N`, each once.
pub fn check_ids(graph: &PlaneGraph) -> IdProblems {
    let n = graph.order();
    let mut seen = HashSet::new();
    let mut problems = IdProblems::default();

    for row in graph.rows() {
        if row.vertex == 0 || row.vertex > n {
            problems.out_of_range.push(row.vertex);
        } else if !seen.insert(row.vertex) {
            problems.duplicated.push(row.vertex);
        }
    }
    problems.missing = (1..=n).filter(|v| !seen.contains(v)).collect();
    problems
}

/// Neighbor IDs that have no row of their own.
pub fn check_references(graph: &PlaneGraph) -> Vec<BadRef> {
    let known: HashSet<VertexId> = graph.rows().iter().map(|r| r.vertex).collect();
    let mut refs = Vec::new();

    for row in graph.rows() {
        for &to in &row.neighbors {
            if !known.contains(&to) {
                refs.push(BadRef { from: row.vertex, to });
            }
        }
    }
    refs
}

/// Entries `b` in the row of `a` where `a` does not occur in the row of `b`.
pub fn check_symmetry(graph: &PlaneGraph) -> Vec<BadRef> {
    let mut asymmetric = Vec::new();

    for row in graph.rows() {
        for &to in &row.neighbors {
            if let Some(other) = graph.row(to)
                && !other.neighbors.contains(&row.vertex)
            {
                asymmetric.push(BadRef { from: row.vertex, to });
            }
        }
    }
    asymmetric
}

/// Vertices listing themselves as a neighbor.
pub fn check_loops(graph: &PlaneGraph) -> Vec<VertexId> {
    graph
        .rows()
        .iter()
        .filter(|row| row.neighbors.contains(&row.vertex))
        .map(|row| row.vertex)
        .collect()
}

/// Neighbors listed more than once in the same row.
pub fn check_parallels(graph: &PlaneGraph) -> Vec<BadRef> {
    let mut parallels = Vec::new();

    for row in graph.rows() {
        let mut seen = HashSet::new();
        for &to in &row.neighbors {
            if to != row.vertex && !seen.insert(to) && to > row.vertex {
                parallels.push(BadRef { from: row.vertex, to });
            }
        }
    }
    parallels
}

/// Number of undirected edges, counting each listed neighbor pair once.
pub fn count_edges(graph: &PlaneGraph) -> usize {
    let darts: usize = graph.rows().iter().map(|r| r.degree()).sum();
    darts / 2
}

/// Number of connected components, treating every listed neighbor as an edge.
pub fn count_components(graph: &PlaneGraph) -> usize {
    let mut index: HashMap<VertexId, NodeIndex> = HashMap::new();
    let mut ug = UnGraph::<VertexId, ()>::with_capacity(graph.order(), count_edges(graph));

    for row in graph.rows() {
        index.entry(row.vertex).or_insert_with(|| ug.add_node(row.vertex));
    }
    for row in graph.rows() {
        let from = index[&row.vertex];
        for &to in &row.neighbors {
            if let Some(&to) = index.get(&to) {
                ug.add_edge(from, to, ());
            }
        }
    }
    connected_components(&ug)
}

/// Count the faces of the rotation system.
///
/// The face after dart `u -> v` continues with `v -> w`, where `w` follows
/// `u` in the rotation around `v`. Returns `None` when the tracing is
/// ambiguous: unknown or asymmetric neighbors, loops or parallel edges.
pub fn count_faces(graph: &PlaneGraph) -> Option<usize> {
    // (u, v) -> position of v in the rotation around u
    let mut position: HashMap<(VertexId, VertexId), usize> = HashMap::new();
    for row in graph.rows() {
        for (i, &v) in row.neighbors.iter().enumerate() {
            if v == row.vertex || position.insert((row.vertex, v), i).is_some() {
                return None;
            }
        }
    }
    let rotations: HashMap<VertexId, &[VertexId]> = graph
        .rows()
        .iter()
        .map(|r| (r.vertex, r.neighbors.as_slice()))
        .collect();

    let mut visited: HashSet<(VertexId, VertexId)> = HashSet::new();
    let mut faces = 0;
    for &start in position.keys() {
        if visited.contains(&start) {
            continue;
        }
        faces += 1;
        let mut dart = start;
        while visited.insert(dart) {
            let (u, v) = dart;
            let around_v = rotations.get(&v)?;
            let back = *position.get(&(v, u))?;
            dart = (v, around_v[(back + 1) % around_v.len()]);
        }
    }
    Some(faces)
}

/// Run all checks and return a summary.
pub fn check_all(graph: &PlaneGraph) -> CheckResult {
    let ids = check_ids(graph);
    let unknown_refs = check_references(graph);
    let asymmetric = check_symmetry(graph);
    let loops = check_loops(graph);
    let parallels = check_parallels(graph);
    let components = count_components(graph);

    let faces = if unknown_refs.is_empty() && asymmetric.is_empty() {
        count_faces(graph)
    } else {
        None
    };
    let euler_characteristic =
        faces.map(|f| graph.order() as i64 - count_edges(graph) as i64 + f as i64);

    let ok = ids.is_empty()
        && unknown_refs.is_empty()
        && asymmetric.is_empty()
        && loops.is_empty()
        && parallels.is_empty()
        && components == 1
        && euler_characteristic == Some(2);

    CheckResult {
        ids,
        unknown_refs,
        asymmetric,
        loops,
        parallels,
        components,
        faces,
        euler_characteristic,
        ok,
    }
}

/// Order, size and faces of a generated graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub order: usize,
    pub size: usize,
    pub faces: Option<usize>,
    pub loops: usize,
    pub parallels: usize,
}

impl GraphStats {
    pub fn of(graph: &PlaneGraph) -> Self {
        Self {
            order: graph.order(),
            size: count_edges(graph),
            faces: count_faces(graph),
            loops: check_loops(graph).len(),
            parallels: check_parallels(graph).len(),
        }
    }
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

impl fmt::Display for GraphStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", plural(self.order, "Vertex", "Vertices"))?;
        writeln!(f, "{}", plural(self.size, "Edge", "Edges"))?;
        match self.faces {
            Some(faces) => writeln!(f, "{}", plural(faces, "Face", "Faces"))?,
            None => writeln!(f, "? Faces")?,
        }
        writeln!(f, "{}", plural(self.loops, "Loop", "Loops"))?;
        write!(f, "{}", plural(self.parallels, "Parallel edge", "Parallel edges"))
    }
}
