//! Adjacency-list representation of a plane graph.
//!
//! A [`PlaneGraph`] is an ordered list of [`AdjacencyRow`]s. The order of the
//! neighbors inside a row is the cyclic rotation of the embedding around that
//! vertex, so rows are never sorted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};

/// External, 1-based vertex identifier.
pub type VertexId = usize;

/// A vertex followed by its neighbors in rotation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyRow {
    pub vertex: VertexId,
    pub neighbors: Vec<VertexId>,
}

impl AdjacencyRow {
    pub fn new(vertex: VertexId, neighbors: Vec<VertexId>) -> Self {
        Self { vertex, neighbors }
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// The row as emitted: own ID first, then the neighbors.
    pub fn ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        std::iter::once(self.vertex).chain(self.neighbors.iter().copied())
    }
}

impl fmt::Display for AdjacencyRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for id in self.ids() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}", id)?;
            first = false;
        }
        Ok(())
    }
}

/// A graph given as adjacency rows, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaneGraph {
    rows: Vec<AdjacencyRow>,
}

impl PlaneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_row(&mut self, row: AdjacencyRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[AdjacencyRow] {
        &self.rows
    }

    /// Number of vertices (one row per vertex).
    pub fn order(&self) -> usize {
        self.rows.len()
    }

    /// Look up the row of a vertex. Linear scan; rows are not kept in ID order.
    pub fn row(&self, vertex: VertexId) -> Option<&AdjacencyRow> {
        self.rows.iter().find(|row| row.vertex == vertex)
    }

    /// Write one line per row, IDs separated by a single space.
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for row in &self.rows {
            writeln!(out, "{}", row)?;
        }
        Ok(())
    }

    /// Write the rows as a JSON array of arrays, own ID first in each.
    pub fn write_json<W: Write>(&self, out: &mut W) -> serde_json::Result<()> {
        let rows: Vec<Vec<VertexId>> = self.rows.iter().map(|r| r.ids().collect()).collect();
        serde_json::to_writer(&mut *out, &rows)?;
        writeln!(out).map_err(serde_json::Error::io)
    }

    /// The text rendering as a string.
    pub fn to_text(&self) -> String {
        self.rows.iter().map(|row| format!("{}\n", row)).collect()
    }
}

impl FromIterator<AdjacencyRow> for PlaneGraph {
    fn from_iter<I: IntoIterator<Item = AdjacencyRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
