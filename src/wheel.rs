//! Planar embedding of the wheel graph: a cycle of `n - 1` vertices plus a
//! hub adjacent to all of them. The hub gets the largest ID and is emitted
//! last.

use crate::error::{GenerateError, Result};
use crate::graph::{AdjacencyRow, PlaneGraph, VertexId};

/// A wheel needs a cycle of length three and a distinct hub.
pub const MIN_VERTICES: i64 = 4;

/// A validated wheel with `vertices` vertices in total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wheel {
    vertices: usize,
}

impl Wheel {
    pub fn new(vertices: i64) -> Result<Self> {
        if vertices < MIN_VERTICES {
            return Err(GenerateError::invalid(format!(
                "n must not be smaller than {}",
                MIN_VERTICES
            )));
        }
        let vertices = usize::try_from(vertices)
            .map_err(|_| GenerateError::invalid("n is too large"))?;
        Ok(Self { vertices })
    }

    pub fn parse(vertices: &str) -> Result<Self> {
        let n = vertices
            .trim()
            .parse::<i64>()
            .map_err(|_| GenerateError::invalid("n must be an integer"))?;
        Self::new(n)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices
    }

    /// Length of the rim cycle.
    pub fn cycle_len(&self) -> usize {
        self.vertices - 1
    }

    /// Internal index of the hub.
    pub fn hub(&self) -> usize {
        self.cycle_len()
    }

    /// Rotation around rim vertex `x`: hub, predecessor, successor.
    pub fn rim_rotation(&self, x: usize) -> [usize; 3] {
        let m = self.cycle_len();
        [self.hub(), (x + m - 1) % m, (x + 1) % m]
    }

    pub fn build(&self) -> PlaneGraph {
        log::debug!(
            "building wheel with {} vertices (rim cycle of {})",
            self.vertices,
            self.cycle_len()
        );
        let id = |index: usize| -> VertexId { index + 1 };
        let mut graph: PlaneGraph = (0..self.cycle_len())
            .map(|x| AdjacencyRow::new(id(x), self.rim_rotation(x).map(id).to_vec()))
            .collect();
        graph.push_row(AdjacencyRow::new(
            id(self.hub()),
            (0..self.cycle_len()).map(id).collect(),
        ));
        graph
    }
}

/// Build the wheel graph with `vertices` vertices.
pub fn build_wheel(vertices: i64) -> Result<PlaneGraph> {
    Ok(Wheel::new(vertices)?.build())
}
