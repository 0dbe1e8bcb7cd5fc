//! Planar embedding of the cylindrical grid graph.
//!
//! The grid has `columns` vertices per row and `rows` rows. Columns wrap
//! around (the cross-section is a cycle), rows do not. Vertices are numbered
//! row-major starting at 1, but rows of the adjacency list are emitted grouped
//! by row class: the first grid row, then the middle rows column by column,
//! then the last grid row. Downstream readers rely on this exact order.

use crate::error::{GenerateError, Result};
use crate::graph::{AdjacencyRow, PlaneGraph, VertexId};
use std::collections::HashMap;

/// Smallest column count that does not produce loops through the wraparound.
pub const MIN_COLUMNS: i64 = 3;
pub const MIN_ROWS: i64 = 2;

/// Internal vertex identifier: (column, row).
pub type Coord = (usize, usize);

/// Position of a grid row, which decides the neighbor pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowClass {
    /// y = 0: no upward neighbor.
    First,
    Middle,
    /// y = rows - 1: no downward neighbor.
    Last,
}

impl RowClass {
    pub fn of(y: usize, rows: usize) -> Self {
        if y == 0 {
            RowClass::First
        } else if y + 1 == rows {
            RowClass::Last
        } else {
            RowClass::Middle
        }
    }

    pub fn degree(self) -> usize {
        match self {
            RowClass::First | RowClass::Last => 3,
            RowClass::Middle => 4,
        }
    }
}

/// Dimensions of a validated cylinder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cylinder {
    columns: usize,
    rows: usize,
}

impl Cylinder {
    /// Validate dimensions and check that the vertex count fits.
    pub fn new(columns: i64, rows: i64) -> Result<Self> {
        if columns < MIN_COLUMNS {
            return Err(GenerateError::invalid(format!(
                "n must not be smaller than {} (to avoid loops)",
                MIN_COLUMNS
            )));
        }
        if rows < MIN_ROWS {
            return Err(GenerateError::invalid(format!(
                "m must not be smaller than {}",
                MIN_ROWS
            )));
        }
        let too_large = || GenerateError::TooLarge {
            columns: columns as usize,
            rows: rows as usize,
        };
        let columns = usize::try_from(columns).map_err(|_| too_large())?;
        let rows = usize::try_from(rows).map_err(|_| too_large())?;
        columns.checked_mul(rows).ok_or_else(too_large)?;
        Ok(Self { columns, rows })
    }

    /// Parse the two command-line dimensions, then validate them.
    pub fn parse(columns: &str, rows: &str) -> Result<Self> {
        let parse = |s: &str| s.trim().parse::<i64>();
        match (parse(columns), parse(rows)) {
            (Ok(n), Ok(m)) => Self::new(n, m),
            _ => Err(GenerateError::invalid("n and m must be integers")),
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn vertex_count(&self) -> usize {
        self.columns * self.rows
    }

    pub fn right(&self, (x, y): Coord) -> Coord {
        ((x + 1) % self.columns, y)
    }

    pub fn left(&self, (x, y): Coord) -> Coord {
        ((x + self.columns - 1) % self.columns, y)
    }

    pub fn up(&self, (x, y): Coord) -> Coord {
        (x, (y + self.rows - 1) % self.rows)
    }

    pub fn down(&self, (x, y): Coord) -> Coord {
        (x, (y + 1) % self.rows)
    }

    /// The vertex followed by its neighbors in rotation order.
    pub fn rotation(&self, v: Coord) -> Vec<Coord> {
        match RowClass::of(v.1, self.rows) {
            RowClass::First => vec![v, self.right(v), self.down(v), self.left(v)],
            RowClass::Middle => vec![v, self.right(v), self.down(v), self.left(v), self.up(v)],
            RowClass::Last => vec![v, self.right(v), self.left(v), self.up(v)],
        }
    }

    /// Row-major enumeration used to assign IDs.
    pub fn vertices(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.rows).flat_map(move |y| (0..self.columns).map(move |x| (x, y)))
    }

    /// Coordinates in adjacency-list emission order.
    pub fn emission_order(&self) -> Vec<Coord> {
        let last = self.rows - 1;
        let mut order = Vec::with_capacity(self.vertex_count());
        order.extend((0..self.columns).map(|x| (x, 0)));
        for x in 0..self.columns {
            order.extend((1..last).map(|y| (x, y)));
        }
        order.extend((0..self.columns).map(|x| (x, last)));
        order
    }

    /// Map each coordinate to its 1-based ID.
    pub fn labels(&self) -> HashMap<Coord, VertexId> {
        self.vertices().zip(1..).collect()
    }

    pub fn build(&self) -> PlaneGraph {
        log::debug!(
            "building cylinder with {} columns and {} rows ({} vertices)",
            self.columns,
            self.rows,
            self.vertex_count()
        );
        let labels = self.labels();
        self.emission_order()
            .into_iter()
            .map(|v| {
                let ids: Vec<VertexId> = self.rotation(v).iter().map(|c| labels[c]).collect();
                AdjacencyRow::new(ids[0], ids[1..].to_vec())
            })
            .collect()
    }
}

/// Build the cylinder graph with `columns` × `rows` vertices.
pub fn build_cylinder(columns: i64, rows: i64) -> Result<PlaneGraph> {
    Ok(Cylinder::new(columns, rows)?.build())
}
