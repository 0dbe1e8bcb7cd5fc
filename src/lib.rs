//! Planar embeddings of cylinder and wheel graphs in adjacency list format.
//!
//! Each generated row lists a vertex followed by its neighbors in rotation
//! order, using 1-based vertex IDs.

pub mod check;
pub mod commands;
pub mod cylinder;
pub mod error;
pub mod graph;
pub mod wheel;

pub use check::{CheckResult, GraphStats, check_all};
pub use cylinder::{Cylinder, build_cylinder};
pub use error::{GenerateError, Result};
pub use graph::{AdjacencyRow, PlaneGraph, VertexId};
pub use wheel::{Wheel, build_wheel};
