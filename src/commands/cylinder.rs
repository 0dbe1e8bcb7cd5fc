use super::{OutputArgs, emit};
use anyhow::Result;
use crate::cylinder::Cylinder;

/// Generate the cylinder for the raw `n` and `m` arguments.
pub fn run(columns: &str, rows: &str, output: &OutputArgs) -> Result<()> {
    let cylinder = Cylinder::parse(columns, rows)?;
    let graph = cylinder.build();
    emit(&graph, output)
}
