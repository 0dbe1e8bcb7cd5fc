use super::{OutputArgs, emit};
use crate::wheel::Wheel;
use anyhow::Result;

/// Generate the wheel for the raw `n` argument.
pub fn run(vertices: &str, output: &OutputArgs) -> Result<()> {
    let wheel = Wheel::parse(vertices)?;
    emit(&wheel.build(), output)
}
