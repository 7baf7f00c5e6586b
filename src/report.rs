//! Console report for a finished estimate

use std::f64::consts::PI;
use std::io::{self, Write};

use crate::coordinator::Estimate;

/// Write the human-readable summary of `estimate` to `out`.
pub fn render<W: Write>(out: &mut W, estimate: &Estimate) -> io::Result<()> {
    let result = &estimate.aggregate;

    writeln!(
        out,
        "It took {} milliseconds to run the simulation",
        estimate.elapsed.as_millis()
    )?;
    writeln!(out)?;
    writeln!(out, "Iterations done:  {}", result.total_iterations)?;
    writeln!(out, "Hits:             {}", result.total_hits)?;
    writeln!(out, "Ratio:            {:.6}", result.ratio)?;
    writeln!(out, "PI approximation: {:.6}", result.pi_estimate)?;
    writeln!(out, "PI reference:     {:.6}", PI)?;
    writeln!(out, "Error:            {:.6}", (PI - result.pi_estimate).abs())?;

    Ok(())
}
