use std::fmt::Display;
use std::io::Write;

use crate::algorithm::AllPairsResult;
use crate::graph::Weight;
use crate::Result;

/// Token written for unreachable pairs
pub const UNREACHABLE: &str = "inf";

/// Writes the distance matrix one row per line, entries separated by a single space
pub fn write_matrix<W, O>(result: &AllPairsResult<W>, out: &mut O) -> Result<()>
where
    W: Weight + Display,
    O: Write,
{
    for row in &result.distances {
        let line = row
            .iter()
            .map(|distance| match distance {
                Some(d) => d.to_string(),
                None => UNREACHABLE.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
