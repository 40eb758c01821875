//! JSON output.

use crate::models::IpFamily;
use crate::processing::Analysis;
use serde::Serialize;
use std::io::{self, Write};

/// Write an analysis as a pretty printed JSON object.
pub fn write_analysis_json<W, A>(
    out: &mut W,
    analysis: &Analysis<A>,
) -> io::Result<()>
where
    W: Write,
    A: IpFamily + Serialize,
{
    // Keeps the io::ErrorKind of write failures, e.g. a closed pipe.
    serde_json::to_writer_pretty(&mut *out, analysis).map_err(io::Error::from)?;
    writeln!(out)?;
    out.flush()
}
