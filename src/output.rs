//! Rendering grades to an output stream.
//!
//! Supports the bare single-letter form and a one-line JSON record.

use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use tracing::debug;

use crate::grade::Grade;

pub const PROMPT: &str = "Enter score: ";

/// One classification result, as emitted by the JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeRecord {
    pub score: i64,
    pub grade: Grade,
}

/// Writes the prompt without a newline and flushes so it shows before input is read.
pub fn write_prompt<W: Write>(out: &mut W) -> Result<()> {
    out.write_all(PROMPT.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Writes the grade as exactly one character, with no trailing newline.
pub fn write_grade<W: Write>(out: &mut W, grade: Grade) -> Result<()> {
    write!(out, "{}", grade.as_char())?;
    out.flush()?;
    Ok(())
}

/// Writes `record` as compact JSON followed by a newline.
pub fn write_json<W: Write>(out: &mut W, record: &GradeRecord) -> Result<()> {
    let line = serde_json::to_string(record)?;
    debug!(%line, "Writing JSON record");
    writeln!(out, "{line}")?;
    out.flush()?;
    Ok(())
}
