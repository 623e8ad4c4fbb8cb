//! Reading a single integer score from text input.

use anyhow::{Context, Result, anyhow};
use std::io::BufRead;
use std::num::IntErrorKind;
use tracing::debug;

/// Parses one integer score, ignoring surrounding whitespace.
///
/// Integers beyond the `i64` range saturate to `i64::MAX` / `i64::MIN`, which
/// still land in the top and bottom grades.
///
/// # Errors
///
/// Returns an error if the text is empty or is not an integer.
pub fn parse_score(text: &str) -> Result<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("no score provided"));
    }
    match trimmed.parse::<i64>() {
        Ok(score) => Ok(score),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => {
                debug!(text = trimmed, "Score above i64 range, saturating");
                Ok(i64::MAX)
            }
            IntErrorKind::NegOverflow => {
                debug!(text = trimmed, "Score below i64 range, saturating");
                Ok(i64::MIN)
            }
            _ => Err(e).with_context(|| format!("invalid score {trimmed:?}")),
        },
    }
}

/// Reads the first score token from `reader`.
///
/// Blank lines are skipped; only the first whitespace-separated token of the
/// first non-blank line is parsed.
pub fn read_score<R: BufRead>(reader: R) -> Result<i64> {
    for line in reader.lines() {
        let line = line.context("failed to read score from input")?;
        if let Some(token) = line.split_whitespace().next() {
            debug!(token, "Score token read");
            return parse_score(token);
        }
    }
    Err(anyhow!("no score provided"))
}
