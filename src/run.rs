//! Prompt, read, classify, print.

use anyhow::Result;
use clap::ValueEnum;
use std::io::{BufRead, Write};
use tracing::{debug, info};

use crate::grade::{Grade, grade_of};
use crate::input::read_score;
use crate::output::{GradeRecord, write_grade, write_json, write_prompt};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// A single letter with no trailing newline
    #[default]
    Letter,
    /// One JSON object per line: {"score":N,"grade":"X"}
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub prompt: bool,
    pub format: OutputFormat,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            prompt: true,
            format: OutputFormat::Letter,
        }
    }
}

/// Grades one score and writes the result to `out`.
///
/// When `score` is `None` the score is read from `input`, after writing the
/// prompt if `opts.prompt` is set. A supplied score skips both.
#[tracing::instrument(skip(input, out), fields(format = ?opts.format))]
pub fn run<R: BufRead, W: Write>(
    score: Option<i64>,
    input: R,
    out: &mut W,
    opts: &RunOptions,
) -> Result<Grade> {
    let score = match score {
        Some(score) => score,
        None => {
            if opts.prompt {
                write_prompt(out)?;
            }
            read_score(input)?
        }
    };
    debug!(score, "Score parsed");

    let grade = grade_of(score);
    info!(score, %grade, "Score graded");

    match opts.format {
        OutputFormat::Letter => write_grade(out, grade)?,
        OutputFormat::Json => write_json(out, &GradeRecord { score, grade })?,
    }

    Ok(grade)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_to_string(
        score: Option<i64>,
        input: &str,
        opts: RunOptions,
    ) -> (Result<Grade>, String) {
        let mut out = Vec::new();
        let result = run(score, Cursor::new(input), &mut out, &opts);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_prompt_then_letter() {
        let (result, out) = run_to_string(None, "85\n", RunOptions::default());
        assert_eq!(result.unwrap(), Grade::B);
        assert_eq!(out, "Enter score: B");
    }

    #[test]
    fn test_no_prompt() {
        let opts = RunOptions {
            prompt: false,
            ..RunOptions::default()
        };
        let (result, out) = run_to_string(None, "59", opts);
        assert_eq!(result.unwrap(), Grade::E);
        assert_eq!(out, "E");
    }

    #[test]
    fn test_argument_skips_prompt_and_input() {
        let (result, out) = run_to_string(Some(90), "not read", RunOptions::default());
        assert_eq!(result.unwrap(), Grade::A);
        assert_eq!(out, "A");
    }

    #[test]
    fn test_json_format() {
        let opts = RunOptions {
            prompt: false,
            format: OutputFormat::Json,
        };
        let (result, out) = run_to_string(Some(-5), "", opts);
        assert_eq!(result.unwrap(), Grade::E);
        assert_eq!(out, "{\"score\":-5,\"grade\":\"E\"}\n");
    }

    #[test]
    fn test_score_beyond_i64_still_graded() {
        let opts = RunOptions::default();
        let (result, out) = run_to_string(None, "100000000000000000000\n", opts);
        assert_eq!(result.unwrap(), Grade::A);
        assert_eq!(out, "Enter score: A");

        let (result, _) = run_to_string(None, "-100000000000000000000\n", opts);
        assert_eq!(result.unwrap(), Grade::E);
    }

    #[test]
    fn test_invalid_input_prints_only_prompt() {
        let (result, out) = run_to_string(None, "abc\n", RunOptions::default());
        assert!(result.is_err());
        assert_eq!(out, "Enter score: ");
    }
}
