//! CLI entry point for the score grader.
//!
//! Reads one integer score (from the command line or stdin) and prints its
//! letter grade.

use anyhow::Result;
use clap::Parser;
use score_grader::input::parse_score;
use score_grader::run::{OutputFormat, RunOptions, run};
use std::ffi::OsStr;
use std::path::Path;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "score_grader")]
#[command(about = "Prints the letter grade (A-E) for an integer score", long_about = None)]
struct Cli {
    /// Score to grade; read from stdin when omitted
    #[arg(value_name = "SCORE", allow_negative_numbers = true, value_parser = parse_score)]
    score: Option<i64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Letter)]
    format: OutputFormat,

    /// Do not print the prompt before reading stdin
    #[arg(long, default_value_t = false)]
    no_prompt: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logging: stderr always, JSON rolling file only when LOG_FILE_PATH is set
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(
            EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        );

    let (json_layer, _file_guard) = match std::env::var("LOG_FILE_PATH") {
        Ok(log_file_path) => {
            let path = Path::new(&log_file_path);
            let log_dir = path.parent().unwrap_or(Path::new("logs"));
            let log_file_name = path
                .file_name()
                .unwrap_or(OsStr::new("score_grader.log"));

            let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(non_blocking_file)
                .with_filter(
                    EnvFilter::try_from_env("RUST_LOG_JSON")
                        .unwrap_or_else(|_| EnvFilter::new("debug")),
                );
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let opts = RunOptions {
        prompt: !cli.no_prompt,
        format: cli.format,
    };

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    run(cli.score, stdin.lock(), &mut stdout, &opts)?;

    Ok(())
}
