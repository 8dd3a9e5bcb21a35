//! # recsched — Recording-Schedule Validator
//!
//! Reads a schedule file, parses it against the recording-schedule
//! schema, and on success prints the schedule summary plus the
//! normalized (re-serialized) JSON form. Any failure — unreadable
//! file, malformed JSON, schema violation — goes to stderr with a
//! non-zero exit status.
//!
//! All schema knowledge lives in `recsched-core`; this binary only
//! does argument parsing and presentation.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use recsched_core::Schedule;

/// Validate and inspect recording schedules.
#[derive(Parser, Debug)]
#[command(name = "recsched", version, about)]
struct Cli {
    /// Path to the JSON schedule file to validate.
    file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let Some(path) = cli.file else {
        Cli::command().print_help()?;
        return Ok(());
    };

    tracing::debug!(path = %path.display(), "validating schedule file");

    let content = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let schedule: Schedule = content
        .parse()
        .with_context(|| format!("invalid schedule: {}", path.display()))?;

    println!("valid schedule: {}", path.display());
    println!("  version: {}", schedule.version);
    println!("  type:    {}", schedule.pattern.pattern_type());
    println!();
    println!("{}", serde_json::to_string_pretty(&schedule.to_value())?);

    Ok(())
}
