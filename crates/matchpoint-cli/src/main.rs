use std::path::PathBuf;

use clap::Parser;

use matchpoint_cli::config::MatchRecord;
use matchpoint_cli::logging::init_logging;
use matchpoint_cli::runner::run;

/// Match result submission driver.
#[derive(Debug, Parser)]
#[command(
    name = "matchpoint",
    author,
    version,
    about = "Validate a racket-sport match record and emit its outcome"
)]
struct Cli {
    /// Path to the YAML match record file.
    #[arg(value_name = "FILE")]
    record: PathBuf,

    /// Write the emitted outcome JSON to this path instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Append structured audit events to this JSONL file.
    #[arg(long, value_name = "FILE")]
    audit: Option<PathBuf>,

    /// Exit after validating the record file (no submission is attempted).
    #[arg(long)]
    validate_only: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let record = MatchRecord::from_path(&cli.record)?;

    println!(
        "Loaded record '{}': {} vs {}",
        record.match_id, record.player1.name, record.player2.name
    );

    if cli.validate_only {
        println!("Validation-only mode: submission skipped.");
        return Ok(());
    }

    let _logging_guard = init_logging(cli.audit.as_deref())?;
    let report = run(&record, cli.output)?;

    match report.output_path.as_ref() {
        Some(path) => println!("Outcome written to {}", path.display()),
        None => println!("{}", report.json),
    }
    println!(
        "Result recorded for '{}': {} ({})",
        report.match_id, report.winner_name, report.score_text
    );

    Ok(())
}
