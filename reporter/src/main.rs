use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use reporter::cli;

#[derive(Parser)]
#[command(name = "reporter", version, about = "Inspect persisted test-run reports")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check a report file against the v1 schema.
    Validate { path: PathBuf },
    /// Print outcome counts and average duration.
    Summary { path: PathBuf },
}

fn main() {
    expect_poll::logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Validate { path } => cli::validate_report(&path),
        Command::Summary { path } => cli::summarize_report(&path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_summary() {
        let cli = Cli::parse_from(["reporter", "summary", "out/report.json"]);
        assert!(matches!(
            cli.command,
            Command::Summary { path } if path == PathBuf::from("out/report.json")
        ));
    }

    #[test]
    fn parse_validate() {
        let cli = Cli::parse_from(["reporter", "validate", "report.json"]);
        assert!(matches!(cli.command, Command::Validate { .. }));
    }
}
