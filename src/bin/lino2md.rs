//! Lino to Markdown Converter
//!
//! Converts a Links Notation benchmark report written by `elementary-sorting
//! bench --lino` into Markdown. Prints to stdout unless an output path is given.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use elementary_sorting::lino_report::parse_lino_report;
use log::info;

/// Convert a Links Notation benchmark report to Markdown.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to the Links Notation report file
    input: PathBuf,

    /// Output path (prints to stdout if not specified)
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let content = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let report = parse_lino_report(&content).with_context(|| {
        format!(
            "no benchmark results found in {}; is it a valid report?",
            cli.input.display()
        )
    })?;

    let markdown = report.to_markdown_table();

    match cli.output {
        Some(path) => {
            fs::write(&path, &markdown)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("markdown report written to {}", path.display());
        }
        None => print!("{}", markdown),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_input_only() {
        let cli = Cli::parse_from(["lino2md", "report.lino"]);
        assert_eq!(cli.input, PathBuf::from("report.lino"));
        assert!(cli.output.is_none());
    }

    #[test]
    fn cli_parses_output() {
        let cli = Cli::parse_from(["lino2md", "report.lino", "report.md"]);
        assert_eq!(cli.output, Some(PathBuf::from("report.md")));
    }
}
