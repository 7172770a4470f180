//! Command-line surface of the `querysheet` binary.

use std::io::Write;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::debug;

use crate::catalog::{Catalog, Section, Snippet};
use crate::outcome::Outcome;
use crate::verify::{self, Summary};

/// A runnable cheatsheet of sequence query operations.
///
/// Every snippet carries the output written next to it in the cheatsheet;
/// `verify` runs them all and reports any that disagree.
#[derive(Debug, Parser)]
#[command(name = "querysheet", version, about)]
pub struct Cli {
    /// Output format
    #[arg(long, value_enum, global = true, env = "QUERYSHEET_FORMAT", default_value_t = Format::Text)]
    pub format: Format,

    /// Log filter directive (e.g. `debug`, `querysheet=info`); overrides RUST_LOG
    #[arg(long, global = true, env = "QUERYSHEET_LOG")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List snippets with their annotated output
    List(SectionArgs),

    /// Run snippets and print what they evaluate to
    Run(RunArgs),

    /// Run snippets and compare each result with its annotation
    Verify(SectionArgs),
}

#[derive(Debug, Args)]
pub struct SectionArgs {
    /// Restrict to one section
    #[arg(short, long, value_enum)]
    pub section: Option<Section>,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Restrict to one section
    #[arg(short, long, value_enum)]
    pub section: Option<Section>,

    /// Run a single snippet by name
    #[arg(value_name = "NAME")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Serialize)]
struct Listing<'a> {
    section: Section,
    name: &'a str,
    expected: &'a str,
}

#[derive(Serialize)]
struct Evaluation<'a> {
    section: Section,
    name: &'a str,
    outcome: Outcome,
}

/// Executes the parsed command, writing results to `out`.
///
/// Returns `Ok(false)` when `verify` found a mismatch.
pub fn execute(cli: &Cli, catalog: &Catalog, out: &mut impl Write) -> Result<bool> {
    debug!(command = ?cli.command, format = ?cli.format, "executing");
    match &cli.command {
        Command::List(args) => {
            let snippets = catalog.select(args.section, None)?;
            list(&snippets, cli.format, out)?;
            Ok(true)
        }
        Command::Run(args) => {
            let snippets = catalog.select(args.section, args.name.as_deref())?;
            run(&snippets, cli.format, out)?;
            Ok(true)
        }
        Command::Verify(args) => {
            let snippets = catalog.select(args.section, None)?;
            let summary = verify::verify(snippets);
            report(&summary, cli.format, out)?;
            Ok(summary.is_success())
        }
    }
}

fn list(snippets: &[&Snippet], format: Format, out: &mut impl Write) -> Result<()> {
    match format {
        Format::Text => {
            for snippet in snippets {
                writeln!(
                    out,
                    "{:<12} {:<40} {}",
                    snippet.section, snippet.name, snippet.expected
                )?;
            }
        }
        Format::Json => {
            let listings: Vec<Listing<'_>> = snippets
                .iter()
                .map(|snippet| Listing {
                    section: snippet.section,
                    name: snippet.name,
                    expected: snippet.expected,
                })
                .collect();
            write_json(&listings, out)?;
        }
    }
    Ok(())
}

fn run(snippets: &[&Snippet], format: Format, out: &mut impl Write) -> Result<()> {
    let evaluations = snippets.iter().map(|snippet| Evaluation {
        section: snippet.section,
        name: snippet.name,
        outcome: snippet.run(),
    });
    match format {
        Format::Text => {
            for evaluation in evaluations {
                writeln!(out, "{}: {}", evaluation.name, evaluation.outcome)?;
            }
        }
        Format::Json => write_json(&evaluations.collect::<Vec<_>>(), out)?,
    }
    Ok(())
}

fn report(summary: &Summary, format: Format, out: &mut impl Write) -> Result<()> {
    match format {
        Format::Text => {
            for report in &summary.reports {
                if report.passed {
                    writeln!(out, "ok     {}", report.name)?;
                } else {
                    writeln!(
                        out,
                        "FAILED {}: expected {}, got {}",
                        report.name, report.expected, report.actual
                    )?;
                }
            }
            writeln!(out, "{} passed, {} failed", summary.passed, summary.failed)?;
        }
        Format::Json => write_json(summary, out)?,
    }
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(value: &T, out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
