use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use querysheet::cli::{self, Cli};
use querysheet::{logging, Catalog};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref())?;

    let catalog = Catalog::new();
    let stdout = io::stdout();
    let passed = cli::execute(&cli, &catalog, &mut stdout.lock())?;

    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
