mod cli;
mod logging;
mod render;
mod shell;

use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use paschalion::YearReport;
use tracing::info;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut output = stdout.lock();

    if cli.years.is_empty() {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        return shell::run(&mut input, &mut output, !cli.no_clear);
    }

    for (i, &year) in cli.years.iter().enumerate() {
        info!(year, "reporting");
        if i > 0 {
            render::write_separator(&mut output).context("failed to write report")?;
        }
        render::write_report(&mut output, &YearReport::for_year(year))
            .with_context(|| format!("failed to write report for {year}"))?;
    }
    Ok(())
}
