//! Rotary dial simulator CLI.
//!
//! This binary loads an instruction file and reports visits to position 0. It performs:
//! 1. **Count:** Print one counter (`end-of-rotation` or `every-click`).
//! 2. **Run:** Print both counters and the final position, optionally with statistics.

mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use dialsim_core::sim::{self, loader};
use dialsim_core::{Config, DialSimulator};

use crate::cli::{Cli, Command, CountArgs, RunArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    match cli.command {
        Command::Count(args) => cmd_count(&args, &config),
        Command::Run(args) => cmd_run(&args, &config),
    }
}

/// Builds the effective configuration: file (if any), then `--start`.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(start) = cli.start {
        config.start_position = start;
        config.validate().context("invalid --start")?;
    }
    info!(start_position = config.start_position, "configuration loaded");
    Ok(config)
}

fn cmd_count(args: &CountArgs, config: &Config) -> Result<()> {
    let program = loader::load_program(&args.input)?;
    let mut simulator = DialSimulator::new(config, args.mode.into())?;
    println!("{}", simulator.run(program.instructions()));
    Ok(())
}

fn cmd_run(args: &RunArgs, config: &Config) -> Result<()> {
    let program = loader::load_program(&args.input)?;
    let report = sim::simulate(&program, config)?;

    println!("end-of-rotation zeroes  {}", report.end_of_rotation);
    println!("all zero crossings      {}", report.pass_through);
    println!("final position          {}", report.final_position);

    if let Some(sections) = &args.stats {
        report.stats.print_sections(sections);
    }
    Ok(())
}
