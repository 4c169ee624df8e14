use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use dialsim_core::CountMode;

/// Rotary dial simulator.
#[derive(Parser, Debug)]
#[command(
    name = "dialsim",
    author,
    version,
    about = "Count how often a 100-position dial reaches 0",
    long_about = "Simulate a 100-position dial (starting at 50) driven by L<n>/R<n> rotations, one per line, and count visits to position 0.\n\nExamples:\n  dialsim count input.txt\n  dialsim count --mode every-click input.txt\n  dialsim run input.txt --stats\n  cat input.txt | dialsim run -"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// JSON configuration file (e.g. {"start_position": 50}).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the dial's start position (0-99).
    #[arg(short, long, global = true)]
    pub start: Option<u64>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a single zero count.
    Count(CountArgs),
    /// Print both zero counts and the final position.
    Run(RunArgs),
}

/// Arguments for the `count` subcommand.
#[derive(clap::Args, Debug)]
pub struct CountArgs {
    /// Instruction file, or `-` for stdin.
    pub input: PathBuf,

    /// What counts as a visit to 0.
    #[arg(short, long, value_enum, default_value_t = Mode::EndOfRotation)]
    pub mode: Mode,
}

/// Arguments for the `run` subcommand.
#[derive(clap::Args, Debug)]
pub struct RunArgs {
    /// Instruction file, or `-` for stdin.
    pub input: PathBuf,

    /// Print run statistics; optionally limit to the named sections.
    #[arg(long, num_args = 0.., value_name = "SECTION", value_parser = ["summary", "rotations", "hits"])]
    pub stats: Option<Vec<String>>,
}

/// Counting mode as spelled on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Count rotations that end on 0.
    EndOfRotation,
    /// Count every click that lands on 0.
    EveryClick,
}

impl From<Mode> for CountMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::EndOfRotation => Self::EndOfRotation,
            Mode::EveryClick => Self::EveryClick,
        }
    }
}
