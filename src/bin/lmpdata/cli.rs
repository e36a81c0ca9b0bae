use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "lmpdata",
    about = "Read a LAMMPS data file and report its atoms",
    version,
    author
)]
pub struct Cli {
    /// LAMMPS data file (stdin if omitted)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Suppress progress and summary output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,

    /// Log parser decisions to stderr (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,

    /// Accept orthogonal files that omit the `xy xz yz` tilt line
    #[arg(long)]
    pub optional_tilt: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}
