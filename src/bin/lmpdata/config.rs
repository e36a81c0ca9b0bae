use std::io;

use lmpdata::{ParseOptions, TiltPolicy};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

pub fn build_parse_options(cli: &Cli) -> ParseOptions {
    let tilt = if cli.optional_tilt {
        TiltPolicy::Optional
    } else {
        TiltPolicy::Required
    };
    ParseOptions::default().tilt(tilt)
}

/// Installs a stderr subscriber. `RUST_LOG` wins over `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
