#![doc = include_str!("../README.md")]

pub mod cli;
pub mod command;
pub mod error;
pub mod fs;
pub mod ops;
pub mod scan;
pub mod table;
pub mod walk;

pub use error::*;

pub fn run() -> Result<()> {
    use clap::Parser;

    let cli = cli::Cli::parse();
    init_logging(cli.args.verbose);
    command::pin::execute(cli.args)
}

/// Installs the `env_logger` backend. `RUST_LOG` takes precedence.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
