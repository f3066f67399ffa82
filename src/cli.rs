use crate::command::pin::PinArgs;
use clap::Parser;

/// Replace local path dependencies in pubspec.yaml manifests with pinned
/// versions.
#[derive(Parser, Debug)]
#[command(name = "pubspec-pin", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub args: PinArgs,
}
