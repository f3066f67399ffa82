use crate::error::{PinError, Result};
use crate::ops::{ManifestRewriter, RunSummary};
use crate::scan::DEFAULT_PATH_INDICATOR;
use crate::table::{ReplacementTable, parse_pin};
use crate::walk::{DEFAULT_MANIFEST_NAME, discover_manifests};
use clap::Parser;
use clap::builder::NonEmptyStringValueParser;
use colored::Colorize;
use std::path::PathBuf;

/// Environment variable consulted when no roots are given on the command line.
pub const ROOTS_ENV: &str = "PUBSPEC_PIN_ROOTS";

#[derive(Parser, Debug, Clone)]
pub struct PinArgs {
    /// Directories to search for manifests
    ///
    /// Defaults to the paths in PUBSPEC_PIN_ROOTS (separated like PATH),
    /// or the current directory when that is unset.
    #[arg(value_name = "ROOT")]
    pub roots: Vec<PathBuf>,

    /// Add or override a pinned version
    ///
    /// May be repeated. Example:
    ///   --pin web3_universal_core=^0.2.0
    #[arg(long, value_name = "NAME=VERSION", value_parser = parse_pin_arg, verbatim_doc_comment)]
    pub pin: Vec<(String, String)>,

    /// Start from an empty table instead of the built-in versions
    #[arg(long)]
    pub no_default_pins: bool,

    /// File name of the manifests to rewrite
    #[arg(
        long,
        value_name = "NAME",
        default_value = DEFAULT_MANIFEST_NAME,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub manifest_name: String,

    /// Substring that marks the line after a dependency name as a local path
    #[arg(
        long,
        value_name = "TEXT",
        default_value = DEFAULT_PATH_INDICATOR,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub path_indicator: String,

    /// Show what would change without writing any files
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Exit with a non-zero status if any manifest could not be processed
    #[arg(long)]
    pub strict: bool,

    /// List every pin applied and enable info logging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Print the replacement table and exit
    #[arg(long)]
    pub list_pins: bool,
}

impl PinArgs {
    /// Returns the roots to scan.
    ///
    /// Command-line roots win over the environment; the current directory is
    /// the fallback.
    pub fn resolve_roots(&self) -> Vec<PathBuf> {
        if !self.roots.is_empty() {
            return self.roots.clone();
        }

        if let Some(value) = std::env::var_os(ROOTS_ENV) {
            let roots: Vec<PathBuf> = std::env::split_paths(&value)
                .filter(|p| !p.as_os_str().is_empty())
                .collect();
            if !roots.is_empty() {
                log::debug!("Using roots from {}", ROOTS_ENV);
                return roots;
            }
        }

        vec![PathBuf::from(".")]
    }

    /// Builds the replacement table for this run.
    pub fn table(&self) -> ReplacementTable {
        let base = if self.no_default_pins {
            ReplacementTable::new()
        } else {
            ReplacementTable::builtin()
        };

        self.pin
            .iter()
            .fold(base, |table, (name, version)| {
                table.with_override(name.as_str(), version.as_str())
            })
    }
}

fn parse_pin_arg(raw: &str) -> std::result::Result<(String, String), String> {
    parse_pin(raw).map_err(|e| e.to_string())
}

pub fn execute(args: PinArgs) -> Result<()> {
    let table = args.table();

    if args.list_pins {
        for (name, version) in table.iter() {
            println!("{}: {}", name, version.green());
        }
        return Ok(());
    }

    if table.is_empty() {
        log::warn!("Replacement table is empty; no manifest will change");
    }

    let roots = args.resolve_roots();
    let manifests = discover_manifests(&roots, &args.manifest_name);

    let rewriter = ManifestRewriter::new(table)
        .path_indicator(args.path_indicator.as_str())
        .dry_run(args.dry_run);

    let mut summary = RunSummary::new(args.dry_run, args.verbose);
    for path in &manifests {
        let outcome = rewriter.process(path);
        summary.record(path, &outcome);
    }
    summary.print_summary();

    if args.strict && summary.has_failures() {
        return Err(PinError::Failures(summary.failed().len()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> PinArgs {
        let argv = std::iter::once("pubspec-pin").chain(extra.iter().copied());
        crate::cli::Cli::parse_from(argv).args
    }

    #[test]
    fn test_defaults() {
        let args = args(&[]);
        assert_eq!(args.manifest_name, "pubspec.yaml");
        assert_eq!(args.path_indicator, "path:");
        assert!(!args.dry_run);
        assert!(!args.strict);
        assert_eq!(args.table(), ReplacementTable::builtin());
    }

    #[test]
    fn test_command_line_roots_win() {
        let args = args(&["packages", "web3_universal"]);
        assert_eq!(
            args.resolve_roots(),
            vec![PathBuf::from("packages"), PathBuf::from("web3_universal")]
        );
    }

    #[test]
    fn test_pins_override_builtin_table() {
        let args = args(&["--pin", "web3_universal_core=^9.0.0", "--pin", "http=^1.0.0"]);
        let table = args.table();
        assert_eq!(table.get("web3_universal_core"), Some("^9.0.0"));
        assert_eq!(table.get("http"), Some("^1.0.0"));
        assert_eq!(table.len(), 37);
    }

    #[test]
    fn test_no_default_pins() {
        let args = args(&["--no-default-pins", "--pin", "http=^1.0.0"]);
        let table = args.table();
        assert_eq!(table.len(), 1);
        assert!(!table.contains("web3_universal_core"));
    }

    #[test]
    fn test_empty_indicator_and_manifest_name_are_rejected() {
        for flag in ["--path-indicator", "--manifest-name"] {
            let result = crate::cli::Cli::try_parse_from(["pubspec-pin", flag, ""]);
            assert!(result.is_err(), "expected {flag} \"\" to be rejected");
        }
    }

    #[test]
    fn test_malformed_pin_is_rejected() {
        let result = crate::cli::Cli::try_parse_from(["pubspec-pin", "--pin", "http"]);
        assert!(result.is_err());
    }
}
