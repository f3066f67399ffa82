//! Console transcript for a run.

use crate::ops::manifest::FileOutcome;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Tally of per-file outcomes, printed as the run progresses.
#[derive(Debug, Default)]
pub struct RunSummary {
    dry_run: bool,
    verbose: bool,
    scanned: usize,
    rewritten: Vec<PathBuf>,
    failed: Vec<PathBuf>,
}

impl RunSummary {
    pub fn new(dry_run: bool, verbose: bool) -> Self {
        Self {
            dry_run,
            verbose,
            ..Self::default()
        }
    }

    /// Records an outcome and prints its status line.
    ///
    /// Rewrites go to stdout and failures to stderr. Unchanged files are
    /// silent.
    pub fn record(&mut self, path: &Path, outcome: &FileOutcome) {
        self.scanned += 1;

        match outcome {
            FileOutcome::Unchanged => return,
            FileOutcome::Rewritten(_) => {
                println!("{} Fixed {}", "✓".green(), path.display());
            }
            FileOutcome::WouldRewrite(_) => {
                println!("{} Would fix {}", "•".yellow(), path.display());
            }
            FileOutcome::Failed(e) => {
                eprintln!(
                    "{} Error processing {}: {}",
                    "✗".red().bold(),
                    path.display(),
                    e
                );
                self.failed.push(path.to_path_buf());
                return;
            }
        }

        if self.verbose {
            for pin in outcome.pins() {
                println!(
                    "   {}: {} {}",
                    pin.name,
                    pin.version.green(),
                    format!("(line {})", pin.line).dimmed()
                );
            }
        }
        self.rewritten.push(path.to_path_buf());
    }

    pub fn scanned(&self) -> usize {
        self.scanned
    }

    pub fn rewritten(&self) -> &[PathBuf] {
        &self.rewritten
    }

    pub fn failed(&self) -> &[PathBuf] {
        &self.failed
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    /// Prints the closing counts.
    pub fn print_summary(&self) {
        if self.scanned == 0 {
            println!("\n{}", "No manifests found".yellow());
            return;
        }

        let verb = if self.dry_run { "would be fixed" } else { "fixed" };
        let line = format!(
            "{} manifest(s) scanned, {} {}, {} failed",
            self.scanned,
            self.rewritten.len(),
            verb,
            self.failed.len()
        );

        if self.has_failures() {
            println!("\n{}", line.red().bold());
        } else if self.rewritten.is_empty() {
            println!("\n{}", "No changes needed".yellow());
            println!("{}", line.dimmed());
        } else if self.dry_run {
            println!("\n{}", "DRY RUN - No changes were made".yellow().bold());
            println!("{}", line);
        } else {
            println!("\n{}", line.green().bold());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PinError;
    use crate::scan::Pin;

    fn pin() -> Pin {
        Pin {
            name: "web3_universal_core".into(),
            version: "^0.1.1".into(),
            line: 3,
        }
    }

    #[test]
    fn test_counts_outcomes() {
        let mut summary = RunSummary::new(false, true);
        summary.record(Path::new("a/pubspec.yaml"), &FileOutcome::Unchanged);
        summary.record(Path::new("b/pubspec.yaml"), &FileOutcome::Rewritten(vec![pin()]));
        summary.record(
            Path::new("c/pubspec.yaml"),
            &FileOutcome::Failed(PinError::Read {
                path: PathBuf::from("c/pubspec.yaml"),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }),
        );

        assert_eq!(summary.scanned(), 3);
        assert_eq!(summary.rewritten(), [PathBuf::from("b/pubspec.yaml")]);
        assert_eq!(summary.failed(), [PathBuf::from("c/pubspec.yaml")]);
        assert!(summary.has_failures());
        summary.print_summary();
    }

    #[test]
    fn test_dry_run_counts_would_rewrite() {
        let mut summary = RunSummary::new(true, false);
        summary.record(Path::new("pubspec.yaml"), &FileOutcome::WouldRewrite(vec![pin()]));

        assert_eq!(summary.rewritten().len(), 1);
        assert!(!summary.has_failures());
        summary.print_summary();
    }

    #[test]
    fn test_print_summary_empty() {
        let summary = RunSummary::new(false, false);
        assert_eq!(summary.scanned(), 0);
        summary.print_summary();
    }
}
