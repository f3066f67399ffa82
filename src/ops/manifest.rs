//! Per-manifest read, scan and commit.
//!
//! Each manifest moves through `Read → Scanned → {Unchanged | Written}`; any
//! I/O error ends it as `Failed` without affecting the rest of the run.

use crate::error::{PinError, Result};
use crate::fs::write_atomic;
use crate::scan::{DEFAULT_PATH_INDICATOR, Pin, rewrite_content};
use crate::table::ReplacementTable;
use std::fs;
use std::path::Path;

/// Terminal state of one manifest.
#[derive(Debug)]
pub enum FileOutcome {
    /// No dependency block matched; the file was not written.
    Unchanged,
    /// The file was rewritten with these pins.
    Rewritten(Vec<Pin>),
    /// Dry run: the file would have been rewritten with these pins.
    WouldRewrite(Vec<Pin>),
    /// Reading or writing failed; the file on disk is unchanged.
    Failed(PinError),
}

impl FileOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, FileOutcome::Failed(_))
    }

    /// Pins applied, or that would be applied in a dry run.
    pub fn pins(&self) -> &[Pin] {
        match self {
            FileOutcome::Rewritten(pins) | FileOutcome::WouldRewrite(pins) => pins,
            FileOutcome::Unchanged | FileOutcome::Failed(_) => &[],
        }
    }
}

/// Rewrites path dependencies in manifests using a fixed table.
#[derive(Debug, Clone)]
pub struct ManifestRewriter {
    table: ReplacementTable,
    path_indicator: String,
    dry_run: bool,
}

impl ManifestRewriter {
    pub fn new(table: ReplacementTable) -> Self {
        Self {
            table,
            path_indicator: DEFAULT_PATH_INDICATOR.to_string(),
            dry_run: false,
        }
    }

    pub fn path_indicator(mut self, indicator: impl Into<String>) -> Self {
        self.path_indicator = indicator.into();
        self
    }

    /// When set, files are scanned but never written.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Processes one manifest. Errors are captured in the outcome.
    pub fn process(&self, path: &Path) -> FileOutcome {
        match self.try_process(path) {
            Ok(outcome) => outcome,
            Err(e) => {
                log::debug!("Failed to process {}: {}", path.display(), e);
                FileOutcome::Failed(e)
            }
        }
    }

    fn try_process(&self, path: &Path) -> Result<FileOutcome> {
        let content = fs::read_to_string(path).map_err(|source| PinError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let Some(rewrite) = rewrite_content(&content, &self.table, &self.path_indicator) else {
            log::debug!("No path dependencies to pin: {}", path.display());
            return Ok(FileOutcome::Unchanged);
        };

        if self.dry_run {
            log::info!("Would update: {}", path.display());
            return Ok(FileOutcome::WouldRewrite(rewrite.pins));
        }

        write_atomic(path, &rewrite.content).map_err(|source| PinError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Pinned {} dependency(ies) in {}", rewrite.pins.len(), path.display());

        Ok(FileOutcome::Rewritten(rewrite.pins))
    }
}
