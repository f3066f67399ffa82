mod manifest;
mod summary;

pub use manifest::{FileOutcome, ManifestRewriter};
pub use summary::RunSummary;
