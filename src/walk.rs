//! Manifest discovery under a set of root directories.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// File name of the manifests rewritten by default.
pub const DEFAULT_MANIFEST_NAME: &str = "pubspec.yaml";

/// Recursively finds every file named `manifest_name` under `roots`.
///
/// Hidden and git-ignored directories are searched like any other. Symlinked
/// directories are not followed, but a symlinked manifest that resolves to a
/// regular file is returned. Missing roots and unreadable subtrees are logged
/// and skipped. Paths are de-duplicated across overlapping roots and returned
/// in sorted order.
pub fn discover_manifests<P: AsRef<Path>>(roots: &[P], manifest_name: &str) -> Vec<PathBuf> {
    let mut found = BTreeSet::new();

    for root in roots {
        let root = root.as_ref();
        if !root.exists() {
            log::warn!("Skipping missing root: {}", root.display());
            continue;
        }

        log::debug!("Scanning root: {}", root.display());
        walk_root(root, manifest_name, &mut found);
    }

    log::debug!("Discovered {} manifest(s)", found.len());
    found.into_iter().collect()
}

fn walk_root(root: &Path, manifest_name: &str, found: &mut BTreeSet<PathBuf>) {
    let walker = ignore::WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::warn!("Skipping entry due to error: {}", e);
                continue;
            }
        };

        if entry.file_name() != manifest_name {
            continue;
        }

        let is_file = entry.file_type().is_some_and(|ft| {
            ft.is_file() || (ft.is_symlink() && entry.path().is_file())
        });
        if is_file {
            found.insert(entry.into_path());
        }
    }
}
