use crate::error::Result;
use crate::history::HistorySource;
use crate::snapshot::RepositorySnapshot;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use tracing::{debug, warn};

/// Extract a snapshot from every repository directly under `dir`.
///
/// Directories are visited in discovery order and that order is preserved
/// in the result. A directory that fails validation or extraction is
/// logged and skipped; one bad repository never aborts the run.
pub fn scan_repositories(dir: &Path, source: &dyn HistorySource) -> Result<Vec<RepositorySnapshot>> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );

    let mut snapshots = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let path = entry.path();
        pb.set_message(format!("Scanning {}...", path.display()));

        match RepositorySnapshot::extract(&path, source) {
            Ok(snapshot) => {
                debug!(repo = %snapshot.name, commits_7d = snapshot.commit_count_7d, "extracted snapshot");
                snapshots.push(snapshot);
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping directory");
            }
        }
    }

    pb.finish_and_clear();
    Ok(snapshots)
}
