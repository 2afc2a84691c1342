use crate::error::{ReportError, Result};
use crate::history::{HistorySource, LogWindow};
use chrono::{DateTime, Duration, Utc};
use gix::bstr::ByteSlice;
use gix::{ObjectId, Repository};
use std::collections::{HashSet, VecDeque};
use std::path::Path;

/// Git-backed [`HistorySource`] built on `gix`.
///
/// The clock is captured at construction so that both rolling windows see
/// the same "now" and repeated queries against an unchanged repository
/// return identical text.
pub struct GitHistory {
    now: DateTime<Utc>,
}

struct LogEntry {
    id: ObjectId,
    timestamp: DateTime<Utc>,
    author_name: String,
    author_email: String,
    title: String,
}

impl GitHistory {
    pub fn new() -> Self {
        Self { now: Utc::now() }
    }

    fn collect_entries(&self, repo: &Repository) -> Result<Vec<LogEntry>> {
        let mut head = repo.head()?;
        let head_commit = head.peel_to_commit_in_place()?;

        let mut entries = Vec::new();
        let mut seen: HashSet<ObjectId> = HashSet::new();
        let mut stack: VecDeque<ObjectId> = VecDeque::from([head_commit.id]);

        while let Some(commit_id) = stack.pop_back() {
            if !seen.insert(commit_id) {
                continue;
            }

            let commit = repo.find_commit(commit_id)?;
            let secs = commit.time()?.seconds;
            let timestamp = DateTime::from_timestamp(secs, 0)
                .ok_or_else(|| ReportError::InvalidDate(format!("Invalid timestamp: {secs}")))?;

            let author = commit.author()?;
            let message = commit.message()?;
            entries.push(LogEntry {
                id: commit_id,
                timestamp,
                author_name: author.name.to_string(),
                author_email: author.email.to_string(),
                title: message.title.to_string(),
            });

            for pid in commit.parent_ids() {
                stack.push_back(pid.into());
            }
        }

        // Newest first, like git log
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(entries)
    }
}

impl Default for GitHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl HistorySource for GitHistory {
    fn is_repository(&self, path: &Path) -> bool {
        // No upward discovery: a plain directory next to real repositories
        // must not resolve to some ancestor repository.
        path.is_dir() && gix::open(path).is_ok()
    }

    fn query_log(&self, path: &Path, window: LogWindow) -> Result<String> {
        let repo = gix::open(path)?;
        let entries = self.collect_entries(&repo)?;

        let mut out = String::new();
        if let Some(days) = window.days() {
            let cutoff = self.now - Duration::days(days);
            for entry in entries.iter().filter(|e| e.timestamp >= cutoff) {
                out.push_str(&format!("{} {}\n", entry.id.to_hex_with_len(7), entry.title));
            }
        } else {
            for entry in &entries {
                out.push_str(&format!(
                    "commit {}\nAuthor: {} <{}>\nDate:   {}\n\n    {}\n\n",
                    entry.id,
                    entry.author_name,
                    entry.author_email,
                    entry.timestamp.format("%Y-%m-%d"),
                    entry.title
                ));
            }
        }
        Ok(out)
    }

    fn count_lines_for_extension(&self, path: &Path, extension: &str) -> Result<u64> {
        let repo = gix::open(path)?;
        let workdir = repo
            .workdir()
            .ok_or_else(|| ReportError::Index("bare repository has no worktree".to_string()))?
            .to_path_buf();
        let index = repo
            .index_or_load_from_head()
            .map_err(|e| ReportError::Index(e.to_string()))?;

        let mut total = 0u64;
        for entry in index.entries() {
            let Ok(rel) = entry.path(&index).to_str() else {
                continue;
            };
            if !rel.ends_with(extension) {
                continue;
            }
            // Count the checkout state; files deleted from the worktree
            // but still tracked contribute nothing.
            match std::fs::read(workdir.join(rel)) {
                Ok(bytes) => total += bytes.iter().filter(|&&b| b == b'\n').count() as u64,
                Err(_) => continue,
            }
        }
        Ok(total)
    }
}
