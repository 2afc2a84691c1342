use crate::error::{ReportError, Result};
use crate::history::{HistorySource, LogWindow};
use crate::lang::LANGUAGES;
use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

/// Per-repository metrics for one report run.
///
/// Immutable after extraction; the aggregator and streak calculator
/// consume it read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct RepositorySnapshot {
    pub name: String,
    pub recent_commit_log: String,
    pub weekly_commit_log: String,
    pub full_history_log: String,
    pub commit_count_1d: usize,
    pub commit_count_7d: usize,
    /// Line totals keyed by language name. The key set always equals the
    /// language table; a language with no matching files maps to 0.
    pub line_counts: HashMap<String, u64>,
}

impl RepositorySnapshot {
    /// Extract a snapshot from `path`, validating it first.
    ///
    /// Fails with [`ReportError::NotARepository`] before issuing any log
    /// query when `path` is not a working tree; no partial snapshot is
    /// ever produced.
    pub fn extract(path: &Path, source: &dyn HistorySource) -> Result<Self> {
        if !source.is_repository(path) {
            return Err(ReportError::NotARepository(path.to_path_buf()));
        }

        let name = repo_name(path)?;
        let recent_commit_log = source.query_log(path, LogWindow::LastDay)?;
        let weekly_commit_log = source.query_log(path, LogWindow::LastWeek)?;
        let full_history_log = source.query_log(path, LogWindow::FullHistory)?;

        let commit_count_1d = count_entries(&recent_commit_log);
        let commit_count_7d = count_entries(&weekly_commit_log);

        let mut line_counts = HashMap::new();
        for lang in LANGUAGES {
            // A failed count query never aborts the run; it contributes 0.
            let total: u64 = lang
                .extensions
                .iter()
                .map(|ext| source.count_lines_for_extension(path, ext).unwrap_or(0))
                .sum();
            line_counts.insert(lang.name.to_string(), total);
        }

        Ok(Self {
            name,
            recent_commit_log,
            weekly_commit_log,
            full_history_log,
            commit_count_1d,
            commit_count_7d,
            line_counts,
        })
    }

    /// Calendar dates with at least one commit, from the full-history log.
    pub fn commit_dates(&self) -> BTreeSet<NaiveDate> {
        extract_commit_dates(&self.full_history_log)
    }
}

fn repo_name(path: &Path) -> Result<String> {
    let name = match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path
            .canonicalize()?
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "repository".to_string()),
    };
    Ok(name)
}

/// Number of commit entries in a windowed log.
///
/// An entry is a non-empty line; the empty string has zero entries.
pub fn count_entries(log: &str) -> usize {
    log.lines().filter(|line| !line.trim().is_empty()).count()
}

/// Scan a full-history log for `Date:   YYYY-MM-DD` lines.
///
/// Only lines starting with the literal `Date:` token followed by a
/// 4-digit-year date are considered; everything else is ignored.
/// Duplicate dates collapse into one set entry.
pub fn extract_commit_dates(log: &str) -> BTreeSet<NaiveDate> {
    let mut dates = BTreeSet::new();
    for line in log.lines() {
        let Some(rest) = line.strip_prefix("Date:") else {
            continue;
        };
        let Some(token) = rest.split_whitespace().next() else {
            continue;
        };
        let bytes = token.as_bytes();
        if bytes.len() < 5 || !bytes[..4].iter().all(u8::is_ascii_digit) || bytes[4] != b'-' {
            continue;
        }
        if let Ok(date) = NaiveDate::parse_from_str(token, "%Y-%m-%d") {
            dates.insert(date);
        }
    }
    dates
}

/// Union of commit dates across all snapshots.
pub fn commit_date_set(snapshots: &[RepositorySnapshot]) -> BTreeSet<NaiveDate> {
    let mut dates = BTreeSet::new();
    for snapshot in snapshots {
        dates.extend(snapshot.commit_dates());
    }
    dates
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::path::PathBuf;

    struct FakeRepo {
        day_log: &'static str,
        week_log: &'static str,
        full_log: &'static str,
        lines: HashMap<&'static str, u64>,
    }

    struct FakeHistory {
        repos: HashMap<PathBuf, FakeRepo>,
    }

    impl FakeHistory {
        fn with_repo(path: &str, repo: FakeRepo) -> Self {
            let mut repos = HashMap::new();
            repos.insert(PathBuf::from(path), repo);
            Self { repos }
        }
    }

    impl HistorySource for FakeHistory {
        fn is_repository(&self, path: &Path) -> bool {
            self.repos.contains_key(path)
        }

        fn query_log(&self, path: &Path, window: LogWindow) -> Result<String> {
            let repo = &self.repos[path];
            let log = match window {
                LogWindow::LastDay => repo.day_log,
                LogWindow::LastWeek => repo.week_log,
                LogWindow::FullHistory => repo.full_log,
            };
            Ok(log.to_string())
        }

        fn count_lines_for_extension(&self, path: &Path, extension: &str) -> Result<u64> {
            Ok(*self.repos[path].lines.get(extension).unwrap_or(&0))
        }
    }

    fn fake_repo() -> FakeRepo {
        FakeRepo {
            day_log: "abc1234 fix parser\n",
            week_log: "abc1234 fix parser\ndef5678 add parser\n",
            full_log: concat!(
                "commit abc1234\nAuthor: a <a@example.com>\nDate:   2024-06-03\n\n    fix parser\n\n",
                "commit def5678\nAuthor: a <a@example.com>\nDate:   2024-06-03\n\n    add parser\n\n",
                "commit 9990000\nAuthor: a <a@example.com>\nDate:   2024-06-01\n\n    init\n\n",
            ),
            lines: HashMap::from([(".py", 10), (".rs", 42)]),
        }
    }

    #[test]
    fn extraction_fails_for_non_repository() {
        let source = FakeHistory { repos: HashMap::new() };
        let err = RepositorySnapshot::extract(Path::new("/tmp/not-a-repo"), &source).unwrap_err();
        assert!(matches!(err, ReportError::NotARepository(_)));
    }

    #[test]
    fn commit_counts_match_log_lines() {
        let source = FakeHistory::with_repo("/repos/parser", fake_repo());
        let snap = RepositorySnapshot::extract(Path::new("/repos/parser"), &source).unwrap();
        assert_eq!(snap.name, "parser");
        assert_eq!(snap.commit_count_1d, 1);
        assert_eq!(snap.commit_count_7d, 2);
    }

    #[test]
    fn empty_log_counts_zero() {
        assert_eq!(count_entries(""), 0);
        assert_eq!(count_entries("one line\n"), 1);
        assert_eq!(count_entries("a\nb\nc\n"), 3);
    }

    #[test]
    fn line_counts_cover_every_language() {
        let source = FakeHistory::with_repo("/repos/parser", fake_repo());
        let snap = RepositorySnapshot::extract(Path::new("/repos/parser"), &source).unwrap();
        assert_eq!(snap.line_counts.len(), LANGUAGES.len());
        assert_eq!(snap.line_counts["Python"], 10);
        assert_eq!(snap.line_counts["Rust"], 42);
        assert_eq!(snap.line_counts["Assembly"], 0);
    }

    #[test]
    fn duplicate_dates_collapse() {
        let source = FakeHistory::with_repo("/repos/parser", fake_repo());
        let snap = RepositorySnapshot::extract(Path::new("/repos/parser"), &source).unwrap();
        let dates: Vec<NaiveDate> = snap.commit_dates().into_iter().collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            ]
        );
    }

    #[test]
    fn malformed_date_lines_are_ignored() {
        let log = concat!(
            "Date:   2024-06-03\n",
            "Date: not-a-date\n",
            "Dated:   2024-06-04\n",
            "Date:   24-06-05\n",
            "Date:   2024-13-40\n",
            "    Date:   2024-06-06\n",
        );
        let dates = extract_commit_dates(log);
        assert_eq!(dates.len(), 1);
        assert!(dates.contains(&NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()));
    }

    #[test]
    fn extraction_is_idempotent() {
        let source = FakeHistory::with_repo("/repos/parser", fake_repo());
        let first = RepositorySnapshot::extract(Path::new("/repos/parser"), &source).unwrap();
        let second = RepositorySnapshot::extract(Path::new("/repos/parser"), &source).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn date_set_unions_across_snapshots() {
        let mut repos = HashMap::new();
        repos.insert(PathBuf::from("/repos/a"), fake_repo());
        repos.insert(
            PathBuf::from("/repos/b"),
            FakeRepo {
                day_log: "",
                week_log: "",
                full_log: "Date:   2024-06-02\nDate:   2024-06-03\n",
                lines: HashMap::new(),
            },
        );
        let source = FakeHistory { repos };
        let a = RepositorySnapshot::extract(Path::new("/repos/a"), &source).unwrap();
        let b = RepositorySnapshot::extract(Path::new("/repos/b"), &source).unwrap();
        let dates = commit_date_set(&[a, b]);
        assert_eq!(dates.len(), 3);
    }
}
