use crate::error::Result;
use std::path::Path;

/// Commit-log query windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogWindow {
    LastDay,
    LastWeek,
    FullHistory,
}

impl LogWindow {
    /// Window size in days, or `None` for the unbounded full history.
    pub fn days(self) -> Option<i64> {
        match self {
            LogWindow::LastDay => Some(1),
            LogWindow::LastWeek => Some(7),
            LogWindow::FullHistory => None,
        }
    }
}

/// Access to a repository's commit history and tracked files.
///
/// Snapshot extraction talks to version control only through this trait,
/// so tests can substitute canned log text for a real repository.
pub trait HistorySource {
    /// Whether `path` is a version-control working tree this source can query.
    fn is_repository(&self, path: &Path) -> bool;

    /// Raw commit-log text for the given window.
    ///
    /// Windowed logs carry one line per commit (`<short-hash> <subject>`).
    /// The full-history log carries a `Date:   YYYY-MM-DD` line per commit.
    /// A repository with no commits in the window yields the empty string.
    fn query_log(&self, path: &Path, window: LogWindow) -> Result<String>;

    /// Total newline count across all tracked files whose path ends with
    /// `extension`, in the current checkout state.
    fn count_lines_for_extension(&self, path: &Path, extension: &str) -> Result<u64>;
}
