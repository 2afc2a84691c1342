use crate::lang::LANGUAGES;
use crate::snapshot::RepositorySnapshot;
use chrono::{DateTime, Local, Utc};
use serde::Serialize;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize)]
pub struct RepoActivity {
    pub name: String,
    pub commit_count_1d: usize,
    pub commit_count_7d: usize,
    pub weekly_commit_log: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LanguageTotal {
    pub language: String,
    pub lines: u64,
}

/// Totals across all scanned repositories, ready to render or serialize.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateReport {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub total_commits_1d: usize,
    pub total_commits_7d: usize,
    pub streak_days: u32,
    pub repositories: Vec<RepoActivity>,
    pub language_totals: Vec<LanguageTotal>,
}

impl AggregateReport {
    /// Sum snapshots in the order they were supplied.
    ///
    /// The repository section of the rendered report preserves that order,
    /// and language totals follow the declaration order of the language
    /// table.
    pub fn build(snapshots: &[RepositorySnapshot], streak_days: u32) -> Self {
        let repositories = snapshots
            .iter()
            .map(|snap| RepoActivity {
                name: snap.name.clone(),
                commit_count_1d: snap.commit_count_1d,
                commit_count_7d: snap.commit_count_7d,
                weekly_commit_log: snap.weekly_commit_log.clone(),
            })
            .collect();

        let language_totals = LANGUAGES
            .iter()
            .map(|lang| LanguageTotal {
                language: lang.name.to_string(),
                lines: snapshots
                    .iter()
                    .map(|snap| snap.line_counts.get(lang.name).copied().unwrap_or(0))
                    .sum(),
            })
            .collect();

        Self {
            version: SCHEMA_VERSION,
            generated_at: Utc::now(),
            total_commits_1d: snapshots.iter().map(|s| s.commit_count_1d).sum(),
            total_commits_7d: snapshots.iter().map(|s| s.commit_count_7d).sum(),
            streak_days,
            repositories,
            language_totals,
        }
    }

    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render the report body as plain text.
    pub fn render(&self) -> String {
        if self.repositories.is_empty() {
            return "No repositories found.\n".to_string();
        }

        let mut out = String::new();
        out.push_str(&format!(
            "Commits in the last 24 hours (across all repos): {}\n",
            self.total_commits_1d
        ));
        out.push_str(&format!(
            "Commits in the last week (across all repos): {}\n",
            self.total_commits_7d
        ));
        out.push_str(&format!(
            "Consecutive previous days with a commit: {}\n",
            self.streak_days
        ));

        for repo in &self.repositories {
            out.push('\n');
            out.push_str(&format!(
                "Activity from the last week in the {} repo:\n",
                repo.name
            ));
            if repo.weekly_commit_log.is_empty() {
                out.push_str("No activity\n");
            } else {
                out.push_str(&repo.weekly_commit_log);
                if !repo.weekly_commit_log.ends_with('\n') {
                    out.push('\n');
                }
            }
        }

        out.push_str("\nTotal current lines (across all repos) of...\n");
        for total in &self.language_totals {
            out.push_str(&format!("{}: {}\n", total.language, total.lines));
        }
        out
    }
}

/// Subject line for the report delivery collaborator.
pub fn subject(now: DateTime<Local>) -> String {
    format!("Commit Report {}", now.format("%Y-%m-%d %H:%M:%S"))
}
