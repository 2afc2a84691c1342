use crate::git::GitHistory;
use crate::report::{self, AggregateReport};
use crate::{scan, snapshot, streak};
use anyhow::{Context, Result};
use chrono::{Local, Utc};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "commit-report")]
#[command(about = "Daily activity report across local git repositories")]
#[command(version)]
pub struct Cli {
    #[arg(long, help = "Directory containing the repositories to report on")]
    pub repos: PathBuf,

    #[arg(long, help = "Output as JSON")]
    pub json: bool,

    #[arg(long, help = "Write the report body to a file instead of stdout")]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Print the subject line before the report body")]
    pub subject: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        let source = GitHistory::new();
        let snapshots = scan::scan_repositories(&self.repos, &source)
            .with_context(|| format!("Failed to scan {}", self.repos.display()))?;

        let dates = snapshot::commit_date_set(&snapshots);
        // Date lines are formatted in UTC, so the streak clock is UTC too
        let today = Utc::now().date_naive();
        let streak_days = streak::consecutive_active_days(&dates, today);
        let report = AggregateReport::build(&snapshots, streak_days);

        if self.json {
            println!("{}", report.to_json()?);
            return Ok(());
        }

        if self.subject {
            println!("{}", report::subject(Local::now()));
        }

        let body = report.render();
        match self.output {
            Some(path) => std::fs::write(&path, &body)
                .with_context(|| format!("Failed to write report to {}", path.display()))?,
            None => print!("{body}"),
        }
        Ok(())
    }
}
