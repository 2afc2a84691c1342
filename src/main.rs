use anyhow::Result;
use commit_report::cli::Cli;

fn main() -> Result<()> {
    commit_report::logging::init();
    let cli = Cli::parse();
    cli.execute()
}
