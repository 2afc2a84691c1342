pub mod cli;
pub mod error;
pub mod git;
pub mod history;
pub mod lang;
pub mod logging;
pub mod report;
pub mod scan;
pub mod snapshot;
pub mod streak;
