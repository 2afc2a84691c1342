mod repo;

pub use repo::GitHistory;
