use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReportError>;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("not a git repository: {0}")]
    NotARepository(PathBuf),
    #[error("Git error: {0}")]
    Git(#[from] Box<gix::open::Error>),
    #[error("Reference find error: {0}")]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
    #[error("Head peel error: {0}")]
    HeadPeel(#[from] Box<gix::head::peel::to_commit::Error>),
    #[error("Object find error: {0}")]
    ObjectFindConv(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("Object decode error: {0}")]
    ObjectDecode(#[from] Box<gix::objs::decode::Error>),
    #[error("Commit error: {0}")]
    Commit(#[from] Box<gix::object::commit::Error>),
    #[error("Index error: {0}")]
    Index(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// Manual From implementations for unboxed to boxed conversions
impl From<gix::open::Error> for ReportError {
    fn from(err: gix::open::Error) -> Self {
        ReportError::Git(Box::new(err))
    }
}

impl From<gix::reference::find::existing::Error> for ReportError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        ReportError::RefFind(Box::new(err))
    }
}

impl From<gix::head::peel::to_commit::Error> for ReportError {
    fn from(err: gix::head::peel::to_commit::Error) -> Self {
        ReportError::HeadPeel(Box::new(err))
    }
}

impl From<gix::object::find::existing::with_conversion::Error> for ReportError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        ReportError::ObjectFindConv(Box::new(err))
    }
}

impl From<gix::objs::decode::Error> for ReportError {
    fn from(err: gix::objs::decode::Error) -> Self {
        ReportError::ObjectDecode(Box::new(err))
    }
}

impl From<gix::object::commit::Error> for ReportError {
    fn from(err: gix::object::commit::Error) -> Self {
        ReportError::Commit(Box::new(err))
    }
}
