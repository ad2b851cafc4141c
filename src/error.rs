use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GitstatsError>;

#[derive(Error, Debug)]
pub enum GitstatsError {
    #[error("{} is not a valid git repository: {reason}", path.display())]
    InvalidRepository { path: PathBuf, reason: String },
    #[error("Git error: {0}")]
    Git(String),
    #[error("Reference find error: {0}")]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
    #[error("Head peel error: {0}")]
    HeadPeel(#[from] Box<gix::head::peel::to_commit::Error>),
    #[error("Object find error: {0}")]
    ObjectFind(#[from] Box<gix::object::find::existing::Error>),
    #[error("Object decode error: {0}")]
    ObjectDecode(#[from] Box<gix::objs::decode::Error>),
    #[error("Registry error: {0}")]
    Registry(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// Manual From implementations for unboxed to boxed conversions
impl From<gix::reference::find::existing::Error> for GitstatsError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        GitstatsError::RefFind(Box::new(err))
    }
}

impl From<gix::head::peel::to_commit::Error> for GitstatsError {
    fn from(err: gix::head::peel::to_commit::Error) -> Self {
        GitstatsError::HeadPeel(Box::new(err))
    }
}

impl From<gix::object::find::existing::Error> for GitstatsError {
    fn from(err: gix::object::find::existing::Error) -> Self {
        GitstatsError::ObjectFind(Box::new(err))
    }
}

impl From<gix::objs::decode::Error> for GitstatsError {
    fn from(err: gix::objs::decode::Error) -> Self {
        GitstatsError::ObjectDecode(Box::new(err))
    }
}
