mod repo;

pub use repo::GitRepo;

use crate::error::Result;
use crate::model::CommitRecord;
use std::path::Path;

/// Outcome of walking one repository's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum History {
    /// Number of commits handed to the visitor.
    Walked(usize),
    /// `HEAD` is unborn: the repository has no commits yet.
    Empty,
}

/// Produces the commits of a repository, one record at a time.
///
/// Invalid or missing repositories are reported as
/// [`GitstatsError::InvalidRepository`](crate::error::GitstatsError::InvalidRepository)
/// so callers can skip them and carry on.
pub trait CommitSource {
    fn visit_commits(&self, repo: &Path, visit: &mut dyn FnMut(CommitRecord)) -> Result<History>;
}

/// Reads history straight from the object database with `gix`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GixCommitSource;

impl CommitSource for GixCommitSource {
    fn visit_commits(&self, repo: &Path, visit: &mut dyn FnMut(CommitRecord)) -> Result<History> {
        GitRepo::open(repo)?.visit_commits(visit)
    }
}
