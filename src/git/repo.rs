use crate::error::{GitstatsError, Result};
use crate::git::History;
use crate::model::CommitRecord;
use chrono::{DateTime, FixedOffset};
use gix::Repository;
use std::path::{Path, PathBuf};

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Open the repository rooted exactly at `path`; parent directories are
    /// not searched.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(GitstatsError::InvalidRepository {
                path,
                reason: "path does not exist".to_string(),
            });
        }

        let repo = gix::open(&path).map_err(|e| GitstatsError::InvalidRepository {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self { repo, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Feed every commit reachable from `HEAD` to `visit`.
    pub fn visit_commits(&self, visit: &mut dyn FnMut(CommitRecord)) -> Result<History> {
        let mut head = self.repo.head()?;
        if head.is_unborn() {
            return Ok(History::Empty);
        }
        let head_commit = head.peel_to_commit_in_place()?;

        let walk = self
            .repo
            .rev_walk([head_commit.id])
            .all()
            .map_err(|e| GitstatsError::Git(format!("Failed to start revision walk: {e}")))?;

        let mut walked = 0;
        for info in walk {
            let info =
                info.map_err(|e| GitstatsError::Git(format!("Revision walk failed: {e}")))?;
            let commit = info.object()?;
            let author = commit.author()?;
            let time = author
                .time()
                .map_err(|e| GitstatsError::Git(format!("Invalid author time in {}: {e}", info.id)))?;

            visit(CommitRecord {
                author_email: author.email.to_string(),
                authored_at: to_datetime(time.seconds, time.offset)?,
            });
            walked += 1;
        }

        Ok(History::Walked(walked))
    }
}

fn to_datetime(seconds: i64, offset: i32) -> Result<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(offset)
        .ok_or_else(|| GitstatsError::Git(format!("Invalid timezone offset: {offset}")))?;
    DateTime::from_timestamp(seconds, 0)
        .map(|utc| utc.with_timezone(&offset))
        .ok_or_else(|| GitstatsError::Git(format!("Invalid timestamp: {seconds}")))
}
