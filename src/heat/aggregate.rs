use crate::error::GitstatsError;
use crate::git::{CommitSource, History};
use crate::model::{CommitHistogram, CommitRecord, DayOffset};
use crate::util::{alignment_offset, day_age, local_day};
use chrono::NaiveDate;
use std::path::Path;
use tracing::{debug, warn};

/// What happened to a single repository during aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoOutcome {
    /// History was read; `matched` commits landed in the window.
    Counted { matched: usize },
    /// The walk failed part-way; the `matched` commits seen before the
    /// failure stay counted.
    Partial { matched: usize },
    Empty,
    Invalid,
}

/// Accumulates one author's commits from many repositories into a
/// day-bucketed histogram.
pub struct Aggregator<'a, S: CommitSource + ?Sized> {
    source: &'a S,
    author_email: &'a str,
    today: NaiveDate,
    alignment: u32,
    histogram: CommitHistogram,
}

impl<'a, S: CommitSource + ?Sized> Aggregator<'a, S> {
    pub fn new(source: &'a S, author_email: &'a str, today: NaiveDate) -> Self {
        Self {
            source,
            author_email,
            today,
            alignment: alignment_offset(today),
            histogram: CommitHistogram::new(),
        }
    }

    pub fn alignment(&self) -> u32 {
        self.alignment
    }

    /// Count the matching commits of one repository. Invalid and empty
    /// repositories are reported and skipped.
    pub fn add_repository(&mut self, path: &Path) -> RepoOutcome {
        let mut matched = 0;
        let mut visited = 0;
        let histogram = &mut self.histogram;
        let (email, today, alignment) = (self.author_email, self.today, self.alignment);

        let result = self.source.visit_commits(path, &mut |commit| {
            visited += 1;
            if let Some(offset) = bucket_for(&commit, email, today, alignment) {
                histogram.increment(offset);
                matched += 1;
            }
        });

        match result {
            Ok(History::Walked(total)) => {
                debug!(repo = %path.display(), total, matched, "Repository processed");
                RepoOutcome::Counted { matched }
            }
            Ok(History::Empty) => {
                warn!("Repository at {} appears to be empty", path.display());
                RepoOutcome::Empty
            }
            Err(e @ GitstatsError::InvalidRepository { .. }) => {
                warn!("{e}");
                RepoOutcome::Invalid
            }
            Err(e) if visited > 0 => {
                warn!(
                    "History of {} was only partly read ({matched} matching commits kept): {e}",
                    path.display()
                );
                RepoOutcome::Partial { matched }
            }
            Err(e) => {
                warn!("Skipping {}: {e}", path.display());
                RepoOutcome::Invalid
            }
        }
    }

    pub fn finish(self) -> CommitHistogram {
        self.histogram
    }
}

/// Histogram key for `commit`, or `None` when it belongs to someone else or
/// falls outside the window. Emails are compared case-sensitively.
pub fn bucket_for(
    commit: &CommitRecord,
    author_email: &str,
    today: NaiveDate,
    alignment: u32,
) -> Option<u32> {
    if commit.author_email != author_email {
        return None;
    }
    match day_age(local_day(&commit.authored_at), today) {
        DayOffset::InWindow(age) => Some(age + alignment),
        DayOffset::OutOfWindow => None,
    }
}

/// One-shot aggregation over every registered repository.
pub fn aggregate<'p, S, I>(repos: I, author_email: &str, source: &S, today: NaiveDate) -> CommitHistogram
where
    S: CommitSource + ?Sized,
    I: IntoIterator<Item = &'p Path>,
{
    let mut aggregator = Aggregator::new(source, author_email, today);
    for repo in repos {
        aggregator.add_repository(repo);
    }
    aggregator.finish()
}
