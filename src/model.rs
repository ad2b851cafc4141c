use chrono::{DateTime, FixedOffset};
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// Length of the trailing window in days (roughly six months).
pub const WINDOW_DAYS: u32 = 183;
pub const WEEKS_IN_WINDOW: u32 = 26;
pub const DAYS_IN_WEEK: usize = 7;

/// Repository roots known to the registry. Iteration order carries no meaning;
/// the ordered set only keeps the registry file stable.
pub type RepoSet = BTreeSet<PathBuf>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub author_email: String,
    pub authored_at: DateTime<FixedOffset>,
}

/// Age of a commit relative to today's midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayOffset {
    InWindow(u32),
    OutOfWindow,
}

/// Commit counts keyed by aligned day offset.
///
/// Every offset in `0..=WINDOW_DAYS` is present. Alignment may push a key up
/// to `WINDOW_DAYS + 7`; those buckets are created on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitHistogram {
    counts: BTreeMap<u32, u32>,
}

impl CommitHistogram {
    pub fn new() -> Self {
        Self {
            counts: (0..=WINDOW_DAYS).map(|offset| (offset, 0)).collect(),
        }
    }

    pub fn increment(&mut self, offset: u32) {
        *self.counts.entry(offset).or_insert(0) += 1;
    }

    pub fn get(&self, offset: u32) -> u32 {
        self.counts.get(&offset).copied().unwrap_or(0)
    }

    /// Fold another histogram in by addition.
    pub fn merge(&mut self, other: &CommitHistogram) {
        for (&offset, &count) in &other.counts {
            *self.counts.entry(offset).or_insert(0) += count;
        }
    }

    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| c as u64).sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Buckets in ascending offset order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.counts.iter().map(|(&offset, &count)| (offset, count))
    }
}

impl Default for CommitHistogram {
    fn default() -> Self {
        Self::new()
    }
}

/// Week-by-weekday matrix. Week 0 is the current week; higher indices are
/// further in the past.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    weeks: BTreeMap<u32, [u32; DAYS_IN_WEEK]>,
}

impl CalendarGrid {
    pub fn new() -> Self {
        Self {
            weeks: (0..=WEEKS_IN_WINDOW)
                .map(|week| (week, [0; DAYS_IN_WEEK]))
                .collect(),
        }
    }

    pub fn set(&mut self, week: u32, weekday: usize, count: u32) {
        let row = self.weeks.entry(week).or_insert([0; DAYS_IN_WEEK]);
        if let Some(cell) = row.get_mut(weekday) {
            *cell = count;
        }
    }

    /// Count for a cell; unknown weeks and out-of-range weekdays read as 0.
    pub fn cell(&self, week: u32, weekday: usize) -> u32 {
        self.weeks
            .get(&week)
            .and_then(|row| row.get(weekday))
            .copied()
            .unwrap_or(0)
    }

    pub fn week(&self, week: u32) -> Option<&[u32; DAYS_IN_WEEK]> {
        self.weeks.get(&week)
    }

    pub fn total(&self) -> u64 {
        self.weeks
            .values()
            .flat_map(|row| row.iter())
            .map(|&c| c as u64)
            .sum()
    }
}

impl Default for CalendarGrid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_is_prefilled() {
        let h = CommitHistogram::new();
        assert_eq!(h.len(), WINDOW_DAYS as usize + 1);
        assert_eq!(h.total(), 0);
        assert!(h.iter().all(|(_, count)| count == 0));
    }

    #[test]
    fn histogram_accepts_aligned_keys_past_window() {
        let mut h = CommitHistogram::new();
        h.increment(WINDOW_DAYS + 7);
        assert_eq!(h.get(WINDOW_DAYS + 7), 1);
        assert_eq!(h.len(), WINDOW_DAYS as usize + 2);
    }

    #[test]
    fn merge_adds_counts() {
        let mut a = CommitHistogram::new();
        a.increment(3);
        let mut b = CommitHistogram::new();
        b.increment(3);
        b.increment(10);
        a.merge(&b);
        assert_eq!(a.get(3), 2);
        assert_eq!(a.get(10), 1);
        assert_eq!(a.total(), 3);
    }

    #[test]
    fn grid_has_every_week_and_defaults_missing_cells() {
        let grid = CalendarGrid::new();
        for week in 0..=WEEKS_IN_WINDOW {
            assert_eq!(grid.week(week), Some(&[0; DAYS_IN_WEEK]));
        }
        assert_eq!(grid.cell(WEEKS_IN_WINDOW + 5, 0), 0);
        assert_eq!(grid.cell(0, 9), 0);
    }
}
