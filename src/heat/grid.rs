use crate::model::{CalendarGrid, CommitHistogram, DAYS_IN_WEEK};

/// Reshape a histogram into week columns of seven weekday cells.
pub fn build_grid(histogram: &CommitHistogram) -> CalendarGrid {
    let mut grid = CalendarGrid::new();
    for (offset, count) in histogram.iter() {
        let week = offset / DAYS_IN_WEEK as u32;
        let weekday = (offset % DAYS_IN_WEEK as u32) as usize;
        grid.set(week, weekday, count);
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{WEEKS_IN_WINDOW, WINDOW_DAYS};

    #[test]
    fn reshape_preserves_totals() {
        let mut h = CommitHistogram::new();
        for offset in (0..=WINDOW_DAYS + 7).step_by(5) {
            for _ in 0..(offset % 4 + 1) {
                h.increment(offset);
            }
        }

        let grid = build_grid(&h);
        assert_eq!(grid.total(), h.total());
    }

    #[test]
    fn offsets_map_to_week_and_weekday() {
        let mut h = CommitHistogram::new();
        h.increment(0);
        h.increment(9);
        h.increment(9);
        h.increment(WINDOW_DAYS + 7);

        let grid = build_grid(&h);
        assert_eq!(grid.cell(0, 0), 1);
        assert_eq!(grid.cell(1, 2), 2);
        assert_eq!(grid.cell(27, 1), 1);
    }

    #[test]
    fn empty_histogram_still_has_every_week() {
        let grid = build_grid(&CommitHistogram::new());
        for week in 0..=WEEKS_IN_WINDOW {
            assert_eq!(grid.week(week), Some(&[0; DAYS_IN_WEEK]));
        }
        assert_eq!(grid.total(), 0);
    }
}
