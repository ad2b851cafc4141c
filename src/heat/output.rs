use crate::model::{CalendarGrid, DAYS_IN_WEEK, WEEKS_IN_WINDOW, WINDOW_DAYS};
use chrono::{Datelike, Duration, NaiveDate};
use console::Style;
use std::io::{self, Write};

/// Width of the weekday label column.
const LABEL_WIDTH: usize = 5;
/// Every cell, whatever its count, occupies this many columns.
const CELL_WIDTH: usize = 4;
const EMPTY_CELL: &str = "  - ";

/// Color bucket for one heatmap cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Highlight,
    Empty,
    Low,
    Medium,
    High,
}

impl Tier {
    /// Escape sequences are always emitted, even when stdout is not a terminal.
    pub fn style(self) -> Style {
        let style = match self {
            Tier::Highlight => Style::new().white().on_magenta().bold(),
            Tier::Empty => Style::new().black(),
            Tier::Low => Style::new().black().on_white().bold(),
            Tier::Medium => Style::new().black().on_yellow().bold(),
            Tier::High => Style::new().black().on_green().bold(),
        };
        style.force_styling(true)
    }
}

/// Today always wins; otherwise the first matching threshold.
pub fn classify(count: u32, is_today: bool) -> Tier {
    match (is_today, count) {
        (true, _) => Tier::Highlight,
        (false, 0) => Tier::Empty,
        (false, 1..=4) => Tier::Low,
        (false, 5..=9) => Tier::Medium,
        (false, _) => Tier::High,
    }
}

/// Fixed-width cell text: a dash for zero, otherwise the count right-aligned
/// in three columns plus a trailing space. Counts past 999 widen the cell.
pub fn cell_text(count: u32) -> String {
    if count == 0 {
        EMPTY_CELL.to_string()
    } else {
        format!("{count:>3} ")
    }
}

pub fn day_label(weekday: usize) -> &'static str {
    match weekday {
        1 => " Mon ",
        3 => " Wed ",
        5 => " Fri ",
        _ => "     ",
    }
}

/// Month row: one cell-wide slot per week from `WINDOW_DAYS` ago up to
/// `today`, labelled only where a new month begins.
pub fn month_header(today: NaiveDate) -> String {
    let mut line = " ".repeat(LABEL_WIDTH + CELL_WIDTH);
    let mut date = today - Duration::days(WINDOW_DAYS as i64);
    let mut current_month = date.month();

    while date <= today {
        if date.month() != current_month {
            line.push_str(&format!("{} ", date.format("%b")));
            current_month = date.month();
        } else {
            line.push_str(&" ".repeat(CELL_WIDTH));
        }
        date += Duration::days(DAYS_IN_WEEK as i64);
    }
    line
}

fn is_today(week: u32, weekday: usize, alignment: u32) -> bool {
    week == 0 && weekday as u32 + 1 == alignment
}

/// Write the heatmap: the month row, then the grid block (which opens with
/// the month row again) with weekday rows from index 6 down to 0 and the
/// oldest week on the left.
pub fn render<W: Write>(
    out: &mut W,
    grid: &CalendarGrid,
    alignment: u32,
    today: NaiveDate,
) -> io::Result<()> {
    let header = month_header(today);
    writeln!(out, "{header}")?;
    writeln!(out, "{header}")?;

    for weekday in (0..DAYS_IN_WEEK).rev() {
        write!(out, "{}", day_label(weekday))?;
        for week in (0..=WEEKS_IN_WINDOW + 1).rev() {
            let count = grid.cell(week, weekday);
            let tier = classify(count, is_today(week, weekday, alignment));
            write!(out, "{}", tier.style().apply_to(cell_text(count)))?;
        }
        writeln!(out)?;
    }
    Ok(())
}
