//! Fixed six-week month grid.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::Serialize;

use crate::grouping::MonthKey;
use crate::record::DATE_FORMAT;

/// Cells in every grid: six full weeks
pub const GRID_CELLS: usize = 42;
pub const DAYS_PER_WEEK: usize = 7;

/// One grid position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Day of month (1-31)
    pub day: u32,
    /// False for padding days from the previous or next month
    pub in_current_month: bool,
    /// `YYYY-MM-DD`; lexicographic order equals chronological order
    pub key: String,
}

impl DayCell {
    fn new(date: NaiveDate, in_current_month: bool) -> Self {
        DayCell {
            date,
            day: date.day(),
            in_current_month,
            key: date.format(DATE_FORMAT).to_string(),
        }
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Sundays start a visual week row
    pub fn starts_week(&self) -> bool {
        self.weekday() == Weekday::Sun
    }
}

/// The 42 cells covering a month, Sunday first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub month: MonthKey,
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    /// Rows of seven cells
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    /// Cells belonging to the viewed month
    pub fn current_month_cells(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter(|c| c.in_current_month)
    }
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// Number of days in the month containing `date` (28-31).
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = first_of_month(date);
    match first.checked_add_months(Months::new(1)) {
        Some(next) => (next - first).num_days() as u32,
        // Only reachable for December of chrono's last supported year
        None => 31,
    }
}

/// Build the grid for the month containing `reference`.
///
/// Leading cells are the tail of the previous month (as many as the weekday
/// index of day 1, Sunday = 0), then every day of the month, then days of the
/// following month until 42 cells are filled.
pub fn build_grid(reference: NaiveDate) -> MonthGrid {
    let first = first_of_month(reference);
    let leading = u64::from(first.weekday().num_days_from_sunday());
    let grid_start = first - Days::new(leading);
    let month = MonthKey::of(first);

    let cells: Vec<DayCell> = grid_start
        .iter_days()
        .take(GRID_CELLS)
        .map(|date| DayCell::new(date, month.contains(date)))
        .collect();

    tracing::debug!(
        month = %month,
        leading,
        trailing = GRID_CELLS - leading as usize - days_in_month(first) as usize,
        "built calendar grid"
    );

    MonthGrid { month, cells }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn march_2024_layout() {
        let grid = build_grid(date(2024, 3, 1));
        let cells = &grid.cells;

        assert_eq!(cells.len(), GRID_CELLS);

        let leading: Vec<u32> = cells[0..5].iter().map(|c| c.day).collect();
        assert_eq!(leading, vec![25, 26, 27, 28, 29]);
        assert!(cells[0..5].iter().all(|c| !c.in_current_month));
        assert_eq!(cells[0].date, date(2024, 2, 25));

        assert_eq!(cells[5].date, date(2024, 3, 1));
        assert!(cells[5].in_current_month);
        assert_eq!(cells[35].date, date(2024, 3, 31));
        assert!(cells[35].in_current_month);

        let trailing: Vec<NaiveDate> = cells[36..].iter().map(|c| c.date).collect();
        let expected: Vec<NaiveDate> = (1..=6).map(|d| date(2024, 4, d)).collect();
        assert_eq!(trailing, expected);
        assert!(cells[36..].iter().all(|c| !c.in_current_month));
    }

    #[test]
    fn every_month_has_42_cells_sunday_to_saturday() {
        for year in [2023, 2024, 2025, 2100] {
            for month in 1..=12 {
                let grid = build_grid(date(year, month, 15));
                assert_eq!(grid.cells.len(), GRID_CELLS, "{year}-{month}");
                assert_eq!(grid.cells[0].weekday(), Weekday::Sun, "{year}-{month}");
                assert_eq!(grid.cells[41].weekday(), Weekday::Sat, "{year}-{month}");
                assert_eq!(
                    grid.current_month_cells().count() as u32,
                    days_in_month(date(year, month, 1)),
                    "{year}-{month}"
                );
            }
        }
    }

    #[test]
    fn february_lengths() {
        assert_eq!(days_in_month(date(2024, 2, 10)), 29);
        assert_eq!(days_in_month(date(2023, 2, 10)), 28);
        assert_eq!(days_in_month(date(2100, 2, 1)), 28);
        assert_eq!(days_in_month(date(2000, 2, 1)), 29);
        assert_eq!(days_in_month(date(2024, 4, 30)), 30);
        assert_eq!(days_in_month(date(2024, 12, 31)), 31);
    }

    #[test]
    fn month_starting_on_sunday_has_no_leading_padding() {
        // September 2024 starts on a Sunday
        let grid = build_grid(date(2024, 9, 20));
        assert_eq!(grid.cells[0].date, date(2024, 9, 1));
        assert!(grid.cells[0].in_current_month);
        assert_eq!(grid.cells[29].date, date(2024, 9, 30));
        assert_eq!(grid.cells[30].date, date(2024, 10, 1));
        assert_eq!(grid.cells[41].date, date(2024, 10, 12));
    }

    #[test]
    fn padding_crosses_year_boundaries() {
        let january = build_grid(date(2025, 1, 1));
        // 2025-01-01 is a Wednesday
        assert_eq!(january.cells[0].date, date(2024, 12, 29));
        assert_eq!(january.cells[0].key, "2024-12-29");

        let december = build_grid(date(2024, 12, 5));
        assert_eq!(december.cells[41].date, date(2025, 1, 11));
        assert!(!december.cells[41].in_current_month);
    }

    #[test]
    fn keys_sort_like_dates() {
        let grid = build_grid(date(2024, 10, 1));
        let keys: Vec<&str> = grid.cells.iter().map(|c| c.key.as_str()).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        assert_eq!(grid.cells[2].key, "2024-10-01");
    }

    #[test]
    fn weeks_are_seven_cells_each() {
        let grid = build_grid(date(2024, 3, 1));
        let weeks: Vec<&[DayCell]> = grid.weeks().collect();
        assert_eq!(weeks.len(), 6);
        assert!(weeks.iter().all(|w| w.len() == DAYS_PER_WEEK && w[0].starts_week()));
    }
}
