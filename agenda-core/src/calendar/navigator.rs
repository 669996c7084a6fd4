//! Month navigation state for the calendar header and date picker.

use chrono::{Datelike, Months, NaiveDate};

use super::grid::first_of_month;
use crate::grouping::MonthKey;
use crate::locale::Locale;

/// Tracks which month the calendar shows.
///
/// Every transition is total: steps that would leave chrono's supported date
/// range leave the state unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthNavigator {
    reference: NaiveDate,
    picker_open: bool,
}

impl MonthNavigator {
    /// Start on the month containing `reference`, keeping its day for display.
    pub fn new(reference: NaiveDate) -> Self {
        MonthNavigator {
            reference,
            picker_open: false,
        }
    }

    /// The date the view was opened or reset on. After any month step this is
    /// the 1st of the shown month.
    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    pub fn first_of_month(&self) -> NaiveDate {
        first_of_month(self.reference)
    }

    pub fn month(&self) -> MonthKey {
        MonthKey::of(self.reference)
    }

    pub fn year(&self) -> i32 {
        self.reference.year()
    }

    /// Capitalized heading, e.g. "Março 2024"
    pub fn label(&self, locale: Locale) -> String {
        self.month().label(locale)
    }

    pub fn prev_month(&mut self) {
        if let Some(date) = self.first_of_month().checked_sub_months(Months::new(1)) {
            self.reference = date;
        }
    }

    pub fn next_month(&mut self) {
        if let Some(date) = self.first_of_month().checked_add_months(Months::new(1)) {
            self.reference = date;
        }
    }

    /// Move `count` months backwards (negative) or forwards.
    pub fn step_months(&mut self, count: i32) {
        let first = self.first_of_month();
        let months = Months::new(count.unsigned_abs());
        let target = if count < 0 {
            first.checked_sub_months(months)
        } else {
            first.checked_add_months(months)
        };
        if let Some(date) = target {
            self.reference = date;
        }
    }

    /// Reset to the real current date.
    pub fn today(&mut self, today: NaiveDate) {
        self.reference = today;
    }

    /// Show month `index` (0 = January) of the current year and close the picker.
    /// Indexes past December roll into following years.
    pub fn jump_to_month(&mut self, index: u32) {
        let month = index % 12 + 1;
        let target = i32::try_from(index / 12)
            .ok()
            .and_then(|offset| self.year().checked_add(offset))
            .and_then(|year| NaiveDate::from_ymd_opt(year, month, 1));
        if let Some(date) = target {
            self.reference = date;
        }
        self.picker_open = false;
    }

    /// Shift the year by `delta`, keeping the month.
    pub fn jump_to_year(&mut self, delta: i32) {
        let first = self.first_of_month();
        let target = first
            .year()
            .checked_add(delta)
            .and_then(|year| NaiveDate::from_ymd_opt(year, first.month(), 1));
        if let Some(date) = target {
            self.reference = date;
        }
    }

    pub fn is_picker_open(&self) -> bool {
        self.picker_open
    }

    pub fn toggle_picker(&mut self) {
        self.picker_open = !self.picker_open;
    }

    pub fn close_picker(&mut self) {
        self.picker_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_steps_normalize_to_first_and_roll_years() {
        let mut nav = MonthNavigator::new(date(2024, 1, 31));
        nav.prev_month();
        assert_eq!(nav.reference(), date(2023, 12, 1));

        nav.next_month();
        nav.next_month();
        assert_eq!(nav.reference(), date(2024, 2, 1));

        let mut nav = MonthNavigator::new(date(2024, 12, 15));
        nav.next_month();
        assert_eq!(nav.reference(), date(2025, 1, 1));
    }

    #[test]
    fn step_months_in_both_directions() {
        let mut nav = MonthNavigator::new(date(2024, 3, 9));
        nav.step_months(-14);
        assert_eq!(nav.reference(), date(2023, 1, 1));
        nav.step_months(25);
        assert_eq!(nav.reference(), date(2025, 2, 1));
        nav.step_months(0);
        assert_eq!(nav.reference(), date(2025, 2, 1));
    }

    #[test]
    fn today_keeps_the_real_day() {
        let mut nav = MonthNavigator::new(date(2020, 5, 1));
        nav.today(date(2024, 3, 9));
        assert_eq!(nav.reference(), date(2024, 3, 9));
        assert_eq!(nav.first_of_month(), date(2024, 3, 1));
        nav.today(date(2024, 3, 9));
        assert_eq!(nav.reference(), date(2024, 3, 9));
    }

    #[test]
    fn jump_to_month_closes_picker_and_is_idempotent() {
        let mut nav = MonthNavigator::new(date(2024, 3, 9));
        nav.toggle_picker();
        assert!(nav.is_picker_open());

        nav.jump_to_month(10);
        assert_eq!(nav.reference(), date(2024, 11, 1));
        assert!(!nav.is_picker_open());

        nav.jump_to_month(10);
        assert_eq!(nav.reference(), date(2024, 11, 1));
    }

    #[test]
    fn jump_to_month_past_december_rolls_over() {
        let mut nav = MonthNavigator::new(date(2024, 3, 9));
        nav.jump_to_month(13);
        assert_eq!(nav.reference(), date(2025, 2, 1));
    }

    #[test]
    fn jump_to_year_keeps_month() {
        let mut nav = MonthNavigator::new(date(2024, 2, 29));
        nav.jump_to_year(1);
        assert_eq!(nav.reference(), date(2025, 2, 1));
        nav.jump_to_year(-3);
        assert_eq!(nav.reference(), date(2022, 2, 1));
    }

    #[test]
    fn out_of_range_jumps_leave_state_unchanged() {
        let mut nav = MonthNavigator::new(date(2024, 3, 9));
        nav.jump_to_year(i32::MAX);
        assert_eq!(nav.reference(), date(2024, 3, 9));
        nav.jump_to_year(i32::MIN);
        assert_eq!(nav.reference(), date(2024, 3, 9));
        nav.jump_to_year(1_000_000);
        assert_eq!(nav.reference(), date(2024, 3, 9));

        nav.toggle_picker();
        nav.jump_to_month(u32::MAX);
        assert_eq!(nav.reference(), date(2024, 3, 9));
        assert!(!nav.is_picker_open());

        nav.step_months(i32::MIN);
        assert_eq!(nav.reference(), date(2024, 3, 9));
    }

    #[test]
    fn label_follows_locale() {
        let nav = MonthNavigator::new(date(2024, 3, 9));
        assert_eq!(nav.label(Locale::PtBr), "Março 2024");
        assert_eq!(nav.label(Locale::EnUs), "March 2024");
    }
}
