//! Chronological grouping of records by start month.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};

use crate::error::AgendaError;
use crate::locale::Locale;
use crate::record::Scheduled;

/// A calendar month. Orders chronologically; displays as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    /// 1-12
    pub month: u32,
}

impl MonthKey {
    pub fn of(date: NaiveDate) -> Self {
        MonthKey {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// First day of the month, if it exists in chrono's range
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Capitalized "month year" heading
    pub fn label(&self, locale: Locale) -> String {
        locale.month_year_label(self.year, self.month)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = AgendaError;

    /// Parse `YYYY-MM`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AgendaError::Parse(format!("Invalid month '{}'. Expected YYYY-MM", s));

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        let key = MonthKey { year, month };
        key.first_day().map(|_| key).ok_or_else(invalid)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Records sharing a start month.
#[derive(Debug, Clone, Serialize)]
pub struct ChronoGroup<'a, R> {
    pub key: MonthKey,
    pub label: String,
    /// Input order; not sorted by date
    pub items: Vec<&'a R>,
}

/// Group records by the month of their start date, oldest month first.
///
/// A record spanning several months appears once, under its start month.
pub fn group_by_month<'a, R, I>(records: I, locale: Locale) -> Vec<ChronoGroup<'a, R>>
where
    R: Scheduled + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let mut buckets: BTreeMap<MonthKey, Vec<&'a R>> = BTreeMap::new();
    for record in records {
        buckets
            .entry(MonthKey::of(record.start_date()))
            .or_default()
            .push(record);
    }

    tracing::debug!(groups = buckets.len(), "grouped records by month");

    buckets
        .into_iter()
        .map(|(key, items)| ChronoGroup {
            key,
            label: key.label(locale),
            items,
        })
        .collect()
}

/// Records starting in `month`, sorted by start date (ties keep input order).
pub fn month_slice<'a, R, I>(records: I, month: MonthKey) -> Vec<&'a R>
where
    R: Scheduled + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let mut slice: Vec<&'a R> = records
        .into_iter()
        .filter(|r| month.contains(r.start_date()))
        .collect();
    slice.sort_by_key(|r| r.start_date());
    slice
}
