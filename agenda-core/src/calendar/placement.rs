//! Placing date-ranged records onto grid cells.

use serde::Serialize;

use super::grid::DayCell;
use crate::record::Scheduled;

/// Marker shown instead of the title on continuation days
pub const CONTINUATION_MARKER: &str = "...";

/// How a record is labeled on a given cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    /// Show the full title
    FullLabel,
    /// Show only a continuation marker
    Continuation,
}

/// A record occupying a cell.
#[derive(Debug, Clone, Serialize)]
pub struct Placement<'a, R> {
    pub record: &'a R,
    pub mode: DisplayMode,
}

impl<R: Scheduled> Placement<'_, R> {
    /// Title on full-label cells, the continuation marker elsewhere
    pub fn text(&self) -> &str {
        match self.mode {
            DisplayMode::FullLabel => self.record.title(),
            DisplayMode::Continuation => CONTINUATION_MARKER,
        }
    }
}

/// A grid cell with every record covering its date.
#[derive(Debug, Clone, Serialize)]
pub struct PlacedCell<'a, R> {
    pub cell: DayCell,
    pub placements: Vec<Placement<'a, R>>,
}

/// Full title on the record's first day and on every Sunday it covers, so a
/// range wrapping onto a new week row stays identifiable.
pub fn display_mode<R: Scheduled>(record: &R, cell: &DayCell) -> DisplayMode {
    if cell.date == record.start_date() || cell.starts_week() {
        DisplayMode::FullLabel
    } else {
        DisplayMode::Continuation
    }
}

/// Attach to each cell the records whose inclusive range contains its date.
///
/// Records keep their input order within a cell. A record ending before it
/// starts is placed on its start date only.
pub fn place_records<'a, R, I>(cells: &[DayCell], records: I) -> Vec<PlacedCell<'a, R>>
where
    R: Scheduled + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let records: Vec<&'a R> = records.into_iter().collect();

    for record in records.iter().filter(|r| !r.has_valid_range()) {
        tracing::warn!(
            id = record.id(),
            start = %record.start_date(),
            end = %record.end_date(),
            "record ends before it starts, placing it on its start date only"
        );
    }

    let placed: Vec<PlacedCell<'a, R>> = cells
        .iter()
        .map(|cell| PlacedCell {
            cell: cell.clone(),
            placements: records
                .iter()
                .filter(|r| r.covers(cell.date))
                .map(|r| Placement {
                    record: *r,
                    mode: display_mode(*r, cell),
                })
                .collect(),
        })
        .collect();

    tracing::debug!(
        records = records.len(),
        placements = placed.iter().map(|c| c.placements.len()).sum::<usize>(),
        "placed records on grid"
    );

    placed
}
