//! Page-level compositions of the engine.
//!
//! The events calendar threads the viewed month through grid building and
//! record placement, and separately lists the month's records. The campaign
//! timeline filters and groups by month. Both are rebuilt from scratch on every
//! call.

use serde::Serialize;

use crate::calendar::{DAYS_PER_WEEK, MonthNavigator, PlacedCell, build_grid, place_records};
use crate::filter::FilterSelection;
use crate::grouping::{ChronoGroup, MonthKey, group_by_month, month_slice};
use crate::locale::Locale;
use crate::record::{Scheduled, for_tenant};
use crate::tenant::Tenant;

/// The calendar page for one tenant and month.
#[derive(Debug, Clone, Serialize)]
pub struct MonthView<'a, R> {
    pub tenant: Tenant,
    pub month: MonthKey,
    pub label: String,
    pub has_active_filters: bool,
    /// 42 cells, Sunday first
    pub cells: Vec<PlacedCell<'a, R>>,
    /// Filtered records starting this month, by start date
    pub month_records: Vec<&'a R>,
}

impl<'a, R: Scheduled> MonthView<'a, R> {
    pub fn build(
        tenant: Tenant,
        navigator: &MonthNavigator,
        records: &'a [R],
        filters: &FilterSelection<R::Category>,
        locale: Locale,
    ) -> Self {
        let scoped = for_tenant(records, tenant);
        let filtered = filters.apply(scoped);

        let grid = build_grid(navigator.reference());
        let cells = place_records(&grid.cells, filtered.iter().copied());
        let month_records = month_slice(filtered.iter().copied(), grid.month);

        MonthView {
            tenant,
            month: grid.month,
            label: grid.month.label(locale),
            has_active_filters: filters.has_active_filters(),
            cells,
            month_records,
        }
    }

    /// Rows of seven placed cells
    pub fn weeks(&self) -> impl Iterator<Item = &[PlacedCell<'a, R>]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }
}

/// The month-by-month timeline for one tenant.
#[derive(Debug, Clone, Serialize)]
pub struct GroupedView<'a, R> {
    pub tenant: Tenant,
    pub has_active_filters: bool,
    pub groups: Vec<ChronoGroup<'a, R>>,
}

impl<'a, R: Scheduled> GroupedView<'a, R> {
    pub fn build(
        tenant: Tenant,
        records: &'a [R],
        filters: &FilterSelection<R::Category>,
        locale: Locale,
    ) -> Self {
        let scoped = for_tenant(records, tenant);
        let filtered = filters.apply(scoped);

        GroupedView {
            tenant,
            has_active_filters: filters.has_active_filters(),
            groups: group_by_month(filtered, locale),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
