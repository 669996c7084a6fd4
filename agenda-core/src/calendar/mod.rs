//! Month calendar: grid construction, record placement and navigation.

mod grid;
mod navigator;
mod placement;

pub use grid::{
    DAYS_PER_WEEK, DayCell, GRID_CELLS, MonthGrid, build_grid, days_in_month, first_of_month,
};
pub use navigator::MonthNavigator;
pub use placement::{
    CONTINUATION_MARKER, DisplayMode, PlacedCell, Placement, display_mode, place_records,
};
