//! Calendar and activity-scheduling engine for the marketing agenda.
//!
//! Records (marketing events and app campaigns) belong to one of two business
//! units and span an inclusive range of calendar dates. This crate turns a
//! tenant's records into:
//! - a 42-cell month grid with each record placed on the days it covers (`calendar`)
//! - filtered subsets (`filter`) and month-by-month groups (`grouping`)
//! - whole page views combining both (`view`)
//!
//! The engine is pure; persistence lives behind the `store::RecordStore` trait.

pub mod agenda;
pub mod agenda_config;
pub mod calendar;
pub mod error;
pub mod filter;
pub mod grouping;
pub mod locale;
pub mod record;
pub mod store;
pub mod tenant;
pub mod view;

pub use error::{AgendaError, AgendaResult};
pub use tenant::Tenant;
