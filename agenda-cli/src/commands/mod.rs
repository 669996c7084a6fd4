pub mod calendar;
pub mod campaigns;
pub mod config;
pub mod delete;
pub mod new;
pub mod update;
