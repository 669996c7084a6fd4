//! Error types for the agenda engine and its record stores.

use chrono::NaiveDate;
use thiserror::Error;

use crate::tenant::Tenant;

/// Errors that can occur in agenda operations.
///
/// The calendar and list engines themselves are total; these errors come from
/// the record stores, configuration loading and input parsing.
#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("Record '{0}' already exists")]
    DuplicateRecord(String),

    #[error("Record '{id}' ends on {end}, before its start on {start}")]
    InvalidRange {
        id: String,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("Record '{id}' belongs to {expected} and cannot move to {actual}")]
    TenantMismatch {
        id: String,
        expected: Tenant,
        actual: Tenant,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for agenda operations.
pub type AgendaResult<T> = Result<T, AgendaError>;
