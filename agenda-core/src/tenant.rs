//! Business units ("cores") that partition every record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AgendaError;

/// One of the two independent business units.
///
/// Assigned when a record is created and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tenant {
    #[serde(rename = "MOTOS")]
    Motos,
    #[serde(rename = "CARROS")]
    Carros,
}

impl Tenant {
    pub const ALL: [Tenant; 2] = [Tenant::Motos, Tenant::Carros];

    /// Wire tag, e.g. `MOTOS`
    pub fn as_str(&self) -> &'static str {
        match self {
            Tenant::Motos => "MOTOS",
            Tenant::Carros => "CARROS",
        }
    }

    /// Lowercase form used for directory names
    pub fn slug(&self) -> &'static str {
        match self {
            Tenant::Motos => "motos",
            Tenant::Carros => "carros",
        }
    }
}

impl fmt::Display for Tenant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Tenant {
    type Err = AgendaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Tenant::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                AgendaError::Parse(format!(
                    "Unknown business unit '{}'. Expected MOTOS or CARROS",
                    s
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tags_case_insensitively() {
        assert_eq!("MOTOS".parse::<Tenant>().unwrap(), Tenant::Motos);
        assert_eq!("carros".parse::<Tenant>().unwrap(), Tenant::Carros);
        assert_eq!(" Motos ".parse::<Tenant>().unwrap(), Tenant::Motos);
    }

    #[test]
    fn rejects_unknown_tag() {
        let err = "TRUCKS".parse::<Tenant>().unwrap_err();
        assert!(matches!(err, AgendaError::Parse(_)), "got {err:?}");
    }
}
