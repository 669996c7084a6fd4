//! Scheduled records shared by the events calendar and the campaign timeline.
//!
//! Both record variants carry a tenant, an inclusive date range and three
//! closed classifications (category, area, status). Everything else on a
//! record is opaque text the engine only passes through.

mod campaign;
mod event;

pub use campaign::{Campaign, CampaignCategory};
pub use event::{EventCategory, MarketingEvent};

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AgendaError, AgendaResult};
use crate::tenant::Tenant;

/// Format used for every calendar-date key (`YYYY-MM-DD`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A closed enumeration with human-facing labels.
pub trait Label: Copy + PartialEq + fmt::Debug + 'static {
    /// Every value, in display order
    const ALL: &'static [Self];
    /// What this enumeration classifies (used in error messages)
    const KIND: &'static str;

    fn label(&self) -> &'static str;

    /// Parse a label, ignoring case and accents ("pos-venda" matches "Pós-venda").
    fn parse_label(input: &str) -> AgendaResult<Self> {
        let wanted = slug::slugify(input);
        Self::ALL
            .iter()
            .copied()
            .find(|value| slug::slugify(value.label()) == wanted)
            .ok_or_else(|| {
                let options: Vec<_> = Self::ALL.iter().map(|v| v.label()).collect();
                AgendaError::Parse(format!(
                    "Unknown {} '{}'. Expected one of: {}",
                    Self::KIND,
                    input,
                    options.join(", ")
                ))
            })
    }
}

/// Business area responsible for a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Area {
    #[serde(rename = "Vendas")]
    Sales,
    #[serde(rename = "Pós-venda")]
    AfterSales,
    #[serde(rename = "Outros")]
    Other,
}

impl Label for Area {
    const ALL: &'static [Self] = &[Area::Sales, Area::AfterSales, Area::Other];
    const KIND: &'static str = "area";

    fn label(&self) -> &'static str {
        match self {
            Area::Sales => "Vendas",
            Area::AfterSales => "Pós-venda",
            Area::Other => "Outros",
        }
    }
}

/// Workflow status of a record.
///
/// Any status may be replaced by any other; transitions are not validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    #[serde(rename = "Planejado")]
    Planned,
    #[serde(rename = "Em Andamento")]
    InProgress,
    #[serde(rename = "Concluído")]
    Completed,
    #[serde(rename = "Cancelado")]
    Cancelled,
}

impl Label for Status {
    const ALL: &'static [Self] = &[
        Status::Planned,
        Status::InProgress,
        Status::Completed,
        Status::Cancelled,
    ];
    const KIND: &'static str = "status";

    fn label(&self) -> &'static str {
        match self {
            Status::Planned => "Planejado",
            Status::InProgress => "Em Andamento",
            Status::Completed => "Concluído",
            Status::Cancelled => "Cancelado",
        }
    }
}

macro_rules! label_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }

            impl std::str::FromStr for $ty {
                type Err = AgendaError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <$ty as Label>::parse_label(s)
                }
            }
        )*
    };
}

label_display!(Area, Status, EventCategory, CampaignCategory);

/// The shape every date-ranged record exposes to the engine.
pub trait Scheduled {
    type Category: Label;

    /// Directory/collection name for this record variant
    const KIND: &'static str;

    fn id(&self) -> &str;
    fn tenant(&self) -> Tenant;
    fn title(&self) -> &str;
    fn start_date(&self) -> NaiveDate;
    fn end_date(&self) -> NaiveDate;
    fn category(&self) -> Self::Category;
    fn area(&self) -> Area;
    fn status(&self) -> Status;

    fn has_valid_range(&self) -> bool {
        self.start_date() <= self.end_date()
    }

    /// Last day the record occupies on a calendar.
    ///
    /// A record whose end precedes its start occupies only its start date.
    fn occupied_end(&self) -> NaiveDate {
        if self.has_valid_range() {
            self.end_date()
        } else {
            self.start_date()
        }
    }

    /// Whether `date` falls inside the record's occupied range (inclusive).
    fn covers(&self, date: NaiveDate) -> bool {
        self.start_date() <= date && date <= self.occupied_end()
    }
}

/// Reject records whose end precedes their start.
pub fn ensure_valid_range<R: Scheduled>(record: &R) -> AgendaResult<()> {
    if record.has_valid_range() {
        Ok(())
    } else {
        Err(AgendaError::InvalidRange {
            id: record.id().to_string(),
            start: record.start_date(),
            end: record.end_date(),
        })
    }
}

/// Keep only the records of one tenant, preserving order.
pub fn for_tenant<'a, R, I>(records: I, tenant: Tenant) -> Vec<&'a R>
where
    R: Scheduled + 'a,
    I: IntoIterator<Item = &'a R>,
{
    records.into_iter().filter(|r| r.tenant() == tenant).collect()
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> AgendaResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| AgendaError::Parse(format!("Invalid date '{}'. Expected YYYY-MM-DD", s)))
}

/// New record identifier
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn labels_parse_without_accents_or_case() {
        assert_eq!("pos-venda".parse::<Area>().unwrap(), Area::AfterSales);
        assert_eq!("VENDAS".parse::<Area>().unwrap(), Area::Sales);
        assert_eq!("em andamento".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("Concluido".parse::<Status>().unwrap(), Status::Completed);
    }

    #[test]
    fn unknown_label_lists_options() {
        let err = "Marketing".parse::<Area>().unwrap_err().to_string();
        assert!(err.contains("Vendas, Pós-venda, Outros"), "got: {err}");
    }

    #[test]
    fn inverted_range_occupies_start_only() {
        let mut event = MarketingEvent::new(
            Tenant::Motos,
            "Feirão",
            EventCategory::Event,
            Area::Sales,
            date(2024, 3, 10),
            None,
        );
        event.end_date = date(2024, 3, 5);

        assert!(!event.has_valid_range());
        assert_eq!(event.occupied_end(), date(2024, 3, 10));
        assert!(event.covers(date(2024, 3, 10)));
        assert!(!event.covers(date(2024, 3, 7)));
        assert!(ensure_valid_range(&event).is_err());
    }

    #[test]
    fn tenant_scoping_never_mixes_units() {
        let motos = MarketingEvent::new(
            Tenant::Motos,
            "Test ride",
            EventCategory::Action,
            Area::Sales,
            date(2024, 3, 1),
            None,
        );
        let carros = MarketingEvent::new(
            Tenant::Carros,
            "Salão",
            EventCategory::Event,
            Area::Sales,
            date(2024, 3, 1),
            None,
        );
        let records = vec![motos.clone(), carros];

        let scoped = for_tenant(&records, Tenant::Motos);
        assert_eq!(scoped, vec![&motos]);
    }

    #[test]
    fn parse_date_reports_bad_input() {
        assert_eq!(parse_date("2024-02-29").unwrap(), date(2024, 2, 29));
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("29/02/2024").is_err());
    }
}
