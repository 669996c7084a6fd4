//! Marketing events shown on the monthly actions calendar.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Area, Label, Scheduled, Status, new_id};
use crate::tenant::Tenant;

/// Kind of marketing action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EventCategory {
    #[default]
    #[serde(rename = "Ação")]
    Action,
    #[serde(rename = "Evento")]
    Event,
    #[serde(rename = "Campanha")]
    Campaign,
    #[serde(rename = "Lançamento")]
    Launch,
    #[serde(rename = "Live")]
    Live,
}

impl Label for EventCategory {
    const ALL: &'static [Self] = &[
        EventCategory::Action,
        EventCategory::Event,
        EventCategory::Campaign,
        EventCategory::Launch,
        EventCategory::Live,
    ];
    const KIND: &'static str = "event type";

    fn label(&self) -> &'static str {
        match self {
            EventCategory::Action => "Ação",
            EventCategory::Event => "Evento",
            EventCategory::Campaign => "Campanha",
            EventCategory::Launch => "Lançamento",
            EventCategory::Live => "Live",
        }
    }
}

/// A dated marketing action (event, launch, live stream...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketingEvent {
    pub id: String,
    pub tenant: Tenant,
    pub title: String,
    #[serde(rename = "type")]
    pub category: EventCategory,
    pub area: Area,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: Status,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub responsible: String,
}

impl MarketingEvent {
    /// Create a planned event with a fresh id.
    /// Without an explicit end the event lasts a single day.
    pub fn new(
        tenant: Tenant,
        title: impl Into<String>,
        category: EventCategory,
        area: Area,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> Self {
        MarketingEvent {
            id: new_id(),
            tenant,
            title: title.into(),
            category,
            area,
            start_date,
            end_date: end_date.unwrap_or(start_date),
            status: Status::default(),
            description: String::new(),
            responsible: String::new(),
        }
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_responsible(mut self, responsible: impl Into<String>) -> Self {
        self.responsible = responsible.into();
        self
    }
}

impl Scheduled for MarketingEvent {
    type Category = EventCategory;
    const KIND: &'static str = "events";

    fn id(&self) -> &str {
        &self.id
    }

    fn tenant(&self) -> Tenant {
        self.tenant
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    fn category(&self) -> EventCategory {
        self.category
    }

    fn area(&self) -> Area {
        self.area
    }

    fn status(&self) -> Status {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_date_defaults_to_start() {
        let start = NaiveDate::from_ymd_opt(2024, 5, 4).unwrap();
        let event = MarketingEvent::new(
            Tenant::Carros,
            "Live de lançamento",
            EventCategory::Live,
            Area::Sales,
            start,
            None,
        );

        assert_eq!(event.end_date, start);
        assert_eq!(event.status, Status::Planned);
        assert!(!event.id.is_empty());
    }

    #[test]
    fn serializes_with_portuguese_labels() {
        let start = NaiveDate::from_ymd_opt(2024, 5, 4).unwrap();
        let event = MarketingEvent::new(
            Tenant::Motos,
            "Lançamento CB 500",
            EventCategory::Launch,
            Area::AfterSales,
            start,
            None,
        );

        let toml = toml::to_string(&event).unwrap();
        assert!(toml.contains("type = \"Lançamento\""), "got:\n{toml}");
        assert!(toml.contains("area = \"Pós-venda\""), "got:\n{toml}");
        assert!(toml.contains("tenant = \"MOTOS\""), "got:\n{toml}");
        assert!(toml.contains("start_date = \"2024-05-04\""), "got:\n{toml}");
    }
}
