//! MyHonda relationship campaigns, listed month by month.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Area, Label, Scheduled, Status, new_id};
use crate::tenant::Tenant;

/// Kind of campaign message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CampaignCategory {
    #[serde(rename = "Informativo")]
    Informative,
    #[default]
    #[serde(rename = "Promocional")]
    Promotional,
    #[serde(rename = "Relacionamento")]
    Relationship,
}

impl Label for CampaignCategory {
    const ALL: &'static [Self] = &[
        CampaignCategory::Informative,
        CampaignCategory::Promotional,
        CampaignCategory::Relationship,
    ];
    const KIND: &'static str = "campaign type";

    fn label(&self) -> &'static str {
        match self {
            CampaignCategory::Informative => "Informativo",
            CampaignCategory::Promotional => "Promocional",
            CampaignCategory::Relationship => "Relacionamento",
        }
    }
}

/// An app campaign aimed at a customer audience
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub tenant: Tenant,
    pub title: String,
    #[serde(rename = "type")]
    pub category: CampaignCategory,
    pub area: Area,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: Status,
    #[serde(default)]
    pub target_audience: String,
    #[serde(default)]
    pub responsible: String,
}

impl Campaign {
    /// Create a planned campaign with a fresh id.
    /// Without an explicit end the campaign lasts a single day.
    pub fn new(
        tenant: Tenant,
        title: impl Into<String>,
        category: CampaignCategory,
        area: Area,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> Self {
        Campaign {
            id: new_id(),
            tenant,
            title: title.into(),
            category,
            area,
            start_date,
            end_date: end_date.unwrap_or(start_date),
            status: Status::default(),
            target_audience: String::new(),
            responsible: String::new(),
        }
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_target_audience(mut self, audience: impl Into<String>) -> Self {
        self.target_audience = audience.into();
        self
    }

    pub fn with_responsible(mut self, responsible: impl Into<String>) -> Self {
        self.responsible = responsible.into();
        self
    }
}

impl Scheduled for Campaign {
    type Category = CampaignCategory;
    const KIND: &'static str = "campaigns";

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

    fn category(&self) -> CampaignCategory {
        self.category
    }

    fn area(&self) -> Area {
        self.area
    }

    fn status(&self) -> Status {
        self.status
    }
}
