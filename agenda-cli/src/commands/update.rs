use agenda_core::Tenant;
use agenda_core::agenda::Agenda;
use agenda_core::record::{
    Area, Campaign, CampaignCategory, EventCategory, MarketingEvent, Status,
};
use agenda_core::store::RecordStore;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::args::{RecordArgs, RecordKind};

pub fn run(
    agenda: &Agenda,
    tenant: Tenant,
    kind: RecordKind,
    id: &str,
    fields: RecordArgs,
) -> Result<()> {
    let title = match kind {
        RecordKind::Event => {
            let mut store = agenda.events();
            let mut event = store.get(tenant, id).context("Cannot update event")?;
            apply_to_event(&mut event, &fields)?;
            let title = event.title.clone();
            store.update(event)?;
            title
        }
        RecordKind::Campaign => {
            let mut store = agenda.campaigns();
            let mut campaign = store.get(tenant, id).context("Cannot update campaign")?;
            apply_to_campaign(&mut campaign, &fields)?;
            let title = campaign.title.clone();
            store.update(campaign)?;
            title
        }
    };

    println!("{}", format!("  Updated: {}", title).yellow());
    Ok(())
}

fn apply_to_event(event: &mut MarketingEvent, fields: &RecordArgs) -> Result<()> {
    if let Some(title) = &fields.title {
        event.title = title.clone();
    }
    if let Some(start) = fields.start_date()? {
        event.start_date = start;
    }
    if let Some(end) = fields.end_date()? {
        event.end_date = end;
    }
    if let Some(category) = RecordArgs::parsed::<EventCategory>(fields.category.as_deref())? {
        event.category = category;
    }
    if let Some(area) = RecordArgs::parsed::<Area>(fields.area.as_deref())? {
        event.area = area;
    }
    if let Some(status) = RecordArgs::parsed::<Status>(fields.status.as_deref())? {
        event.status = status;
    }
    if let Some(responsible) = &fields.responsible {
        event.responsible = responsible.clone();
    }
    if let Some(description) = &fields.description {
        event.description = description.clone();
    }
    Ok(())
}

fn apply_to_campaign(campaign: &mut Campaign, fields: &RecordArgs) -> Result<()> {
    if let Some(title) = &fields.title {
        campaign.title = title.clone();
    }
    if let Some(start) = fields.start_date()? {
        campaign.start_date = start;
    }
    if let Some(end) = fields.end_date()? {
        campaign.end_date = end;
    }
    if let Some(category) = RecordArgs::parsed::<CampaignCategory>(fields.category.as_deref())? {
        campaign.category = category;
    }
    if let Some(area) = RecordArgs::parsed::<Area>(fields.area.as_deref())? {
        campaign.area = area;
    }
    if let Some(status) = RecordArgs::parsed::<Status>(fields.status.as_deref())? {
        campaign.status = status;
    }
    if let Some(responsible) = &fields.responsible {
        campaign.responsible = responsible.clone();
    }
    if let Some(audience) = &fields.audience {
        campaign.target_audience = audience.clone();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn only_given_fields_change() {
        let mut event = MarketingEvent::new(
            Tenant::Motos,
            "Feirão",
            EventCategory::Event,
            Area::Sales,
            date(2024, 3, 10),
            Some(date(2024, 3, 12)),
        )
        .with_description("Pátio");

        let fields = RecordArgs {
            end: Some("2024-03-15".to_string()),
            status: Some("em andamento".to_string()),
            ..RecordArgs::default()
        };
        apply_to_event(&mut event, &fields).unwrap();

        assert_eq!(event.title, "Feirão");
        assert_eq!(event.start_date, date(2024, 3, 10));
        assert_eq!(event.end_date, date(2024, 3, 15));
        assert_eq!(event.status, Status::InProgress);
        assert_eq!(event.description, "Pátio");
    }

    #[test]
    fn bad_labels_are_reported() {
        let mut campaign = Campaign::new(
            Tenant::Carros,
            "Recall",
            CampaignCategory::Informative,
            Area::AfterSales,
            date(2024, 2, 5),
            None,
        );
        let fields = RecordArgs {
            category: Some("Spam".to_string()),
            ..RecordArgs::default()
        };
        assert!(apply_to_campaign(&mut campaign, &fields).is_err());
    }
}
