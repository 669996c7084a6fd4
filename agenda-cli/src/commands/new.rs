use agenda_core::Tenant;
use agenda_core::agenda::Agenda;
use agenda_core::locale::capitalize;
use agenda_core::record::{
    Area, Campaign, CampaignCategory, EventCategory, Label, MarketingEvent, Status, parse_date,
};
use agenda_core::store::RecordStore;
use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;

use crate::args::{RecordArgs, RecordKind};

pub fn run(agenda: &Agenda, tenant: Tenant, kind: RecordKind, fields: RecordArgs) -> Result<()> {
    let interactive = fields.title.is_none() || fields.start.is_none();

    // --- Title ---
    let title = match &fields.title {
        Some(t) => t.clone(),
        None => Input::<String>::new()
            .with_prompt("  Title")
            .interact_text()?,
    };

    // --- Dates ---
    let start = match fields.start_date()? {
        Some(date) => date,
        None => prompt_date("  Starts (YYYY-MM-DD)")?,
    };

    let end = match fields.end_date()? {
        Some(date) => Some(date),
        None if interactive => prompt_optional_date("  Ends (YYYY-MM-DD, skip for one day)")?,
        None => None,
    };

    // --- Classification ---
    let area = choose::<Area>(fields.area.as_deref(), Area::Sales, interactive)?;
    let status = choose::<Status>(fields.status.as_deref(), Status::Planned, interactive)?;
    let responsible = fields
        .responsible
        .clone()
        .or_else(|| agenda.operator().map(str::to_string))
        .unwrap_or_default();

    let created_title = match kind {
        RecordKind::Event => {
            let category = choose::<EventCategory>(
                fields.category.as_deref(),
                EventCategory::Action,
                interactive,
            )?;
            let event = MarketingEvent::new(tenant, title, category, area, start, end)
                .with_status(status)
                .with_description(fields.description.clone().unwrap_or_default())
                .with_responsible(responsible);
            let title = event.title.clone();
            agenda.events().create(event)?;
            title
        }
        RecordKind::Campaign => {
            let category = choose::<CampaignCategory>(
                fields.category.as_deref(),
                CampaignCategory::Promotional,
                interactive,
            )?;
            let campaign = Campaign::new(tenant, title, category, area, start, end)
                .with_status(status)
                .with_target_audience(fields.audience.clone().unwrap_or_default())
                .with_responsible(responsible);
            let title = campaign.title.clone();
            agenda.campaigns().create(campaign)?;
            title
        }
    };

    if interactive {
        println!();
    }
    println!("{}", format!("  Created: {}", created_title).green());

    Ok(())
}

/// Use the given label, ask when interactive, or fall back to `default`.
fn choose<T: Label>(given: Option<&str>, default: T, interactive: bool) -> Result<T> {
    if let Some(value) = given {
        return Ok(T::parse_label(value)?);
    }
    if !interactive {
        return Ok(default);
    }

    let items: Vec<&str> = T::ALL.iter().map(|v| v.label()).collect();
    let default_index = T::ALL.iter().position(|v| *v == default).unwrap_or(0);
    let selection = Select::new()
        .with_prompt(format!("  {}", capitalize(T::KIND)))
        .items(&items)
        .default(default_index)
        .interact()?;
    Ok(T::ALL[selection])
}

/// Prompt until a valid date is entered.
fn prompt_date(prompt: &str) -> Result<NaiveDate> {
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match parse_date(&input) {
            Ok(date) => return Ok(date),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}

/// Prompt for a date that may be skipped with an empty answer.
fn prompt_optional_date(prompt: &str) -> Result<Option<NaiveDate>> {
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .default(String::new())
            .show_default(false)
            .interact_text()?;
        if input.trim().is_empty() {
            return Ok(None);
        }
        match parse_date(&input) {
            Ok(date) => return Ok(Some(date)),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}
