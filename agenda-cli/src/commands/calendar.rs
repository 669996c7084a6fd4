use agenda_core::Tenant;
use agenda_core::agenda::Agenda;
use agenda_core::calendar::MonthNavigator;
use agenda_core::filter::FilterSelection;
use agenda_core::grouping::MonthKey;
use agenda_core::record::EventCategory;
use agenda_core::store::RecordStore;
use agenda_core::view::MonthView;
use anyhow::{Context, Result};
use chrono::Local;

use crate::render::MonthViewRender;

pub fn run(
    agenda: &Agenda,
    tenant: Tenant,
    month: Option<MonthKey>,
    offset: i32,
    filters: FilterSelection<EventCategory>,
    json: bool,
) -> Result<()> {
    let today = Local::now().date_naive();

    let reference = match month {
        Some(month) => month
            .first_day()
            .with_context(|| format!("Month {} is out of range", month))?,
        None => today,
    };

    let mut navigator = MonthNavigator::new(reference);
    navigator.step_months(offset);

    let records = agenda
        .events()
        .list(tenant)
        .context("Failed to load events")?;
    let view = MonthView::build(tenant, &navigator, &records, &filters, agenda.locale());

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", view.render(agenda.locale(), today));
    }

    Ok(())
}
