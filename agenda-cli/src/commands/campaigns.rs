use agenda_core::Tenant;
use agenda_core::agenda::Agenda;
use agenda_core::filter::FilterSelection;
use agenda_core::record::CampaignCategory;
use agenda_core::store::RecordStore;
use agenda_core::view::GroupedView;
use anyhow::{Context, Result};

use crate::render::Render;

pub fn run(
    agenda: &Agenda,
    tenant: Tenant,
    filters: FilterSelection<CampaignCategory>,
    json: bool,
) -> Result<()> {
    let records = agenda
        .campaigns()
        .list(tenant)
        .context("Failed to load campaigns")?;
    let view = GroupedView::build(tenant, &records, &filters, agenda.locale());

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", view.render());
    }

    Ok(())
}
