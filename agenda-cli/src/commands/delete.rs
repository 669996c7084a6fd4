use agenda_core::Tenant;
use agenda_core::agenda::Agenda;
use agenda_core::record::Scheduled;
use agenda_core::store::RecordStore;
use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use crate::args::RecordKind;

pub fn run(agenda: &Agenda, tenant: Tenant, kind: RecordKind, id: &str, yes: bool) -> Result<()> {
    match kind {
        RecordKind::Event => delete_from(&mut agenda.events(), tenant, id, "event", yes),
        RecordKind::Campaign => delete_from(&mut agenda.campaigns(), tenant, id, "campaign", yes),
    }
}

fn delete_from<R, S>(store: &mut S, tenant: Tenant, id: &str, noun: &str, yes: bool) -> Result<()>
where
    R: Scheduled,
    S: RecordStore<R>,
{
    let record = store.get(tenant, id)?;

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("  Delete {} '{}'?", noun, record.title()))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "  Nothing deleted".dimmed());
            return Ok(());
        }
    }

    store.delete(tenant, id)?;
    println!("{}", format!("  Deleted: {}", record.title()).red());
    Ok(())
}
