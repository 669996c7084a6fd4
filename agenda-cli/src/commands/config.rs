use agenda_core::agenda::Agenda;
use agenda_core::agenda_config::AgendaConfig;
use anyhow::Result;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(agenda: &Agenda) -> Result<()> {
    let none = || "(not set)".dimmed().to_string();

    println!("{} {}", "config:".dimmed(), AgendaConfig::config_path()?.display());
    println!("{} {}", "data_dir:".dimmed(), agenda.display_path().display());
    println!(
        "{} {}",
        "default_tenant:".dimmed(),
        agenda.default_tenant().map(|t| t.render()).unwrap_or_else(none)
    );
    println!(
        "{} {}",
        "operator:".dimmed(),
        agenda.operator().map(str::to_string).unwrap_or_else(none)
    );
    println!("{} {}", "locale:".dimmed(), agenda.locale());

    Ok(())
}
