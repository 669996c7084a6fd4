mod args;
mod commands;
mod render;

use agenda_core::Tenant;
use agenda_core::agenda::Agenda;
use agenda_core::grouping::MonthKey;
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::args::{FilterArgs, RecordArgs, RecordKind};

#[derive(Parser)]
#[command(name = "agenda")]
#[command(about = "Marketing calendar and MyHonda campaigns per business unit")]
struct Cli {
    /// Business unit: MOTOS or CARROS (defaults to the configured tenant)
    #[arg(short, long, global = true)]
    tenant: Option<Tenant>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month grid of marketing events
    Calendar {
        /// Month to show (YYYY-MM); defaults to the current month
        #[arg(short, long)]
        month: Option<MonthKey>,

        /// Go back this many months
        #[arg(long, default_value_t = 0)]
        prev: u32,

        /// Go forward this many months
        #[arg(long, default_value_t = 0)]
        next: u32,

        #[command(flatten)]
        filters: FilterArgs,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
    /// List campaigns grouped by month
    Campaigns {
        #[command(flatten)]
        filters: FilterArgs,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create an event or campaign (prompts for missing fields)
    New {
        kind: RecordKind,

        #[command(flatten)]
        fields: RecordArgs,
    },
    /// Change fields of an existing record
    Update {
        kind: RecordKind,
        id: String,

        #[command(flatten)]
        fields: RecordArgs,
    },
    /// Remove a record
    Delete {
        kind: RecordKind,
        id: String,

        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Show the active configuration
    Config,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let agenda = Agenda::load()?;
    tracing::debug!(data_dir = %agenda.data_path().display(), "loaded agenda");

    match cli.command {
        Commands::Calendar {
            month,
            prev,
            next,
            filters,
            json,
        } => {
            let tenant = resolve_tenant(&agenda, cli.tenant)?;
            let offset = i32::try_from(i64::from(next) - i64::from(prev))?;
            commands::calendar::run(&agenda, tenant, month, offset, filters.selection()?, json)
        }
        Commands::Campaigns { filters, json } => {
            let tenant = resolve_tenant(&agenda, cli.tenant)?;
            commands::campaigns::run(&agenda, tenant, filters.selection()?, json)
        }
        Commands::New { kind, fields } => {
            let tenant = resolve_tenant(&agenda, cli.tenant)?;
            commands::new::run(&agenda, tenant, kind, fields)
        }
        Commands::Update { kind, id, fields } => {
            let tenant = resolve_tenant(&agenda, cli.tenant)?;
            commands::update::run(&agenda, tenant, kind, &id, fields)
        }
        Commands::Delete { kind, id, yes } => {
            let tenant = resolve_tenant(&agenda, cli.tenant)?;
            commands::delete::run(&agenda, tenant, kind, &id, yes)
        }
        Commands::Config => commands::config::run(&agenda),
    }
}

/// Log to stderr, filtered by `AGENDA_LOG` (e.g. `AGENDA_LOG=debug`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("AGENDA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_tenant(agenda: &Agenda, tenant: Option<Tenant>) -> Result<Tenant> {
    match tenant.or_else(|| agenda.default_tenant()) {
        Some(tenant) => {
            tracing::debug!(%tenant, "using business unit");
            Ok(tenant)
        }
        None => {
            let available: Vec<_> = Tenant::ALL.iter().map(|t| t.as_str()).collect();
            anyhow::bail!(
                "No tenant selected.\n\n\
                Pass one with --tenant ({}) or set default_tenant in:\n  {}",
                available.join(" | "),
                agenda_core::agenda_config::AgendaConfig::config_path()?.display()
            );
        }
    }
}
