//! Argument groups shared by several commands.

use agenda_core::AgendaResult;
use agenda_core::filter::{Filter, FilterSelection};
use agenda_core::record::{Label, parse_date};
use chrono::NaiveDate;
use clap::{Args, ValueEnum};

/// Which record collection a command works on
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordKind {
    /// Calendar event (ação, evento, lançamento, live...)
    Event,
    /// MyHonda campaign
    Campaign,
}

#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Only this type, e.g. "Ação" or "lancamento" ("Todos" for any)
    #[arg(long, visible_alias = "type")]
    pub category: Option<String>,

    /// Only this area: Vendas, Pós-venda or Outros ("Todas" for any)
    #[arg(long)]
    pub area: Option<String>,

    /// Only this status: Planejado, "Em Andamento", Concluído or Cancelado
    #[arg(long)]
    pub status: Option<String>,
}

impl FilterArgs {
    pub fn selection<C: Label>(&self) -> AgendaResult<FilterSelection<C>> {
        Ok(FilterSelection {
            category: Filter::parse_opt(self.category.as_deref())?,
            area: Filter::parse_opt(self.area.as_deref())?,
            status: Filter::parse_opt(self.status.as_deref())?,
        })
    }
}

#[derive(Args, Debug, Default)]
pub struct RecordArgs {
    #[arg(long)]
    pub title: Option<String>,

    /// First day (YYYY-MM-DD)
    #[arg(short, long)]
    pub start: Option<String>,

    /// Last day (YYYY-MM-DD); a new record without it lasts one day
    #[arg(short, long)]
    pub end: Option<String>,

    /// Record type, e.g. "Evento", "Live", "Promocional"
    #[arg(long, visible_alias = "type")]
    pub category: Option<String>,

    /// Vendas, Pós-venda or Outros
    #[arg(long)]
    pub area: Option<String>,

    /// Planejado, "Em Andamento", Concluído or Cancelado
    #[arg(long)]
    pub status: Option<String>,

    /// Person in charge; defaults to the configured operator
    #[arg(long)]
    pub responsible: Option<String>,

    /// Event description
    #[arg(long)]
    pub description: Option<String>,

    /// Campaign target audience
    #[arg(long)]
    pub audience: Option<String>,
}

impl RecordArgs {
    pub fn start_date(&self) -> AgendaResult<Option<NaiveDate>> {
        self.start.as_deref().map(parse_date).transpose()
    }

    pub fn end_date(&self) -> AgendaResult<Option<NaiveDate>> {
        self.end.as_deref().map(parse_date).transpose()
    }

    pub fn parsed<T: Label>(value: Option<&str>) -> AgendaResult<Option<T>> {
        value.map(T::parse_label).transpose()
    }
}
