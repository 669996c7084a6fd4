//! TUI rendering for agenda views.
//!
//! Extension traits adding colored terminal output to agenda-core types
//! using owo_colors.

use agenda_core::Tenant;
use agenda_core::calendar::PlacedCell;
use agenda_core::locale::Locale;
use agenda_core::record::{Area, Campaign, MarketingEvent, Scheduled, Status};
use agenda_core::view::{GroupedView, MonthView};
use chrono::NaiveDate;
use owo_colors::OwoColorize;

/// Width of one calendar column, in characters
const CELL_WIDTH: usize = 14;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Tenant {
    fn render(&self) -> String {
        match self {
            Tenant::Motos => self.as_str().red().bold().to_string(),
            Tenant::Carros => self.as_str().blue().bold().to_string(),
        }
    }
}

impl Render for Status {
    fn render(&self) -> String {
        let text = self.to_string();
        match self {
            Status::Planned => text.dimmed().to_string(),
            Status::InProgress => text.green().to_string(),
            Status::Completed => text.blue().to_string(),
            Status::Cancelled => text.red().strikethrough().to_string(),
        }
    }
}

/// Color text by responsible area (sales green, after-sales orange-ish)
fn colorize_area(area: Area, text: &str) -> String {
    match area {
        Area::Sales => text.green().to_string(),
        Area::AfterSales => text.yellow().to_string(),
        Area::Other => text.to_string(),
    }
}

/// Cut `text` to `width` characters, ending in an ellipsis when shortened
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}

fn pad(text: &str) -> String {
    format!("{:<width$}", truncate(text, CELL_WIDTH), width = CELL_WIDTH)
}

/// "10/03" or "10/03 → 24/03"
fn render_range<R: Scheduled>(record: &R) -> String {
    let start = record.start_date().format("%d/%m").to_string();
    if record.end_date() > record.start_date() {
        format!("{} → {}", start, record.end_date().format("%d/%m"))
    } else {
        start
    }
}

/// Rendering for the calendar page
pub trait MonthViewRender {
    fn render(&self, locale: Locale, today: NaiveDate) -> String;
}

impl MonthViewRender for MonthView<'_, MarketingEvent> {
    fn render(&self, locale: Locale, today: NaiveDate) -> String {
        let mut lines = Vec::new();

        let mut heading = format!("{}  {}", self.label.bold(), self.tenant.render());
        if self.has_active_filters {
            heading.push_str(&format!("  {}", "(filtered)".yellow()));
        }
        lines.push(heading);
        lines.push(String::new());

        let headers: Vec<String> = locale
            .weekday_headers()
            .iter()
            .map(|h| pad(h).bold().to_string())
            .collect();
        lines.push(headers.join(" "));
        lines.push("─".repeat(CELL_WIDTH * 7 + 6).dimmed().to_string());

        for week in self.weeks() {
            lines.extend(render_week(week, today));
        }

        lines.push(String::new());
        lines.push(render_month_list(&self.month_records));

        lines.join("\n")
    }
}

/// Day numbers row followed by one row per stacked record
fn render_week(week: &[PlacedCell<'_, MarketingEvent>], today: NaiveDate) -> Vec<String> {
    let mut lines = Vec::new();

    let days: Vec<String> = week
        .iter()
        .map(|placed| {
            let text = pad(&format!("{:>2}", placed.cell.day));
            if placed.cell.date == today {
                text.reversed().to_string()
            } else if placed.cell.in_current_month {
                text.bold().to_string()
            } else {
                text.dimmed().to_string()
            }
        })
        .collect();
    lines.push(days.join(" "));

    let depth = week.iter().map(|p| p.placements.len()).max().unwrap_or(0);
    for row in 0..depth {
        let slots: Vec<String> = week
            .iter()
            .map(|placed| match placed.placements.get(row) {
                Some(placement) => {
                    let text = pad(placement.text());
                    let colored = colorize_area(placement.record.area, &text);
                    if placed.cell.in_current_month {
                        colored
                    } else {
                        colored.dimmed().to_string()
                    }
                }
                None => " ".repeat(CELL_WIDTH),
            })
            .collect();
        lines.push(slots.join(" "));
    }

    lines.push(String::new());
    lines
}

/// The month's events, oldest first
fn render_month_list(records: &[&MarketingEvent]) -> String {
    if records.is_empty() {
        return "   No events this month".dimmed().to_string();
    }

    records
        .iter()
        .map(|event| {
            let range = format!("{:<13}", render_range(*event));
            let tags = format!("[{} · {}]", event.category, event.area);
            format!(
                "   {} {} {} {}",
                range.dimmed(),
                colorize_area(event.area, &event.title),
                tags.dimmed(),
                event.status.render()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl Render for GroupedView<'_, Campaign> {
    fn render(&self) -> String {
        if self.is_empty() {
            let message = if self.has_active_filters {
                "No campaigns match the filters"
            } else {
                "No campaigns yet"
            };
            return format!("   {}", message.dimmed());
        }

        let mut lines = Vec::new();
        for group in &self.groups {
            lines.push(format!("{} {}", group.label.bold(), "─".repeat(24).dimmed()));
            for campaign in &group.items {
                lines.extend(render_campaign(campaign));
            }
            lines.push(String::new());
        }

        lines.join("\n")
    }
}

fn render_campaign(campaign: &Campaign) -> Vec<String> {
    let mut lines = vec![format!(
        "   {} {} {}",
        colorize_area(campaign.area, &campaign.title).bold(),
        format!("[{} · {}]", campaign.category, campaign.area).dimmed(),
        campaign.status.render()
    )];

    let mut details = vec![render_range(campaign)];
    if !campaign.target_audience.is_empty() {
        details.push(format!("audience: {}", campaign.target_audience));
    }
    if !campaign.responsible.is_empty() {
        details.push(format!("by {}", campaign.responsible));
    }
    lines.push(format!("     {}", details.join(" · ").dimmed()));
    lines.push(format!("     {}", campaign.id.dimmed()));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("Live", 14), "Live");
    }

    #[test]
    fn truncate_marks_cut_text() {
        assert_eq!(truncate("Lançamento nacional", 10), "Lançament…");
        assert_eq!(truncate("Lançamento nacional", 10).chars().count(), 10);
    }

    #[test]
    fn pad_is_fixed_width_with_accents() {
        assert_eq!(pad("Ação").chars().count(), CELL_WIDTH);
        assert_eq!(pad("Um título bem comprido demais").chars().count(), CELL_WIDTH);
    }
}
