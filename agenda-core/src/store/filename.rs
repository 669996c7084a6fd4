//! File naming for stored records.

use std::path::Path;

use crate::error::{AgendaError, AgendaResult};
use crate::record::{DATE_FORMAT, Scheduled};

/// Longest title slug kept in a filename
const MAX_SLUG_LEN: usize = 50;

/// Base filename for a record (without collision suffix), e.g.
/// `2024-03-10__feirao-de-motos.toml`
pub fn base_filename<R: Scheduled>(record: &R) -> String {
    let mut slug = slug::slugify(record.title());
    if slug.is_empty() {
        slug = "untitled".to_string();
    }
    let slug: String = slug.chars().take(MAX_SLUG_LEN).collect();
    let slug = slug.trim_end_matches('-');

    format!("{}__{}.toml", record.start_date().format(DATE_FORMAT), slug)
}

/// Pick a filename in `dir`, adding -2, -3, etc. when another record already
/// uses the base name. A file already holding `own_id` is reused.
pub fn unique_filename<F>(
    base_filename: &str,
    dir: &Path,
    own_id: &str,
    id_at: F,
) -> AgendaResult<String>
where
    F: Fn(&Path) -> Option<String>,
{
    let base = base_filename.trim_end_matches(".toml");

    let candidates = std::iter::once(base_filename.to_string())
        .chain((2..=100).map(|n| format!("{}-{}.toml", base, n)));

    for candidate in candidates {
        let path = dir.join(&candidate);
        if !path.exists() {
            return Ok(candidate);
        }
        if id_at(&path).as_deref() == Some(own_id) {
            return Ok(candidate);
        }
    }

    Err(AgendaError::Config(format!(
        "Too many filename collisions for {}",
        base_filename
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Area, EventCategory, MarketingEvent};
    use crate::tenant::Tenant;
    use chrono::NaiveDate;

    fn event(title: &str) -> MarketingEvent {
        MarketingEvent::new(
            Tenant::Motos,
            title,
            EventCategory::Event,
            Area::Sales,
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            None,
        )
    }

    #[test]
    fn base_filename_uses_date_and_slug() {
        assert_eq!(
            base_filename(&event("Feirão de Motos!")),
            "2024-03-10__feirao-de-motos.toml"
        );
    }

    #[test]
    fn base_filename_truncates_long_titles() {
        let name = base_filename(&event(&"a".repeat(100)));
        assert_eq!(name, format!("2024-03-10__{}.toml", "a".repeat(50)));
    }

    #[test]
    fn base_filename_for_symbol_only_title() {
        assert_eq!(base_filename(&event("!!!")), "2024-03-10__untitled.toml");
    }

    #[test]
    fn unique_filename_adds_suffixes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.toml"), "").unwrap();
        std::fs::write(dir.path().join("a-2.toml"), "").unwrap();

        let name = unique_filename("a.toml", dir.path(), "mine", |_| None).unwrap();
        assert_eq!(name, "a-3.toml");
    }

    #[test]
    fn unique_filename_reuses_own_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.toml"), "").unwrap();

        let name =
            unique_filename("a.toml", dir.path(), "mine", |_| Some("mine".to_string())).unwrap();
        assert_eq!(name, "a.toml");
    }
}
