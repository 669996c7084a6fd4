//! In-memory record store.

use std::collections::HashMap;

use super::{RecordStore, missing_or_moved, not_found};
use crate::error::{AgendaError, AgendaResult};
use crate::record::{Scheduled, ensure_valid_range};
use crate::tenant::Tenant;

/// Records held in memory, in insertion order per tenant.
#[derive(Debug, Clone)]
pub struct MemoryStore<R> {
    records: HashMap<Tenant, Vec<R>>,
}

impl<R> Default for MemoryStore<R> {
    fn default() -> Self {
        MemoryStore {
            records: HashMap::new(),
        }
    }
}

impl<R: Scheduled + Clone> MemoryStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, tenant: Tenant, id: &str) -> Option<usize> {
        self.records
            .get(&tenant)
            .and_then(|records| records.iter().position(|r| r.id() == id))
    }
}

impl<R: Scheduled + Clone> RecordStore<R> for MemoryStore<R> {
    fn list(&self, tenant: Tenant) -> AgendaResult<Vec<R>> {
        Ok(self.records.get(&tenant).cloned().unwrap_or_default())
    }

    fn create(&mut self, record: R) -> AgendaResult<()> {
        ensure_valid_range(&record)?;
        let tenant = record.tenant();
        if self.position(tenant, record.id()).is_some() {
            return Err(AgendaError::DuplicateRecord(record.id().to_string()));
        }
        self.records.entry(tenant).or_default().push(record);
        Ok(())
    }

    fn update(&mut self, record: R) -> AgendaResult<()> {
        ensure_valid_range(&record)?;
        let tenant = record.tenant();
        let Some(index) = self.position(tenant, record.id()) else {
            return Err(missing_or_moved(record.id(), tenant, |other| {
                Ok(self.position(other, record.id()).is_some())
            })?);
        };
        if let Some(records) = self.records.get_mut(&tenant) {
            records[index] = record;
        }
        Ok(())
    }

    fn delete(&mut self, tenant: Tenant, id: &str) -> AgendaResult<()> {
        let index = self
            .position(tenant, id)
            .ok_or_else(|| not_found(tenant, id))?;
        if let Some(records) = self.records.get_mut(&tenant) {
            records.remove(index);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Area, EventCategory, MarketingEvent, Status};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(tenant: Tenant, title: &str) -> MarketingEvent {
        MarketingEvent::new(
            tenant,
            title,
            EventCategory::Action,
            Area::Sales,
            date(2024, 3, 1),
            Some(date(2024, 3, 3)),
        )
    }

    #[test]
    fn create_list_update_delete() {
        let mut store = MemoryStore::new();
        let first = event(Tenant::Motos, "Primeira");
        let second = event(Tenant::Motos, "Segunda");
        store.create(first.clone()).unwrap();
        store.create(second.clone()).unwrap();

        let listed = store.list(Tenant::Motos).unwrap();
        assert_eq!(listed, vec![first.clone(), second.clone()]);

        let edited = first.clone().with_status(Status::Completed);
        store.update(edited.clone()).unwrap();
        assert_eq!(store.get(Tenant::Motos, &first.id).unwrap(), edited);

        store.delete(Tenant::Motos, &first.id).unwrap();
        assert_eq!(store.list(Tenant::Motos).unwrap(), vec![second]);
    }

    #[test]
    fn tenants_are_isolated() {
        let mut store = MemoryStore::new();
        let motos = event(Tenant::Motos, "Motos");
        store.create(motos.clone()).unwrap();

        assert!(store.list(Tenant::Carros).unwrap().is_empty());
        assert!(matches!(
            store.delete(Tenant::Carros, &motos.id),
            Err(AgendaError::RecordNotFound(_))
        ));
    }

    #[test]
    fn rejects_inverted_ranges_and_duplicates() {
        let mut store = MemoryStore::new();
        let mut bad = event(Tenant::Carros, "Invertido");
        bad.end_date = date(2024, 2, 1);
        assert!(matches!(
            store.create(bad),
            Err(AgendaError::InvalidRange { .. })
        ));

        let good = event(Tenant::Carros, "Ok");
        store.create(good.clone()).unwrap();
        assert!(matches!(
            store.create(good.clone()),
            Err(AgendaError::DuplicateRecord(_))
        ));

        let mut broken_update = good;
        broken_update.end_date = date(2024, 1, 1);
        assert!(store.update(broken_update).is_err());
    }

    #[test]
    fn update_cannot_move_record_between_tenants() {
        let mut store = MemoryStore::new();
        let motos = event(Tenant::Motos, "Motos");
        store.create(motos.clone()).unwrap();

        let mut moved = motos.clone();
        moved.tenant = Tenant::Carros;
        assert!(matches!(
            store.update(moved),
            Err(AgendaError::TenantMismatch {
                expected: Tenant::Motos,
                actual: Tenant::Carros,
                ..
            })
        ));
        assert_eq!(store.list(Tenant::Motos).unwrap(), vec![motos]);
    }

    #[test]
    fn update_of_unknown_record_fails() {
        let mut store: MemoryStore<MarketingEvent> = MemoryStore::new();
        let result = store.update(event(Tenant::Motos, "Fantasma"));
        assert!(matches!(result, Err(AgendaError::RecordNotFound(_))));
    }
}
