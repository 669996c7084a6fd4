//! Record stores.
//!
//! The engine only reads snapshots; stores own create/update/delete. Every
//! write is scoped to the record's tenant and rejects records whose end date
//! precedes their start date.

mod filename;
mod files;
mod memory;

pub use files::FileStore;
pub use memory::MemoryStore;

use crate::error::{AgendaError, AgendaResult};
use crate::record::Scheduled;
use crate::tenant::Tenant;

/// Persistence for one record variant.
pub trait RecordStore<R: Scheduled> {
    /// All records of `tenant`, in store order.
    fn list(&self, tenant: Tenant) -> AgendaResult<Vec<R>>;

    /// Add a new record. Fails if its id already exists for the tenant.
    fn create(&mut self, record: R) -> AgendaResult<()>;

    /// Replace the record with the same id and tenant. A record's tenant
    /// never changes.
    fn update(&mut self, record: R) -> AgendaResult<()>;

    /// Remove a record by id.
    fn delete(&mut self, tenant: Tenant, id: &str) -> AgendaResult<()>;

    fn get(&self, tenant: Tenant, id: &str) -> AgendaResult<R> {
        self.list(tenant)?
            .into_iter()
            .find(|r| r.id() == id)
            .ok_or_else(|| not_found(tenant, id))
    }
}

pub(crate) fn not_found(tenant: Tenant, id: &str) -> AgendaError {
    AgendaError::RecordNotFound(format!("{} in {}", id, tenant))
}

/// Error for an update that would move a record to another business unit,
/// or plain not-found when no tenant holds the id.
pub(crate) fn missing_or_moved(
    id: &str,
    requested: Tenant,
    stored_in: impl Fn(Tenant) -> AgendaResult<bool>,
) -> AgendaResult<AgendaError> {
    for tenant in Tenant::ALL.into_iter().filter(|t| *t != requested) {
        if stored_in(tenant)? {
            return Ok(AgendaError::TenantMismatch {
                id: id.to_string(),
                expected: tenant,
                actual: requested,
            });
        }
    }
    Ok(not_found(requested, id))
}
