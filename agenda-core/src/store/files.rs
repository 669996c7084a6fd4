//! Record store backed by one TOML file per record.
//!
//! Layout: `<root>/<tenant>/<kind>/<YYYY-MM-DD>__<title-slug>.toml`, e.g.
//! `~/agenda/motos/events/2024-03-10__feirao.toml`.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::filename::{base_filename, unique_filename};
use super::{RecordStore, missing_or_moved, not_found};
use crate::error::{AgendaError, AgendaResult};
use crate::record::{Scheduled, ensure_valid_range};
use crate::tenant::Tenant;

/// A stored record together with the file holding it.
struct StoredRecord<R> {
    path: PathBuf,
    record: R,
}

#[derive(Debug, Clone)]
pub struct FileStore<R> {
    root: PathBuf,
    _record: PhantomData<R>,
}

impl<R> FileStore<R>
where
    R: Scheduled + Serialize + DeserializeOwned,
{
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileStore {
            root: root.into(),
            _record: PhantomData,
        }
    }

    /// Directory holding one tenant's records of this kind
    pub fn dir(&self, tenant: Tenant) -> PathBuf {
        self.root.join(tenant.slug()).join(R::KIND)
    }

    fn read(path: &Path) -> AgendaResult<R> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| AgendaError::Serialization(format!("{}: {}", path.display(), e)))
    }

    fn write(path: &Path, record: &R) -> AgendaResult<()> {
        let content =
            toml::to_string_pretty(record).map_err(|e| AgendaError::Serialization(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load every record file of a tenant, sorted by filename (start date first).
    /// Unreadable files and files whose tenant doesn't match the directory are skipped.
    fn entries(&self, tenant: Tenant) -> AgendaResult<Vec<StoredRecord<R>>> {
        let dir = self.dir(tenant);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|e| e == "toml"))
            .collect();
        paths.sort();

        let mut entries = Vec::with_capacity(paths.len());
        for path in paths {
            match Self::read(&path) {
                Ok(record) if record.tenant() == tenant => {
                    entries.push(StoredRecord { path, record })
                }
                Ok(record) => tracing::warn!(
                    path = %path.display(),
                    found = %record.tenant(),
                    expected = %tenant,
                    "skipping record stored under the wrong business unit"
                ),
                Err(e) => tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "skipping unreadable record"
                ),
            }
        }

        tracing::debug!(tenant = %tenant, kind = R::KIND, count = entries.len(), "loaded records");
        Ok(entries)
    }

    fn find(&self, tenant: Tenant, id: &str) -> AgendaResult<Option<StoredRecord<R>>> {
        Ok(self
            .entries(tenant)?
            .into_iter()
            .find(|entry| entry.record.id() == id))
    }

    /// Where `record` should live: its base name, a suffixed variant, or the
    /// file already holding its id.
    fn target_path(&self, record: &R) -> AgendaResult<PathBuf> {
        let dir = self.dir(record.tenant());
        std::fs::create_dir_all(&dir)?;

        let filename = unique_filename(&base_filename(record), &dir, record.id(), |path| {
            Self::read(path).ok().map(|r| r.id().to_string())
        })?;
        Ok(dir.join(filename))
    }
}

impl<R> RecordStore<R> for FileStore<R>
where
    R: Scheduled + Serialize + DeserializeOwned,
{
    fn list(&self, tenant: Tenant) -> AgendaResult<Vec<R>> {
        Ok(self
            .entries(tenant)?
            .into_iter()
            .map(|entry| entry.record)
            .collect())
    }

    fn create(&mut self, record: R) -> AgendaResult<()> {
        ensure_valid_range(&record)?;
        if self.find(record.tenant(), record.id())?.is_some() {
            return Err(AgendaError::DuplicateRecord(record.id().to_string()));
        }

        let path = self.target_path(&record)?;
        Self::write(&path, &record)?;
        tracing::info!(id = record.id(), path = %path.display(), "created record");
        Ok(())
    }

    /// The file is rewritten under a new name when the date or title changed.
    fn update(&mut self, record: R) -> AgendaResult<()> {
        ensure_valid_range(&record)?;
        let tenant = record.tenant();
        let Some(old) = self.find(tenant, record.id())? else {
            return Err(missing_or_moved(record.id(), tenant, |other| {
                Ok(self.find(other, record.id())?.is_some())
            })?);
        };

        // The old file stays in place until the new one is written
        let path = self.target_path(&record)?;
        Self::write(&path, &record)?;
        if path != old.path {
            std::fs::remove_file(&old.path)?;
        }
        tracing::info!(id = record.id(), path = %path.display(), "updated record");
        Ok(())
    }

    fn delete(&mut self, tenant: Tenant, id: &str) -> AgendaResult<()> {
        let old = self.find(tenant, id)?.ok_or_else(|| not_found(tenant, id))?;
        std::fs::remove_file(&old.path)?;
        tracing::info!(id, path = %old.path.display(), "deleted record");
        Ok(())
    }
}
