//! Agenda root: configuration plus the record stores it points at.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};

use crate::agenda_config::AgendaConfig;
use crate::error::{AgendaError, AgendaResult};
use crate::locale::Locale;
use crate::record::{Campaign, MarketingEvent};
use crate::store::FileStore;
use crate::tenant::Tenant;

/// Prefix of environment variables overriding the config file (AGENDA_DATA_DIR...)
const ENV_PREFIX: &str = "AGENDA";

#[derive(Debug, Clone)]
pub struct Agenda {
    config: AgendaConfig,
}

impl Agenda {
    /// Load ~/.config/agenda/config.toml, creating a commented default on first run.
    pub fn load() -> AgendaResult<Self> {
        let config_path = AgendaConfig::config_path()?;

        if !config_path.exists() {
            AgendaConfig::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from a specific file, with AGENDA_* environment overrides.
    pub fn load_from(config_path: &Path) -> AgendaResult<Self> {
        Self::load_with_env(config_path, Environment::with_prefix(ENV_PREFIX))
    }

    /// File values first, then `env` on top.
    fn load_with_env(config_path: &Path, env: Environment) -> AgendaResult<Self> {
        let config: AgendaConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .add_source(env)
            .build()
            .map_err(|e| AgendaError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| AgendaError::Config(e.to_string()))?;

        tracing::debug!(path = %config_path.display(), "loaded agenda config");
        Ok(Agenda { config })
    }

    pub fn from_config(config: AgendaConfig) -> Self {
        Agenda { config }
    }

    pub fn config(&self) -> &AgendaConfig {
        &self.config
    }

    pub fn data_path(&self) -> PathBuf {
        let data_dir = self.config.data_dir.to_string_lossy();
        let full_path_str = shellexpand::tilde(&data_dir).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Data directory in display-friendly form, keeping `~`.
    pub fn display_path(&self) -> PathBuf {
        self.config.data_dir.clone()
    }

    pub fn default_tenant(&self) -> Option<Tenant> {
        self.config.default_tenant
    }

    /// Default "responsible" for new records
    pub fn operator(&self) -> Option<&str> {
        self.config.operator.as_deref()
    }

    pub fn locale(&self) -> Locale {
        self.config.locale
    }

    pub fn events(&self) -> FileStore<MarketingEvent> {
        FileStore::new(self.data_path())
    }

    pub fn campaigns(&self) -> FileStore<Campaign> {
        FileStore::new(self.data_path())
    }
}
