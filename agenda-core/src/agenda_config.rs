//! Global agenda configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AgendaError, AgendaResult};
use crate::locale::Locale;
use crate::tenant::Tenant;

static DEFAULT_DATA_PATH: &str = "~/agenda";

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

fn is_default_data_path(p: &PathBuf) -> bool {
    *p == default_data_path()
}

fn is_default_locale(l: &Locale) -> bool {
    *l == Locale::default()
}

/// Global configuration at ~/.config/agenda/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AgendaConfig {
    /// Where record files live
    #[serde(default = "default_data_path", skip_serializing_if = "is_default_data_path")]
    pub data_dir: PathBuf,

    /// Business unit used when --tenant is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_tenant: Option<Tenant>,

    /// Operator display name, the default "responsible" of new records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,

    #[serde(default, skip_serializing_if = "is_default_locale")]
    pub locale: Locale,
}

impl Default for AgendaConfig {
    fn default() -> Self {
        AgendaConfig {
            data_dir: default_data_path(),
            default_tenant: None,
            operator: None,
            locale: Locale::default(),
        }
    }
}

impl AgendaConfig {
    pub fn config_path() -> AgendaResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AgendaError::Config("Could not determine config directory".into()))?
            .join("agenda");

        Ok(config_dir.join("config.toml"))
    }

    /// Save to `path`
    pub fn save_to(&self, path: &Path) -> AgendaResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| AgendaError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AgendaError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, content)
            .map_err(|e| AgendaError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Save to ~/.config/agenda/config.toml
    pub fn save(&self) -> AgendaResult<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> AgendaResult<()> {
        let contents = format!(
            "\
# agenda configuration

# Where event and campaign files live:
# data_dir = \"{}\"

# Business unit used when --tenant is not given (MOTOS or CARROS):
# default_tenant = \"MOTOS\"

# Your name, pre-filled as the responsible person on new records:
# operator = \"Maria Silva\"

# Language for month names (pt-BR or en-US):
# locale = \"pt-BR\"
",
            DEFAULT_DATA_PATH
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AgendaError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| AgendaError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
