//! Configuration, layered with figment.
//!
//! Precedence, lowest to highest: built-in defaults, an optional config file
//! (TOML, YAML or JSON by extension), then `GODO_`-prefixed environment
//! variables such as `GODO_DATA_DIR` or `GODO_THEME`.

use crate::error::Result;
use crate::store::FileStore;
use crate::types::Theme;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "GODO_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KanbanConfig {
    /// Directory a [`FileStore`] keeps its files in
    pub data_dir: PathBuf,
    /// Theme used when nothing has been saved yet
    pub theme: Theme,
    /// Default tracing filter, overridden by `RUST_LOG`
    pub log_level: String,
}

impl Default for KanbanConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".godo"),
            theme: Theme::Dark,
            log_level: "info".to_string(),
        }
    }
}

impl KanbanConfig {
    /// Load defaults, then `file` if given and present, then the environment
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let config = Self::figment(file).extract::<Self>()?;
        debug!("Loaded config: {:?}", config);
        Ok(config)
    }

    /// The layered figment without extracting it
    pub fn figment(file: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));
        if let Some(path) = file {
            figment = figment.merge(file_provider(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).map(|key| key.as_str().to_lowercase().into()))
    }

    /// A file store rooted at `data_dir`
    pub fn file_store(&self) -> FileStore {
        FileStore::new(&self.data_dir)
    }

    /// Install the global subscriber with `log_level` as the default filter
    pub fn init_logging(&self) -> bool {
        crate::logging::init_logging(&self.log_level)
    }
}

fn file_provider(path: &Path) -> Figment {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("yaml") | Some("yml") => Figment::from(Yaml::file(path)),
        Some("json") => Figment::from(Json::file(path)),
        _ => Figment::from(Toml::file(path)),
    }
}
