//! Assembles the adapters behind their ports. No decisions are made here.

use std::sync::Arc;

use pf_core::ports::{CatalogDisplayPort, PortfolioSourcePort, SettingsPort};
use pf_infra::{FileSettingsRepository, HtmlFileDisplay, JsonFileCatalogSource};

use super::runtime_config::RuntimeConfig;

/// Port implementations handed to the event loop.
#[derive(Clone)]
pub struct AppDeps {
    pub source: Arc<dyn PortfolioSourcePort>,
    pub settings: Arc<dyn SettingsPort>,
    pub display: Arc<dyn CatalogDisplayPort>,
}

pub fn wire_dependencies(config: &RuntimeConfig) -> AppDeps {
    AppDeps {
        source: Arc::new(JsonFileCatalogSource::new(&config.data_path)),
        settings: Arc::new(FileSettingsRepository::new(&config.settings_path)),
        display: Arc::new(HtmlFileDisplay::new(&config.output_dir)),
    }
}
