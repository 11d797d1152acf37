//! Defaults and derived paths on top of the raw [`AppConfig`].

use std::path::PathBuf;
use std::time::Duration;

use pf_app::app_paths::AppPaths;
use pf_app::DEFAULT_SEARCH_DEBOUNCE;
use pf_core::{config::AppConfig, ports::AppDirsPort};

pub const DEFAULT_DATA_PATH: &str = "data/projects.json";
pub const DEFAULT_OUTPUT_DIR: &str = "public";

/// Used when neither the config nor the platform names a data directory.
const FALLBACK_SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub data_path: PathBuf,
    pub fetch_timeout: Option<Duration>,
    pub output_dir: PathBuf,
    pub search_debounce: Duration,
    pub settings_path: PathBuf,
    /// `None` disables the log file
    pub logs_dir: Option<PathBuf>,
}

fn or_default(path: PathBuf, default: &str) -> PathBuf {
    if path.as_os_str().is_empty() {
        PathBuf::from(default)
    } else {
        path
    }
}

impl RuntimeConfig {
    pub fn resolve(config: AppConfig, app_dirs: &dyn AppDirsPort) -> Self {
        let app_paths = app_dirs
            .get_app_dirs()
            .ok()
            .map(|dirs| AppPaths::from_app_dirs(&dirs));

        let settings_path = if !config.settings_path.as_os_str().is_empty() {
            config.settings_path
        } else {
            app_paths
                .as_ref()
                .map(|paths| paths.settings_path.clone())
                .unwrap_or_else(|| PathBuf::from(FALLBACK_SETTINGS_FILE))
        };

        Self {
            data_path: or_default(config.data_path, DEFAULT_DATA_PATH),
            fetch_timeout: config.fetch_timeout_ms.map(Duration::from_millis),
            output_dir: or_default(config.output_dir, DEFAULT_OUTPUT_DIR),
            search_debounce: config
                .search_debounce_ms
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_SEARCH_DEBOUNCE),
            settings_path,
            logs_dir: app_paths.map(|paths| paths.logs_dir),
        }
    }
}
