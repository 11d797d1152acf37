use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Portfolio data document (may be empty: the bootstrap layer decides)
    pub data_path: PathBuf,

    /// Upper bound on the initial data fetch, if any
    pub fetch_timeout_ms: Option<u64>,

    /// Directory the display target writes rendered fragments into
    pub output_dir: PathBuf,

    /// Quiet period before a typed search term is committed
    pub search_debounce_ms: Option<u64>,

    /// Theme preference file (empty means "use the app data dir")
    pub settings_path: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// Missing keys become empty values. Negative integers are treated as
    /// missing rather than wrapped.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let str_at = |section: &str, key: &str| -> String {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };
        let u64_at = |section: &str, key: &str| -> Option<u64> {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_integer())
                .and_then(|v| u64::try_from(v).ok())
        };

        Ok(Self {
            data_path: PathBuf::from(str_at("data", "path")),
            fetch_timeout_ms: u64_at("data", "fetch_timeout_ms"),
            output_dir: PathBuf::from(str_at("output", "dir")),
            search_debounce_ms: u64_at("search", "debounce_ms"),
            settings_path: PathBuf::from(str_at("settings", "path")),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            data_path: PathBuf::new(),
            fetch_timeout_ms: None,
            output_dir: PathBuf::new(),
            search_debounce_ms: None,
            settings_path: PathBuf::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_toml_reads_every_section() {
        let value: toml::Value = toml::from_str(
            r#"
            [data]
            path = "data/projects.json"
            fetch_timeout_ms = 2000

            [output]
            dir = "public"

            [search]
            debounce_ms = 250

            [settings]
            path = "/tmp/portfolio/settings.json"
            "#,
        )
        .unwrap();

        let config = AppConfig::from_toml(&value).unwrap();

        assert_eq!(config.data_path, PathBuf::from("data/projects.json"));
        assert_eq!(config.fetch_timeout_ms, Some(2000));
        assert_eq!(config.output_dir, PathBuf::from("public"));
        assert_eq!(config.search_debounce_ms, Some(250));
        assert_eq!(
            config.settings_path,
            PathBuf::from("/tmp/portfolio/settings.json")
        );
    }

    #[test]
    fn from_toml_keeps_missing_values_empty() {
        let value: toml::Value = toml::from_str("[search]\n").unwrap();

        let config = AppConfig::from_toml(&value).unwrap();

        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn from_toml_ignores_negative_durations() {
        let value: toml::Value = toml::from_str("[search]\ndebounce_ms = -5\n").unwrap();

        let config = AppConfig::from_toml(&value).unwrap();

        assert_eq!(config.search_debounce_ms, None);
    }
}
