use super::model::*;

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            theme: Theme::System,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            appearance: AppearanceSettings::default(),
        }
    }
}
