use anyhow::{bail, Result};
use pf_core::ports::SettingsMigrationPort;
use pf_core::settings::model::{Settings, CURRENT_SCHEMA_VERSION};

/// Files written before the schema was versioned carry version 0; their
/// layout already matches version 1.
struct MigrationV0ToV1;

impl SettingsMigrationPort for MigrationV0ToV1 {
    fn from_version(&self) -> u32 {
        0
    }

    fn to_version(&self) -> u32 {
        1
    }

    fn migrate(&self, mut settings: Settings) -> Settings {
        settings.schema_version = self.to_version();
        settings
    }
}

pub struct SettingsMigrator {
    migrations: Vec<Box<dyn SettingsMigrationPort>>,
}

impl Default for SettingsMigrator {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsMigrator {
    pub fn new() -> Self {
        Self {
            migrations: vec![Box::new(MigrationV0ToV1)],
        }
    }

    pub fn migrate_to_latest(&self, mut settings: Settings) -> Result<Settings> {
        while settings.schema_version < CURRENT_SCHEMA_VERSION {
            let current = settings.schema_version;

            let Some(migration) = self
                .migrations
                .iter()
                .find(|m| m.from_version() == current)
            else {
                bail!("no settings migration found from version {current}");
            };

            settings = migration.migrate(settings);
            tracing::info!(
                from = current,
                to = settings.schema_version,
                "settings migrated"
            );
        }

        Ok(settings)
    }
}
