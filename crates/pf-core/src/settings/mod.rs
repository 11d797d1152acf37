pub mod defaults;
pub mod model;

pub use model::{AppearanceSettings, Settings, Theme, CURRENT_SCHEMA_VERSION};
