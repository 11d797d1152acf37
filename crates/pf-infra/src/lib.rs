pub mod app_dirs;
pub mod catalog;
pub mod display;
pub mod settings;

pub use app_dirs::DirsAppDirsAdapter;
pub use catalog::JsonFileCatalogSource;
pub use display::HtmlFileDisplay;
pub use settings::{FileSettingsRepository, SettingsMigrator};
