//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. Use cases depend on these traits
//! only; adapters live in `pf-infra` and in the binary.

pub mod app_dirs;
pub mod catalog_display;
pub mod errors;
pub mod portfolio_source;
pub mod settings;

pub use app_dirs::AppDirsPort;
pub use catalog_display::CatalogDisplayPort;
pub use errors::{AppDirsError, PortfolioSourceError};
pub use portfolio_source::PortfolioSourcePort;
pub use settings::{SettingsMigrationPort, SettingsPort};
