pub mod config;
pub mod run;
pub mod runtime_config;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, load_config_if_present};
pub use run::run_app;
pub use runtime_config::RuntimeConfig;
pub use wiring::{wire_dependencies, AppDeps};
