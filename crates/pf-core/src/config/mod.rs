//! # Pure Data Module - Data Transfer Objects Only
//!
//! Holds the configuration read from `portfolio.toml`. Values are facts as
//! written in the file: nothing here validates them or fills in defaults.
//! Default resolution lives in the binary's bootstrap layer.

mod app_config;

pub use app_config::AppConfig;
