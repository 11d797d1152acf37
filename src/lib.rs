//! Portfolio catalog
//!
//! Binary-side assembly: configuration, tracing, wiring and the host event
//! loop on top of `pf-app`.

pub mod bootstrap;
pub mod cli;
pub mod commands;

pub use cli::Cli;
pub use commands::HostEvent;
