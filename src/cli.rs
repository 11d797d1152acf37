use std::path::PathBuf;

use clap::Parser;
use pf_core::config::AppConfig;

use crate::bootstrap::config::DEFAULT_CONFIG_FILE;

#[derive(Debug, Parser)]
#[command(name = "portfolio")]
#[command(about = "Portfolio catalog view controller driven by host events on stdin", long_about = None)]
pub struct Cli {
    /// Configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Portfolio data document (overrides `[data] path`)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Output directory for rendered fragments (overrides `[output] dir`)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Search debounce in milliseconds (overrides `[search] debounce_ms`)
    #[arg(long)]
    pub debounce_ms: Option<u64>,

    /// Host reports a dark color-scheme preference
    #[arg(long)]
    pub prefers_dark: bool,
}

impl Cli {
    /// Flags win over the file.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(data) = &self.data {
            config.data_path = data.clone();
        }
        if let Some(out) = &self.out {
            config.output_dir = out.clone();
        }
        if let Some(ms) = self.debounce_ms {
            config.search_debounce_ms = Some(ms);
        }
    }
}
