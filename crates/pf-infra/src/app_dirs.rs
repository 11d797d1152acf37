use std::path::PathBuf;

use pf_core::{
    app_dirs::AppDirs,
    ports::{AppDirsError, AppDirsPort},
};

/// Environment variable selecting a named profile.
pub const PROFILE_ENV: &str = "PF_PROFILE";

/// Resolves the app data root from the platform's local data directory.
pub struct DirsAppDirsAdapter {
    profile: Option<String>,
    base: Option<PathBuf>,
}

impl DirsAppDirsAdapter {
    /// Profile taken from `PF_PROFILE`, read once here.
    pub fn from_env() -> Self {
        Self::with_profile(std::env::var(PROFILE_ENV).ok())
    }

    pub fn with_profile(profile: Option<String>) -> Self {
        Self {
            profile,
            base: None,
        }
    }

    /// Resolve under `base` instead of the platform directory.
    pub fn rooted_at(mut self, base: impl Into<PathBuf>) -> Self {
        self.base = Some(base.into());
        self
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let base = self
            .base
            .clone()
            .or_else(dirs::data_local_dir)
            .ok_or(AppDirsError::DataLocalDirUnavailable)?;

        Ok(AppDirs::under(&base, self.profile.as_deref()))
    }
}
