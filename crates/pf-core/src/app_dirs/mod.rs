use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "portfolio";

/// Per-user application data location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
}

impl AppDirs {
    /// `<base>/portfolio`, or `<base>/portfolio-<profile>` so that parallel
    /// profiles never share settings or logs. Blank profiles are ignored.
    pub fn under(base: &Path, profile: Option<&str>) -> Self {
        let dir_name = match profile.map(str::trim) {
            Some(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
            _ => APP_DIR_NAME.to_string(),
        };
        Self {
            app_data_root: base.join(dir_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_uses_bare_name() {
        let dirs = AppDirs::under(Path::new("/data"), None);
        assert_eq!(dirs.app_data_root, PathBuf::from("/data/portfolio"));

        let blank = AppDirs::under(Path::new("/data"), Some("  "));
        assert_eq!(blank, dirs);
    }

    #[test]
    fn named_profiles_are_isolated() {
        let staging = AppDirs::under(Path::new("/data"), Some("staging"));
        let demo = AppDirs::under(Path::new("/data"), Some("demo"));

        assert_eq!(staging.app_data_root, PathBuf::from("/data/portfolio-staging"));
        assert_ne!(staging, demo);
    }
}
