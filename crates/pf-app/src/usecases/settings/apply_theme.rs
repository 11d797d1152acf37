use std::sync::Arc;

use tokio::sync::Mutex;

use pf_core::{
    ports::SettingsPort,
    settings::{Settings, Theme},
};

/// Effective theme at startup: the saved choice, else the host preference.
pub struct ResolveTheme {
    settings: Arc<dyn SettingsPort>,
}

impl ResolveTheme {
    pub fn new(settings: Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    pub async fn execute(&self, prefers_dark: bool) -> Theme {
        match self.settings.load().await {
            Ok(settings) => settings.appearance.theme.effective(prefers_dark),
            Err(err) => {
                tracing::warn!(error = %err, "could not load theme preference, using light");
                Theme::Light
            }
        }
    }
}

/// Flip between dark and light and remember the choice.
///
/// The theme in effect is tracked for the session, so toggling keeps
/// alternating even when the saved preference could not be updated.
pub struct ToggleTheme {
    settings: Arc<dyn SettingsPort>,
    in_effect: Mutex<Option<Theme>>,
}

impl ToggleTheme {
    pub fn new(settings: Arc<dyn SettingsPort>) -> Self {
        Self {
            settings,
            in_effect: Mutex::new(None),
        }
    }

    /// Returns the theme now in effect. A failed save is logged; the new
    /// theme still applies for the session.
    pub async fn execute(&self, prefers_dark: bool) -> Theme {
        let mut in_effect = self.in_effect.lock().await;
        let mut settings = match self.settings.load().await {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(error = %err, "could not load settings, toggling from defaults");
                Settings::default()
            }
        };

        let current = (*in_effect).unwrap_or(settings.appearance.theme);
        let theme = current.toggled(prefers_dark);
        settings.appearance.theme = theme;

        if let Err(err) = self.settings.save(&settings).await {
            tracing::warn!(error = %err, theme = theme.as_str(), "could not save theme preference");
        }
        *in_effect = Some(theme);

        tracing::info!(theme = theme.as_str(), "theme toggled");
        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;
    use mockall::predicate::function;

    mock! {
        pub SettingsStore {}

        #[async_trait]
        impl SettingsPort for SettingsStore {
            async fn load(&self) -> anyhow::Result<Settings>;
            async fn save(&self, settings: &Settings) -> anyhow::Result<()>;
        }
    }

    fn with_theme(theme: Theme) -> Settings {
        let mut settings = Settings::default();
        settings.appearance.theme = theme;
        settings
    }

    #[tokio::test]
    async fn resolve_prefers_saved_theme() {
        let mut port = MockSettingsStore::new();
        port.expect_load()
            .returning(|| Ok(with_theme(Theme::Dark)));

        let theme = ResolveTheme::new(Arc::new(port)).execute(false).await;

        assert_eq!(theme, Theme::Dark);
    }

    #[tokio::test]
    async fn resolve_falls_back_to_light_on_error() {
        let mut port = MockSettingsStore::new();
        port.expect_load()
            .returning(|| Err(anyhow::anyhow!("permission denied")));

        let theme = ResolveTheme::new(Arc::new(port)).execute(true).await;

        assert_eq!(theme, Theme::Light);
    }

    #[tokio::test]
    async fn toggle_flips_and_persists() {
        let mut port = MockSettingsStore::new();
        port.expect_load()
            .returning(|| Ok(with_theme(Theme::System)));
        port.expect_save()
            .with(function(|s: &Settings| s.appearance.theme == Theme::Light))
            .times(1)
            .returning(|_| Ok(()));

        let theme = ToggleTheme::new(Arc::new(port)).execute(true).await;

        assert_eq!(theme, Theme::Light);
    }

    #[tokio::test]
    async fn toggle_survives_save_failure() {
        let mut port = MockSettingsStore::new();
        port.expect_load()
            .returning(|| Ok(with_theme(Theme::Light)));
        port.expect_save()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("disk full")));

        let theme = ToggleTheme::new(Arc::new(port)).execute(false).await;

        assert_eq!(theme, Theme::Dark);
    }

    #[tokio::test]
    async fn toggle_alternates_while_saves_keep_failing() {
        let mut port = MockSettingsStore::new();
        port.expect_load()
            .returning(|| Ok(with_theme(Theme::Light)));
        port.expect_save()
            .times(3)
            .returning(|_| Err(anyhow::anyhow!("read-only filesystem")));
        let toggle = ToggleTheme::new(Arc::new(port));

        assert_eq!(toggle.execute(false).await, Theme::Dark);
        assert_eq!(toggle.execute(false).await, Theme::Light);
        assert_eq!(toggle.execute(false).await, Theme::Dark);
    }

    #[tokio::test]
    async fn toggle_saves_flip_of_session_theme() {
        let mut port = MockSettingsStore::new();
        port.expect_load()
            .returning(|| Ok(with_theme(Theme::Light)));
        let mut seq = mockall::Sequence::new();
        port.expect_save()
            .with(function(|s: &Settings| s.appearance.theme == Theme::Dark))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(anyhow::anyhow!("disk full")));
        port.expect_save()
            .with(function(|s: &Settings| s.appearance.theme == Theme::Light))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        let toggle = ToggleTheme::new(Arc::new(port));

        assert_eq!(toggle.execute(false).await, Theme::Dark);
        assert_eq!(toggle.execute(false).await, Theme::Light);
    }
}
