//! The host event loop.

use std::time::Duration;

use pf_app::{
    CatalogViewController, CommittedSearch, GetProjectDetail, LoadCatalog, PdfViewerSession,
    ProjectLookup, ResolveTheme, SearchDebouncer, ToggleTheme,
};
use pf_core::{ports::CatalogDisplayPort, settings::Theme};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

use super::runtime_config::RuntimeConfig;
use super::wiring::AppDeps;
use crate::commands::HostEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Everything one page session owns, driven by a single task.
struct Session {
    controller: CatalogViewController,
    debouncer: SearchDebouncer,
    detail: GetProjectDetail,
    viewer: PdfViewerSession,
    toggle_theme: ToggleTheme,
    display: Arc<dyn CatalogDisplayPort>,
    prefers_dark: bool,
}

impl Session {
    async fn handle(&mut self, event: HostEvent) -> Flow {
        match event {
            HostEvent::Filter(category) => {
                self.controller.select_category(&category).await;
            }
            HostEvent::Input(text) => self.debouncer.push(text),
            HostEvent::ClearSearch => {
                self.debouncer.cancel();
                self.controller.clear_search().await;
            }
            HostEvent::OpenDetail(project_id) => {
                self.detail.execute(&self.controller, &project_id).await;
            }
            HostEvent::CloseDetail => self.detail.close().await,
            HostEvent::ToggleTheme => {
                let theme = self.toggle_theme.execute(self.prefers_dark).await;
                present_theme(self.display.as_ref(), theme).await;
            }
            HostEvent::OpenPdf {
                project_id,
                document_index,
                total_pages,
            } => match self.controller.project(&project_id) {
                Some(project) => {
                    self.viewer
                        .open(project, document_index, total_pages)
                        .await;
                }
                None => tracing::warn!(%project_id, "pdf requested for unknown project"),
            },
            HostEvent::NextPage => self.viewer.next_page().await,
            HostEvent::PreviousPage => self.viewer.previous_page().await,
            HostEvent::ZoomIn => self.viewer.zoom_in().await,
            HostEvent::ZoomOut => self.viewer.zoom_out().await,
            HostEvent::ZoomFit => self.viewer.zoom_fit().await,
            HostEvent::ClosePdf => self.viewer.close().await,
            HostEvent::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    async fn commit(&mut self, commit: CommittedSearch) {
        if let Some(term) = self.debouncer.accept(commit) {
            self.controller.commit_search(&term).await;
        }
    }

    async fn handle_line(&mut self, line: &str) -> Flow {
        match line.parse::<HostEvent>() {
            Ok(event) => {
                tracing::debug!(?event, "host event");
                self.handle(event).await
            }
            Err(err) => {
                tracing::warn!(error = %err, line, "ignoring host input");
                Flow::Continue
            }
        }
    }
}

async fn present_theme(display: &dyn CatalogDisplayPort, theme: Theme) {
    if let Err(err) = display.present_theme(theme).await {
        tracing::error!(error = %err, theme = theme.as_str(), "failed to present theme");
    }
}

/// Load the catalog, render it once, then apply host events until `quit`
/// or end of input.
///
/// A search typed just before end of input is still committed once its
/// debounce elapses.
pub async fn run_app<R>(
    config: &RuntimeConfig,
    deps: AppDeps,
    prefers_dark: bool,
    input: R,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let theme = ResolveTheme::new(deps.settings.clone())
        .execute(prefers_dark)
        .await;
    present_theme(deps.display.as_ref(), theme).await;

    let catalog = LoadCatalog::new(deps.source.clone())
        .with_timeout(config.fetch_timeout)
        .execute()
        .await;

    let (committed_tx, mut committed_rx) = mpsc::unbounded_channel();
    let mut session = Session {
        controller: CatalogViewController::new(catalog, deps.display.clone()),
        debouncer: SearchDebouncer::new(config.search_debounce, committed_tx),
        detail: GetProjectDetail::new(deps.display.clone()),
        viewer: PdfViewerSession::new(deps.display.clone()),
        toggle_theme: ToggleTheme::new(deps.settings.clone()),
        display: deps.display.clone(),
        prefers_dark,
    };

    let initial = session.controller.refresh().await;
    tracing::info!(
        projects = session.controller.catalog().len(),
        visible = initial.visible_ids.len(),
        debounce_ms = duration_ms(config.search_debounce),
        "catalog ready"
    );

    let mut lines = input.lines();
    let mut input_open = true;

    loop {
        if !input_open && !session.debouncer.is_pending() {
            while let Ok(commit) = committed_rx.try_recv() {
                session.commit(commit).await;
            }
            break;
        }

        tokio::select! {
            line = lines.next_line(), if input_open => match line {
                Ok(Some(line)) => {
                    if session.handle_line(&line).await == Flow::Quit {
                        tracing::info!("quit requested");
                        break;
                    }
                }
                Ok(None) => {
                    tracing::debug!("host input closed");
                    input_open = false;
                }
                Err(err) => {
                    tracing::error!(error = %err, "failed to read host input");
                    input_open = false;
                }
            },
            Some(commit) = committed_rx.recv() => session.commit(commit).await,
        }
    }

    Ok(())
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
