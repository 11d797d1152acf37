use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use pf_core::{
    ports::CatalogDisplayPort, settings::Theme, CatalogView, PdfViewerState, ProjectDetailView,
};
use serde::Serialize;
use tokio::fs;

pub const CATALOG_FILE: &str = "catalog.html";
pub const DETAIL_FILE: &str = "detail.html";
pub const VIEWER_FILE: &str = "viewer.json";
pub const APPEARANCE_FILE: &str = "appearance.json";

/// Writes each surface to its own file in the output directory.
///
/// Files are replaced atomically so a page reloading mid-write never sees a
/// partial grid.
pub struct HtmlFileDisplay {
    out_dir: PathBuf,
}

#[derive(Serialize)]
struct AppearanceFile {
    theme: &'static str,
}

impl HtmlFileDisplay {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    async fn replace(&self, file_name: &str, content: &str) -> Result<()> {
        fs::create_dir_all(&self.out_dir)
            .await
            .with_context(|| format!("create output dir failed: {}", self.out_dir.display()))?;

        let target = self.out_dir.join(file_name);
        let tmp_path = self.out_dir.join(format!(".{file_name}.tmp"));
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write {} failed", tmp_path.display()))?;
        fs::rename(&tmp_path, &target).await.with_context(|| {
            format!(
                "rename {} -> {} failed",
                tmp_path.display(),
                target.display()
            )
        })?;

        tracing::trace!(file = file_name, bytes = content.len(), "display file replaced");
        Ok(())
    }
}

fn catalog_document(view: &CatalogView) -> String {
    let mut html = String::from("<nav class=\"filter-bar\">\n");
    for control in &view.filter_controls {
        let class = if control.active {
            "filter-btn active"
        } else {
            "filter-btn"
        };
        html.push_str(&format!(
            "  <button class=\"{class}\" data-filter=\"{}\">{}</button>\n",
            control.filter, control.label
        ));
    }
    html.push_str("</nav>\n");

    match &view.summary_html {
        Some(summary) => html.push_str(&format!(
            "<div id=\"searchResults\" class=\"search-results\">{summary}</div>\n"
        )),
        None => html.push_str("<div id=\"searchResults\" class=\"search-results\" hidden></div>\n"),
    }

    html.push_str(&format!(
        "<section id=\"projectsGrid\" class=\"projects-grid\">{}</section>\n",
        view.grid_html
    ));
    html
}

fn detail_document(detail: &ProjectDetailView) -> String {
    format!(
        "<div class=\"modal-content\" data-project-id=\"{}\">\n<h2 id=\"modalTitle\">{}</h2>\n{}\n</div>\n",
        detail.project_id_html, detail.title_html, detail.body_html
    )
}

#[async_trait]
impl CatalogDisplayPort for HtmlFileDisplay {
    async fn present_catalog(&self, view: &CatalogView) -> Result<()> {
        self.replace(CATALOG_FILE, &catalog_document(view)).await
    }

    async fn present_detail(&self, detail: Option<&ProjectDetailView>) -> Result<()> {
        let content = detail.map(detail_document).unwrap_or_default();
        self.replace(DETAIL_FILE, &content).await
    }

    async fn present_viewer(&self, state: &PdfViewerState) -> Result<()> {
        let content = serde_json::to_string_pretty(state).context("serialize viewer state failed")?;
        self.replace(VIEWER_FILE, &content).await
    }

    async fn present_theme(&self, theme: Theme) -> Result<()> {
        let content = serde_json::to_string_pretty(&AppearanceFile {
            theme: theme.as_str(),
        })
        .context("serialize appearance failed")?;
        self.replace(APPEARANCE_FILE, &content).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::{FilterControl, ProjectId};
    use tempfile::TempDir;

    fn view(summary: Option<&str>) -> CatalogView {
        CatalogView {
            grid_html: "<article data-project-id=\"p1\"></article>".to_string(),
            filter_controls: vec![
                FilterControl {
                    filter: "all".to_string(),
                    label: "Todos".to_string(),
                    active: false,
                },
                FilterControl {
                    filter: "design".to_string(),
                    label: "Diseño CAD".to_string(),
                    active: true,
                },
            ],
            summary_html: summary.map(str::to_string),
            visible_ids: vec![ProjectId::from("p1")],
        }
    }

    #[tokio::test]
    async fn catalog_marks_active_control() {
        let dir = TempDir::new().unwrap();
        let display = HtmlFileDisplay::new(dir.path().join("public"));

        display.present_catalog(&view(None)).await.unwrap();

        let html = std::fs::read_to_string(dir.path().join("public").join(CATALOG_FILE)).unwrap();
        assert!(html.contains(r#"<button class="filter-btn active" data-filter="design">"#));
        assert!(html.contains(r#"<button class="filter-btn" data-filter="all">"#));
        assert!(html.contains("hidden"));
        assert!(html.contains(r#"data-project-id="p1""#));
    }

    #[tokio::test]
    async fn catalog_is_replaced_not_appended() {
        let dir = TempDir::new().unwrap();
        let display = HtmlFileDisplay::new(dir.path());

        display.present_catalog(&view(None)).await.unwrap();
        display
            .present_catalog(&view(Some("1 proyecto encontrado")))
            .await
            .unwrap();

        let html = std::fs::read_to_string(dir.path().join(CATALOG_FILE)).unwrap();
        assert_eq!(html.matches("<nav").count(), 1);
        assert!(html.contains("1 proyecto encontrado"));
        assert!(!dir.path().join(".catalog.html.tmp").exists());
    }

    #[tokio::test]
    async fn closing_detail_empties_file() {
        let dir = TempDir::new().unwrap();
        let display = HtmlFileDisplay::new(dir.path());
        let detail = ProjectDetailView {
            project_id: ProjectId::from(r#"p1" onclick="x"#),
            project_id_html: "p1&quot; onclick=&quot;x".to_string(),
            title: "A & B".to_string(),
            title_html: "A &amp; B".to_string(),
            body_html: "<p>body</p>".to_string(),
        };

        display.present_detail(Some(&detail)).await.unwrap();
        let open = std::fs::read_to_string(dir.path().join(DETAIL_FILE)).unwrap();
        assert!(open.contains("A &amp; B"));
        assert!(open.contains(r#"data-project-id="p1&quot; onclick=&quot;x">"#));
        assert!(!open.contains("onclick=\"x"));

        display.present_detail(None).await.unwrap();
        let closed = std::fs::read_to_string(dir.path().join(DETAIL_FILE)).unwrap();
        assert!(closed.is_empty());
    }

    #[tokio::test]
    async fn viewer_and_theme_are_json() {
        let dir = TempDir::new().unwrap();
        let display = HtmlFileDisplay::new(dir.path());
        let mut state = PdfViewerState::default();
        state.open("assets/documents/a.pdf", Some("a.pdf"), 3);

        display.present_viewer(&state).await.unwrap();
        display.present_theme(Theme::Dark).await.unwrap();

        let viewer: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dir.path().join(VIEWER_FILE)).unwrap())
                .unwrap();
        assert_eq!(viewer["total_pages"], 3);
        assert_eq!(viewer["document"]["url"], "assets/documents/a.pdf");

        let appearance: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(dir.path().join(APPEARANCE_FILE)).unwrap(),
        )
        .unwrap();
        assert_eq!(appearance["theme"], "dark");
    }
}
