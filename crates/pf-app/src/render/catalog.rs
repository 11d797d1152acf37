use pf_core::{
    format_project_date, CatalogView, CategoryFilter, FilterControl, ProjectRecord, QueryState,
};

use super::html::{escape_html, Highlighter};

/// Tags shown on a card; the rest are only in the detail view.
pub const PREVIEW_TAG_LIMIT: usize = 2;
/// Tools shown on a card; the rest are only in the detail view.
pub const PREVIEW_TOOL_LIMIT: usize = 3;

/// Reconcile the matched records into a complete catalog view.
///
/// The filter bar is re-derived from `state` on every call: the control
/// whose value equals the active category is the only one marked. An
/// unrecognised category has no control, so none is marked.
pub fn render_catalog(matched: &[&ProjectRecord], state: &QueryState) -> CatalogView {
    let filter_controls = CategoryFilter::controls()
        .into_iter()
        .map(|filter| FilterControl {
            active: &filter == state.category(),
            filter: filter.as_str().to_string(),
            label: filter.label().to_string(),
        })
        .collect();

    let grid_html = if matched.is_empty() {
        render_placeholder(state)
    } else {
        let highlighter = Highlighter::new(state.search());
        matched
            .iter()
            .map(|project| render_card(project, &highlighter))
            .collect()
    };

    CatalogView {
        grid_html,
        filter_controls,
        summary_html: render_summary(matched.len(), state),
        visible_ids: matched.iter().map(|p| p.id.clone()).collect(),
    }
}

fn render_summary(count: usize, state: &QueryState) -> Option<String> {
    let search = state.search();
    if search.is_empty() {
        return None;
    }
    let noun = if count == 1 {
        "proyecto encontrado"
    } else {
        "proyectos encontrados"
    };
    Some(format!(
        r#"<span class="results-count">{count}</span> {noun} para "<strong>{}</strong>""#,
        escape_html(search.as_str())
    ))
}

fn render_placeholder(state: &QueryState) -> String {
    if state.search().is_empty() {
        return concat!(
            r#"<div class="no-results">"#,
            "<p>No se encontraron proyectos en esta categoría.</p>",
            "</div>"
        )
        .to_string();
    }
    concat!(
        r#"<div class="no-results">"#,
        r#"<div class="no-results-icon">🔍</div>"#,
        "<p>No se encontraron proyectos</p>",
        r#"<p class="no-results-hint">Intenta con otros términos de búsqueda</p>"#,
        "</div>"
    )
    .to_string()
}

fn render_card(project: &ProjectRecord, highlighter: &Highlighter) -> String {
    let id = escape_html(project.id.as_str());
    let badge = project.category.badge();

    let tags: String = project
        .tags
        .iter()
        .take(PREVIEW_TAG_LIMIT)
        .map(|tag| format!(r#"<span class="tag tag-primary">{}</span>"#, escape_html(tag)))
        .collect();
    let tools: String = project
        .tools
        .iter()
        .take(PREVIEW_TOOL_LIMIT)
        .map(|tool| format!(r#"<span class="tag">{}</span>"#, escape_html(tool)))
        .collect();

    let date = escape_html(&format_project_date(&project.date));
    let subtitle = match project.client.as_deref() {
        Some(client) if !client.is_empty() => format!("{} • {}", escape_html(client), date),
        _ => date,
    };

    format!(
        concat!(
            r#"<article class="card project-card" data-project-id="{id}" data-category="{category}">"#,
            r#"<div class="project-card-image-wrapper">"#,
            r#"<div class="project-card-image" style="background-color: {color};">"#,
            r#"<span class="project-card-icon">{icon}</span>"#,
            r#"<span class="project-card-label">{label}</span>"#,
            "</div>",
            r#"<div class="project-card-overlay">{tags}</div>"#,
            "</div>",
            r#"<div class="card-header">"#,
            r#"<h3 class="card-title">{title}</h3>"#,
            r#"<p class="card-subtitle">{subtitle}</p>"#,
            "</div>",
            r#"<div class="card-content"><p>{description}</p></div>"#,
            r#"<div class="card-footer">"#,
            r#"<div class="project-tools">{tools}</div>"#,
            r#"<button class="btn btn-sm btn-primary view-project-btn" data-project-id="{id}">Ver Detalles</button>"#,
            "</div>",
            "</article>"
        ),
        id = id,
        category = escape_html(project.category.as_str()),
        color = badge.color,
        icon = badge.icon,
        label = badge.label,
        tags = tags,
        title = highlighter.apply(&project.title),
        subtitle = subtitle,
        description = highlighter.apply(&project.description),
        tools = tools,
    )
}
