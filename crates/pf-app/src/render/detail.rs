use pf_core::{document_url, format_project_date, ProjectDetailView, ProjectRecord};

use super::html::escape_html;

/// Full, untruncated detail for one project.
pub fn render_project_detail(project: &ProjectRecord) -> ProjectDetailView {
    let mut body = String::from(r#"<div class="project-detail">"#);

    body.push_str(r#"<div class="project-detail-meta">"#);
    body.push_str(&format!(
        r#"<span class="tag tag-accent">{}</span>"#,
        escape_html(project.category.display_name())
    ));
    if let Some(client) = project.client.as_deref().filter(|c| !c.is_empty()) {
        body.push_str(&format!("<span>{}</span><span>•</span>", escape_html(client)));
    }
    body.push_str(&format!(
        "<span>{}</span></div>",
        escape_html(&format_project_date(&project.date))
    ));

    let description = project
        .full_description
        .as_deref()
        .unwrap_or(project.description.as_str());
    body.push_str(&format!(
        r#"<p class="project-detail-description">{}</p>"#,
        escape_html(description)
    ));

    if !project.highlights.is_empty() {
        body.push_str(r#"<section class="project-highlights"><h4>Logros Destacados</h4><ul>"#);
        for highlight in &project.highlights {
            body.push_str(&format!("<li>✓ {}</li>", escape_html(highlight)));
        }
        body.push_str("</ul></section>");
    }

    body.push_str(r#"<section class="project-tools"><h4>Herramientas Utilizadas</h4>"#);
    for tool in &project.tools {
        body.push_str(&format!(
            r#"<span class="tag tag-primary">{}</span>"#,
            escape_html(tool)
        ));
    }
    body.push_str("</section>");

    if !project.tags.is_empty() {
        body.push_str(r#"<section class="project-tags"><h4>Etiquetas Técnicas</h4>"#);
        for tag in &project.tags {
            body.push_str(&format!(r#"<span class="tag">{}</span>"#, escape_html(tag)));
        }
        body.push_str("</section>");
    }

    if !project.documents.is_empty() {
        body.push_str(r#"<section class="project-documents"><h4>Documentos Técnicos</h4>"#);
        for (index, doc) in project.documents.iter().enumerate() {
            let name = escape_html(doc);
            let url = escape_html(&document_url(doc));
            body.push_str(&format!(
                concat!(
                    r#"<div class="document">"#,
                    r#"<span class="document-name">{name}</span>"#,
                    r#"<button class="btn btn-sm btn-primary view-pdf-btn" data-document-index="{index}" data-pdf-url="{url}" data-pdf-name="{name}">👁️ Ver PDF</button>"#,
                    r#"<a class="btn btn-sm btn-outline" href="{url}" download="{name}">📥 Descargar</a>"#,
                    "</div>"
                ),
                name = name,
                url = url,
                index = index,
            ));
        }
        body.push_str("</section>");
    }

    body.push_str("</div>");

    ProjectDetailView {
        project_id: project.id.clone(),
        project_id_html: escape_html(project.id.as_str()),
        title: project.title.clone(),
        title_html: escape_html(&project.title),
        body_html: body,
    }
}
