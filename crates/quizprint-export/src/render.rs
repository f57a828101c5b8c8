use tera::{Context, Tera};

use crate::assemble::DocumentView;
use crate::error::ExportError;

pub const DOCUMENT_TEMPLATE_NAME: &str = "document.html";

/// Built-in print layout. The `.html` name turns on Tera autoescaping;
/// already-transformed question markup is emitted with `| safe`.
pub const DOCUMENT_TEMPLATE: &str = include_str!("../templates/document.html");

/// Render the built-in document template with a view of the quiz tree.
pub fn render_document(view: &DocumentView) -> Result<String, ExportError> {
    view.styles.validate()?;
    render_template(DOCUMENT_TEMPLATE_NAME, DOCUMENT_TEMPLATE, view)
}

/// Render a Tera template with a [`DocumentView`].
///
/// The `template_content` is the raw template string (Jinja2 syntax); the
/// view's fields become the template context variables.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    view: &DocumentView,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(view)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}
