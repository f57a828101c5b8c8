//! Extract → assemble → render, writing the HTML and PDF outputs.
//!
//! Nothing is written until the quiz tree has been extracted and parsed, so
//! a missing or malformed source leaves the working directory untouched.

use std::path::{Path, PathBuf};

use quizprint_core::models::Category;
use quizprint_core::source::{SourceKind, load_categories, to_quiz_document_json};
use quizprint_core::totals::QuizTotals;
use quizprint_export::assemble::assemble_document;
use quizprint_export::pdf::Renderer;
use tracing::info;

use crate::config::BuildConfig;

#[derive(Debug, Clone)]
pub struct BuildReport {
    pub totals: QuizTotals,
    pub html_path: PathBuf,
    /// `None` when PDF rendering is disabled.
    pub pdf_path: Option<PathBuf>,
}

/// Full run: load the quiz tree, then build every output from it.
pub fn run(
    config: &BuildConfig,
    base_dir: &Path,
    renderer: &dyn Renderer,
) -> eyre::Result<BuildReport> {
    let categories = load_tree(config, base_dir)?;
    build(&categories, config, base_dir, renderer)
}

/// Read the configured input and parse it into the quiz tree.
pub fn load_tree(config: &BuildConfig, base_dir: &Path) -> eyre::Result<Vec<Category>> {
    let input = BuildConfig::resolve(base_dir, &config.input);
    let kind = SourceKind::from_path(&input).unwrap_or(SourceKind::EmbeddedHtml);

    info!(input = %input.display(), ?kind, "extracting quiz data");
    let text = std::fs::read_to_string(&input)
        .map_err(|e| eyre::eyre!("failed to read {}: {e}", input.display()))?;
    let categories = load_categories(kind, &text)?;

    info!(categories = categories.len(), "quiz data extracted");
    for summary in QuizTotals::breakdown(&categories) {
        info!(
            category = %summary.name,
            chapters = summary.chapters,
            questions = summary.questions,
            "category loaded"
        );
    }

    Ok(categories)
}

/// Write `categories` as a versioned data file.
pub fn export_data(categories: &[Category], path: &Path) -> eyre::Result<()> {
    let json = to_quiz_document_json(categories)?;
    std::fs::write(path, json)
        .map_err(|e| eyre::eyre!("failed to write {}: {e}", path.display()))?;
    info!(path = %path.display(), "quiz data exported");
    Ok(())
}

/// Assemble the document, write it, and render the PDF when enabled.
pub fn build(
    categories: &[Category],
    config: &BuildConfig,
    base_dir: &Path,
    renderer: &dyn Renderer,
) -> eyre::Result<BuildReport> {
    info!("assembling document");
    let html = assemble_document(categories, &config.document)?;

    let html_path = BuildConfig::resolve(base_dir, &config.output_html);
    std::fs::write(&html_path, &html)
        .map_err(|e| eyre::eyre!("failed to write {}: {e}", html_path.display()))?;
    info!(path = %html_path.display(), "HTML written");

    let pdf_path = if config.render_pdf {
        let resource_dir = config.resource_dir(base_dir);
        info!(base = %resource_dir.display(), "rendering PDF");
        let pdf = renderer.render(&html, &resource_dir)?;
        let pdf_path = BuildConfig::resolve(base_dir, &config.output_pdf);
        std::fs::write(&pdf_path, pdf)
            .map_err(|e| eyre::eyre!("failed to write {}: {e}", pdf_path.display()))?;
        info!(path = %pdf_path.display(), "PDF written");
        Some(pdf_path)
    } else {
        None
    };

    let totals = QuizTotals::from_categories(categories);
    info!(
        categories = totals.categories,
        chapters = totals.chapters,
        main_questions = totals.main_questions,
        similar_questions = totals.similar_questions,
        total_questions = totals.total_questions(),
        "build complete"
    );

    Ok(BuildReport {
        totals,
        html_path,
        pdf_path,
    })
}
