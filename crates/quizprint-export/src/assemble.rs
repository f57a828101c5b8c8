//! Document assembly: the quiz tree flattened into a template view.

use quizprint_core::models::{Category, Chapter, Question};
use quizprint_core::totals::QuizTotals;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ExportError;
use crate::markup::process_text;
use crate::render::render_document;
use crate::styles::DocumentStyles;

/// Everything the document template reads. Question text is already
/// transformed markup.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentView {
    pub styles: DocumentStyles,
    pub totals: QuizTotals,
    pub total_questions: usize,
    pub categories: Vec<CategoryView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
    pub name: String,
    pub chapters: Vec<ChapterView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChapterView {
    pub name: String,
    pub question_count: usize,
    pub questions: Vec<QuestionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub text: String,
    /// Transformed similar-question texts, in source order.
    pub similar: Vec<String>,
}

impl DocumentView {
    pub fn build(categories: &[Category], styles: &DocumentStyles) -> Self {
        let totals = QuizTotals::from_categories(categories);
        Self {
            styles: styles.clone(),
            totals,
            total_questions: totals.total_questions(),
            categories: categories.iter().map(CategoryView::from).collect(),
        }
    }
}

impl From<&Category> for CategoryView {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            chapters: category.chapters.iter().map(ChapterView::from).collect(),
        }
    }
}

impl From<&Chapter> for ChapterView {
    fn from(chapter: &Chapter) -> Self {
        Self {
            name: chapter.name.clone(),
            question_count: chapter.question_count(),
            questions: chapter.questions.iter().map(QuestionView::from).collect(),
        }
    }
}

impl From<&Question> for QuestionView {
    fn from(question: &Question) -> Self {
        Self {
            text: process_text(&question.question),
            similar: question
                .similar_questions
                .iter()
                .map(|sq| process_text(sq.text()))
                .collect(),
        }
    }
}

/// Build the complete print document for `categories`.
pub fn assemble_document(
    categories: &[Category],
    styles: &DocumentStyles,
) -> Result<String, ExportError> {
    let view = DocumentView::build(categories, styles);
    debug!(
        categories = view.totals.categories,
        chapters = view.totals.chapters,
        "document view built"
    );

    let document = render_document(&view)?;
    info!(bytes = document.len(), "document assembled");
    Ok(document)
}
