//! Aggregate counts over a parsed quiz tree.

use serde::Serialize;

use crate::models::Category;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QuizTotals {
    pub categories: usize,
    pub chapters: usize,
    /// One per `Question` entity.
    pub main_questions: usize,
    /// One per entry in any `similarQuestions` list.
    pub similar_questions: usize,
}

/// Per-category counts used for progress reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub name: String,
    pub chapters: usize,
    pub questions: usize,
}

impl QuizTotals {
    pub fn from_categories(categories: &[Category]) -> Self {
        let mut totals = QuizTotals {
            categories: categories.len(),
            ..Default::default()
        };

        for chapter in categories.iter().flat_map(|c| &c.chapters) {
            totals.chapters += 1;
            totals.main_questions += chapter.question_count();
            totals.similar_questions += chapter.similar_count();
        }

        totals
    }

    /// Main questions plus every similar question.
    pub fn total_questions(&self) -> usize {
        self.main_questions + self.similar_questions
    }

    pub fn breakdown(categories: &[Category]) -> Vec<CategorySummary> {
        categories
            .iter()
            .map(|c| CategorySummary {
                name: c.name.clone(),
                chapters: c.chapters.len(),
                questions: c.question_count(),
            })
            .collect()
    }
}
