use serde::{Deserialize, Serialize};

use super::question::Question;

/// Top-level grouping (a course unit). Order in the source is document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub name: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Category {
    /// Main questions across every chapter. Similar questions are not counted.
    pub fn question_count(&self) -> usize {
        self.chapters.iter().map(Chapter::question_count).sum()
    }
}

impl Chapter {
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn similar_count(&self) -> usize {
        self.questions.iter().map(|q| q.similar_questions.len()).sum()
    }
}
