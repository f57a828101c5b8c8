use serde::{Deserialize, Serialize};

/// A main quiz prompt with its optional variants.
///
/// `question` holds raw markup: HTML fragments plus `\( … \)` / `\[ … \]`
/// math spans, exactly as authored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(default)]
    pub question: String,
    #[serde(
        rename = "similarQuestions",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub similar_questions: Vec<SimilarQuestion>,
}

/// A similar-question entry. Sources mix full objects and bare strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SimilarQuestion {
    Text(String),
    Question(Question),
}

impl Question {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            similar_questions: Vec::new(),
        }
    }
}

impl SimilarQuestion {
    pub fn text(&self) -> &str {
        match self {
            SimilarQuestion::Text(text) => text,
            SimilarQuestion::Question(q) => &q.question,
        }
    }
}

impl From<&str> for SimilarQuestion {
    fn from(text: &str) -> Self {
        SimilarQuestion::Text(text.to_string())
    }
}
