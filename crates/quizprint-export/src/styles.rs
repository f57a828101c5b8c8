use serde::{Deserialize, Serialize};

use crate::error::ExportError;

/// Characters that would end a CSS value, string or rule early. Style values
/// are written into the stylesheet unescaped.
const CSS_BREAKING: &[char] = &['\'', '"', ';', '{', '}', '<', '>', '\\', '\n', '\r'];

/// Document styling and fixed labels for the printed quiz book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyles {
    /// Value of the `<html lang>` attribute.
    pub lang: String,

    /// Cover title, also used as the document `<title>`.
    pub title: String,

    pub subtitle: String,

    /// Heading of the table-of-contents page.
    pub toc_heading: String,

    /// Label shown above each group of similar questions.
    pub similar_label: String,

    /// Accent for headings, rules and labels (CSS color).
    pub accent_color: String,

    /// Body font family (e.g. "Noto Sans KR").
    pub body_font: String,

    /// Body text font size in points.
    pub body_size_pt: f32,

    /// CSS `@page` size (e.g. "A4", "letter").
    pub page_size: String,

    /// CSS `@page` margin shorthand.
    pub page_margin: String,

    /// Stylesheet imported for the body font. `None` relies on local fonts.
    pub font_import_url: Option<String>,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            lang: "ko".to_string(),
            title: "확률과 통계".to_string(),
            subtitle: "구두테스트 퀴즈 전체 문제 정리".to_string(),
            toc_heading: "목차".to_string(),
            similar_label: "유사 문제".to_string(),
            accent_color: "#f97316".to_string(),
            body_font: "Noto Sans KR".to_string(),
            body_size_pt: 10.0,
            page_size: "A4".to_string(),
            page_margin: "2cm 1.8cm".to_string(),
            font_import_url: Some(
                "https://fonts.googleapis.com/css2?family=Noto+Sans+KR:wght@400;500;600;700;800&display=swap"
                    .to_string(),
            ),
        }
    }
}

impl DocumentStyles {
    /// Reject values that cannot be placed verbatim inside the stylesheet.
    pub fn validate(&self) -> Result<(), ExportError> {
        let css_values = [
            ("page_size", &self.page_size),
            ("page_margin", &self.page_margin),
            ("body_font", &self.body_font),
            ("accent_color", &self.accent_color),
        ];
        for (field, value) in css_values {
            if value.contains(CSS_BREAKING) {
                return Err(ExportError::InvalidStyle {
                    field,
                    value: value.clone(),
                });
            }
        }

        if let Some(url) = &self.font_import_url
            && url.contains(['\'', '<', '\\', '\n', '\r'])
        {
            return Err(ExportError::InvalidStyle {
                field: "font_import_url",
                value: url.clone(),
            });
        }

        Ok(())
    }
}
