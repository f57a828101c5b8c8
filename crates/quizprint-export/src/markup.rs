//! Question text cleanup: image and line-break tags, then math spans.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::latex::latex_to_readable;

/// Color of converted math, inline and display alike.
pub const MATH_ACCENT: &str = "#c2410c";

const IMAGE_STYLE: &str = "max-width:300px; margin:8px 0; display:block;";

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<img\s+src='([^']+)'[^>]*>").expect("valid regex"));
static INLINE_MATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\\\((.+?)\\\)").expect("valid regex"));
static DISPLAY_MATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\\\[(.+?)\\\]").expect("valid regex"));

/// Turn one authored question field into print-ready markup.
///
/// Stages run in order; math conversion assumes tags are already normalized.
pub fn process_text(text: &str) -> String {
    let text = IMAGE_RE.replace_all(text, |caps: &Captures| {
        format!(r#"<img src="{}" style="{IMAGE_STYLE}">"#, &caps[1])
    });

    let text = text.replace("<br>", "<br/>");

    let text = INLINE_MATH_RE.replace_all(&text, |caps: &Captures| math_span(&caps[1]));

    DISPLAY_MATH_RE
        .replace_all(&text, |caps: &Captures| {
            format!(
                r#"<div style="text-align:center;margin:6px 0;">{}</div>"#,
                math_span(&caps[1])
            )
        })
        .into_owned()
}

fn math_span(latex: &str) -> String {
    format!(
        r#"<b style="color:{MATH_ACCENT};">{}</b>"#,
        latex_to_readable(latex)
    )
}
