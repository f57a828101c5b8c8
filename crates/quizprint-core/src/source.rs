//! Extractor: turns source text into the quiz tree.
//!
//! Two inputs are understood. The legacy one is an HTML page whose script
//! declares `const categories = [ ... ];`; the literal is scraped out and
//! parsed as JSON5. The preferred one is a standalone, versioned data file
//! ([`QuizDocument`]) that needs no scraping.

use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SourceError;
use crate::models::Category;

/// Declaration name of the embedded data literal in quiz pages.
pub const DATA_MARKER: &str = "categories";

/// Current data-file version. Bump when the shape changes and add a step
/// to [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizDocument {
    pub version: u32,
    #[serde(default)]
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// HTML page with a script-embedded `const categories = [...]` literal.
    EmbeddedHtml,
    /// Versioned JSON/JSON5 data file.
    DataFile,
}

impl SourceKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "html" | "htm" => Some(SourceKind::EmbeddedHtml),
            "json" | "json5" => Some(SourceKind::DataFile),
            _ => None,
        }
    }
}

/// Parse categories out of `text` according to `kind`.
pub fn load_categories(kind: SourceKind, text: &str) -> Result<Vec<Category>, SourceError> {
    match kind {
        SourceKind::EmbeddedHtml => extract_categories(text),
        SourceKind::DataFile => Ok(load_quiz_document(text)?.categories),
    }
}

/// Locate the `const categories = [...]` literal in a page and parse it.
pub fn extract_categories(text: &str) -> Result<Vec<Category>, SourceError> {
    let literal = extract_literal(text, DATA_MARKER)?;
    debug!(literal_len = literal.len(), "found embedded quiz literal");
    let categories: Vec<Category> = json5::from_str(literal)?;
    Ok(categories)
}

/// Return the bracketed literal assigned by `const <name> = [ ... ];`.
///
/// The literal ends at the first line consisting only of indentation and
/// `];`. Nested arrays close with `],` and so never terminate the match.
pub fn extract_literal<'a>(text: &'a str, name: &str) -> Result<&'a str, SourceError> {
    let pattern = format!(
        r"(?s)const\s+{}\s*=\s*(\[\s*\]|\[.*?\n[ \t]*\])\s*;",
        regex::escape(name)
    );
    let re = Regex::new(&pattern).map_err(|e| SourceError::Parse(e.to_string()))?;

    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| SourceError::Extraction {
            marker: format!("const {name} ="),
        })
}

/// Parse a versioned quiz data file (JSON or JSON5).
///
/// A bare top-level array is accepted as version 0 and migrated.
pub fn load_quiz_document(text: &str) -> Result<QuizDocument, SourceError> {
    let raw: serde_json::Value = json5::from_str(text)?;

    let on_disk_version = match &raw {
        serde_json::Value::Object(obj) => match obj.get("version") {
            Some(v) => parse_version(v)?,
            None => 0,
        },
        _ => 0,
    };

    let migrated = migrate(raw, on_disk_version)?;
    Ok(serde_json::from_value(migrated)?)
}

/// Read a `version` field. JSON5 may hand integers back as floats, so a
/// whole-valued float is accepted; anything else is a parse error.
fn parse_version(value: &serde_json::Value) -> Result<u32, SourceError> {
    let invalid = || SourceError::Parse(format!("invalid quiz data version: {value}"));

    if let Some(n) = value.as_u64() {
        return u32::try_from(n).map_err(|_| invalid());
    }
    match value.as_f64() {
        Some(f) if f.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&f) => Ok(f as u32),
        _ => Err(invalid()),
    }
}

/// Sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(json: serde_json::Value, from_version: u32) -> Result<serde_json::Value, SourceError> {
    if from_version > CURRENT_VERSION {
        return Err(SourceError::UnsupportedVersion {
            found: from_version,
            supported: CURRENT_VERSION,
        });
    }

    let mut obj = match json {
        // v0: the literal from a quiz page, saved as-is.
        serde_json::Value::Array(categories) => {
            let mut obj = serde_json::Map::new();
            obj.insert("categories".to_string(), serde_json::Value::Array(categories));
            obj
        }
        serde_json::Value::Object(obj) => obj,
        other => {
            return Err(SourceError::Parse(format!(
                "expected an object or array at top level, found {other}"
            )));
        }
    };

    if from_version < 1 {
        debug!("migrated quiz data v0 → v1");
    }

    obj.insert(
        "version".to_string(),
        serde_json::Value::Number(CURRENT_VERSION.into()),
    );
    Ok(serde_json::Value::Object(obj))
}

/// Serialize a tree as a pretty-printed data file stamped with the current
/// version.
pub fn to_quiz_document_json(categories: &[Category]) -> Result<String, SourceError> {
    let doc = QuizDocument {
        version: CURRENT_VERSION,
        categories: categories.to_vec(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}
