use quizprint_core::error::SourceError;
use quizprint_core::models::SimilarQuestion;
use quizprint_core::source::{
    CURRENT_VERSION, SourceKind, extract_categories, extract_literal, load_categories,
    load_quiz_document, to_quiz_document_json,
};

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
<script>
    const categories = [
        {
            name: 'Chapter 1. 경우의 수',
            chapters: [
                {
                    name: '1-1 순열',
                    questions: [
                        // comments are allowed in the literal
                        {
                            question: "What is \\(\\frac{1}{2}\\)?",
                            similarQuestions: [
                                { question: 'Variant A' },
                                'Variant B',
                            ],
                        },
                        { question: "No variants" },
                    ],
                },
            ],
        },
        {
            name: 'Chapter 2. 확률',
        },
    ];

    function render() {}
</script>
</body>
</html>
"#;

#[test]
fn extracts_categories_from_page() {
    let categories = extract_categories(PAGE).unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].name, "Chapter 1. 경우의 수");
    assert_eq!(categories[0].chapters[0].name, "1-1 순열");

    let questions = &categories[0].chapters[0].questions;
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].question, r"What is \(\frac{1}{2}\)?");
    assert_eq!(questions[0].similar_questions.len(), 2);
    assert_eq!(questions[0].similar_questions[0].text(), "Variant A");
    assert_eq!(
        questions[0].similar_questions[1],
        SimilarQuestion::Text("Variant B".to_string())
    );
    assert!(questions[1].similar_questions.is_empty());
}

#[test]
fn missing_optional_fields_default_to_empty() {
    let categories = extract_categories(PAGE).unwrap();
    assert!(categories[1].chapters.is_empty());
    assert_eq!(categories[1].question_count(), 0);
}

#[test]
fn missing_marker_is_extraction_error() {
    let err = extract_categories("<html><script>const other = [];</script></html>").unwrap_err();
    assert!(matches!(err, SourceError::Extraction { .. }));
}

#[test]
fn invalid_literal_is_parse_error() {
    let page = "const categories = [\n  { name: \n    ];";
    let err = extract_categories(page).unwrap_err();
    assert!(matches!(err, SourceError::Parse(_)));
}

#[test]
fn nested_array_close_does_not_end_literal() {
    let page = "const categories = [\n  { name: 'a', chapters: [\n  ],\n  },\n];\nconst x = 1;";
    let literal = extract_literal(page, "categories").unwrap();
    assert!(literal.starts_with('['));
    assert!(literal.ends_with(']'));
    assert!(literal.contains("chapters"));
    assert_eq!(extract_categories(page).unwrap().len(), 1);
}

#[test]
fn empty_literal_on_one_line() {
    assert!(extract_categories("const categories = [];").unwrap().is_empty());
}

#[test]
fn bare_array_data_file_is_migrated() {
    let doc = load_quiz_document("[{ name: 'A', chapters: [] },]").unwrap();
    assert_eq!(doc.version, CURRENT_VERSION);
    assert_eq!(doc.categories.len(), 1);
}

#[test]
fn versioned_data_file_loads() {
    let text = r#"{ "version": 1, "categories": [{ "name": "A" }] }"#;
    let categories = load_categories(SourceKind::DataFile, text).unwrap();
    assert_eq!(categories[0].name, "A");
}

#[test]
fn newer_data_file_version_is_rejected() {
    let err = load_quiz_document(r#"{ "version": 99, "categories": [] }"#).unwrap_err();
    assert!(matches!(
        err,
        SourceError::UnsupportedVersion { found: 99, .. }
    ));
}

#[test]
fn exported_data_file_reloads_to_same_tree() {
    let categories = extract_categories(PAGE).unwrap();
    let json = to_quiz_document_json(&categories).unwrap();
    assert!(json.contains("\"version\": 1"));
    assert_eq!(load_quiz_document(&json).unwrap().categories, categories);
}

#[test]
fn source_kind_follows_extension() {
    use std::path::Path;
    assert_eq!(
        SourceKind::from_path(Path::new("index.HTML")),
        Some(SourceKind::EmbeddedHtml)
    );
    assert_eq!(
        SourceKind::from_path(Path::new("quiz.json5")),
        Some(SourceKind::DataFile)
    );
    assert_eq!(SourceKind::from_path(Path::new("notes.txt")), None);
}

#[test]
fn out_of_range_version_is_rejected() {
    let err = load_quiz_document(r#"{ "version": 4294967297, "categories": [] }"#).unwrap_err();
    assert!(matches!(err, SourceError::Parse(_)));
}

#[test]
fn non_integer_version_is_rejected() {
    for text in [
        r#"{ "version": "2", "categories": [] }"#,
        r#"{ "version": 1.5, "categories": [] }"#,
        r#"{ "version": -1, "categories": [] }"#,
    ] {
        let err = load_quiz_document(text).unwrap_err();
        assert!(matches!(err, SourceError::Parse(_)), "input: {text}");
    }
}
