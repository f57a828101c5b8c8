use std::cell::RefCell;
use std::path::{Path, PathBuf};

use quizprint_cli::config::BuildConfig;
use quizprint_cli::pipeline::{export_data, load_tree, run};
use quizprint_core::error::SourceError;
use quizprint_export::error::ExportError;
use quizprint_export::pdf::Renderer;

const PAGE: &str = r#"<html><body><script>
    const categories = [
        {
            name: 'Chapter 1',
            chapters: [
                {
                    name: '1-1',
                    questions: [
                        {
                            question: "What is \\(\\frac{1}{2}\\)?<br><img src='img/half.png'>",
                            similarQuestions: ["What is \\(\\frac{1}{3}\\)?", { question: 'Third' }],
                        },
                    ],
                },
            ],
        },
    ];
</script></body></html>
"#;

/// Records what it was asked to render and returns fixed bytes.
#[derive(Default)]
struct StubRenderer {
    calls: RefCell<Vec<(String, PathBuf)>>,
}

impl Renderer for StubRenderer {
    fn render(&self, document: &str, base_path: &Path) -> Result<Vec<u8>, ExportError> {
        self.calls
            .borrow_mut()
            .push((document.to_string(), base_path.to_path_buf()));
        Ok(b"%PDF-1.7 stub".to_vec())
    }
}

struct FailingRenderer;

impl Renderer for FailingRenderer {
    fn render(&self, _document: &str, _base_path: &Path) -> Result<Vec<u8>, ExportError> {
        Err(ExportError::Render("engine crashed".to_string()))
    }
}

#[test]
fn full_run_writes_html_and_pdf() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), PAGE).unwrap();

    let renderer = StubRenderer::default();
    let report = run(&BuildConfig::default(), dir.path(), &renderer).unwrap();

    assert_eq!(report.totals.main_questions, 1);
    assert_eq!(report.totals.total_questions(), 3);
    assert_eq!(report.html_path, dir.path().join("all_chapters.html"));
    assert_eq!(report.pdf_path, Some(dir.path().join("all_chapters.pdf")));

    let html = std::fs::read_to_string(&report.html_path).unwrap();
    assert!(html.contains("(1)/(2)"));
    assert!(html.contains("(1)/(3)"));
    assert!(html.contains(r#"<img src="img/half.png""#));
    assert_eq!(std::fs::read(dir.path().join("all_chapters.pdf")).unwrap(), b"%PDF-1.7 stub");

    let calls = renderer.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, html);
    assert_eq!(calls[0].1, dir.path());
}

#[test]
fn missing_marker_fails_before_any_output() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<html>no data here</html>").unwrap();

    let renderer = StubRenderer::default();
    let err = run(&BuildConfig::default(), dir.path(), &renderer).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<SourceError>(),
        Some(SourceError::Extraction { .. })
    ));
    assert!(!dir.path().join("all_chapters.html").exists());
    assert!(!dir.path().join("all_chapters.pdf").exists());
    assert!(renderer.calls.borrow().is_empty());
}

#[test]
fn missing_input_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_tree(&BuildConfig::default(), dir.path()).unwrap_err();
    assert!(err.to_string().contains("index.html"));
}

#[test]
fn render_failure_is_surfaced() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), PAGE).unwrap();

    let err = run(&BuildConfig::default(), dir.path(), &FailingRenderer).unwrap_err();

    match err.downcast_ref::<ExportError>() {
        Some(ExportError::Render(detail)) => assert_eq!(detail, "engine crashed"),
        other => panic!("expected render error, got {other:?}"),
    }
    assert!(!dir.path().join("all_chapters.pdf").exists());
}

#[test]
fn html_only_skips_renderer() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), PAGE).unwrap();

    let config = BuildConfig {
        render_pdf: false,
        ..BuildConfig::default()
    };
    let renderer = StubRenderer::default();
    let report = run(&config, dir.path(), &renderer).unwrap();

    assert!(report.pdf_path.is_none());
    assert!(report.html_path.exists());
    assert!(renderer.calls.borrow().is_empty());
}

#[test]
fn exported_data_file_drives_a_second_run() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), PAGE).unwrap();

    let categories = load_tree(&BuildConfig::default(), dir.path()).unwrap();
    let data_path = dir.path().join("quiz.json");
    export_data(&categories, &data_path).unwrap();

    let config = BuildConfig {
        input: PathBuf::from("quiz.json"),
        render_pdf: false,
        ..BuildConfig::default()
    };
    assert_eq!(load_tree(&config, dir.path()).unwrap(), categories);
}

#[test]
fn renderer_base_is_the_input_directory() {
    let dir = tempfile::tempdir().unwrap();
    let sub = dir.path().join("sub");
    std::fs::create_dir(&sub).unwrap();
    std::fs::write(sub.join("index.html"), PAGE).unwrap();

    let config = BuildConfig {
        input: PathBuf::from("sub/index.html"),
        ..BuildConfig::default()
    };
    let renderer = StubRenderer::default();
    let report = run(&config, dir.path(), &renderer).unwrap();

    let calls = renderer.calls.borrow();
    assert_eq!(calls[0].1, sub);
    assert_eq!(report.html_path, dir.path().join("all_chapters.html"));
}
