use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::error::ExportError;

/// Converts an assembled HTML document into PDF bytes.
///
/// Relative resource references (images) resolve against `base_path`.
/// Failures are surfaced as [`ExportError::Render`] and never retried.
pub trait Renderer {
    fn render(&self, document: &str, base_path: &Path) -> Result<Vec<u8>, ExportError>;
}

/// Renders by shelling out to the `weasyprint` command-line tool.
///
/// The document is piped on stdin and the PDF read back from stdout.
#[derive(Debug, Clone)]
pub struct WeasyPrintRenderer {
    pub program: String,
}

impl Default for WeasyPrintRenderer {
    fn default() -> Self {
        Self {
            program: "weasyprint".to_string(),
        }
    }
}

impl WeasyPrintRenderer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Renderer for WeasyPrintRenderer {
    fn render(&self, document: &str, base_path: &Path) -> Result<Vec<u8>, ExportError> {
        debug!(program = %self.program, base = %base_path.display(), "starting renderer");

        let mut child = Command::new(&self.program)
            .arg("--base-url")
            .arg(base_path)
            .arg("-")
            .arg("-")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ExportError::Render(format!("failed to start {}: {e}", self.program)))?;

        // Write on a separate thread so a full stdout pipe cannot deadlock us.
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| ExportError::Render("renderer stdin unavailable".to_string()))?;
        let input = document.to_owned();
        let writer = std::thread::spawn(move || stdin.write_all(input.as_bytes()));

        let output = child
            .wait_with_output()
            .map_err(|e| ExportError::Render(format!("{} did not finish: {e}", self.program)))?;

        let write_result = writer.join();

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExportError::Render(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        match write_result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                return Err(ExportError::Render(format!(
                    "failed to send document to {}: {e}",
                    self.program
                )));
            }
            Err(_) => {
                return Err(ExportError::Render(
                    "renderer input thread panicked".to_string(),
                ));
            }
        }

        if output.stdout.is_empty() {
            return Err(ExportError::Render(format!(
                "{} produced no output",
                self.program
            )));
        }

        info!(bytes = output.stdout.len(), "PDF rendered");
        Ok(output.stdout)
    }
}
