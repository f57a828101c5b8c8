use std::path::{Path, PathBuf};

use quizprint_export::styles::DocumentStyles;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

/// Config file looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "quizprint.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    pub config_version: u32,
    /// Quiz page or data file, relative to the working directory.
    pub input: PathBuf,
    pub output_html: PathBuf,
    pub output_pdf: PathBuf,
    /// When false only the HTML document is written.
    pub render_pdf: bool,
    /// WeasyPrint executable name or path.
    pub renderer_program: String,
    pub document: DocumentStyles,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            input: PathBuf::from("index.html"),
            output_html: PathBuf::from("all_chapters.html"),
            output_pdf: PathBuf::from("all_chapters.pdf"),
            render_pdf: true,
            renderer_program: "weasyprint".to_string(),
            document: DocumentStyles::default(),
        }
    }
}

impl BuildConfig {
    /// Resolve `path` against the working directory unless it is absolute.
    pub fn resolve(base_dir: &Path, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base_dir.join(path)
        }
    }

    /// Directory of the input file. Relative image references in question
    /// markup resolve against it when rendering.
    pub fn resource_dir(&self, base_dir: &Path) -> PathBuf {
        let input = Self::resolve(base_dir, &self.input);
        match input.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => base_dir.to_path_buf(),
        }
    }
}

/// Load `path`, or the defaults if no file exists there.
pub fn load_config_or_default(path: &Path) -> eyre::Result<BuildConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(BuildConfig::default());
    }
    load_config(path)
}

pub fn load_config(path: &Path) -> eyre::Result<BuildConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> eyre::Result<BuildConfig> {
    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: BuildConfig = serde_json::from_value(migrated)?;
    config.document.validate()?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update quizprint."
        ));
    }

    // v0 → v1: unversioned files share the v1 shape; only stamp the version.
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(CURRENT_VERSION.into()),
        );
        tracing::info!("migrated config v0 → v1");
    }

    Ok(json)
}

pub fn save_config(config: &BuildConfig, path: &Path) -> eyre::Result<()> {
    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;
    std::fs::write(path, json.as_bytes())?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
