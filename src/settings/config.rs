//! Loading `funapp.toml` and writing its skeleton.

use std::fs;
use std::path::Path;

use super::types::AppSettings;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Commented template written when no settings file exists yet.
pub const SKELETON_CONFIG_CONTENT: &str = r#"# funapp settings
# Every key is optional; omitted keys use the defaults shown here.

# system | light | dark
appearance_mode = "system"
featured_carousel_enabled = true
simulate_errors = false
ai_summary_enabled = true

[search]
min_query_chars = 2
items_debounce_ms = 400
latency_min_ms = 300
latency_max_ms = 800
randomize_search_order = true
search_debounce_ms = 300

[latency]
catalog_ms = 500
detail_ms = 300
search_ms = 300
profile_ms = 400

[network]
# timeout_ms = 10000

[summary]
max_sentences = 2
"#;

/// What: Parse settings from TOML text.
///
/// Inputs:
/// - `content`: TOML document; unknown keys are ignored, missing keys default
///
/// Output:
/// - Parsed `AppSettings` or the TOML error.
pub fn parse_settings(content: &str) -> Result<AppSettings> {
    let settings: AppSettings = toml::from_str(content)?;
    Ok(settings)
}

/// What: Load settings from `path`, creating a skeleton when it is missing.
///
/// Inputs:
/// - `path`: Location of `funapp.toml`
///
/// Output:
/// - Parsed settings; defaults when the file is missing, unreadable, or invalid.
///
/// Details:
/// - Parse failures are logged and never abort startup.
pub fn load_settings(path: &Path) -> AppSettings {
    if !path.is_file() {
        if let Some(dir) = path.parent() {
            let _ = fs::create_dir_all(dir);
        }
        match fs::write(path, SKELETON_CONFIG_CONTENT) {
            Ok(()) => tracing::info!(path = %path.display(), "[Config] Wrote settings skeleton"),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "[Config] Failed to write settings skeleton");
            }
        }
        return AppSettings::default();
    }
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "[Config] Failed to read settings");
            return AppSettings::default();
        }
    };
    match parse_settings(&content) {
        Ok(settings) => {
            tracing::debug!(path = %path.display(), "[Config] Settings loaded");
            settings
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "[Config] Invalid settings; using defaults");
            AppSettings::default()
        }
    }
}
