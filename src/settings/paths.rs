use std::env;
use std::path::{Path, PathBuf};

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Return `$HOME/.config/funapp`, ensuring it exists.
///
/// Output: `Some(PathBuf)` when HOME is set and directory can be created; `None` otherwise.
fn home_config_dir() -> Option<PathBuf> {
    if let Ok(home) = env::var("HOME") {
        let dir = Path::new(&home).join(".config").join("funapp");
        if std::fs::create_dir_all(&dir).is_ok() {
            return Some(dir);
        }
    }
    None
}

/// What: Resolve the configuration directory (ensured to exist).
///
/// Inputs:
/// - `override_dir`: Directory passed on the command line, if any
///
/// Output:
/// - `override_dir` when given, else `$HOME/.config/funapp`, else `$XDG_CONFIG_HOME/funapp`.
pub fn config_dir(override_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir {
        let _ = std::fs::create_dir_all(dir);
        return dir.to_path_buf();
    }
    if let Some(dir) = home_config_dir() {
        return dir;
    }
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join("funapp");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under `config`: "<config>/logs" (ensured to exist)
pub fn logs_dir(config: &Path) -> PathBuf {
    let dir = config.join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Settings file under `config`.
pub fn settings_path(config: &Path) -> PathBuf {
    config.join("funapp.toml")
}

/// Preference blob (favorites) under `config`.
pub fn prefs_path(config: &Path) -> PathBuf {
    config.join("prefs.conf")
}
