//! Command-line argument definition.

use std::path::PathBuf;

use clap::Parser;

use crate::settings::{AppearanceMode, FeatureFlag};

/// funapp - browse a small catalog, search it, and manage favorites from the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "funapp")]
#[command(version)]
#[command(about = "Browse a small catalog, search it, and manage favorites", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Filter the item list by text (Items screen)
    #[arg(short, long)]
    pub query: Option<String>,

    /// Filter the item list by category (Items screen)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Run a query through the Search tab
    #[arg(short, long)]
    pub search: Option<String>,

    /// Show the detail screen for an item id
    #[arg(short, long)]
    pub detail: Option<String>,

    /// Summarize the item shown with --detail
    #[arg(long, requires = "detail")]
    pub summarize: bool,

    /// Show a user profile (default: the signed-in user)
    #[arg(short, long, value_name = "USER_ID")]
    pub profile: Option<Option<String>>,

    /// Toggle an item id in the favorites before anything else
    #[arg(short = 't', long)]
    pub toggle_favorite: Option<String>,

    /// Make every catalog call fail (overrides the config file for this run)
    #[arg(long)]
    pub simulate_errors: bool,

    /// Appearance for this run: system, light, or dark
    #[arg(long, value_parser = parse_appearance)]
    pub appearance: Option<AppearanceMode>,

    /// Override a feature flag for this run, e.g. `featured_carousel=false` (repeatable)
    #[arg(long = "set-flag", value_name = "KEY=BOOL", value_parser = parse_flag_override)]
    pub set_flag: Vec<(FeatureFlag, bool)>,

    /// Start from default appearance and feature flags, ignoring the config file values
    #[arg(long)]
    pub reset_settings: bool,

    /// Configuration directory (default: ~/.config/funapp)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// What: Determine the log level from arguments.
///
/// Output:
/// - `"debug"` when `--verbose` is set, else `--log-level`.
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Parse an `--appearance` value.
///
/// Output:
/// - The mode, or a message listing the accepted values.
fn parse_appearance(s: &str) -> Result<AppearanceMode, String> {
    AppearanceMode::from_config_key(s)
        .ok_or_else(|| format!("unknown appearance '{s}' (expected system, light, or dark)"))
}

/// What: Parse a `--set-flag` value of the form `key=bool`.
///
/// Inputs:
/// - `s`: Flag key, `=`, and `true`/`false` (also `on`/`off`, `1`/`0`)
///
/// Output:
/// - Flag and its new value, or a message naming what was wrong.
fn parse_flag_override(s: &str) -> Result<(FeatureFlag, bool), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=BOOL, got '{s}'"))?;
    let flag = FeatureFlag::from_key(key).ok_or_else(|| {
        let known: Vec<&str> = FeatureFlag::ALL.iter().map(|f| f.key()).collect();
        format!("unknown flag '{}' (expected one of {})", key.trim(), known.join(", "))
    })?;
    let enabled = match value.trim().to_lowercase().as_str() {
        "true" | "on" | "1" => true,
        "false" | "off" | "0" => false,
        other => return Err(format!("invalid value '{other}' for {}", flag.key())),
    };
    Ok((flag, enabled))
}
