//! Dataset path settings.
//!
//! The CLI resolves the dataset location through one priority chain so
//! behavior matches between ad-hoc flags, the environment, and saved
//! configuration. The settings file is
//! `~/.config/streamlens/settings.toml`.

use std::io;
use std::path::{Path, PathBuf};

/// Environment variable overriding the dataset CSV location.
pub const CSV_PATH_ENV: &str = "STREAMLENS_CSV_PATH";

/// Filename used when nothing else is configured.
pub const DEFAULT_CSV_FILE: &str = "netflix_titles.csv";

/// Canonical path to the settings file.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("streamlens").join("settings.toml")
}

/// Resolve the dataset CSV path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `STREAMLENS_CSV_PATH` environment variable
/// 3. Saved `dataset.csv_path` in `settings.toml`
/// 4. `netflix_titles.csv` in the current directory
pub fn resolve_csv_path(cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Ok(p) = std::env::var(CSV_PATH_ENV) {
        if !p.is_empty() {
            return PathBuf::from(p);
        }
    }
    if let Some(p) = load_csv_path() {
        return p;
    }
    PathBuf::from(DEFAULT_CSV_FILE)
}

/// Read `dataset.csv_path` from `settings.toml`, if set.
fn load_csv_path() -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let path = doc.get("dataset")?.get("csv_path")?.as_str()?;
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

/// Save (or clear) the dataset path in `settings.toml`.
///
/// Uses `toml::Value` for a surgical update so unrelated settings are
/// preserved.
pub fn save_csv_path(path: Option<&Path>) -> io::Result<()> {
    let settings = settings_path();
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(&settings) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    // Ensure [dataset] table exists
    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let dataset = table
        .entry("dataset")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let dataset_table = dataset
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[dataset] is not a table"))?;

    match path {
        Some(p) => {
            dataset_table.insert(
                "csv_path".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            dataset_table.remove("csv_path");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, &settings)?;

    Ok(())
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}
