//! Persistence for site preferences. Today that is just the language choice.
//!
//! The browser build keeps the preference in `localStorage`; the desktop
//! shell stores a small JSON settings file in the per-user config directory
//! instead. Failures here are never fatal: callers log and fall back to the
//! default language.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage key the language preference lives under. Part of the deployed
/// site's storage contract: renaming it would drop every returning
/// visitor's saved choice.
pub const LANGUAGE_KEY: &str = "avelleLanguage";

#[derive(Debug, Error)]
pub enum StorageError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("couldn't access settings file: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(not(target_arch = "wasm32"))]
    #[error("settings file is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[cfg(not(target_arch = "wasm32"))]
    #[error("no per-user config directory on this system")]
    NoConfigDir,
    #[cfg(target_arch = "wasm32")]
    #[error("browser storage unavailable: {0}")]
    Browser(String),
}

/// Everything we persist between visits.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Read the stored language tag, if any.
pub fn load_language() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(LANGUAGE_KEY).ok()?
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = settings_path().ok()?;
        load_settings_from(&path).ok()?.language
    }
}

/// Persist the language tag. Best-effort: the caller decides whether a
/// failure is worth logging, rendering never depends on it.
pub fn store_language(tag: &str) -> Result<(), StorageError> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = web_sys::window()
            .ok_or_else(|| StorageError::Browser("no window".into()))?
            .local_storage()
            .map_err(|err| StorageError::Browser(format!("{err:?}")))?
            .ok_or_else(|| StorageError::Browser("localStorage disabled".into()))?;
        storage
            .set_item(LANGUAGE_KEY, tag)
            .map_err(|err| StorageError::Browser(format!("{err:?}")))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = settings_path()?;
        let mut settings = load_settings_from(&path).unwrap_or_default();
        settings.language = Some(tag.to_string());
        store_settings_at(&path, &settings)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn settings_path() -> Result<std::path::PathBuf, StorageError> {
    let dirs = directories::ProjectDirs::from("com", "Avelle", "avelle")
        .ok_or(StorageError::NoConfigDir)?;
    Ok(dirs.config_dir().join("settings.json"))
}

#[cfg(not(target_arch = "wasm32"))]
fn load_settings_from(path: &std::path::Path) -> Result<Settings, StorageError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(not(target_arch = "wasm32"))]
fn store_settings_at(path: &std::path::Path, settings: &Settings) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let raw = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, raw)?;
    Ok(())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip_through_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("settings.json");

        let settings = Settings {
            language: Some("uk".into()),
        };
        store_settings_at(&path, &settings).expect("store settings");

        let loaded = load_settings_from(&path).expect("load settings");
        assert_eq!(loaded, settings);
    }

    #[test]
    fn missing_file_is_an_error_not_a_panic() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.json");
        assert!(load_settings_from(&path).is_err());
    }

    #[test]
    fn malformed_file_reports_malformed() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json at all").expect("write fixture");

        match load_settings_from(&path) {
            Err(StorageError::Malformed(_)) => {}
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"language":"en","theme":"noir"}"#).expect("write fixture");

        let loaded = load_settings_from(&path).expect("load settings");
        assert_eq!(loaded.language.as_deref(), Some("en"));
    }
}
