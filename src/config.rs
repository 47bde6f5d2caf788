//! Persisted launcher settings
//!
//! A single flat JSON file in the working directory. Loading never fails:
//! a missing or corrupt file falls back to the defaults (dark theme,
//! Portuguese) with a logged warning, and saving overwrites the whole file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::engines::Engine;
use crate::i18n::Language;
use crate::logging::log_warning;

pub const CONFIG_FILE: &str = "launcher_config.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LauncherConfig {
    /// Dark theme on/off.
    #[serde(default = "default_dark")]
    pub dark: bool,
    /// UI locale, stored as "pt" / "en".
    #[serde(default)]
    pub lang: Language,
    /// Last selected engine, stored as its display label. Free text in the
    /// file; resolved through `selected_engine` with a fallback.
    #[serde(default)]
    pub engine: String,
}

fn default_dark() -> bool {
    true
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            dark: true,
            lang: Language::Pt,
            engine: String::new(),
        }
    }
}

impl LauncherConfig {
    fn get_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE)
    }

    pub fn load() -> Self {
        Self::load_from(&Self::get_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            if let Ok(content) = fs::read_to_string(path) {
                match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        log_warning(&format!(
                            "Ignoring corrupt {}: {}",
                            path.display(),
                            e
                        ));
                    }
                }
            }
        }
        Self::default()
    }

    /// Saves on explicit user action only; there is no autosave.
    pub fn save(&self) -> io::Result<()> {
        self.save_to(&Self::get_path())
    }

    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, json)
    }

    /// The engine the stored label points at, or the first supported
    /// engine when the label is unknown.
    pub fn selected_engine(&self) -> Engine {
        Engine::from_display(&self.engine).unwrap_or(Engine::ALL[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let config = LauncherConfig::load_from(&dir.path().join("launcher_config.json"));
        assert!(config.dark);
        assert_eq!(config.lang, Language::Pt);
        assert_eq!(config.selected_engine(), Engine::Psych);
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("launcher_config.json");
        fs::write(&path, "{not json at all").unwrap();
        assert_eq!(LauncherConfig::load_from(&path), LauncherConfig::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("launcher_config.json");
        let config = LauncherConfig {
            dark: false,
            lang: Language::En,
            engine: "Codename Engine".into(),
        };
        config.save_to(&path).unwrap();

        let loaded = LauncherConfig::load_from(&path);
        assert_eq!(loaded, config);
        assert_eq!(loaded.selected_engine(), Engine::Codename);
    }

    #[test]
    fn reads_the_original_flat_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("launcher_config.json");
        fs::write(
            &path,
            r#"{"dark": false, "lang": "en", "engine": "Psych Engine"}"#,
        )
        .unwrap();
        let config = LauncherConfig::load_from(&path);
        assert!(!config.dark);
        assert_eq!(config.lang, Language::En);
        assert_eq!(config.selected_engine(), Engine::Psych);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("launcher_config.json");
        fs::write(&path, r#"{"lang": "en"}"#).unwrap();
        let config = LauncherConfig::load_from(&path);
        assert!(config.dark);
        assert_eq!(config.lang, Language::En);
        assert_eq!(config.engine, "");
    }

    #[test]
    fn unknown_engine_label_falls_back_to_first() {
        let config = LauncherConfig {
            engine: "Kade Engine".into(),
            ..Default::default()
        };
        assert_eq!(config.selected_engine(), Engine::Psych);
    }
}
