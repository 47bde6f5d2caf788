//! Application state and event handlers
//!
//! Everything the UI shows lives in this struct; the render functions only
//! read it and call the methods below. The methods are thin wrappers over
//! the library crate so the core stays testable without a UI.

use std::path::{Path, PathBuf};

use funkin_launcher::config::LauncherConfig;
use funkin_launcher::engines::{self, Engine, Version};
use funkin_launcher::i18n::{Language, Strings};
use funkin_launcher::launch::{self, LaunchError};
use funkin_launcher::logging::{log_action, log_error, log_launch};
use funkin_launcher::mods::{self, ModError};
use funkin_launcher::paths::EnginePaths;

// ============================================================================
// Types
// ============================================================================

#[derive(PartialEq, Clone, Copy)]
pub enum Tab {
    Launcher,
    Settings,
}

#[derive(PartialEq, Clone, Copy)]
pub enum StatusKind {
    Info,
    Error,
}

pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

// ============================================================================
// Application State
// ============================================================================

pub struct LauncherApp {
    /// Working directory the `engines/` layout is resolved against.
    root: PathBuf,

    pub current_tab: Tab,
    pub config: LauncherConfig,

    // Selections
    pub engine: Engine,
    pub versions: Vec<Version>,
    pub selected_version: Option<usize>,
    pub mods: Vec<String>,
    pub selected_mod: Option<String>,

    /// Mod awaiting delete confirmation.
    pub pending_delete: Option<String>,
    /// Last operation outcome shown at the bottom of the launcher tab.
    pub status: Option<StatusMessage>,
}

impl Default for LauncherApp {
    fn default() -> Self {
        let config = LauncherConfig::load();
        let engine = config.selected_engine();
        let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        let mut app = Self {
            root,
            current_tab: Tab::Launcher,
            config,
            engine,
            versions: Vec::new(),
            selected_version: None,
            mods: Vec::new(),
            selected_mod: None,
            pending_delete: None,
            status: None,
        };
        app.refresh_versions();
        app
    }
}

impl LauncherApp {
    pub fn strings(&self) -> &'static Strings {
        self.config.lang.strings()
    }

    pub fn current_version(&self) -> Option<&Version> {
        self.selected_version.and_then(|i| self.versions.get(i))
    }

    fn paths(&self) -> Option<EnginePaths> {
        self.current_version()
            .map(|version| EnginePaths::resolve(&self.root, self.engine, version))
    }

    // ------------------------------------------------------------------
    // Refresh
    // ------------------------------------------------------------------

    /// Re-enumerates versions for the current engine and auto-selects the
    /// first one (the launcher copy when present).
    pub fn refresh_versions(&mut self) {
        self.versions = engines::list_versions(&self.root, self.engine);
        self.selected_version = if self.versions.is_empty() { None } else { Some(0) };
        self.refresh_mods();
    }

    /// Re-lists the mod union for the current selection. The selected mod
    /// is kept only if it still exists on disk.
    pub fn refresh_mods(&mut self) {
        self.mods = match self.paths() {
            Some(paths) => mods::list_mods(&paths),
            None => Vec::new(),
        };
        if let Some(selected) = &self.selected_mod {
            if !self.mods.iter().any(|m| m == selected) {
                self.selected_mod = None;
            }
        }
    }

    // ------------------------------------------------------------------
    // Selection events
    // ------------------------------------------------------------------

    pub fn set_engine(&mut self, engine: Engine) {
        if engine == self.engine {
            return;
        }
        self.engine = engine;
        self.config.engine = engine.display_name().to_string();
        self.selected_mod = None;
        self.status = None;
        log_action(&format!("Engine selected: {}", engine.display_name()));
        self.refresh_versions();
    }

    pub fn select_version(&mut self, index: usize) {
        if index < self.versions.len() {
            self.selected_version = Some(index);
            self.refresh_mods();
        }
    }

    pub fn set_language(&mut self, lang: Language) {
        if lang == self.config.lang {
            return;
        }
        self.config.lang = lang;
        // The default-version label is localized, so re-enumerate.
        self.refresh_versions();
    }

    pub fn toggle_theme(&mut self) {
        self.config.dark = !self.config.dark;
    }

    // ------------------------------------------------------------------
    // Mod operations
    // ------------------------------------------------------------------

    pub fn add_mod_from(&mut self, src: &Path) {
        let Some(paths) = self.paths() else {
            return;
        };
        match mods::add_mod(&paths, src) {
            Ok(name) => {
                log_action(&format!("Added mod '{}' from {}", name, src.display()));
                self.selected_mod = Some(name);
                self.status = None;
                self.refresh_mods();
            }
            Err(e) => {
                log_error(&format!("Add mod failed: {}", e));
                let strings = self.strings();
                let text = match e {
                    ModError::AlreadyExists { .. } => strings.error_mod_exists.to_string(),
                    other => format!("{} ({})", strings.error_mod_add, other),
                };
                self.set_error(text);
            }
        }
    }

    pub fn request_delete_selected(&mut self) {
        if let Some(name) = self.selected_mod.clone() {
            self.pending_delete = Some(name);
        }
    }

    pub fn cancel_pending_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn confirm_pending_delete(&mut self) {
        let Some(name) = self.pending_delete.take() else {
            return;
        };
        let Some(paths) = self.paths() else {
            return;
        };
        match mods::remove_mod(&paths, &name) {
            Ok(()) => {
                log_action(&format!("Deleted mod '{}'", name));
                self.status = None;
            }
            Err(e) => {
                log_error(&format!("Delete mod failed: {}", e));
                let text = format!("{} ({})", self.strings().error_mod_del, e);
                self.set_error(text);
            }
        }
        self.refresh_mods();
    }

    // ------------------------------------------------------------------
    // Launch
    // ------------------------------------------------------------------

    pub fn play(&mut self) {
        let Some(mod_name) = self.selected_mod.clone() else {
            return;
        };
        let Some(paths) = self.paths() else {
            return;
        };
        match launch::launch_game(&paths.version_root, &mod_name) {
            Ok(launched) => {
                log_launch(&format!(
                    "Started {} (pid {}) with mod '{}'",
                    launched.exe.display(),
                    launched.pid,
                    mod_name
                ));
                self.status = None;
            }
            Err(e) => {
                log_error(&format!("Launch failed: {}", e));
                let strings = self.strings();
                let text = match &e {
                    LaunchError::ExeNotFound => strings.error_exe.to_string(),
                    LaunchError::Ambiguous { .. } => {
                        format!("{} ({})", strings.error_exe_multiple, e)
                    }
                    LaunchError::Spawn { .. } => format!("{} ({})", strings.error_launch, e),
                };
                self.set_error(text);
            }
        }
    }

    // ------------------------------------------------------------------
    // Settings
    // ------------------------------------------------------------------

    pub fn save_settings(&mut self) {
        self.config.engine = self.engine.display_name().to_string();
        match self.config.save() {
            Ok(()) => {
                log_action("Settings saved");
                self.status = Some(StatusMessage {
                    kind: StatusKind::Info,
                    text: self.strings().save_success.to_string(),
                });
            }
            Err(e) => {
                log_error(&format!("Saving settings failed: {}", e));
                let text = format!("{} ({})", self.strings().save_error, e);
                self.set_error(text);
            }
        }
    }

    fn set_error(&mut self, text: String) {
        self.status = Some(StatusMessage {
            kind: StatusKind::Error,
            text,
        });
    }
}
