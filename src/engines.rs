//! Engine catalog and version enumeration
//!
//! The supported engines are a fixed set. Each engine maps to a directory
//! slug under `engines/`; the slug is an explicit mapping, never derived by
//! parsing the display label.

use std::fs;
use std::path::Path;

use crate::i18n::Language;

// ============================================================================
// Engines
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Engine {
    Psych,
    VSlice,
    Codename,
}

impl Engine {
    pub const ALL: [Engine; 3] = [Engine::Psych, Engine::VSlice, Engine::Codename];

    /// Human-readable label shown in the engine selector.
    pub fn display_name(self) -> &'static str {
        match self {
            Engine::Psych => "Psych Engine",
            Engine::VSlice => "V-Slice (Base Game)",
            Engine::Codename => "Codename Engine",
        }
    }

    /// Directory name under `engines/`.
    pub fn slug(self) -> &'static str {
        match self {
            Engine::Psych => "psych",
            Engine::VSlice => "v-slice",
            Engine::Codename => "codename",
        }
    }

    /// Looks an engine up by its display label. The config file stores the
    /// label as free text, so unknown labels return `None` and the caller
    /// falls back to the first engine.
    pub fn from_display(label: &str) -> Option<Engine> {
        Engine::ALL.into_iter().find(|e| e.display_name() == label)
    }

    pub fn from_slug(slug: &str) -> Option<Engine> {
        Engine::ALL.into_iter().find(|e| e.slug() == slug)
    }
}

// ============================================================================
// Versions
// ============================================================================

/// A selectable installation of an engine. `Launcher` is the bundled copy
/// under `engines/<slug>/launcher`; named versions live under
/// `engines/<slug>/versions/<name>`. The localized "default" label is
/// resolved at display time only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Version {
    Launcher,
    Named(String),
}

impl Version {
    pub fn label(&self, lang: Language) -> &str {
        match self {
            Version::Launcher => lang.strings().default_ver,
            Version::Named(name) => name,
        }
    }
}

/// Lists the selectable versions for an engine.
///
/// The launcher copy comes first when present, then the subdirectories of
/// `engines/<slug>/versions` in directory-listing order. Missing
/// directories simply contribute no entries; an empty result means the UI
/// shows its "no versions" placeholder.
pub fn list_versions(root: &Path, engine: Engine) -> Vec<Version> {
    let engine_dir = root.join("engines").join(engine.slug());
    let mut versions = Vec::new();

    if engine_dir.join("launcher").is_dir() {
        versions.push(Version::Launcher);
    }

    if let Ok(entries) = fs::read_dir(engine_dir.join("versions")) {
        for entry in entries.flatten() {
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if is_dir {
                let name = entry.file_name().to_string_lossy().into_owned();
                versions.push(Version::Named(name));
            }
        }
    }

    versions
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn slugs_are_stable() {
        assert_eq!(Engine::Psych.slug(), "psych");
        assert_eq!(Engine::VSlice.slug(), "v-slice");
        assert_eq!(Engine::Codename.slug(), "codename");
    }

    #[test]
    fn display_lookup_round_trips() {
        for engine in Engine::ALL {
            assert_eq!(Engine::from_display(engine.display_name()), Some(engine));
            assert_eq!(Engine::from_slug(engine.slug()), Some(engine));
        }
        assert_eq!(Engine::from_display("Kade Engine"), None);
    }

    #[test]
    fn launcher_entry_comes_first() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("engines/psych");
        fs::create_dir_all(base.join("launcher")).unwrap();
        fs::create_dir_all(base.join("versions/0.7.3")).unwrap();

        let versions = list_versions(dir.path(), Engine::Psych);
        assert_eq!(versions.len(), 2);
        assert_eq!(versions[0], Version::Launcher);
        assert_eq!(versions[1], Version::Named("0.7.3".into()));
    }

    #[test]
    fn launcher_only_install_lists_single_default() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("engines/psych/launcher")).unwrap();

        let versions = list_versions(dir.path(), Engine::Psych);
        assert_eq!(versions, vec![Version::Launcher]);
        assert_eq!(versions[0].label(Language::En), "Default (Launcher)");
        assert_eq!(versions[0].label(Language::Pt), "Padrão (Launcher)");
    }

    #[test]
    fn missing_engine_dir_yields_no_versions() {
        let dir = tempdir().unwrap();
        assert!(list_versions(dir.path(), Engine::Codename).is_empty());
    }

    #[test]
    fn files_under_versions_are_ignored() {
        let dir = tempdir().unwrap();
        let versions_dir = dir.path().join("engines/v-slice/versions");
        fs::create_dir_all(versions_dir.join("0.5.0")).unwrap();
        fs::write(versions_dir.join("readme.txt"), "not a version").unwrap();

        let versions = list_versions(dir.path(), Engine::VSlice);
        assert_eq!(versions, vec![Version::Named("0.5.0".into())]);
    }
}
