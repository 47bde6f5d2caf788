//! Path resolution for engine installs
//!
//! Pure path arithmetic: no directory here is required to exist. The root
//! is the launcher's working directory, passed in explicitly so the
//! resolver stays deterministic and testable.

use std::path::{Path, PathBuf};

use crate::engines::{Engine, Version};

/// The three directories every mod/launch operation works against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnginePaths {
    /// Mods shared by every version of the engine: `engines/<slug>/mods`.
    pub global_mods: PathBuf,
    /// Mods private to the selected version: `<version_root>/mods`.
    pub version_mods: PathBuf,
    /// Directory holding the version's executable.
    pub version_root: PathBuf,
}

impl EnginePaths {
    #[must_use]
    pub fn resolve(root: &Path, engine: Engine, version: &Version) -> Self {
        let engine_dir = root.join("engines").join(engine.slug());
        let version_root = match version {
            Version::Launcher => engine_dir.join("launcher"),
            Version::Named(name) => engine_dir.join("versions").join(name),
        };

        Self {
            global_mods: engine_dir.join("mods"),
            version_mods: version_root.join("mods"),
            version_root,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launcher_version_resolves_to_launcher_dir() {
        let paths = EnginePaths::resolve(Path::new("/base"), Engine::Psych, &Version::Launcher);
        assert_eq!(paths.global_mods, Path::new("/base/engines/psych/mods"));
        assert_eq!(paths.version_root, Path::new("/base/engines/psych/launcher"));
        assert_eq!(paths.version_mods, Path::new("/base/engines/psych/launcher/mods"));
    }

    #[test]
    fn named_version_resolves_under_versions_dir() {
        let version = Version::Named("0.7.3".into());
        let paths = EnginePaths::resolve(Path::new("/base"), Engine::Codename, &version);
        assert_eq!(paths.global_mods, Path::new("/base/engines/codename/mods"));
        assert_eq!(
            paths.version_root,
            Path::new("/base/engines/codename/versions/0.7.3")
        );
        assert_eq!(
            paths.version_mods,
            Path::new("/base/engines/codename/versions/0.7.3/mods")
        );
    }

    #[test]
    fn resolution_is_deterministic() {
        for engine in Engine::ALL {
            for version in [Version::Launcher, Version::Named("week7".into())] {
                let a = EnginePaths::resolve(Path::new("rel"), engine, &version);
                let b = EnginePaths::resolve(Path::new("rel"), engine, &version);
                assert_eq!(a, b);
            }
        }
    }
}
