//! Mod discovery and add/delete operations
//!
//! A mod is nothing more than a directory tree identified by its base name.
//! Discovery re-lists the filesystem on every call; no registry state is
//! cached between refreshes.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::paths::EnginePaths;

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug)]
pub enum ModError {
    /// A mod directory of that name already exists in one of the mod dirs.
    AlreadyExists { name: String },
    /// The name is empty, a path traversal, or otherwise not a plain
    /// directory name.
    InvalidName { name: String },
    /// Classified filesystem failure (permissions, disk, broken source).
    Io { context: String, source: io::Error },
}

impl ModError {
    fn io(context: impl Into<String>, source: io::Error) -> Self {
        ModError::Io {
            context: context.into(),
            source,
        }
    }
}

impl fmt::Display for ModError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModError::AlreadyExists { name } => {
                write!(f, "mod '{}' already exists", name)
            }
            ModError::InvalidName { name } => {
                write!(f, "'{}' is not a valid mod name", name)
            }
            ModError::Io { context, source } => write!(f, "{}: {}", context, source),
        }
    }
}

impl std::error::Error for ModError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ============================================================================
// Discovery
// ============================================================================

/// Union of the mod directory names under the global and version-specific
/// mod paths. Non-directories are ignored, duplicates collapse, and the
/// result is sorted so display order never depends on filesystem order.
pub fn list_mods(paths: &EnginePaths) -> Vec<String> {
    let mut found = BTreeSet::new();
    for dir in [&paths.global_mods, &paths.version_mods] {
        let Ok(entries) = fs::read_dir(dir) else {
            continue;
        };
        for entry in entries.flatten() {
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if is_dir {
                found.insert(entry.file_name().to_string_lossy().into_owned());
            }
        }
    }
    found.into_iter().collect()
}

// ============================================================================
// Add / delete
// ============================================================================

/// Copies the directory tree at `src` into the version mod directory under
/// its base name and returns that name.
///
/// Conflict policy: if a mod of the same name is already present in either
/// mod directory the copy is refused outright. No overwrite, no merge.
pub fn add_mod(paths: &EnginePaths, src: &Path) -> Result<String, ModError> {
    let name = match src.file_name() {
        Some(base) => base.to_string_lossy().into_owned(),
        None => {
            return Err(ModError::InvalidName {
                name: src.display().to_string(),
            })
        }
    };

    if paths.version_mods.join(&name).exists() || paths.global_mods.join(&name).exists() {
        return Err(ModError::AlreadyExists { name });
    }

    fs::create_dir_all(&paths.version_mods)
        .map_err(|e| ModError::io(format!("creating {}", paths.version_mods.display()), e))?;

    copy_dir_recursive(src, &paths.version_mods.join(&name))?;
    Ok(name)
}

/// Removes the named mod from both the version-specific and global mod
/// directories. Missing directories are fine; deleting an already-absent
/// mod is a no-op, so the operation is idempotent.
pub fn remove_mod(paths: &EnginePaths, name: &str) -> Result<(), ModError> {
    if !is_plain_name(name) {
        return Err(ModError::InvalidName { name: name.into() });
    }

    let mut first_failure: Option<ModError> = None;
    for dir in [&paths.version_mods, &paths.global_mods] {
        let target = dir.join(name);
        if !target.exists() {
            continue;
        }
        if let Err(e) = fs::remove_dir_all(&target) {
            // Keep going: best-effort cleanup of the other location.
            if first_failure.is_none() {
                first_failure = Some(ModError::io(format!("removing {}", target.display()), e));
            }
        }
    }

    match first_failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// A mod name must be a single path component.
fn is_plain_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
}

fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<(), ModError> {
    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|e| {
            let source = e
                .into_io_error()
                .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "unreadable entry"));
            ModError::io(format!("reading {}", src.display()), source)
        })?;

        let rel = entry
            .path()
            .strip_prefix(src)
            .map_err(|_| ModError::io(
                format!("reading {}", src.display()),
                io::Error::new(io::ErrorKind::Other, "entry outside source tree"),
            ))?;
        let target: PathBuf = dest.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .map_err(|e| ModError::io(format!("creating {}", target.display()), e))?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| ModError::io(format!("creating {}", parent.display()), e))?;
            }
            fs::copy(entry.path(), &target)
                .map_err(|e| ModError::io(format!("copying to {}", target.display()), e))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::{Engine, Version};
    use tempfile::tempdir;

    fn paths_in(root: &Path) -> EnginePaths {
        EnginePaths::resolve(root, Engine::Psych, &Version::Named("1.0".into()))
    }

    #[test]
    fn union_is_sorted_and_deduped() {
        let dir = tempdir().unwrap();
        let paths = paths_in(dir.path());
        for name in ["A", "B"] {
            fs::create_dir_all(paths.global_mods.join(name)).unwrap();
        }
        for name in ["B", "C"] {
            fs::create_dir_all(paths.version_mods.join(name)).unwrap();
        }
        // A stray file must not show up as a mod.
        fs::write(paths.global_mods.join("notes.txt"), "x").unwrap();

        assert_eq!(list_mods(&paths), vec!["A", "B", "C"]);
        // Listing again without filesystem changes is identical.
        assert_eq!(list_mods(&paths), vec!["A", "B", "C"]);
    }

    #[test]
    fn listing_missing_dirs_is_empty() {
        let dir = tempdir().unwrap();
        assert!(list_mods(&paths_in(dir.path())).is_empty());
    }

    #[test]
    fn add_copies_nested_trees() {
        let dir = tempdir().unwrap();
        let paths = paths_in(dir.path());
        let src = dir.path().join("incoming/CoolMod");
        fs::create_dir_all(src.join("songs/tutorial")).unwrap();
        fs::write(src.join("pack.json"), "{}").unwrap();
        fs::write(src.join("songs/tutorial/inst.ogg"), "audio").unwrap();

        let name = add_mod(&paths, &src).unwrap();
        assert_eq!(name, "CoolMod");
        let copied = paths.version_mods.join("CoolMod");
        assert!(copied.join("pack.json").is_file());
        assert!(copied.join("songs/tutorial/inst.ogg").is_file());
        assert_eq!(list_mods(&paths), vec!["CoolMod"]);
    }

    #[test]
    fn add_refuses_existing_name() {
        let dir = tempdir().unwrap();
        let paths = paths_in(dir.path());
        let src = dir.path().join("CoolMod");
        fs::create_dir_all(&src).unwrap();
        fs::create_dir_all(paths.global_mods.join("CoolMod")).unwrap();

        match add_mod(&paths, &src) {
            Err(ModError::AlreadyExists { name }) => assert_eq!(name, "CoolMod"),
            other => panic!("expected AlreadyExists, got {:?}", other),
        }
    }

    #[test]
    fn remove_deletes_from_both_dirs_and_is_idempotent() {
        let dir = tempdir().unwrap();
        let paths = paths_in(dir.path());
        fs::create_dir_all(paths.global_mods.join("Shared/sub")).unwrap();
        fs::create_dir_all(paths.version_mods.join("Shared")).unwrap();

        remove_mod(&paths, "Shared").unwrap();
        assert!(!paths.global_mods.join("Shared").exists());
        assert!(!paths.version_mods.join("Shared").exists());

        // Second delete of the now-absent name must not fail.
        remove_mod(&paths, "Shared").unwrap();
        assert!(list_mods(&paths).is_empty());
    }

    #[test]
    fn remove_rejects_traversal_names() {
        let dir = tempdir().unwrap();
        let paths = paths_in(dir.path());
        for bad in ["", ".", "..", "a/b", "a\\b"] {
            assert!(matches!(
                remove_mod(&paths, bad),
                Err(ModError::InvalidName { .. })
            ));
        }
    }
}
