//! Game launch invocation
//!
//! Launching is fire-and-forget: the child's working directory is the
//! version root, it receives the selected mod as `--mod=<name>`, and the
//! launcher never waits on it or captures its output.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug)]
pub enum LaunchError {
    /// No launchable file in the version root.
    ExeNotFound,
    /// More than one launchable file; refusing to guess which one is the
    /// game.
    Ambiguous { candidates: Vec<String> },
    /// The executable exists but the OS refused to start it.
    Spawn { exe: PathBuf, source: io::Error },
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchError::ExeNotFound => write!(f, "no executable found in version directory"),
            LaunchError::Ambiguous { candidates } => {
                write!(f, "multiple executables found: {}", candidates.join(", "))
            }
            LaunchError::Spawn { exe, source } => {
                write!(f, "failed to start {}: {}", exe.display(), source)
            }
        }
    }
}

impl std::error::Error for LaunchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LaunchError::Spawn { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Handle returned after a successful spawn. The child's lifetime is not
/// tracked beyond this.
#[derive(Debug)]
pub struct LaunchedGame {
    pub exe: PathBuf,
    pub pid: u32,
}

// ============================================================================
// Executable lookup
// ============================================================================

/// Finds the version's executable among the immediate files of
/// `version_root`.
///
/// Exactly one launchable file is required: none is an error the user sees,
/// and several is refused rather than picking whichever the filesystem
/// listed first.
pub fn find_executable(version_root: &Path) -> Result<PathBuf, LaunchError> {
    let entries = match fs::read_dir(version_root) {
        Ok(entries) => entries,
        Err(_) => return Err(LaunchError::ExeNotFound),
    };

    let mut candidates: Vec<PathBuf> = entries
        .flatten()
        .filter(|entry| is_launchable(entry))
        .map(|entry| entry.path())
        .collect();

    match candidates.len() {
        0 => Err(LaunchError::ExeNotFound),
        1 => Ok(candidates.remove(0)),
        _ => {
            let mut names: Vec<String> = candidates
                .iter()
                .filter_map(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .collect();
            names.sort();
            Err(LaunchError::Ambiguous { candidates: names })
        }
    }
}

#[cfg(windows)]
fn is_launchable(entry: &fs::DirEntry) -> bool {
    let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
    is_file
        && entry
            .file_name()
            .to_string_lossy()
            .to_ascii_lowercase()
            .ends_with(".exe")
}

#[cfg(unix)]
fn is_launchable(entry: &fs::DirEntry) -> bool {
    use std::os::unix::fs::PermissionsExt;

    let Ok(metadata) = entry.metadata() else {
        return false;
    };
    metadata.is_file() && metadata.permissions().mode() & 0o111 != 0
}

// ============================================================================
// Spawn
// ============================================================================

/// Starts the version's executable with the selected mod and detaches.
pub fn launch_game(version_root: &Path, mod_name: &str) -> Result<LaunchedGame, LaunchError> {
    let exe = find_executable(version_root)?;

    let child = Command::new(&exe)
        .arg(format!("--mod={}", mod_name))
        .current_dir(version_root)
        .spawn()
        .map_err(|source| LaunchError::Spawn {
            exe: exe.clone(),
            source,
        })?;

    Ok(LaunchedGame {
        exe,
        pid: child.id(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[cfg(unix)]
    fn write_executable(dir: &Path, name: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
        path
    }

    #[test]
    fn empty_version_root_is_exe_not_found() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            find_executable(dir.path()),
            Err(LaunchError::ExeNotFound)
        ));
    }

    #[test]
    fn missing_version_root_is_exe_not_found() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            find_executable(&dir.path().join("nope")),
            Err(LaunchError::ExeNotFound)
        ));
    }

    #[cfg(unix)]
    #[test]
    fn plain_files_are_not_launchable() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("readme.txt"), "hi").unwrap();
        fs::create_dir(dir.path().join("mods")).unwrap();
        assert!(matches!(
            find_executable(dir.path()),
            Err(LaunchError::ExeNotFound)
        ));
    }

    #[cfg(unix)]
    #[test]
    fn single_executable_is_found() {
        let dir = tempdir().unwrap();
        let exe = write_executable(dir.path(), "Psych Engine");
        fs::write(dir.path().join("data.dat"), "x").unwrap();
        assert_eq!(find_executable(dir.path()).unwrap(), exe);
    }

    #[cfg(unix)]
    #[test]
    fn two_executables_are_ambiguous() {
        let dir = tempdir().unwrap();
        write_executable(dir.path(), "game");
        write_executable(dir.path(), "crash-handler");
        match find_executable(dir.path()) {
            Err(LaunchError::Ambiguous { candidates }) => {
                assert_eq!(candidates, vec!["crash-handler", "game"]);
            }
            other => panic!("expected Ambiguous, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn launch_spawns_detached_child() {
        let dir = tempdir().unwrap();
        let exe = write_executable(dir.path(), "game");
        let launched = launch_game(dir.path(), "CoolMod").unwrap();
        assert_eq!(launched.exe, exe);
        assert!(launched.pid > 0);
    }

    #[test]
    fn launch_without_executable_spawns_nothing() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            launch_game(dir.path(), "CoolMod"),
            Err(LaunchError::ExeNotFound)
        ));
    }
}
