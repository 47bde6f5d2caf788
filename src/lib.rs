//! Funkin Launcher - rhythm-game engine launcher and mod manager
//!
//! Library crate for the launcher core: engine/version/path resolution,
//! mod discovery and operations, process launch, settings and localization.
//! The GUI shell lives in the binary, not here.

pub mod config;
pub mod engines;
pub mod i18n;
pub mod launch;
pub mod logging;
pub mod mods;
pub mod paths;
