//! CLI command implementations

pub mod demo;
pub mod init;
pub mod shell;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use userdir_core::DirectoryContext;

/// Default data directory: ~/.userdir, or the working directory when no
/// home directory can be found
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".userdir"))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Load settings from the data directory and build a fresh directory
pub fn get_context(data_dir: &Path) -> Result<DirectoryContext> {
    DirectoryContext::load(data_dir)
        .with_context(|| format!("Failed to load settings from {:?}", data_dir))
}
