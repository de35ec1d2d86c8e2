//! Init command - write a settings.json to the data directory

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use userdir_core::config::{Config, SETTINGS_FILE};

use crate::output;

pub fn run(data_dir: &Path, minimum_age: Option<i64>, force: bool) -> Result<()> {
    let path = write_settings(data_dir, minimum_age, force)?;
    output::success(&format!("Wrote {}", path.display()));
    Ok(())
}

/// Write default settings, with an optional stricter minimum age
///
/// Refuses to replace an existing file unless `force` is set.
pub fn write_settings(data_dir: &Path, minimum_age: Option<i64>, force: bool) -> Result<PathBuf> {
    let settings_path = data_dir.join(SETTINGS_FILE);
    if settings_path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            settings_path.display()
        );
    }

    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {:?}", data_dir))?;

    let mut config = Config::default();
    if let Some(age) = minimum_age {
        config.minimum_age = age;
    }
    config.save(data_dir)?;

    Ok(settings_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_settings_creates_loadable_file() {
        let dir = tempdir().unwrap();
        let data_dir = dir.path().join("nested");

        let path = write_settings(&data_dir, Some(21), false).unwrap();
        assert!(path.exists());

        let config = Config::load_with_env(&data_dir, |_| None).unwrap();
        assert_eq!(config.minimum_age, 21);
    }

    #[test]
    fn test_write_settings_keeps_existing_file_without_force() {
        let dir = tempdir().unwrap();
        write_settings(dir.path(), Some(25), false).unwrap();

        let err = write_settings(dir.path(), None, false).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        let config = Config::load_with_env(dir.path(), |_| None).unwrap();
        assert_eq!(config.minimum_age, 25);

        write_settings(dir.path(), None, true).unwrap();
        let config = Config::load_with_env(dir.path(), |_| None).unwrap();
        assert_eq!(config.minimum_age, 18);
    }

    #[test]
    fn test_write_settings_rejects_lower_minimum_age() {
        let dir = tempdir().unwrap();
        let err = write_settings(dir.path(), Some(16), false).unwrap_err();
        assert!(err.to_string().contains("minimum age cannot be lower than 18"));
    }
}
