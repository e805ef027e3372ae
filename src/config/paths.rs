//! Path management for fintro
//!
//! Resolves where the optional settings file lives.
//!
//! ## Path Resolution Order
//!
//! 1. `FINTRO_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/fintro` on Linux,
//!    `%APPDATA%\fintro` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FintroError;

/// Manages the paths used by fintro
#[derive(Debug, Clone)]
pub struct FintroPaths {
    /// Base directory for fintro configuration
    base_dir: PathBuf,
}

impl FintroPaths {
    /// Create a new FintroPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, FintroError> {
        let base_dir = if let Ok(custom) = std::env::var("FINTRO_CONFIG_DIR") {
            PathBuf::from(custom)
        } else {
            let dirs = ProjectDirs::from("", "", "fintro").ok_or_else(|| {
                FintroError::Config("Could not determine a home directory".into())
            })?;
            dirs.config_dir().to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create FintroPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the config directory
    pub fn config_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), FintroError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FintroError::Io(format!("Failed to create config directory: {}", e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_with_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintroPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.config_dir(), &temp_dir.path().to_path_buf());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintroPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();
        assert!(paths.config_dir().exists());
    }
}
