//! Resolved configuration for a check run.

use std::path::{Path, PathBuf};

/// File looked up inside the target directory unless overridden
pub const DEFAULT_SPEC_FILE: &str = "openapi.json";

/// Directory searched when none is given
pub const DEFAULT_DIRECTORY: &str = "./";

/// What to check and how to report it, independent of how it was parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// Print progress lines while traversing
    pub verbose: bool,
    /// Color the report banner
    pub colors: bool,
    /// Directory containing the OpenAPI file
    pub directory: PathBuf,
    /// Name of the OpenAPI file inside `directory`
    pub file_name: String,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            verbose: false,
            colors: true,
            directory: PathBuf::from(DEFAULT_DIRECTORY),
            file_name: DEFAULT_SPEC_FILE.to_string(),
        }
    }
}

impl CheckConfig {
    #[must_use]
    pub fn for_directory(directory: impl AsRef<Path>) -> Self {
        CheckConfig {
            directory: directory.as_ref().to_path_buf(),
            ..CheckConfig::default()
        }
    }

    /// Full path of the file to check
    #[must_use]
    pub fn spec_path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_spec_path() {
        let config = CheckConfig::default();
        assert_eq!(config.spec_path(), Path::new("./openapi.json"));
        assert!(config.colors);
        assert!(!config.verbose);
    }

    #[test]
    fn test_for_directory() {
        let config = CheckConfig::for_directory("api/v1");
        assert_eq!(config.spec_path(), Path::new("api/v1/openapi.json"));
    }
}
