//! Static probe of the SUT source tree
//!
//! Paths are evaluated against the configured root (the process working
//! directory by default). Folders must be directories and files regular
//! files; a miss surfaces as `CaseError::Structural`.

use std::path::{Path, PathBuf};

use cpcheck_core::{CaseError, Config};

/// Root and source extension of the expected SUT tree.
#[derive(Debug, Clone)]
pub struct SourceTree {
    root: PathBuf,
    ext: String,
}

impl SourceTree {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, ext: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            ext: ext.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.sut_root.clone(), config.source_ext.clone())
    }

    #[must_use]
    pub fn dir_exists(&self, rel: &str) -> bool {
        self.root.join(rel).is_dir()
    }

    #[must_use]
    pub fn file_exists(&self, rel: &str) -> bool {
        self.root.join(rel).is_file()
    }

    /// `stem` plus the configured source extension, e.g. `.../User.java`.
    #[must_use]
    pub fn source_file(&self, stem: &str) -> String {
        format!("{stem}.{}", self.ext)
    }

    /// Assert the directory exists.
    ///
    /// # Errors
    ///
    /// Returns `CaseError::Structural` carrying `msg` when it does not.
    pub fn require_dir(&self, rel: &str, msg: &str) -> Result<(), CaseError> {
        if self.dir_exists(rel) {
            Ok(())
        } else {
            Err(CaseError::Structural(msg.to_string()))
        }
    }

    /// Assert the regular file exists.
    ///
    /// # Errors
    ///
    /// Returns `CaseError::Structural` carrying `msg` when it does not.
    pub fn require_file(&self, rel: &str, msg: &str) -> Result<(), CaseError> {
        if self.file_exists(rel) {
            Ok(())
        } else {
            Err(CaseError::Structural(msg.to_string()))
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}
