// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Directory resolution for the script manager layout.
//!
//! ```text
//! <root>/
//!   downloads/
//!     selenium/      custom browser driver
//!   helpers/
//!   logs/
//!   scripts/
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::Settings;

/// Subdirectories created under the root by [`AppDirectories::ensure`]
pub const STANDARD_DIRS: &[&str] = &["downloads", "logs", "scripts", "helpers"];

/// Name of the custom driver folder inside `downloads`
pub const DRIVER_DIR_NAME: &str = "selenium";

/// Errors from resolving or creating directories
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("could not determine application root (set SM_APP_DIR or SM_ROOT_DIR)")]
    NoRoot,

    #[error("failed to create directory {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Supplies the paths housekeeping operates on.
///
/// `None` means the location is not configured; consumers treat it as a no-op.
pub trait DirectoryResolver {
    /// Application root
    fn root(&self) -> Option<PathBuf>;
    /// Directory holding the application's own files
    fn internal_root(&self) -> Option<PathBuf>;

    fn logs(&self) -> Option<PathBuf> {
        self.root().map(|root| root.join("logs"))
    }

    fn downloads(&self) -> Option<PathBuf> {
        self.root().map(|root| root.join("downloads"))
    }

    /// Reserved custom driver folder
    fn driver_dir(&self) -> Option<PathBuf> {
        self.downloads().map(|downloads| downloads.join(DRIVER_DIR_NAME))
    }
}

/// Directories resolved from [`Settings`] and the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirectories {
    root: PathBuf,
    internal_root: Option<PathBuf>,
}

impl AppDirectories {
    /// Resolve root: `<settings.app_dir>/app` > `SM_ROOT_DIR` > `<data dir>/script-manager/app`.
    ///
    /// The internal root comes only from `settings.internal_dir`; the
    /// executable's location is never used.
    pub fn resolve(settings: &Settings) -> Result<Self, DirectoryError> {
        let root = if !settings.app_dir.as_os_str().is_empty() {
            settings.app_dir.join("app")
        } else if let Some(root) = crate::env::root_dir() {
            root
        } else {
            dirs::data_local_dir().ok_or(DirectoryError::NoRoot)?.join("script-manager").join("app")
        };
        let internal_root =
            settings.internal_dir.clone().filter(|dir| !dir.as_os_str().is_empty());
        Ok(Self { root, internal_root })
    }

    /// Directories rooted at an explicit path
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), internal_root: None }
    }

    pub fn with_internal_root(mut self, internal_root: Option<PathBuf>) -> Self {
        self.internal_root = internal_root;
        self
    }

    pub fn root_path(&self) -> &Path {
        &self.root
    }

    /// Create the root and its standard subdirectories if missing.
    pub fn ensure(&self) -> Result<(), DirectoryError> {
        create(&self.root)?;
        for name in STANDARD_DIRS {
            create(&self.root.join(name))?;
        }
        Ok(())
    }

    /// Create the custom driver folder (and `downloads`) if missing.
    pub fn create_driver_dir(&self) -> Result<PathBuf, DirectoryError> {
        let path = self.root.join("downloads").join(DRIVER_DIR_NAME);
        create(&path)?;
        Ok(path)
    }
}

impl DirectoryResolver for AppDirectories {
    fn root(&self) -> Option<PathBuf> {
        Some(self.root.clone())
    }

    fn internal_root(&self) -> Option<PathBuf> {
        self.internal_root.clone()
    }
}

fn create(path: &Path) -> Result<(), DirectoryError> {
    std::fs::create_dir_all(path)
        .map_err(|source| DirectoryError::Create { path: path.to_path_buf(), source })
}

#[cfg(test)]
#[path = "directories_tests.rs"]
mod tests;
