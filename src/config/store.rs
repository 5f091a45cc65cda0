//! Shared configuration handle for the UI.
//!
//! CLI overrides are applied to the loaded `Config` before the store is built,
//! so the store itself is read-only.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::types::Config;

/// Cheaply clonable snapshot of the effective config and where it came from.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    inner: Arc<Config>,
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(config),
            path,
        }
    }

    pub fn get(&self) -> &Config {
        &self.inner
    }

    /// Config file path, whether or not the file exists.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
