// File-backed mirror of the signed-in user. A convenience cache for
// reload survival, never a source of truth: anything unreadable or
// malformed reads back as "nobody signed in".
use std::path::PathBuf;

use crate::blog::models::User;
use crate::error::AppResult;

#[derive(Debug, Clone)]
pub struct SessionCache {
    path: PathBuf,
}

impl SessionCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Read the cached user. The cache has no schema version, so a shape
    /// mismatch after an upgrade must read as absent, not crash.
    pub fn load(&self) -> Option<User> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&content) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Discarding malformed session cache: {}", e);
                None
            }
        }
    }

    pub fn save(&self, user: &User) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(user)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    /// Remove the cache entry. Already-absent is fine.
    pub fn clear(&self) -> AppResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
