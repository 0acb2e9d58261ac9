//! Model store: lazy, cached loading of classifier artifacts
//!
//! Artifacts are loaded from disk on first use and cached for the lifetime of
//! the store. The cache only grows; a deterministic classifier reloaded from
//! the same file cannot produce a different model, so there is no eviction
//! and no retry.

use crate::artifact::ClassifierArtifact;
use eduscope_core::{Error, Result};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// Name of the binary educational/non-educational artifact.
pub const EDUCATIONAL_MODEL: &str = "educated_model";

/// Name of the multi-class category artifact.
pub const CATEGORY_MODEL: &str = "cat_model";

/// Cached, thread-safe store of classifier artifacts.
///
/// The mutex is held across the check-then-insert so concurrent callers
/// asking for the same missing artifact perform at most one disk load.
pub struct ModelStore {
    models_dir: PathBuf,
    cache: Mutex<HashMap<String, Arc<ClassifierArtifact>>>,
    disk_loads: AtomicU64,
}

impl ModelStore {
    /// Create a store over a directory of artifact files.
    pub fn new(models_dir: impl Into<PathBuf>) -> Self {
        Self {
            models_dir: models_dir.into(),
            cache: Mutex::new(HashMap::new()),
            disk_loads: AtomicU64::new(0),
        }
    }

    /// Resolve an artifact name to its on-disk path (`<dir>/<name>.json`).
    pub fn artifact_path(&self, name: &str) -> PathBuf {
        self.models_dir.join(format!("{name}.json"))
    }

    /// Load an artifact by name, serving repeated lookups from the cache.
    ///
    /// A cache hit performs no I/O. A miss deserializes and validates the
    /// artifact file; missing or corrupt files fail with
    /// [`Error::ArtifactLoad`], which is fatal to the calling prediction.
    pub fn load(&self, name: &str) -> Result<Arc<ClassifierArtifact>> {
        let mut cache = self.cache.lock();
        if let Some(artifact) = cache.get(name) {
            debug!(artifact = name, "model cache hit");
            return Ok(Arc::clone(artifact));
        }

        let artifact = Arc::new(self.load_from_disk(name)?);
        cache.insert(name.to_string(), Arc::clone(&artifact));
        Ok(artifact)
    }

    fn load_from_disk(&self, name: &str) -> Result<ClassifierArtifact> {
        let path = self.artifact_path(name);
        info!(artifact = name, path = %path.display(), "loading model from disk");
        self.disk_loads.fetch_add(1, Ordering::Relaxed);

        let bytes = std::fs::read(&path)
            .map_err(|e| Error::artifact_load(name, format!("{}: {e}", path.display())))?;
        let artifact: ClassifierArtifact = serde_json::from_slice(&bytes)
            .map_err(|e| Error::artifact_load(name, format!("invalid artifact format: {e}")))?;
        artifact
            .validate()
            .map_err(|reason| Error::artifact_load(name, reason))?;
        Ok(artifact)
    }

    /// Whether an artifact is already resident in the cache.
    pub fn is_cached(&self, name: &str) -> bool {
        self.cache.lock().contains_key(name)
    }

    /// Number of artifacts loaded from disk so far (cache hits excluded).
    pub fn load_count(&self) -> u64 {
        self.disk_loads.load(Ordering::Relaxed)
    }

    /// Names of all cached artifacts.
    pub fn cached_names(&self) -> Vec<String> {
        self.cache.lock().keys().cloned().collect()
    }

    /// The directory this store resolves artifact names against.
    pub fn models_dir(&self) -> &Path {
        &self.models_dir
    }
}
