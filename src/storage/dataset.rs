//! Dataset loader.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::{StorageConfig, StorageError};
use crate::models::HeroRecord;

/// Reads and decodes the dataset file.
#[derive(Debug, Clone)]
pub struct DatasetReader {
    path: PathBuf,
}

impl DatasetReader {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record, preserving source order.
    ///
    /// Fails when the file is unreadable or its top level is not a JSON
    /// array. Individual malformed elements do not fail the read.
    pub fn read_all(&self) -> Result<Vec<HeroRecord>, StorageError> {
        let bytes = fs::read(&self.path).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })?;
        // Invalid UTF-8 becomes U+FFFD rather than failing the whole dataset.
        let contents = String::from_utf8_lossy(&bytes);

        let raw: Vec<Value> =
            serde_json::from_str(&contents).map_err(|source| StorageError::Json {
                path: self.path.clone(),
                source,
            })?;

        let heroes: Vec<HeroRecord> = raw.into_iter().map(HeroRecord::from_json).collect();
        debug!("Read {} hero records from {:?}", heroes.len(), self.path);
        Ok(heroes)
    }

    fn fingerprint(&self) -> Result<Fingerprint, StorageError> {
        let meta = fs::metadata(&self.path).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })?;
        let modified = meta.modified().map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(Fingerprint {
            modified,
            len: meta.len(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fingerprint {
    modified: SystemTime,
    len: u64,
}

#[derive(Debug)]
struct Snapshot {
    fingerprint: Fingerprint,
    heroes: Arc<[HeroRecord]>,
}

/// Dataset access for request handlers.
///
/// Without caching every call re-reads the file. With caching the parsed
/// dataset is reused until the file's modification time or size changes.
#[derive(Debug)]
pub struct HeroStore {
    reader: DatasetReader,
    cache: Option<RwLock<Option<Snapshot>>>,
}

impl HeroStore {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            reader: DatasetReader::new(config.data_file.clone()),
            cache: config.cache_dataset.then(|| RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &Path {
        self.reader.path()
    }

    pub fn is_cached(&self) -> bool {
        self.cache.is_some()
    }

    /// Load the current dataset.
    pub async fn load(&self) -> Result<Arc<[HeroRecord]>, StorageError> {
        let Some(cache) = &self.cache else {
            return Ok(self.reader.read_all()?.into());
        };

        let fingerprint = self.reader.fingerprint()?;
        if let Some(snapshot) = cache.read().await.as_ref() {
            if snapshot.fingerprint == fingerprint {
                return Ok(Arc::clone(&snapshot.heroes));
            }
        }

        let mut slot = cache.write().await;
        // Another request may have refreshed the snapshot while we waited.
        if let Some(snapshot) = slot.as_ref() {
            if snapshot.fingerprint == fingerprint {
                return Ok(Arc::clone(&snapshot.heroes));
            }
        }

        let heroes: Arc<[HeroRecord]> = self.reader.read_all()?.into();
        info!(
            "Cached {} hero records from {:?}",
            heroes.len(),
            self.reader.path()
        );
        *slot = Some(Snapshot {
            fingerprint,
            heroes: Arc::clone(&heroes),
        });
        Ok(heroes)
    }
}
