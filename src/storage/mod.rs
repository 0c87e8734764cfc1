//! Read-only access to the hero dataset file.
//!
//! The dataset is a single JSON array of hero records. It is never written
//! by this crate; every query either re-reads it or reuses a snapshot whose
//! file modification time is unchanged.

pub mod dataset;

pub use dataset::{DatasetReader, HeroStore};

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the dataset.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path:?} as a JSON array: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Where the dataset lives and how it is loaded.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_file: PathBuf,
    pub cache_dataset: bool,
}

impl StorageConfig {
    pub fn new(data_file: PathBuf) -> Self {
        Self {
            data_file,
            cache_dataset: false,
        }
    }

    pub fn with_cache(mut self, cache_dataset: bool) -> Self {
        self.cache_dataset = cache_dataset;
        self
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("hero_data.json"))
    }
}
