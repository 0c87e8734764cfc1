//! Queries over a loaded dataset snapshot.
//!
//! - **names**: the `{name, image}` listing used to populate selectors
//! - **counters**: heroes that counter a target, ranked by win rate
//! - **collation**: alphabetical ordering for the name listing

pub mod collation;
pub mod counters;
pub mod names;

pub use counters::resolve_counters;
pub use names::list_names;

use thiserror::Error;

use crate::models::{CounterResult, NameEntry};
use crate::storage::{HeroStore, StorageError};

/// Outcomes a counter lookup can fail with.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Hero data unavailable: {0}")]
    DataUnavailable(#[from] StorageError),

    #[error("Hero not found: {0}")]
    TargetNotFound(String),
}

/// Load the dataset and list hero names.
pub async fn load_names(store: &HeroStore) -> Result<Vec<NameEntry>, StorageError> {
    let heroes = store.load().await?;
    Ok(list_names(&heroes))
}

/// Load the dataset and resolve counters for `target`.
pub async fn load_counters(
    store: &HeroStore,
    target: &str,
) -> Result<Vec<CounterResult>, LookupError> {
    let heroes = store.load().await?;
    resolve_counters(&heroes, target)
}
