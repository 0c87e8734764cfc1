use std::sync::Arc;

use crate::storage::HeroStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<HeroStore>,
}

impl AppState {
    pub fn new(store: HeroStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
