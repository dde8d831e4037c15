use std::sync::Arc;

use hashgate_cache::TokenCache;

#[derive(Clone)]
pub struct AppState {
    cache: Arc<dyn TokenCache>,
}

impl AppState {
    pub fn new(cache: Arc<dyn TokenCache>) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &dyn TokenCache {
        self.cache.as_ref()
    }
}
