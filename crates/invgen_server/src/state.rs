//! Shared application state.
//!
//! Only the resolved config is shared; category and catalog data are
//! re-read from disk on every request so responses always reflect the
//! current on-disk state.

use std::sync::Arc;

use invgen_core::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
