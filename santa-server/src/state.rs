//! Application State
//!
//! Holds the immutable server configuration shared by all handlers. Requests
//! never share generator state; each one builds its own from the options.

use std::sync::Arc;

use santa_core::ExchangeOptions;
use santa_types::ServerConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub(crate) inner: Arc<AppStateInner>,
}

pub struct AppStateInner {
    pub config: ServerConfig,
    /// Fixed seed applied to every request (reproducible runs only)
    pub seed: Option<u64>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self { inner: Arc::new(AppStateInner { config, seed: None }) }
    }

    pub fn with_seed(config: ServerConfig, seed: u64) -> Self {
        Self { inner: Arc::new(AppStateInner { config, seed: Some(seed) }) }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    pub fn exchange_options(&self) -> ExchangeOptions {
        ExchangeOptions {
            attempts: self.inner.config.assignment_attempts,
            seed: self.inner.seed,
        }
    }

    pub fn strict_uploads(&self) -> bool {
        self.inner.config.strict_uploads
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.inner.config.max_upload_bytes
    }
}
