//! Shared application state for the splyce bridge.
//!
//! Cloned into the ingest task, the flush task, and every HTTP handler. The
//! aggregate store is the only state that producers and readers share.

use std::sync::Arc;

use crate::aggregate::AggregateStore;
use crate::config::BridgeConfig;
use crate::obs::metrics::BridgeMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: BridgeConfig,
    store: AggregateStore,
    metrics: BridgeMetrics,
}

impl AppState {
    pub fn new(cfg: BridgeConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                store: AggregateStore::new(),
                metrics: BridgeMetrics::new(),
            }),
        }
    }

    pub fn cfg(&self) -> &BridgeConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> &AggregateStore {
        &self.inner.store
    }

    pub fn metrics(&self) -> &BridgeMetrics {
        &self.inner.metrics
    }
}
