//! API server state

use std::sync::Arc;

use crate::analysis::{Analyzer, MockAnalyzer};

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Detection backend
    pub analyzer: Arc<dyn Analyzer>,

    /// Identifier reported by `/health`
    pub node_id: String,

    /// Request body cap applied to uploads
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(analyzer: Arc<dyn Analyzer>, node_id: impl Into<String>) -> Self {
        Self {
            analyzer,
            node_id: node_id.into(),
            max_upload_bytes: crate::config::ServerConfig::default().max_upload_bytes,
        }
    }

    /// State backed by the fixed-output analyzer
    pub fn mock(node_id: impl Into<String>) -> Self {
        Self::new(Arc::new(MockAnalyzer), node_id)
    }

    pub fn with_max_upload_bytes(mut self, max_upload_bytes: usize) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }

    /// Get this node's ID
    pub fn node_id(&self) -> &str {
        &self.node_id
    }
}
