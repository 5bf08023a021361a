//! In-Memory Notice Sink Adapter
//!
//! Collects customer-facing error notices in memory. Useful for testing
//! and for single-instance deployments where the storefront polls notices
//! out of the service.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::ports::NoticeSink;

/// In-memory notice sink.
#[derive(Debug, Clone)]
pub struct InMemoryNoticeSink {
    notices: Arc<RwLock<Vec<String>>>,
}

impl InMemoryNoticeSink {
    /// Create a new empty sink
    pub fn new() -> Self {
        Self {
            notices: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// All notices recorded so far, oldest first
    pub async fn notices(&self) -> Vec<String> {
        self.notices.read().await.clone()
    }

    /// Clear recorded notices (useful for tests)
    pub async fn clear(&self) {
        self.notices.write().await.clear();
    }
}

impl Default for InMemoryNoticeSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NoticeSink for InMemoryNoticeSink {
    async fn record_error(&self, message: &str) -> Result<(), DomainError> {
        let mut notices = self.notices.write().await;
        notices.push(message.to_string());
        Ok(())
    }
}
