//! Customer notice sink port.
//!
//! Checkout failures produce short customer-facing notices ("Payment
//! connection error.") that the storefront renders on the next page
//! load. This port decouples orchestration from wherever those notices
//! end up.
//!
//! Notice recording is best-effort: a failing sink must never turn a
//! cleanly-handled payment failure into a crash, so callers log and
//! continue when this port errors.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// Port for recording customer-facing error notices.
#[async_trait]
pub trait NoticeSink: Send + Sync {
    /// Records an error notice for display to the customer.
    async fn record_error(&self, message: &str) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn notice_sink_is_object_safe() {
        fn _accepts_dyn(_sink: &dyn NoticeSink) {}
    }
}
