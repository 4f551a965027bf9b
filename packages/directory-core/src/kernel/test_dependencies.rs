// Mock implementations for testing
//
// Provides a scripted provider source that can be injected in place of the
// HTTP feed.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};

use super::BaseProviderSource;
use crate::domains::providers::ProviderRecord;
use crate::error::{Result, SourceError};

// =============================================================================
// Mock Provider Source
// =============================================================================

/// Returns queued responses in order; once exhausted it keeps returning the
/// default records
pub struct MockProviderSource {
    records: Vec<ProviderRecord>,
    failures: Arc<Mutex<Vec<SourceError>>>,
    fetch_calls: Arc<Mutex<usize>>,
}

impl MockProviderSource {
    pub fn new(records: Vec<ProviderRecord>) -> Self {
        Self {
            records,
            failures: Arc::new(Mutex::new(Vec::new())),
            fetch_calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Fail the next fetch with the given status before serving records again
    pub fn with_failure(self, status: u16, message: &str) -> Self {
        self.failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(SourceError::Status {
                status,
                message: message.to_string(),
            });
        self
    }

    /// Number of fetches performed
    pub fn fetch_calls(&self) -> usize {
        *self.fetch_calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl BaseProviderSource for MockProviderSource {
    async fn fetch_providers(&self) -> Result<Vec<ProviderRecord>> {
        *self.fetch_calls.lock().unwrap_or_else(PoisonError::into_inner) += 1;

        let mut failures = self.failures.lock().unwrap_or_else(PoisonError::into_inner);
        if !failures.is_empty() {
            return Err(failures.remove(0));
        }

        Ok(self.records.clone())
    }
}
