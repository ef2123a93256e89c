//! Trait abstraction for the submit backend to enable mocking in tests

use crate::state::FormValues;
use anyhow::Result;
use async_trait::async_trait;

/// Accepts a validated set of sign-up values
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitBackend: Send + Sync {
    /// Submit the values; resolves once the backend has accepted them
    async fn submit(&self, values: FormValues) -> Result<()>;
}
