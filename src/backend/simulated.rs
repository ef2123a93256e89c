//! Backend that pretends to submit by waiting

use super::traits::SubmitBackend;
use crate::state::FormValues;
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Default time a simulated submission takes
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(2000);

/// Backend that accepts every submission after a fixed delay
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    delay: Duration,
}

impl SimulatedBackend {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

#[async_trait]
impl SubmitBackend for SimulatedBackend {
    async fn submit(&self, values: FormValues) -> Result<()> {
        tracing::info!(form = ?values.redacted(), "Submitting form");
        tokio::time::sleep(self.delay).await;
        tracing::debug!(delay_ms = self.delay.as_millis() as u64, "Simulated submit finished");
        Ok(())
    }
}
