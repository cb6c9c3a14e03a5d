//! Gateway doubles

use agendar_core::BookingGateway;
use agendar_domain::{AgendarError, IntegrationPayload, Result as DomainResult};
use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Barrier;

/// Captures every payload; optionally fails after capturing.
#[derive(Default)]
pub struct RecordingGateway {
    payloads: Mutex<Vec<IntegrationPayload>>,
    fail: bool,
}

impl RecordingGateway {
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn payloads(&self) -> Vec<IntegrationPayload> {
        self.payloads.lock().clone()
    }
}

#[async_trait]
impl BookingGateway for RecordingGateway {
    async fn send(&self, payload: &IntegrationPayload) -> DomainResult<()> {
        self.payloads.lock().push(payload.clone());
        if self.fail {
            return Err(AgendarError::Integration("connection refused".to_string()));
        }
        Ok(())
    }
}

/// Holds each send until `parties` sends are in flight at once.
pub struct GatedGateway {
    gate: Barrier,
    sent: Mutex<usize>,
}

impl GatedGateway {
    pub fn new(parties: usize) -> Self {
        Self { gate: Barrier::new(parties), sent: Mutex::new(0) }
    }

    pub fn sent(&self) -> usize {
        *self.sent.lock()
    }
}

#[async_trait]
impl BookingGateway for GatedGateway {
    async fn send(&self, _payload: &IntegrationPayload) -> DomainResult<()> {
        self.gate.wait().await;
        *self.sent.lock() += 1;
        Ok(())
    }
}
