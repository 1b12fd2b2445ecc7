use crate::domain::model::TicketPayload;
use crate::utils::error::{IntakeError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Source of "now" for eligibility checks.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Delivers a ticket to the external support system.
#[async_trait]
pub trait TicketTransport: Send + Sync {
    async fn send(&self, payload: &TicketPayload) -> Result<()>;
}

/// Receives the outcome of each ticket dispatch.
pub trait SubmissionObserver: Send + Sync {
    fn on_dispatched(&self, payload: &TicketPayload);
    fn on_transport_failure(&self, payload: &TicketPayload, error: &IntakeError);
}
