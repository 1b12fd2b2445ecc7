use crate::domain::model::TicketPayload;
use crate::domain::ports::SubmissionObserver;
use crate::utils::error::IntakeError;

/// Reports dispatch outcomes through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SubmissionObserver for TracingObserver {
    fn on_dispatched(&self, payload: &TicketPayload) {
        tracing::info!("✅ Ticket delivered: {}", payload.subject);
    }

    fn on_transport_failure(&self, payload: &TicketPayload, error: &IntakeError) {
        if error.is_transport_failure() {
            tracing::error!(
                "❌ Ticket delivery failed for '{}': {} (claim still confirmed to user)",
                payload.subject,
                error
            );
        } else {
            tracing::warn!(
                "⚠️ Ticket for '{}' not sent: {} (claim still confirmed to user)",
                payload.subject,
                error
            );
        }
    }
}
