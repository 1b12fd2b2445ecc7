use crate::adapters::observer::TracingObserver;
use crate::core::eligibility::{assess_purchase_date, DEFAULT_WINDOW_DAYS};
use crate::domain::model::{ClaimForm, SubmitOutcome, TicketPayload};
use crate::domain::ports::{Clock, SubmissionObserver, TicketTransport};

pub struct ClaimSubmitter<T: TicketTransport, C: Clock> {
    transport: T,
    clock: C,
    observer: Box<dyn SubmissionObserver>,
    window_days: u32,
}

impl<T: TicketTransport, C: Clock> ClaimSubmitter<T, C> {
    pub fn new(transport: T, clock: C) -> Self {
        Self {
            transport,
            clock,
            observer: Box::new(TracingObserver),
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }

    pub fn with_window_days(mut self, window_days: u32) -> Self {
        self.window_days = window_days;
        self
    }

    pub fn with_observer(mut self, observer: impl SubmissionObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    pub fn window_days(&self) -> u32 {
        self.window_days
    }

    /// Checks the purchase date, then sends the claim as a ticket.
    ///
    /// Returns [`SubmitOutcome::Submitted`] whenever the request was
    /// attempted, whether or not the ticketing system accepted it.
    pub async fn submit_claim(&self, form: &ClaimForm) -> SubmitOutcome {
        let verdict = assess_purchase_date(&form.purchase_date, self.window_days, self.clock.now());
        if !verdict.is_eligible() {
            tracing::info!(
                "🚫 Claim for {} not eligible: {:?} (purchase date {:?})",
                form.sku,
                verdict,
                form.purchase_date
            );
            return SubmitOutcome::NotEligible(verdict);
        }

        let payload = TicketPayload::from_form(form);
        tracing::debug!("📨 Built ticket: {}", payload.subject);

        self.dispatch_ignoring_failure(&payload).await;

        SubmitOutcome::Submitted
    }

    /// Sends one ticket and swallows any transport error after reporting it.
    ///
    /// The user-facing confirmation must not depend on the ticketing system
    /// being reachable, so failures stop here.
    async fn dispatch_ignoring_failure(&self, payload: &TicketPayload) {
        match self.transport.send(payload).await {
            Ok(()) => self.observer.on_dispatched(payload),
            Err(e) => self.observer.on_transport_failure(payload, &e),
        }
    }
}
