use crate::core::submitter::ClaimSubmitter;
use crate::domain::model::{ClaimForm, SubmitOutcome};
use crate::domain::ports::{Clock, TicketTransport};
use crate::utils::error::{IntakeError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Troubleshoot,
    Warranty,
    Submitted,
}

/// Screen state for one user. Owns the claim form while on `Warranty`.
#[derive(Debug)]
pub struct IntakeSession {
    screen: Screen,
    form: Option<ClaimForm>,
}

impl IntakeSession {
    pub fn new() -> Self {
        Self {
            screen: Screen::Home,
            form: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Moves to `to`. Entering `Warranty` always starts an empty form and
    /// leaving it discards the form. `Submitted` is only reachable through
    /// [`IntakeSession::submit`].
    pub fn navigate(&mut self, to: Screen) -> Result<()> {
        if to == Screen::Submitted {
            return Err(IntakeError::ValidationError {
                message: "Submitted screen is only reachable by submitting a claim".to_string(),
            });
        }

        tracing::debug!("🧭 {:?} -> {:?}", self.screen, to);
        self.form = (to == Screen::Warranty).then(ClaimForm::new);
        self.screen = to;
        Ok(())
    }

    pub fn form(&self) -> Option<&ClaimForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut ClaimForm> {
        self.form.as_mut()
    }

    /// Submits the current form. An ineligible date keeps the user on the
    /// form with their input intact.
    pub async fn submit<T: TicketTransport, C: Clock>(
        &mut self,
        submitter: &ClaimSubmitter<T, C>,
    ) -> Result<SubmitOutcome> {
        let form = self.form.as_ref().ok_or_else(|| IntakeError::ValidationError {
            message: "No warranty claim in progress".to_string(),
        })?;

        let outcome = submitter.submit_claim(form).await;
        if outcome.is_submitted() {
            self.form = None;
            self.screen = Screen::Submitted;
        }

        Ok(outcome)
    }
}

impl Default for IntakeSession {
    fn default() -> Self {
        Self::new()
    }
}
