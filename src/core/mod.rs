pub mod catalog;
pub mod eligibility;
pub mod navigation;
pub mod submitter;

pub use crate::domain::model::{ClaimForm, Eligibility, Product, SubmitOutcome, TicketPayload};
pub use crate::domain::ports::{Clock, SubmissionObserver, TicketTransport};
pub use crate::utils::error::Result;
