pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{
    clock::{FixedClock, SystemClock},
    http::HttpTicketClient,
    observer::TracingObserver,
};
pub use crate::config::AppConfig;
pub use crate::core::{
    catalog::Catalog,
    eligibility::{assess_purchase_date, is_within_trailing_window},
    navigation::{IntakeSession, Screen},
    submitter::ClaimSubmitter,
};
pub use crate::domain::model::{ClaimField, ClaimForm, Eligibility, Product, SubmitOutcome, TicketPayload};
pub use crate::utils::error::{IntakeError, Result};
