use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("Ticket request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Ticketing system rejected the claim with status {status}")]
    TicketRejected { status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Duplicate SKU in catalog: {sku}")]
    DuplicateSku { sku: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl IntakeError {
    /// 給終端使用者看的訊息，不含內部細節
    pub fn user_friendly_message(&self) -> String {
        match self {
            IntakeError::Transport(_) | IntakeError::TicketRejected { .. } => {
                "Could not reach the support ticketing system".to_string()
            }
            IntakeError::IoError(e) => format!("Could not read a required file: {}", e),
            IntakeError::ConfigError { message } => format!("Configuration problem: {}", message),
            IntakeError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            IntakeError::DuplicateSku { sku } => {
                format!("Product catalog lists '{}' more than once", sku)
            }
            IntakeError::ValidationError { message } => message.clone(),
        }
    }

    pub fn is_transport_failure(&self) -> bool {
        matches!(
            self,
            IntakeError::Transport(_) | IntakeError::TicketRejected { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, IntakeError>;
