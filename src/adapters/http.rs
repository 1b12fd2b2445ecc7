use crate::config::toml_config::TicketingConfig;
use crate::domain::model::TicketPayload;
use crate::domain::ports::TicketTransport;
use crate::utils::error::{IntakeError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

pub const TICKETS_PATH: &str = "/api/v2/tickets";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Expands a bare subdomain to the hosted ticketing URL; full URLs pass
/// through without a trailing slash.
pub fn resolve_base_url(base: &str) -> String {
    let trimmed = base.trim().trim_end_matches('/');
    if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{}.zendesk.com", trimmed)
    }
}

/// Ticket creation body: `{"ticket": {"subject", "comment": {"body"}}}`.
#[derive(Debug, Serialize)]
struct TicketEnvelope<'a> {
    ticket: NewTicket<'a>,
}

#[derive(Debug, Serialize)]
struct NewTicket<'a> {
    subject: &'a str,
    comment: TicketComment<'a>,
}

#[derive(Debug, Serialize)]
struct TicketComment<'a> {
    body: &'a str,
}

impl<'a> From<&'a TicketPayload> for TicketEnvelope<'a> {
    fn from(payload: &'a TicketPayload) -> Self {
        Self {
            ticket: NewTicket {
                subject: &payload.subject,
                comment: TicketComment {
                    body: &payload.body,
                },
            },
        }
    }
}

/// Posts tickets to the support system with HTTP basic credentials.
#[derive(Clone)]
pub struct HttpTicketClient {
    client: Client,
    tickets_url: String,
    account: String,
    api_token: String,
    timeout: Duration,
}

impl HttpTicketClient {
    pub fn new(base_url: &str, account: &str, api_token: &str) -> Self {
        Self {
            client: Client::new(),
            tickets_url: format!("{}{}", resolve_base_url(base_url), TICKETS_PATH),
            account: account.to_string(),
            api_token: api_token.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }

    pub fn from_config(config: &TicketingConfig) -> Self {
        Self::new(&config.base_url, &config.account, &config.api_token)
            .with_timeout(Duration::from_secs(config.timeout_seconds()))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn tickets_url(&self) -> &str {
        &self.tickets_url
    }
}

#[async_trait]
impl TicketTransport for HttpTicketClient {
    async fn send(&self, payload: &TicketPayload) -> Result<()> {
        tracing::debug!("📡 POST {}", self.tickets_url);

        let mut request = self.client.post(&self.tickets_url).timeout(self.timeout);

        if !(self.account.is_empty() && self.api_token.is_empty()) {
            request = request.basic_auth(format!("{}/token", self.account), Some(&self.api_token));
        }

        let response = request
            .json(&TicketEnvelope::from(payload))
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("📡 Ticketing response status: {}", status);

        if status.is_success() {
            Ok(())
        } else {
            Err(IntakeError::TicketRejected {
                status: status.as_u16(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_nests_subject_and_comment_body() {
        let payload = TicketPayload {
            subject: "Warranty Claim for HT-CREEPER".to_string(),
            body: "Name: Ada".to_string(),
        };

        let json = serde_json::to_value(TicketEnvelope::from(&payload)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "ticket": {
                    "subject": "Warranty Claim for HT-CREEPER",
                    "comment": { "body": "Name: Ada" }
                }
            })
        );
    }

    #[test]
    fn test_resolve_base_url_from_subdomain() {
        assert_eq!(resolve_base_url("acme"), "https://acme.zendesk.com");
    }

    #[test]
    fn test_resolve_base_url_keeps_full_url() {
        assert_eq!(
            resolve_base_url("http://127.0.0.1:9000/"),
            "http://127.0.0.1:9000"
        );
    }

    #[test]
    fn test_tickets_url_and_timeout_from_config() {
        let config = TicketingConfig {
            base_url: "acme".to_string(),
            account: "agent@acme.test".to_string(),
            api_token: "secret".to_string(),
            timeout_seconds: Some(3),
        };

        let client = HttpTicketClient::from_config(&config);
        assert_eq!(
            client.tickets_url(),
            "https://acme.zendesk.com/api/v2/tickets"
        );
        assert_eq!(client.timeout, Duration::from_secs(3));
    }
}
