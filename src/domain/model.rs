use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    pub name: String,
}

impl Product {
    pub fn new(sku: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TroubleshootingTopic {
    pub title: String,
    pub steps: Vec<String>,
}

/// Text fields of a [`ClaimForm`], in the order they appear in a ticket body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimField {
    Name,
    Email,
    Phone,
    Sku,
    PurchaseDate,
    Description,
}

impl ClaimField {
    pub const ALL: [ClaimField; 6] = [
        ClaimField::Name,
        ClaimField::Email,
        ClaimField::Phone,
        ClaimField::Sku,
        ClaimField::PurchaseDate,
        ClaimField::Description,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ClaimField::Name => "Name",
            ClaimField::Email => "Email",
            ClaimField::Phone => "Phone",
            ClaimField::Sku => "SKU",
            ClaimField::PurchaseDate => "Purchase Date",
            ClaimField::Description => "Description",
        }
    }
}

/// One user's in-progress warranty claim.
///
/// Values arrive already parsed from the input widgets; only the purchase
/// date is checked before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub sku: String,
    pub purchase_date: String,
    pub description: String,
    pub injury: bool,
}

impl ClaimForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: ClaimField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ClaimField::Name => self.name = value,
            ClaimField::Email => self.email = value,
            ClaimField::Phone => self.phone = value,
            ClaimField::Sku => self.sku = value,
            ClaimField::PurchaseDate => self.purchase_date = value,
            ClaimField::Description => self.description = value,
        }
    }

    pub fn set_injury(&mut self, injury: bool) {
        self.injury = injury;
    }

    pub fn get(&self, field: ClaimField) -> &str {
        match field {
            ClaimField::Name => &self.name,
            ClaimField::Email => &self.email,
            ClaimField::Phone => &self.phone,
            ClaimField::Sku => &self.sku,
            ClaimField::PurchaseDate => &self.purchase_date,
            ClaimField::Description => &self.description,
        }
    }
}

/// Request body sent to the ticketing system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketPayload {
    pub subject: String,
    pub body: String,
}

impl TicketPayload {
    pub fn from_form(form: &ClaimForm) -> Self {
        let injury = if form.injury { "Yes" } else { "No" };

        let mut lines: Vec<String> = ClaimField::ALL
            .iter()
            .map(|&field| format!("{}: {}", field.label(), form.get(field)))
            .collect();
        lines.push(format!("Personal Injury: {}", injury));

        Self {
            subject: format!("Warranty Claim for {}", form.sku),
            body: lines.join("\n"),
        }
    }
}

/// Verdict on a purchase date against the trailing warranty window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Eligibility {
    Eligible,
    /// Not a recognizable calendar date.
    Invalid,
    TooOld,
    /// Dated after "now".
    TooNew,
}

impl Eligibility {
    pub fn is_eligible(self) -> bool {
        matches!(self, Eligibility::Eligible)
    }

    /// Inline message for the claim form.
    pub fn message(self) -> &'static str {
        match self {
            Eligibility::Eligible => "Purchase date is within the warranty period",
            Eligibility::Invalid => "Please enter a valid purchase date",
            Eligibility::TooOld => "This product is outside the warranty period",
            Eligibility::TooNew => "Purchase date cannot be in the future",
        }
    }
}

impl fmt::Display for Eligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The ticket request was attempted. Delivery is not guaranteed.
    Submitted,
    NotEligible(Eligibility),
}

impl SubmitOutcome {
    pub fn is_submitted(self) -> bool {
        matches!(self, SubmitOutcome::Submitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creeper_claim() -> ClaimForm {
        ClaimForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0100".to_string(),
            sku: "HT-CREEPER".to_string(),
            purchase_date: "2026-03-01".to_string(),
            description: "Battery swells after charging".to_string(),
            injury: true,
        }
    }

    #[test]
    fn test_payload_subject_interpolates_sku() {
        let payload = TicketPayload::from_form(&creeper_claim());
        assert_eq!(payload.subject, "Warranty Claim for HT-CREEPER");
    }

    #[test]
    fn test_payload_body_has_seven_lines_in_order() {
        let payload = TicketPayload::from_form(&creeper_claim());
        let lines: Vec<&str> = payload.body.split('\n').collect();

        assert_eq!(
            lines,
            vec![
                "Name: Ada Lovelace",
                "Email: ada@example.com",
                "Phone: 555-0100",
                "SKU: HT-CREEPER",
                "Purchase Date: 2026-03-01",
                "Description: Battery swells after charging",
                "Personal Injury: Yes",
            ]
        );
    }

    #[test]
    fn test_payload_renders_no_injury() {
        let mut form = creeper_claim();
        form.set_injury(false);
        let payload = TicketPayload::from_form(&form);
        assert!(payload.body.ends_with("Personal Injury: No"));
    }

    #[test]
    fn test_payload_serializes_subject_and_body() {
        let payload = TicketPayload::from_form(&creeper_claim());
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["subject"], "Warranty Claim for HT-CREEPER");
        assert!(json["body"].as_str().unwrap().starts_with("Name: Ada Lovelace"));
    }

    #[test]
    fn test_form_is_filled_field_by_field() {
        let mut form = ClaimForm::new();
        form.set(ClaimField::Sku, "HT-STALKER");
        form.set(ClaimField::PurchaseDate, "2026-01-15");

        assert_eq!(form.get(ClaimField::Sku), "HT-STALKER");
        assert_eq!(form.purchase_date, "2026-01-15");
        assert!(form.name.is_empty());
        assert!(!form.injury);
    }
}
