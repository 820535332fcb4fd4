//! Order, card and account types, and the credit-check rule

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

/// Expiry date of a card, kept exactly as submitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDate {
    pub month: String,
    pub year: String,
}

/// Card details used as the account matching key
///
/// Two cards match only when every field is equal, string for string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub numbers: String,
    pub cvv: String,
    pub date: CardDate,
}

impl Card {
    /// Last four digits, for logging
    pub fn last_four(&self) -> &str {
        let start = self.numbers.len().saturating_sub(4);
        self.numbers.get(start..).unwrap_or_default()
    }
}

/// A validated payment order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub numbers: String,
    pub cvv: String,
    pub date: CardDate,
    pub amount: f64,
}

impl OrderRequest {
    /// The card sub-document used to look up the account
    pub fn card(&self) -> Card {
        Card {
            numbers: self.numbers.clone(),
            cvv: self.cvv.clone(),
            date: self.date.clone(),
        }
    }
}

/// A stored account: a card and its available credit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub card: Card,
    pub credit: f64,
}

impl Account {
    pub fn new(card: Card, credit: f64) -> Self {
        Self { card, credit }
    }
}

/// Successful terminal result of processing one order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    PaymentAccepted,
    PaymentRefused,
}

impl Outcome {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::OK
    }

    pub fn message(&self) -> &'static str {
        match self {
            Outcome::PaymentAccepted => "Payment accepted",
            Outcome::PaymentRefused => "Payment refused, the amount is too high",
        }
    }
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        (self.status_code(), self.message()).into_response()
    }
}

/// Credit-check rule: a payment is refused unless the amount is strictly
/// below the available credit.
pub fn exceeds_credit(amount: f64, credit: f64) -> bool {
    amount >= credit
}
