//! Billing history rows and payout methods.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::price::CurrencyCode;

/// Kind of billing document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    Invoice,
    Receipt,
    #[serde(rename = "Order Confirmation")]
    OrderConfirmation,
}

impl DocumentType {
    pub const ALL: [Self; 3] = [Self::Invoice, Self::Receipt, Self::OrderConfirmation];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Invoice => "Invoice",
            Self::Receipt => "Receipt",
            Self::OrderConfirmation => "Order Confirmation",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| format!("unknown document type: {s}"))
    }
}

/// One row of a seller's billing history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingEntry {
    pub date: DateTime<Utc>,
    pub document: DocumentType,
    pub service: String,
    pub order: String,
    pub currency: CurrencyCode,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl BillingEntry {
    /// Total formatted with the row's currency symbol.
    #[must_use]
    pub fn display_total(&self) -> String {
        self.currency.format(self.total)
    }
}

/// A payout destination (e.g. PayPal, Stripe).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub provider: String,
    pub account: String,
}
