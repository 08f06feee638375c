//! Billing history filter.

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use workforge_core::{BillingEntry, CurrencyCode, DocumentType};

/// Billing page query string (`?range=&document=&currency=`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BillingQuery {
    pub range: Option<String>,
    pub document: Option<String>,
    pub currency: Option<String>,
}

/// How far back the billing table reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    #[default]
    Last30,
    Last90,
    All,
}

impl DateRange {
    pub const ALL: [Self; 3] = [Self::Last30, Self::Last90, Self::All];

    /// Query-string value.
    #[must_use]
    pub const fn param(&self) -> &'static str {
        match self {
            Self::Last30 => "30",
            Self::Last90 => "90",
            Self::All => "all",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Last30 => "Last 30 days",
            Self::Last90 => "Last 90 days",
            Self::All => "Custom/All",
        }
    }

    /// Earliest date still shown, inclusive. `None` means unbounded.
    #[must_use]
    pub fn min_date(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::Last30 => Some(now - Duration::days(30)),
            Self::Last90 => Some(now - Duration::days(90)),
            Self::All => None,
        }
    }

    fn from_param(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.param() == value)
    }
}

/// Document type predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFilter {
    #[default]
    All,
    Only(DocumentType),
}

impl DocumentFilter {
    /// Menu options, `All` first.
    #[must_use]
    pub fn options() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(DocumentType::ALL.into_iter().map(Self::Only))
            .collect()
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(document) => document.as_str(),
        }
    }

    #[must_use]
    pub fn matches(&self, document: DocumentType) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == document,
        }
    }
}

/// The three independent billing predicates.
///
/// Defaults to the last 30 days, every document type, USD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BillingFilter {
    pub range: DateRange,
    pub document: DocumentFilter,
    pub currency: CurrencyCode,
}

impl BillingFilter {
    /// Build a filter from the query string; unknown values keep the default.
    #[must_use]
    pub fn from_query(query: &BillingQuery) -> Self {
        let defaults = Self::default();

        let range = query
            .range
            .as_deref()
            .and_then(DateRange::from_param)
            .unwrap_or(defaults.range);
        let document = match query.document.as_deref() {
            None | Some("All") => DocumentFilter::All,
            Some(other) => other
                .parse::<DocumentType>()
                .map_or(defaults.document, DocumentFilter::Only),
        };
        let currency = query
            .currency
            .as_deref()
            .and_then(|c| c.parse().ok())
            .unwrap_or(defaults.currency);

        Self {
            range,
            document,
            currency,
        }
    }

    #[must_use]
    pub fn matches(&self, entry: &BillingEntry, now: DateTime<Utc>) -> bool {
        let in_range = self.range.min_date(now).is_none_or(|min| entry.date >= min);
        in_range && self.document.matches(entry.document) && entry.currency == self.currency
    }

    /// Matching rows in storage order.
    #[must_use]
    pub fn apply<'a>(&self, entries: &'a [BillingEntry], now: DateTime<Utc>) -> Vec<&'a BillingEntry> {
        entries.iter().filter(|e| self.matches(e, now)).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::billing::default_billing;
    use rust_decimal::Decimal;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-06-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn entry(days_ago: i64, document: DocumentType, currency: CurrencyCode) -> BillingEntry {
        BillingEntry {
            date: now() - Duration::days(days_ago),
            document,
            service: "SEO".to_string(),
            order: "#2000".to_string(),
            currency,
            total: Decimal::from(10),
        }
    }

    #[test]
    fn test_defaults_show_only_recent_invoice() {
        let rows = default_billing(now());
        let shown = BillingFilter::default().apply(&rows, now());
        assert_eq!(shown.len(), 1);
        assert_eq!(shown.first().unwrap().order, "#1001");
    }

    #[test]
    fn test_all_time_shows_both_seed_rows() {
        let rows = default_billing(now());
        let filter = BillingFilter {
            range: DateRange::All,
            ..BillingFilter::default()
        };
        assert_eq!(filter.apply(&rows, now()).len(), 2);
    }

    #[test]
    fn test_range_lower_bound_is_inclusive() {
        let filter = BillingFilter::default();
        assert!(filter.matches(&entry(30, DocumentType::Invoice, CurrencyCode::USD), now()));

        let mut just_outside = entry(30, DocumentType::Invoice, CurrencyCode::USD);
        just_outside.date -= Duration::seconds(1);
        assert!(!filter.matches(&just_outside, now()));
    }

    #[test]
    fn test_document_and_currency_are_exact() {
        let rows = vec![
            entry(1, DocumentType::Invoice, CurrencyCode::EUR),
            entry(2, DocumentType::Receipt, CurrencyCode::EUR),
            entry(3, DocumentType::Receipt, CurrencyCode::INR),
        ];
        let filter = BillingFilter {
            range: DateRange::Last90,
            document: DocumentFilter::Only(DocumentType::Receipt),
            currency: CurrencyCode::EUR,
        };
        let shown = filter.apply(&rows, now());
        assert_eq!(shown.len(), 1);
        assert_eq!(shown.first().unwrap().document, DocumentType::Receipt);
        assert_eq!(shown.first().unwrap().currency, CurrencyCode::EUR);
    }

    #[test]
    fn test_from_query() {
        let query = BillingQuery {
            range: Some("all".to_string()),
            document: Some("Order Confirmation".to_string()),
            currency: Some("INR".to_string()),
        };
        let filter = BillingFilter::from_query(&query);
        assert_eq!(filter.range, DateRange::All);
        assert_eq!(
            filter.document,
            DocumentFilter::Only(DocumentType::OrderConfirmation)
        );
        assert_eq!(filter.currency, CurrencyCode::INR);
    }

    #[test]
    fn test_from_query_unknown_values_fall_back() {
        let query = BillingQuery {
            range: Some("7".to_string()),
            document: Some("Memo".to_string()),
            currency: Some("GBP".to_string()),
        };
        assert_eq!(BillingFilter::from_query(&query), BillingFilter::default());
    }

    #[test]
    fn test_document_options_order() {
        let labels: Vec<_> = DocumentFilter::options()
            .iter()
            .map(DocumentFilter::as_str)
            .collect();
        assert_eq!(labels, vec!["All", "Invoice", "Receipt", "Order Confirmation"]);
    }
}
