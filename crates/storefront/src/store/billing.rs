//! Billing history and payment methods.
//!
//! Both collections are seeded with sample rows the first time they are
//! read from empty storage; after that the stored (possibly edited) rows
//! are returned as-is.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use workforge_core::{BillingEntry, CurrencyCode, DocumentType, PaymentMethod, Storage};

use super::{StoreError, get_or_init, keys, write};

/// Repository for billing history and payment methods.
pub struct BillingRepository<'a, S: Storage + ?Sized> {
    storage: &'a mut S,
}

impl<'a, S: Storage + ?Sized> BillingRepository<'a, S> {
    /// Create a new billing repository.
    pub const fn new(storage: &'a mut S) -> Self {
        Self { storage }
    }

    /// Billing history, seeded with [`default_billing`] on first read.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the seed rows cannot be serialized.
    pub fn billing(&mut self, now: DateTime<Utc>) -> Result<Vec<BillingEntry>, StoreError> {
        get_or_init(self.storage, keys::BILLING_HISTORY, || default_billing(now))
    }

    /// Replace the billing history.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the rows cannot be serialized.
    pub fn save_billing(&mut self, rows: &[BillingEntry]) -> Result<(), StoreError> {
        write(self.storage, keys::BILLING_HISTORY, rows)
    }

    /// Payment methods, seeded with [`default_payment_methods`] on first read.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the seed methods cannot be serialized.
    pub fn payment_methods(&mut self) -> Result<Vec<PaymentMethod>, StoreError> {
        get_or_init(self.storage, keys::PAYMENT_METHODS, default_payment_methods)
    }

    /// Replace the payment methods.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the methods cannot be serialized.
    pub fn save_payment_methods(&mut self, methods: &[PaymentMethod]) -> Result<(), StoreError> {
        write(self.storage, keys::PAYMENT_METHODS, methods)
    }

    /// Append a payment method.
    ///
    /// Provider and account are trimmed; if either is then empty nothing is
    /// stored and `Ok(false)` is returned.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the methods cannot be serialized.
    pub fn add_payment_method(&mut self, provider: &str, account: &str) -> Result<bool, StoreError> {
        let provider = provider.trim();
        let account = account.trim();
        if provider.is_empty() || account.is_empty() {
            return Ok(false);
        }

        let mut methods = self.payment_methods()?;
        methods.push(PaymentMethod {
            provider: provider.to_string(),
            account: account.to_string(),
        });
        self.save_payment_methods(&methods)?;
        Ok(true)
    }
}

/// The two sample billing rows: an invoice from `now` and a receipt from
/// 35 days earlier.
#[must_use]
pub fn default_billing(now: DateTime<Utc>) -> Vec<BillingEntry> {
    vec![
        BillingEntry {
            date: now,
            document: DocumentType::Invoice,
            service: "Logo Design".to_string(),
            order: "#1001".to_string(),
            currency: CurrencyCode::USD,
            total: Decimal::from(200),
        },
        BillingEntry {
            date: now - Duration::days(35),
            document: DocumentType::Receipt,
            service: "Landing Page".to_string(),
            order: "#1000".to_string(),
            currency: CurrencyCode::USD,
            total: Decimal::from(1200),
        },
    ]
}

/// The two sample payment methods.
#[must_use]
pub fn default_payment_methods() -> Vec<PaymentMethod> {
    vec![
        PaymentMethod {
            provider: "PayPal".to_string(),
            account: "seller@example.com".to_string(),
        },
        PaymentMethod {
            provider: "Stripe".to_string(),
            account: "acct_1234".to_string(),
        },
    ]
}
