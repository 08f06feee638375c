//! Storage keys. These names are the persisted format; do not rename.

/// Current visitor's user ID (raw string, not JSON-encoded).
pub const USER_ID: &str = "userId";
/// `"buyer"`, `"seller"` or `null`.
pub const ROLE: &str = "role";
/// `true` / `false`.
pub const LOGGED_IN: &str = "loggedIn";
/// Array of gigs from every seller.
pub const GIGS: &str = "gigs";
/// Array of billing rows.
pub const BILLING_HISTORY: &str = "billingHistory";
/// Array of payment methods.
pub const PAYMENT_METHODS: &str = "paymentMethods";
/// Seller onboarding payload, absent until onboarding completes.
pub const ONBOARDING: &str = "onboarding";
/// Array of connection requests.
pub const CONNECTION_REQUESTS: &str = "connectionRequests";
