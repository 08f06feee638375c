//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. Marketplace IDs are
//! strings (`u_kx3f9a2b_4hq1zc`, `g_kx3f9a2b_9xk2`), so the wrappers hold a
//! `String` and serialize transparently.

use chrono::{DateTime, Utc};

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>` and `Into<String>` implementations
///
/// # Example
///
/// ```rust
/// # use workforge_core::define_id;
/// define_id!(SellerId);
/// define_id!(OrderId);
///
/// let seller_id = SellerId::new("f1");
/// let order_id = OrderId::new("f1");
///
/// // These are different types, so this won't compile:
/// // let _: SellerId = order_id;
/// # let _ = (seller_id, order_id);
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an ID from any string value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl ::core::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(UserId);
define_id!(GigId);
define_id!(ConnectionRequestId);

impl UserId {
    /// Compose a user ID from a timestamp and a random suffix.
    ///
    /// Format: `u_<base36 unix millis>_<suffix>`.
    #[must_use]
    pub fn generate(now: DateTime<Utc>, suffix: &str) -> Self {
        Self(format!("u_{}_{suffix}", to_base36(unix_millis(now))))
    }
}

impl GigId {
    /// Compose a gig ID from a timestamp and a random suffix.
    ///
    /// Format: `g_<base36 unix millis>_<suffix>`.
    #[must_use]
    pub fn generate(now: DateTime<Utc>, suffix: &str) -> Self {
        Self(format!("g_{}_{suffix}", to_base36(unix_millis(now))))
    }
}

impl ConnectionRequestId {
    /// Compose a connection request ID from a timestamp and a random suffix.
    ///
    /// Format: `cr_<unix millis>_<suffix>`.
    #[must_use]
    pub fn generate(now: DateTime<Utc>, suffix: &str) -> Self {
        Self(format!("cr_{}_{suffix}", unix_millis(now)))
    }
}

fn unix_millis(now: DateTime<Utc>) -> u64 {
    u64::try_from(now.timestamp_millis()).unwrap_or(0)
}

/// Render a number in lowercase base 36.
#[must_use]
pub fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if n == 0 {
        return "0".to_string();
    }

    let mut out = Vec::new();
    while n > 0 {
        let digit = usize::try_from(n % 36).unwrap_or(0);
        out.push(DIGITS.get(digit).copied().unwrap_or(b'0'));
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
