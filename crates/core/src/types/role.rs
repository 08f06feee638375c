//! Marketplace roles and the visitor session gate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The side of the marketplace a visitor registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Hires freelancers: explore, messages, account.
    Buyer,
    /// Sells services: gigs, orders, earnings, billing.
    Seller,
}

impl Role {
    /// All roles in the order they are offered at registration.
    pub const ALL: [Self; 2] = [Self::Buyer, Self::Seller];

    /// Lowercase storage representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Buyer => "buyer",
            Self::Seller => "seller",
        }
    }

    /// Heading of this role's card on the registration form.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Buyer => "I'm a Client, hiring for a project",
            Self::Seller => "I'm a Freelancer, looking for work",
        }
    }

    #[must_use]
    pub const fn tagline(&self) -> &'static str {
        match self {
            Self::Buyer => "Find the right freelancer for your job.",
            Self::Seller => "Showcase your skills and get hired.",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known [`Role`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buyer" => Ok(Self::Buyer),
            "seller" => Ok(Self::Seller),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

/// Login state of a visitor.
///
/// Purely a UI gate: there is no expiry and no credential check behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub logged_in: bool,
    pub role: Option<Role>,
}

impl Session {
    /// Whether seller-only pages should open.
    ///
    /// Only the stored role is consulted; logging out clears the role.
    #[must_use]
    pub fn is_seller(&self) -> bool {
        self.role == Some(Role::Seller)
    }
}
