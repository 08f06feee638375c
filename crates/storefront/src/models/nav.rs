//! Role-aware navigation chrome.
//!
//! The header links depend only on the visitor's `(logged_in, role)` pair:
//!
//! | State                         | Links                                         |
//! |-------------------------------|-----------------------------------------------|
//! | logged out                    | none (Login / Register actions)               |
//! | seller                        | Gigs, Orders, Earnings, Billing & Payments    |
//! | buyer, or logged in, no role  | Explore, Messages, Account                    |
//!
//! Sellers also get a "My Business" menu; every logged-in visitor gets the
//! Profile and Logout actions.

use workforge_core::{Role, Session};

/// A header link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    pub active: bool,
}

impl NavLink {
    fn new(href: &'static str, label: &'static str, current_path: &str) -> Self {
        Self {
            href,
            label,
            active: current_path == href,
        }
    }
}

const SELLER_LINKS: [(&str, &str); 4] = [
    ("/gigs", "Gigs"),
    ("/orders", "Orders"),
    ("/earnings", "Earnings"),
    ("/billing", "Billing & Payments"),
];

const BUYER_LINKS: [(&str, &str); 3] = [
    ("/explore", "Explore"),
    ("/messages", "Messages"),
    ("/profile", "Account"),
];

const BUSINESS_MENU: [(&str, &str); 3] = [
    ("/orders", "Orders"),
    ("/gigs", "Gigs"),
    ("/earnings", "Earnings"),
];

/// Header state for one page render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nav {
    pub logged_in: bool,
    pub links: Vec<NavLink>,
    /// "My Business" entries; empty unless the visitor is a seller.
    pub business_menu: Vec<NavLink>,
}

impl Nav {
    #[must_use]
    pub fn new(session: Session, current_path: &str) -> Self {
        let build = |links: &[(&'static str, &'static str)]| -> Vec<NavLink> {
            links
                .iter()
                .map(|&(href, label)| NavLink::new(href, label, current_path))
                .collect()
        };

        if !session.logged_in {
            return Self {
                logged_in: false,
                links: Vec::new(),
                business_menu: Vec::new(),
            };
        }

        match session.role {
            Some(Role::Seller) => Self {
                logged_in: true,
                links: build(&SELLER_LINKS),
                business_menu: build(&BUSINESS_MENU),
            },
            Some(Role::Buyer) | None => Self {
                logged_in: true,
                links: build(&BUYER_LINKS),
                business_menu: Vec::new(),
            },
        }
    }

    #[must_use]
    pub fn has_business_menu(&self) -> bool {
        !self.business_menu.is_empty()
    }
}
