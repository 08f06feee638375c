//! View models shared by every page.

pub mod nav;

pub use nav::{Nav, NavLink};
