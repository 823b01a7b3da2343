//! Shared domain types for the PhishGuard demo.
//!
//! Everything here is display data for a product mock-up. The only module
//! with computed behavior is [`transit`], which generates and ranks the
//! route options shown by the journey planner.

pub mod admin;
pub mod ledger;
pub mod prefs;
pub mod risk;
pub mod transit;
