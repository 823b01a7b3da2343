// This file makes the screen modules available to the rest of the application.

pub mod admin;
pub mod history;
pub mod ledger;
pub mod result;
pub mod settings;
pub mod transit;
