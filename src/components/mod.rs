//! Reusable UI components shared across pages.

pub mod layout;
pub mod loader;
pub mod stat_card;
pub mod toast_host;
