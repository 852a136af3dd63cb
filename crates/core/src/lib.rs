//! FinQuest core data models.
//!
//! This crate defines the user record that powers the financial-literacy
//! gamification layer, along with the fixed set of learning modules.

#![warn(missing_docs)]

// Learning modules
mod module;

// User record
mod badge;
mod user;

// Value helpers
pub mod date;
mod money;

// Re-exports
pub use module::{ModuleId, UnknownModule, MODULE_COUNT};
pub use badge::BadgeSet;
pub use user::User;
pub use money::format_currency;
