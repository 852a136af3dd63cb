//! Learning modules - the closed set of units a user can complete.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of learning modules. Completion percentages divide by this.
pub const MODULE_COUNT: usize = 4;

/// Identifier of a learning module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleId {
    /// Budgeting Basics
    Budgeting,
    /// Smart Saving
    Saving,
    /// Invest Smart
    Invest,
    /// Expense Tracker
    Expense,
}

impl ModuleId {
    /// All modules, in curriculum order.
    pub const ALL: [ModuleId; MODULE_COUNT] = [
        ModuleId::Budgeting,
        ModuleId::Saving,
        ModuleId::Invest,
        ModuleId::Expense,
    ];

    /// Stable identifier used in the persisted record.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleId::Budgeting => "budgeting",
            ModuleId::Saving => "saving",
            ModuleId::Invest => "invest",
            ModuleId::Expense => "expense",
        }
    }

    /// Human-facing module title.
    pub fn title(&self) -> &'static str {
        match self {
            ModuleId::Budgeting => "Budgeting Basics",
            ModuleId::Saving => "Smart Saving",
            ModuleId::Invest => "Invest Smart",
            ModuleId::Expense => "Expense Tracker",
        }
    }

    /// Badge granted on first completion of this module.
    pub fn badge(&self) -> &'static str {
        match self {
            ModuleId::Budgeting => "Budget Beginner",
            ModuleId::Saving => "Saving Star",
            ModuleId::Invest => "Smart Investor",
            ModuleId::Expense => "Expense Tracker",
        }
    }
}

impl std::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a module identifier outside the fixed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown module '{0}' (expected one of: budgeting, saving, invest, expense)")]
pub struct UnknownModule(pub String);

impl FromStr for ModuleId {
    type Err = UnknownModule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModuleId::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownModule(s.to_string()))
    }
}
