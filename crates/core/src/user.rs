//! User model - the single persisted progress record.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::badge::BadgeSet;
use crate::module::ModuleId;

/// A learner's gamification state.
///
/// Missing fields take defaults on load so that partially written records
/// decode into a complete value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Avatar glyph
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    /// Accumulated points
    #[serde(default)]
    pub points: u64,

    /// Earned badges
    #[serde(default)]
    pub badges: BadgeSet,

    /// Completion flag per module; absent entries are incomplete
    #[serde(default)]
    pub completed_modules: BTreeMap<ModuleId, bool>,

    /// Consecutive login days
    #[serde(default = "default_streak")]
    pub current_streak: u32,

    /// Day of the last recorded login
    #[serde(
        default,
        with = "crate::date::login_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_login_date: Option<NaiveDate>,

    /// Simulated wallet balance
    #[serde(default)]
    pub wallet_balance: Decimal,

    /// Fields written by other collaborators (signup, profile), kept as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_streak() -> u32 {
    1
}

impl Default for User {
    fn default() -> Self {
        Self {
            username: None,
            avatar: None,
            points: 0,
            badges: BadgeSet::new(),
            completed_modules: BTreeMap::new(),
            current_streak: default_streak(),
            last_login_date: None,
            wallet_balance: Decimal::ZERO,
            extra: Map::new(),
        }
    }
}

impl User {
    /// Decode a stored record.
    ///
    /// A record with a login date always carries a streak of at least one day.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut user: User = serde_json::from_str(json)?;
        if user.last_login_date.is_some() {
            user.current_streak = user.current_streak.max(1);
        }
        Ok(user)
    }

    /// The demo learner: budgeting already done, 50 points, one badge.
    pub fn demo(today: NaiveDate) -> Self {
        let mut completed_modules: BTreeMap<ModuleId, bool> =
            ModuleId::ALL.into_iter().map(|m| (m, false)).collect();
        completed_modules.insert(ModuleId::Budgeting, true);

        Self {
            username: Some("DemoUser".to_string()),
            avatar: Some("💰".to_string()),
            points: 50,
            badges: ["Budget Beginner"].into_iter().collect(),
            completed_modules,
            current_streak: 1,
            last_login_date: Some(today),
            wallet_balance: Decimal::from(750),
            extra: Map::new(),
        }
    }

    /// Whether the module has been completed.
    pub fn has_completed(&self, module: ModuleId) -> bool {
        self.completed_modules.get(&module).copied().unwrap_or(false)
    }

    /// Number of completed modules.
    pub fn completed_count(&self) -> usize {
        ModuleId::ALL.iter().filter(|m| self.has_completed(**m)).count()
    }
}
