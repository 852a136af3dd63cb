//! Module completion rewards.

use finquest_core::{ModuleId, User};
use serde::Serialize;

/// Points granted for completing a module.
pub const DEFAULT_MODULE_POINTS: u64 = 50;

const FALLBACK_TIP: &str = "Great job! Keep learning.";

/// Financial tip shown after completing a module.
///
/// Unknown module names get a generic encouragement.
pub fn financial_tip(module: &str) -> &'static str {
    match module.parse::<ModuleId>() {
        Ok(ModuleId::Budgeting) => "💡 Tip: Follow the 50-30-20 rule to manage income efficiently.",
        Ok(ModuleId::Saving) => "💡 Tip: Always build an emergency fund before investing.",
        Ok(ModuleId::Invest) => "💡 Tip: Diversification reduces financial risk.",
        Ok(ModuleId::Expense) => "💡 Tip: Small daily expenses accumulate over time.",
        Err(_) => FALLBACK_TIP,
    }
}

/// Result of an award attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum AwardOutcome {
    /// First completion: points and badge were granted.
    #[serde(rename_all = "camelCase")]
    Granted {
        /// Module that was completed
        module: ModuleId,
        /// Badge name that was granted
        badge: String,
        /// Whether the badge was new to the user
        new_badge: bool,
        /// Points added by this award
        points_awarded: u64,
        /// Point total after the award
        total_points: u64,
        /// Tip to show the learner
        tip: &'static str,
    },
    /// Module was already completed; nothing changed.
    #[serde(rename_all = "camelCase")]
    AlreadyCompleted {
        /// Module that was already completed
        module: ModuleId,
    },
}

impl AwardOutcome {
    /// Whether the award changed the user record.
    pub fn is_granted(&self) -> bool {
        matches!(self, AwardOutcome::Granted { .. })
    }
}

/// Mark `module` complete and grant its reward, at most once per module.
///
/// The badge is inserted with set semantics, so a badge already earned
/// elsewhere is not duplicated.
pub fn award_module_completion(
    user: &mut User,
    module: ModuleId,
    badge: &str,
    points: u64,
) -> AwardOutcome {
    if user.has_completed(module) {
        return AwardOutcome::AlreadyCompleted { module };
    }

    let new_badge = user.badges.insert(badge);
    user.points = user.points.saturating_add(points);
    user.completed_modules.insert(module, true);

    AwardOutcome::Granted {
        module,
        badge: badge.to_string(),
        new_badge,
        points_awarded: points,
        total_points: user.points,
        tip: financial_tip(module.as_str()),
    }
}
