//! Progress summaries derived from a user record.

use finquest_core::{User, MODULE_COUNT};
use serde::Serialize;

use crate::milestone::{next_milestone, Milestone};
use crate::rules::{profile_title, recommendation};
use crate::streak::streak_message;

/// Whether the curriculum is finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CompletionState {
    /// Some modules remain.
    Partial,
    /// Every module is complete.
    AllComplete,
}

/// Module completion progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    /// Completed modules (0-4)
    pub completed_count: usize,
    /// Percentage complete (0-100).
    ///
    /// With four modules every value is a multiple of 25, which `f32`
    /// represents exactly.
    pub percentage: f32,
    /// Modules left
    pub remaining: usize,
}

impl ProgressSummary {
    /// Terminal vs partial state for presentation.
    pub fn state(&self) -> CompletionState {
        if self.remaining == 0 {
            CompletionState::AllComplete
        } else {
            CompletionState::Partial
        }
    }
}

/// Compute completion progress over the fixed module set.
pub fn compute_progress(user: &User) -> ProgressSummary {
    let completed_count = user.completed_count();
    ProgressSummary {
        completed_count,
        percentage: (completed_count as f32 / MODULE_COUNT as f32) * 100.0,
        remaining: MODULE_COUNT - completed_count,
    }
}

/// Summary counters for the gamification layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GamificationStats {
    /// Total points
    pub total_points: u64,
    /// Distinct badges held
    pub badges_count: usize,
    /// Completed modules
    pub modules_completed: usize,
    /// Size of the module set
    pub total_modules: usize,
    /// Percentage complete (0-100)
    pub completion_percentage: f32,
}

/// Collect gamification counters for a user.
pub fn gamification_stats(user: &User) -> GamificationStats {
    let progress = compute_progress(user);
    GamificationStats {
        total_points: user.points,
        badges_count: user.badges.len(),
        modules_completed: progress.completed_count,
        total_modules: MODULE_COUNT,
        completion_percentage: progress.percentage,
    }
}

/// Everything shown on the dashboard, computed in one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    /// Profile title for the current points
    pub title: &'static str,
    /// Current login streak
    pub streak: u32,
    /// Message for the current streak
    pub streak_message: &'static str,
    /// Rule-based study recommendation
    pub recommendation: &'static str,
    /// Module progress
    pub progress: ProgressSummary,
    /// Next point milestone
    pub next_milestone: Milestone,
    /// Counters
    pub stats: GamificationStats,
}

/// Build the dashboard view for a user.
pub fn dashboard(user: &User) -> Dashboard {
    Dashboard {
        title: profile_title(user.points),
        streak: user.current_streak,
        streak_message: streak_message(user.current_streak),
        recommendation: recommendation(user.points),
        progress: compute_progress(user),
        next_milestone: next_milestone(user.points),
        stats: gamification_stats(user),
    }
}
