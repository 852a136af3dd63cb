//! Progress Tracking
//!
//! Module rewards, login streaks, titles, milestones, input validation, and
//! the store-backed tracker that applies them to the persisted user record.

#![warn(missing_docs)]

pub mod rewards;
pub mod streak;
pub mod rules;
pub mod milestone;
pub mod stats;
pub mod validation;
pub mod tracker;

pub use rewards::{award_module_completion, financial_tip, AwardOutcome, DEFAULT_MODULE_POINTS};
pub use streak::{streak_message, update_login_streak, StreakUpdate};
pub use rules::{profile_title, recommendation};
pub use milestone::{next_milestone, Milestone, MILESTONES};
pub use stats::{
    compute_progress, dashboard, gamification_stats, CompletionState, Dashboard,
    GamificationStats, ProgressSummary,
};
pub use validation::{
    validate_budget, validate_expense, validate_saving_goal, BudgetCheck, ExpenseCheck,
    SavingGoalCheck, ValidationError,
};
pub use tracker::{
    ProgressTracker, Result, Session, TrackerConfig, TrackerError, NO_USER_DATA, USER_KEY,
};
