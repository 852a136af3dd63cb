//! Daily login streak.

use chrono::NaiveDate;
use finquest_core::{date::days_between, User};

/// How a login changed the streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakUpdate {
    /// First recorded login.
    Started,
    /// Already logged in today.
    Unchanged,
    /// Logged in on the day after the last login.
    Extended,
    /// Gap of more than one day, or the clock went backwards.
    Reset,
}

/// Apply a login on `today` to the user's streak.
///
/// Days are compared as calendar dates, so repeated calls on the same day
/// leave the streak alone.
pub fn update_login_streak(user: &mut User, today: NaiveDate) -> StreakUpdate {
    let Some(last) = user.last_login_date else {
        user.current_streak = 1;
        user.last_login_date = Some(today);
        return StreakUpdate::Started;
    };

    match days_between(today, last) {
        0 => StreakUpdate::Unchanged,
        1 => {
            user.current_streak = user.current_streak.max(1).saturating_add(1);
            user.last_login_date = Some(today);
            StreakUpdate::Extended
        }
        _ => {
            user.current_streak = 1;
            user.last_login_date = Some(today);
            StreakUpdate::Reset
        }
    }
}

/// Motivational message for a streak length.
pub fn streak_message(streak: u32) -> &'static str {
    if streak >= 7 {
        "🏆 Financial Discipline Master!"
    } else if streak >= 3 {
        "✨ Consistency Builder!"
    } else {
        "Keep it up!"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn test_streak_lifecycle() {
        let mut user = User::default();

        assert_eq!(update_login_streak(&mut user, day(1)), StreakUpdate::Started);
        assert_eq!(user.current_streak, 1);

        assert_eq!(update_login_streak(&mut user, day(1)), StreakUpdate::Unchanged);
        assert_eq!(user.current_streak, 1);

        assert_eq!(update_login_streak(&mut user, day(2)), StreakUpdate::Extended);
        assert_eq!(user.current_streak, 2);
        assert_eq!(user.last_login_date, Some(day(2)));

        assert_eq!(update_login_streak(&mut user, day(5)), StreakUpdate::Reset);
        assert_eq!(user.current_streak, 1);
        assert_eq!(user.last_login_date, Some(day(5)));
    }

    #[test]
    fn test_clock_skew_resets() {
        let mut user = User::default();
        user.current_streak = 4;
        user.last_login_date = Some(day(10));

        assert_eq!(update_login_streak(&mut user, day(9)), StreakUpdate::Reset);
        assert_eq!(user.current_streak, 1);
        assert_eq!(user.last_login_date, Some(day(9)));
    }

    #[test]
    fn test_zero_streak_counts_as_one() {
        let mut user = User::default();
        user.current_streak = 0;
        user.last_login_date = Some(day(10));

        update_login_streak(&mut user, day(11));
        assert_eq!(user.current_streak, 2);
    }

    #[test]
    fn test_streak_across_month_boundary() {
        let mut user = User::default();
        user.current_streak = 6;
        user.last_login_date = NaiveDate::from_ymd_opt(2026, 9, 30);

        assert_eq!(update_login_streak(&mut user, day(1)), StreakUpdate::Extended);
        assert_eq!(user.current_streak, 7);
    }

    #[test]
    fn test_streak_message_tiers() {
        assert_eq!(streak_message(0), "Keep it up!");
        assert_eq!(streak_message(2), "Keep it up!");
        assert_eq!(streak_message(3), "✨ Consistency Builder!");
        assert_eq!(streak_message(6), "✨ Consistency Builder!");
        assert_eq!(streak_message(7), "🏆 Financial Discipline Master!");
        assert_eq!(streak_message(365), "🏆 Financial Discipline Master!");
    }
}
