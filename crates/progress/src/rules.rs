//! Point-based titles and recommendations.
//!
//! Both are static rule tables keyed on the point total.

/// Profile title for a point total.
pub fn profile_title(points: u64) -> &'static str {
    if points >= 200 {
        "💎 Money Master"
    } else if points >= 100 {
        "🎯 Smart Planner"
    } else {
        "🌱 Financial Beginner"
    }
}

/// Next module to study for a point total.
pub fn recommendation(points: u64) -> &'static str {
    if points < 100 {
        "💡 We recommend you start with Budgeting Basics! Master the fundamentals first."
    } else {
        "🚀 Great progress! Try Invest Smart for advanced learning."
    }
}
