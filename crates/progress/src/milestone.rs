//! Point milestones.

use serde::Serialize;

/// Fixed ascending milestone thresholds.
pub const MILESTONES: [u64; 6] = [50, 100, 150, 200, 250, 300];

/// The next milestone to aim for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    /// Threshold in points
    pub milestone: u64,
    /// Points still needed to reach it
    pub points_needed: u64,
    /// Whether every milestone has been reached
    pub reached: bool,
}

/// First milestone strictly above `points`, or the last one once all are passed.
pub fn next_milestone(points: u64) -> Milestone {
    match MILESTONES.iter().copied().find(|m| *m > points) {
        Some(milestone) => Milestone {
            milestone,
            points_needed: milestone - points,
            reached: false,
        },
        None => Milestone {
            milestone: MILESTONES[MILESTONES.len() - 1],
            points_needed: 0,
            reached: true,
        },
    }
}
