//! UserProgressSnapshot value object - user-wide rollup and streak math.

use std::collections::HashSet;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Percentage, Timestamp, UserId};
use crate::domain::progress::EventProgressRecord;

use super::ModuleProgress;

/// User-wide progress totals, always recomputed from current records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProgressSnapshot {
    pub user_id: UserId,
    pub modules: Vec<ModuleProgress>,
    pub total_activities: u32,
    pub total_completed: u32,
    pub global_percent: Percentage,
    pub total_points: f64,
    pub modules_completed: u32,
    pub last_play: Option<Timestamp>,
    pub streak_days: u32,
}

impl UserProgressSnapshot {
    /// Assembles the snapshot from per-module rollups and the flat list of
    /// every record of the user that the rollups were computed over.
    ///
    /// `today` anchors the streak walk; inject it from a clock so tests can
    /// pin the calendar.
    pub fn assemble(
        user_id: UserId,
        modules: Vec<ModuleProgress>,
        all_records: &[EventProgressRecord],
        today: NaiveDate,
    ) -> Self {
        let total_activities = modules.iter().map(|m| m.total_activities).sum();
        let total_completed = modules.iter().map(|m| m.completed_activities).sum();
        let total_points = modules.iter().map(|m| m.points_obtained).sum();
        let modules_completed = modules.iter().filter(|m| m.is_completed()).count() as u32;

        Self {
            user_id,
            modules,
            total_activities,
            total_completed,
            global_percent: Percentage::from_ratio(total_completed, total_activities),
            total_points,
            modules_completed,
            last_play: last_play(all_records),
            streak_days: streak_days(&play_dates(all_records), today),
        }
    }
}

/// Latest instant the user touched any record (start or end time).
///
/// `None` when the user has no records at all.
pub fn last_play(records: &[EventProgressRecord]) -> Option<Timestamp> {
    records
        .iter()
        .flat_map(|r| {
            std::iter::once(*r.start_time()).chain(r.end_time().copied())
        })
        .max()
}

/// Distinct calendar dates on which the user has recorded activity.
///
/// A date counts if any record started or completed on it.
pub fn play_dates(records: &[EventProgressRecord]) -> HashSet<NaiveDate> {
    records
        .iter()
        .flat_map(|r| {
            std::iter::once(r.start_time().date()).chain(r.end_time().map(|t| t.date()))
        })
        .collect()
}

/// Consecutive-day streak, walking backward from `today`.
///
/// The walk always begins at today: when today has no activity the streak is
/// 0 regardless of earlier days.
pub fn streak_days(dates: &HashSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut day = today;
    while dates.contains(&day) {
        streak += 1;
        day = match day.checked_sub_days(Days::new(1)) {
            Some(previous) => previous,
            None => break,
        };
    }
    streak
}
