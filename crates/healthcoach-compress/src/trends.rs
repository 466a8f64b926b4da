//! Windowed trend aggregation per health category

use crate::types::{ExerciseTrend, HeartRateTrend, NutritionTrend, SleepTrend};
use chrono::{DateTime, Duration, Utc};
use healthcoach_core::{
    BudgetTier, ExerciseRecord, HealthRecord, NutritionRecord, SleepRecord, VitalsRecord,
};

pub const SLEEP_WINDOW_DAYS: i64 = 30;
pub const EXERCISE_WINDOW_DAYS: i64 = 30;
/// Nutrition is more volatile, so it uses a shorter window
pub const NUTRITION_WINDOW_DAYS: i64 = 14;

/// Records strictly newer than `now - days`
pub fn recent<T: HealthRecord>(records: &[T], now: DateTime<Utc>, days: i64) -> Vec<&T> {
    let cutoff = now - Duration::days(days);
    records.iter().filter(|r| r.date() > cutoff).collect()
}

/// Number of records at or older than `now - days`
pub fn count_older<T: HealthRecord>(records: &[T], now: DateTime<Utc>, days: i64) -> usize {
    let cutoff = now - Duration::days(days);
    records.iter().filter(|r| r.date() <= cutoff).count()
}

/// Round to `places` decimals, ties to even
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}

/// Mean nightly sleep over the last 30 days
pub fn sleep_trend(records: &[SleepRecord], now: DateTime<Utc>) -> Option<SleepTrend> {
    let window = recent(records, now, SLEEP_WINDOW_DAYS);
    if window.is_empty() {
        return None;
    }
    let total: f64 = window.iter().map(|r| r.hours()).sum();
    Some(SleepTrend {
        avg_duration_hours: round_to(total / window.len() as f64, 1),
        data_points: window.len(),
        trend_period_days: SLEEP_WINDOW_DAYS,
    })
}

/// Mean daily exercise minutes: total minutes in the window over 30 calendar days
pub fn exercise_trend(records: &[ExerciseRecord], now: DateTime<Utc>) -> Option<ExerciseTrend> {
    let window = recent(records, now, EXERCISE_WINDOW_DAYS);
    if window.is_empty() {
        return None;
    }
    let total: f64 = window.iter().map(|r| r.minutes()).sum();
    Some(ExerciseTrend {
        avg_daily_minutes: round_to(total / EXERCISE_WINDOW_DAYS as f64, 1),
        total_sessions: window.len(),
        trend_period_days: EXERCISE_WINDOW_DAYS,
    })
}

/// Mean daily calories over the last 14 days, rounded to whole calories
pub fn nutrition_trend(records: &[NutritionRecord], now: DateTime<Utc>) -> Option<NutritionTrend> {
    let window = recent(records, now, NUTRITION_WINDOW_DAYS);
    if window.is_empty() {
        return None;
    }
    let total: f64 = window.iter().map(|r| r.kcal()).sum();
    Some(NutritionTrend {
        avg_daily_calories: round_to(total / window.len() as f64, 0),
        data_points: window.len(),
        trend_period_days: NUTRITION_WINDOW_DAYS,
    })
}

/// Mean heart rate over the tier's vitals window
///
/// Entries without a reading are left out of both the sum and the count.
pub fn heart_rate_trend(
    records: &[VitalsRecord],
    now: DateTime<Utc>,
    tier: BudgetTier,
) -> Option<HeartRateTrend> {
    let readings: Vec<f64> = recent(records, now, tier.vitals_window_days())
        .into_iter()
        .filter_map(|r| r.reading())
        .collect();
    if readings.is_empty() {
        return None;
    }
    let total: f64 = readings.iter().sum();
    Some(HeartRateTrend {
        avg: round_to(total / readings.len() as f64, 1),
        data_points: readings.len(),
    })
}
