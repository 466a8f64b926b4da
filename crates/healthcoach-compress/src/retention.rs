//! Tier-dependent retention decisions
//!
//! These only decide what is reported as discarded. They never change the
//! records that feed the trend statistics.

use crate::trends::{count_older, recent, EXERCISE_WINDOW_DAYS};
use chrono::{DateTime, Utc};
use healthcoach_core::{BudgetTier, ExerciseRecord, SleepRecord, VitalsRecord};
use std::collections::BTreeSet;

/// A discarded field label with its explanation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discard {
    /// Short machine label recorded in `discarded_fields`
    pub label: String,
    /// What was discarded
    pub detail: String,
    pub reason: String,
}

/// Sleep entries at or beyond the tier cutoff
///
/// Entries inside the 30-day trend window are counted too when they are
/// older than the cutoff.
pub fn sleep_discards(
    records: &[SleepRecord],
    now: DateTime<Utc>,
    tier: BudgetTier,
) -> Option<Discard> {
    let cutoff = tier.retention_cutoff_days();
    let count = count_older(records, now, cutoff);
    (count > 0).then(|| Discard {
        label: format!("sleep_data_older_than_{cutoff}_days"),
        detail: format!("{count} sleep entries older than {cutoff} days"),
        reason: "low impact on current recommendations".to_string(),
    })
}

/// Recent exercise sessions whose type is outside the tier allow-list
pub fn exercise_discards(
    records: &[ExerciseRecord],
    now: DateTime<Utc>,
    tier: BudgetTier,
) -> Option<Discard> {
    let allowed = tier.exercise_allow_list();
    let excluded: Vec<&ExerciseRecord> = recent(records, now, EXERCISE_WINDOW_DAYS)
        .into_iter()
        .filter(|r| !allowed.contains(&r.normalized_type().as_str()))
        .collect();
    if excluded.is_empty() {
        return None;
    }

    let types: BTreeSet<&str> = excluded
        .iter()
        .map(|r| r.activity_type.as_deref().unwrap_or("unknown"))
        .collect();
    let types = types.into_iter().collect::<Vec<_>>().join(", ");

    Some(Discard {
        label: "niche_exercise_types".to_string(),
        detail: format!("{} exercise entries of types {{{types}}}", excluded.len()),
        reason: format!("budget mode '{tier}' limits exercise type diversity"),
    })
}

/// Field-level nutrition detail dropped at the lower tiers
pub fn nutrition_discards(tier: BudgetTier) -> Option<Discard> {
    match tier {
        BudgetTier::Low => Some(Discard {
            label: "detailed_meal_breakdowns".to_string(),
            detail: "detailed meal breakdowns".to_string(),
            reason: "LOW budget mode requires minimal nutrition tracking".to_string(),
        }),
        BudgetTier::Balanced => Some(Discard {
            label: "ingredient_level_details".to_string(),
            detail: "ingredient-level details".to_string(),
            reason: "BALANCED budget mode optimizes for meal-level tracking".to_string(),
        }),
        BudgetTier::High => None,
    }
}

/// Vital readings at or beyond the tier cutoff
pub fn vitals_discards(
    records: &[VitalsRecord],
    now: DateTime<Utc>,
    tier: BudgetTier,
) -> Option<Discard> {
    let cutoff = tier.retention_cutoff_days();
    let count = count_older(records, now, cutoff);
    (count > 0).then(|| Discard {
        label: format!("vitals_older_than_{cutoff}_days"),
        detail: format!("{count} vital readings older than {cutoff} days"),
        reason: "outdated health metrics".to_string(),
    })
}
