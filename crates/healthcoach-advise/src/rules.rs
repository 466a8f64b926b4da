//! Deterministic threshold-based recommendations

use crate::Recommendations;
use chrono::Utc;
use healthcoach_compress::Trends;
use healthcoach_core::BudgetTier;

const MIN_SLEEP_HOURS: f64 = 7.0;
const MAX_SLEEP_HOURS: f64 = 9.0;
/// 150 minutes a week
const MIN_DAILY_MINUTES: f64 = 22.0;
const MIN_DAILY_CALORIES: f64 = 1500.0;
const MAX_DAILY_CALORIES: f64 = 3000.0;
const ELEVATED_HEART_RATE: f64 = 80.0;

#[derive(Default)]
struct Advice {
    recommendations: Vec<String>,
    reasoning: Vec<String>,
}

impl Advice {
    fn recommend(&mut self, lines: impl IntoIterator<Item = String>) {
        self.recommendations.extend(lines);
    }

    fn reason(&mut self, line: String) {
        self.reasoning.push(line);
    }
}

fn sleep_advice(advice: &mut Advice, hours: f64, tier: BudgetTier) {
    if hours < MIN_SLEEP_HOURS {
        advice.recommend(match tier {
            BudgetTier::Low => vec![format!(
                "Increase sleep from current {hours:.1} hours to at least 7 hours nightly."
            )],
            BudgetTier::Balanced => vec![
                format!("Increase sleep from {hours:.1} hours to 7-9 hours by maintaining consistent bedtime."),
                "Create a relaxing bedtime routine to improve sleep quality.".to_string(),
            ],
            BudgetTier::High => vec![
                format!("Increase sleep from {hours:.1} hours to 7-9 hours to regulate circadian rhythm."),
                "Implement 30-minute wind-down routine: dim lights, avoid screens, practice relaxation.".to_string(),
                "Optimize sleep environment: cool room (65-68°F), minimal noise, comfortable bedding.".to_string(),
            ],
        });
        advice.reason(format!(
            "Sleep duration {hours:.1} hours below recommended 7-9 hours."
        ));
    } else if hours > MAX_SLEEP_HOURS {
        if tier == BudgetTier::High {
            advice.recommend([
                format!("Consider reducing sleep from {hours:.1} hours toward 7-9 hour range."),
                "If sleeping >9 hours, consult healthcare provider to rule out underlying conditions.".to_string(),
            ]);
        }
        advice.reason(format!(
            "Sleep duration {hours:.1} hours exceeds recommended range."
        ));
    } else if tier == BudgetTier::High {
        advice.reason(format!(
            "Sleep duration {hours:.1} hours within healthy range."
        ));
    }
}

fn exercise_advice(advice: &mut Advice, minutes: f64, tier: BudgetTier) {
    if minutes < MIN_DAILY_MINUTES {
        advice.recommend(match tier {
            BudgetTier::Low => vec![format!(
                "Increase daily activity from current {minutes:.1} minutes to at least 22 minutes."
            )],
            BudgetTier::Balanced => vec![
                format!("Increase daily activity from {minutes:.1} minutes to 22 minutes for 150 minutes weekly."),
                "Include both cardio and strength training for balanced fitness.".to_string(),
            ],
            BudgetTier::High => vec![
                format!("Increase daily activity from {minutes:.1} minutes to 22 minutes for 150+ minutes weekly."),
                "Add strength training 2-3 times weekly for major muscle groups.".to_string(),
                "Include flexibility work 2-3 times weekly for mobility and injury prevention.".to_string(),
            ],
        });
        advice.reason(format!(
            "Exercise average {minutes:.1} minutes/day below recommended 22 minutes."
        ));
    } else if tier == BudgetTier::High {
        advice.reason(format!(
            "Exercise average {minutes:.1} minutes/day meets guidelines."
        ));
    }
}

fn nutrition_advice(advice: &mut Advice, calories: f64, tier: BudgetTier) {
    if calories < MIN_DAILY_CALORIES {
        advice.recommend(match tier {
            BudgetTier::Low => vec![format!(
                "Increase calorie intake from current {calories:.0} kcal to meet basic needs."
            )],
            BudgetTier::Balanced => vec![
                format!("Increase calorie intake from {calories:.0} kcal to at least 1500-1800 kcal daily."),
                "Focus on balanced macronutrients and adequate hydration.".to_string(),
            ],
            BudgetTier::High => vec![
                format!("Increase calorie intake from {calories:.0} kcal to 1500-2000+ kcal based on activity level."),
                "Balance macronutrients: 45-65% complex carbs, 10-35% lean protein, 20-35% healthy fats.".to_string(),
                "Hydrate with 64-96oz water daily, adjusting for activity level and climate.".to_string(),
            ],
        });
        advice.reason(format!(
            "Calorie intake {calories:.0} may be insufficient for basic needs."
        ));
    } else if calories > MAX_DAILY_CALORIES {
        match tier {
            BudgetTier::Low => return,
            BudgetTier::Balanced => advice.recommend([
                format!("Consider reducing calorie intake from {calories:.0} kcal toward 2000-2500 range."),
                "Maintain balanced macronutrients while reducing overall intake.".to_string(),
            ]),
            BudgetTier::High => advice.recommend([
                format!("Consider reducing calorie intake from {calories:.0} kcal toward individual requirements."),
                "Prioritize nutrient-dense whole foods while managing total intake.".to_string(),
                "Monitor portion sizes and focus on balanced macronutrient distribution.".to_string(),
            ]),
        }
        advice.reason(format!(
            "Calorie intake {calories:.0} exceeds typical requirements."
        ));
    } else if tier == BudgetTier::High {
        advice.reason(format!(
            "Calorie intake {calories:.0} within reasonable range."
        ));
    }
}

fn heart_rate_advice(advice: &mut Advice, bpm: f64, tier: BudgetTier) {
    if bpm > ELEVATED_HEART_RATE {
        advice.recommend(match tier {
            BudgetTier::Low => vec![format!(
                "Monitor elevated heart rate of {bpm:.1} bpm - consider stress management."
            )],
            BudgetTier::Balanced => vec![
                format!("Monitor heart rate trends (current avg {bpm:.1} bpm) for cardiovascular health."),
                "Consult healthcare provider if resting HR consistently above 100 bpm.".to_string(),
            ],
            BudgetTier::High => vec![
                format!("Monitor resting heart rate (current avg {bpm:.1} bpm, ideal 60-100 bpm)."),
                "Track HR recovery rate post-exercise (should drop 20+ bpm within 1 minute).".to_string(),
                "Consider stress reduction techniques and regular cardiovascular exercise.".to_string(),
            ],
        });
        advice.reason(format!(
            "Average heart rate {bpm:.1} bpm elevated; may indicate stress or poor fitness."
        ));
    } else if tier == BudgetTier::High {
        advice.reason(format!(
            "Average heart rate {bpm:.1} bpm within normal range."
        ));
    }
}

/// Keep at most `limit` items, or everything when unbounded
pub(crate) fn apply_limit(mut items: Vec<String>, limit: Option<usize>) -> Vec<String> {
    if let Some(limit) = limit {
        items.truncate(limit);
    }
    items
}

/// Build recommendations from trend thresholds without any remote call
pub fn deterministic_recommendations(
    trends: &Trends,
    tier: BudgetTier,
    health_twin: &str,
) -> Recommendations {
    let mut advice = Advice::default();

    if let Some(sleep) = &trends.sleep {
        sleep_advice(&mut advice, sleep.avg_duration_hours, tier);
    }
    if let Some(exercise) = &trends.exercise {
        exercise_advice(&mut advice, exercise.avg_daily_minutes, tier);
    }
    if let Some(nutrition) = &trends.nutrition {
        nutrition_advice(&mut advice, nutrition.avg_daily_calories, tier);
    }
    if let Some(heart_rate) = &trends.heart_rate {
        heart_rate_advice(&mut advice, heart_rate.avg, tier);
    }

    let limit = tier.recommendation_limit();
    let recommendations = apply_limit(advice.recommendations, limit);
    let reasoning = match tier {
        BudgetTier::High => advice.reasoning,
        _ => Vec::new(),
    };

    Recommendations {
        timestamp: Utc::now(),
        budget_mode: tier,
        health_twin: health_twin.to_string(),
        recommendation_count: recommendations.len(),
        recommendations,
        reasoning,
        data_sources: trends.keys().into_iter().map(String::from).collect(),
        api_generated: false,
    }
}
