//! One-paragraph natural-language health digest

use crate::types::Trends;

/// Describe sleep, exercise and nutrition trends in a single sentence
///
/// Heart rate is part of the trends but not of the digest.
pub fn health_digest(trends: &Trends) -> String {
    let mut clauses = Vec::new();
    if let Some(sleep) = &trends.sleep {
        clauses.push(format!(
            "averaging {:.1} hours of sleep per night",
            sleep.avg_duration_hours
        ));
    }
    if let Some(exercise) = &trends.exercise {
        clauses.push(format!(
            "engaging in {:.1} minutes of daily activity",
            exercise.avg_daily_minutes
        ));
    }
    if let Some(nutrition) = &trends.nutrition {
        clauses.push(format!(
            "maintaining an average calorie intake of {:.0} kcal",
            nutrition.avg_daily_calories
        ));
    }

    match clauses.as_slice() {
        [] => "Individual with limited health data available for analysis.".to_string(),
        [only] => format!("A moderate sleeper {only}."),
        [first, second] => format!("A moderate sleeper {first} and {second}."),
        [first, second, third, ..] => {
            format!("A moderate sleeper {first}, {second}, and {third}.")
        }
    }
}
