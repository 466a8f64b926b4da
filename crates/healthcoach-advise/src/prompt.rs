//! Prompt construction and response parsing for remote recommendations

use crate::rules::apply_limit;
use crate::Recommendations;
use chrono::Utc;
use healthcoach_compress::Trends;
use healthcoach_core::BudgetTier;

pub fn build_recommendation_prompt(trends: &Trends, tier: BudgetTier, health_twin: &str) -> String {
    let mut prompt = format!(
        "Based on the following health twin analysis, provide personalized health recommendations:\n\n\
         HEALTH TWIN SUMMARY:\n{health_twin}\n\n\
         DETAILED HEALTH DATA:\n"
    );

    if let Some(sleep) = &trends.sleep {
        prompt.push_str(&format!(
            "- Sleep: {:.1} hours average duration\n",
            sleep.avg_duration_hours
        ));
    }
    if let Some(exercise) = &trends.exercise {
        prompt.push_str(&format!(
            "- Exercise: {:.1} minutes daily average\n",
            exercise.avg_daily_minutes
        ));
    }
    if let Some(nutrition) = &trends.nutrition {
        prompt.push_str(&format!(
            "- Nutrition: {:.0} calories daily average\n",
            nutrition.avg_daily_calories
        ));
    }
    if let Some(heart_rate) = &trends.heart_rate {
        prompt.push_str(&format!("- Heart Rate: {:.1} bpm average\n", heart_rate.avg));
    }

    prompt.push_str(&format!(
        "\nBUDGET MODE: {tier}\n\nRECOMMENDATION REQUIREMENTS:\n{}",
        requirements(tier)
    ));
    prompt.push_str(
        "\n\nFormat your response as a list of recommendations, each on a new line.\n\
         Be specific and actionable based on the health data provided.\n",
    );
    prompt
}

fn requirements(tier: BudgetTier) -> &'static str {
    match tier {
        BudgetTier::Low => {
            "- Provide exactly 1 recommendation maximum\n\
             - Keep it concise and actionable\n\
             - Focus on the most critical health issue"
        }
        BudgetTier::Balanced => {
            "- Provide 2-3 recommendations\n\
             - Include moderate detail for each\n\
             - Cover multiple health aspects if relevant"
        }
        BudgetTier::High => {
            "- Provide detailed recommendations with reasoning\n\
             - Include comprehensive health insights\n\
             - Explain the 'why' behind each recommendation"
        }
    }
}

/// Turn remote output into tier-limited recommendations
pub fn parse_api_response(
    response: &str,
    tier: BudgetTier,
    trends: &Trends,
    health_twin: &str,
) -> Recommendations {
    let lines: Vec<String> = response
        .lines()
        .map(|line| crate::client::strip_list_marker(line.trim()))
        .filter(|line| line.chars().count() > 10)
        .collect();
    let recommendations = apply_limit(lines, tier.recommendation_limit());

    let reasoning = if tier == BudgetTier::High {
        let personalized = if health_twin.chars().count() > 50 {
            let head: String = health_twin.chars().take(50).collect();
            format!("Personalized using health twin: {head}...")
        } else {
            "Personalized using health twin data".to_string()
        };
        vec![
            format!(
                "AI-generated recommendations based on analysis of {} health metrics",
                trends.len()
            ),
            personalized,
        ]
    } else {
        Vec::new()
    };

    Recommendations {
        timestamp: Utc::now(),
        budget_mode: tier,
        health_twin: health_twin.to_string(),
        recommendation_count: recommendations.len(),
        recommendations,
        reasoning,
        data_sources: trends.keys().into_iter().map(String::from).collect(),
        api_generated: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthcoach_compress::{HeartRateTrend, SleepTrend};

    fn sample_trends() -> Trends {
        Trends {
            sleep: Some(SleepTrend {
                avg_duration_hours: 6.3,
                data_points: 10,
                trend_period_days: 30,
            }),
            heart_rate: Some(HeartRateTrend {
                avg: 71.0,
                data_points: 4,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_prompt_contains_twin_data_and_tier() {
        let prompt = build_recommendation_prompt(&sample_trends(), BudgetTier::Balanced, "A twin.");
        assert!(prompt.contains("HEALTH TWIN SUMMARY:\nA twin.\n"));
        assert!(prompt.contains("- Sleep: 6.3 hours average duration\n"));
        assert!(prompt.contains("- Heart Rate: 71.0 bpm average\n"));
        assert!(!prompt.contains("- Exercise"));
        assert!(prompt.contains("BUDGET MODE: BALANCED"));
        assert!(prompt.contains("- Provide 2-3 recommendations"));
        assert!(prompt.ends_with("based on the health data provided.\n"));
    }

    #[test]
    fn test_prompt_lists_every_trend_in_order() {
        use healthcoach_compress::{ExerciseTrend, NutritionTrend};

        let trends = Trends {
            exercise: Some(ExerciseTrend {
                avg_daily_minutes: 18.5,
                total_sessions: 9,
                trend_period_days: 30,
            }),
            nutrition: Some(NutritionTrend {
                avg_daily_calories: 2150.0,
                data_points: 12,
                trend_period_days: 14,
            }),
            ..sample_trends()
        };

        let prompt = build_recommendation_prompt(&trends, BudgetTier::High, "A twin.");
        assert!(prompt.contains(
            "DETAILED HEALTH DATA:\n\
             - Sleep: 6.3 hours average duration\n\
             - Exercise: 18.5 minutes daily average\n\
             - Nutrition: 2150 calories daily average\n\
             - Heart Rate: 71.0 bpm average\n\
             \nBUDGET MODE: HIGH\n"
        ));
    }

    #[test]
    fn test_prompt_requirements_per_tier() {
        let low = build_recommendation_prompt(&Trends::default(), BudgetTier::Low, "twin");
        assert!(low.contains("exactly 1 recommendation"));
        let high = build_recommendation_prompt(&Trends::default(), BudgetTier::High, "twin");
        assert!(high.contains("Explain the 'why'"));
    }

    #[test]
    fn test_parse_api_response_limits_by_tier() {
        let response = "1. Go to bed at the same time every night.\n\
                        2. Walk for twenty minutes after lunch.\n\
                        - Drink more water throughout the day.\n\
                        ok\n\
                        4. Stretch for ten minutes before bed.";

        let low = parse_api_response(response, BudgetTier::Low, &sample_trends(), "twin");
        assert_eq!(
            low.recommendations,
            vec!["Go to bed at the same time every night."]
        );
        assert!(low.api_generated);
        assert!(low.reasoning.is_empty());

        let balanced = parse_api_response(response, BudgetTier::Balanced, &sample_trends(), "twin");
        assert_eq!(balanced.recommendation_count, 3);
        assert_eq!(
            balanced.recommendations[2],
            "Drink more water throughout the day."
        );

        let high = parse_api_response(response, BudgetTier::High, &sample_trends(), "twin");
        assert_eq!(high.recommendation_count, 4);
        assert_eq!(
            high.reasoning,
            vec![
                "AI-generated recommendations based on analysis of 2 health metrics",
                "Personalized using health twin data",
            ]
        );
        assert_eq!(high.data_sources, vec!["sleep", "heart_rate"]);
    }

    #[test]
    fn test_parse_api_response_truncates_long_twin() {
        let twin = "A moderate sleeper averaging 6.2 hours of sleep per night and engaging in 10.0 minutes of daily activity.";
        let high = parse_api_response(
            "1. Sleep earlier every single night.",
            BudgetTier::High,
            &sample_trends(),
            twin,
        );
        assert_eq!(
            high.reasoning[1],
            format!("Personalized using health twin: {}...", &twin[..50])
        );
    }
}
