use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::{json, Value};

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap()
}

pub fn days_ago(days: i64) -> String {
    (fixed_now() - Duration::days(days)).to_rfc3339()
}

/// A month and a half of mixed health logs ending at [`fixed_now`]
pub fn sample_document() -> Value {
    let sleep: Vec<Value> = (1..=45)
        .map(|d| json!({"date": days_ago(d), "duration_hours": if d % 2 == 0 { 6.0 } else { 7.0 }}))
        .collect();

    let types = ["cardio", "strength", "yoga", "tennis", "cardio"];
    let exercise: Vec<Value> = (1..=20)
        .map(|d| {
            json!({
                "date": days_ago(d * 2),
                "duration_minutes": 45,
                "type": types[d as usize % types.len()],
            })
        })
        .collect();

    let nutrition: Vec<Value> = (1..=20)
        .map(|d| json!({"date": days_ago(d), "calories": 2000 + d * 10}))
        .collect();

    let vitals: Vec<Value> = (1..=35)
        .map(|d| json!({"date": days_ago(d), "heart_rate": 70}))
        .collect();

    json!({
        "sleep": sleep,
        "exercise": exercise,
        "nutrition": nutrition,
        "vitals": vitals,
    })
}
