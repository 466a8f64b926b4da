use chrono::{Duration, TimeZone, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use healthcoach_advise::deterministic_recommendations;
use healthcoach_compress::{Compressor, health_digest};
use healthcoach_core::{BudgetTier, RawHealthDocument};
use serde_json::{Value, json};
use std::hint::black_box;

fn year_of_logs() -> Value {
    let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let date = |d: i64| (now - Duration::days(d)).to_rfc3339();
    let types = ["cardio", "strength", "flexibility", "sports", "yoga"];

    let sleep: Vec<Value> = (0..365)
        .map(|d| json!({"date": date(d), "duration_hours": 6.0 + (d % 4) as f64 * 0.5}))
        .collect();
    let exercise: Vec<Value> = (0..365)
        .map(|d| json!({"date": date(d), "duration_minutes": 30, "type": types[d as usize % 5]}))
        .collect();
    let nutrition: Vec<Value> = (0..365)
        .map(|d| json!({"date": date(d), "calories": 1800 + d % 7 * 100}))
        .collect();
    let vitals: Vec<Value> = (0..365)
        .map(|d| json!({"date": date(d), "heart_rate": 60 + d % 20}))
        .collect();

    json!({"sleep": sleep, "exercise": exercise, "nutrition": nutrition, "vitals": vitals})
}

fn bench_compress_year(c: &mut Criterion) {
    let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let doc = RawHealthDocument::from_value(&year_of_logs()).unwrap();

    for tier in BudgetTier::ALL {
        let compressor = Compressor::new(tier);
        c.bench_function(&format!("compress_365_days_{}", tier), |b| {
            b.iter(|| compressor.compress(black_box(&doc), now).unwrap());
        });
    }
}

fn bench_parse_and_recommend(c: &mut Criterion) {
    let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let raw = year_of_logs();

    c.bench_function("parse_compress_recommend", |b| {
        b.iter(|| {
            let doc = RawHealthDocument::from_value(black_box(&raw)).unwrap();
            let artifact = Compressor::new(BudgetTier::High).compress(&doc, now).unwrap();
            let twin = health_digest(artifact.trends());
            deterministic_recommendations(artifact.trends(), BudgetTier::High, &twin)
        });
    });
}

criterion_group!(benches, bench_compress_year, bench_parse_and_recommend);
criterion_main!(benches);
