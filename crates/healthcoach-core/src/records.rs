//! Typed health records and the raw input document
//!
//! Timestamps are normalized to UTC here, at the input boundary. Records that
//! cannot be read are skipped and counted rather than failing the whole run.

use crate::{Category, CoreError};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Parse an ISO-8601 timestamp into a UTC instant
///
/// Accepts RFC 3339 (`Z` or numeric offset), naive date-times and bare dates.
/// Values without an offset are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, CoreError> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    Err(CoreError::InvalidTimestamp(raw.to_string()))
}

/// A dated observation belonging to one category
pub trait HealthRecord: Sized {
    const CATEGORY: Category;

    /// Build a record from one raw JSON entry
    fn from_entry(entry: &Value) -> Result<Self, CoreError>;

    fn date(&self) -> DateTime<Utc>;
}

fn malformed(category: Category, err: serde_json::Error) -> CoreError {
    CoreError::MalformedRecord {
        category,
        reason: err.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SleepRecord {
    pub date: DateTime<Utc>,
    pub duration_hours: Option<f64>,
}

impl SleepRecord {
    /// Duration in hours, 0 when not recorded
    pub fn hours(&self) -> f64 {
        self.duration_hours.unwrap_or(0.0)
    }
}

impl HealthRecord for SleepRecord {
    const CATEGORY: Category = Category::Sleep;

    fn from_entry(entry: &Value) -> Result<Self, CoreError> {
        #[derive(Deserialize)]
        struct Entry {
            date: String,
            #[serde(default)]
            duration_hours: Option<f64>,
        }

        let entry = Entry::deserialize(entry).map_err(|e| malformed(Self::CATEGORY, e))?;
        Ok(Self {
            date: parse_timestamp(&entry.date)?,
            duration_hours: entry.duration_hours,
        })
    }

    fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseRecord {
    pub date: DateTime<Utc>,
    pub duration_minutes: Option<f64>,
    pub activity_type: Option<String>,
}

impl ExerciseRecord {
    /// Duration in minutes, 0 when not recorded
    pub fn minutes(&self) -> f64 {
        self.duration_minutes.unwrap_or(0.0)
    }

    /// Lowercased activity type, empty when not recorded
    pub fn normalized_type(&self) -> String {
        self.activity_type
            .as_deref()
            .unwrap_or_default()
            .to_lowercase()
    }
}

impl HealthRecord for ExerciseRecord {
    const CATEGORY: Category = Category::Exercise;

    fn from_entry(entry: &Value) -> Result<Self, CoreError> {
        #[derive(Deserialize)]
        struct Entry {
            date: String,
            #[serde(default)]
            duration_minutes: Option<f64>,
            #[serde(default, rename = "type")]
            activity_type: Option<String>,
        }

        let entry = Entry::deserialize(entry).map_err(|e| malformed(Self::CATEGORY, e))?;
        Ok(Self {
            date: parse_timestamp(&entry.date)?,
            duration_minutes: entry.duration_minutes,
            activity_type: entry.activity_type,
        })
    }

    fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NutritionRecord {
    pub date: DateTime<Utc>,
    pub calories: Option<f64>,
}

impl NutritionRecord {
    /// Calories, 0 when not recorded
    pub fn kcal(&self) -> f64 {
        self.calories.unwrap_or(0.0)
    }
}

impl HealthRecord for NutritionRecord {
    const CATEGORY: Category = Category::Nutrition;

    fn from_entry(entry: &Value) -> Result<Self, CoreError> {
        #[derive(Deserialize)]
        struct Entry {
            date: String,
            #[serde(default)]
            calories: Option<f64>,
        }

        let entry = Entry::deserialize(entry).map_err(|e| malformed(Self::CATEGORY, e))?;
        Ok(Self {
            date: parse_timestamp(&entry.date)?,
            calories: entry.calories,
        })
    }

    fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VitalsRecord {
    pub date: DateTime<Utc>,
    pub heart_rate: Option<f64>,
}

impl VitalsRecord {
    /// Heart rate reading, `None` when absent or zero
    pub fn reading(&self) -> Option<f64> {
        self.heart_rate.filter(|bpm| *bpm != 0.0)
    }
}

impl HealthRecord for VitalsRecord {
    const CATEGORY: Category = Category::Vitals;

    fn from_entry(entry: &Value) -> Result<Self, CoreError> {
        #[derive(Deserialize)]
        struct Entry {
            date: String,
            #[serde(default)]
            heart_rate: Option<f64>,
        }

        let entry = Entry::deserialize(entry).map_err(|e| malformed(Self::CATEGORY, e))?;
        Ok(Self {
            date: parse_timestamp(&entry.date)?,
            heart_rate: entry.heart_rate,
        })
    }

    fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

/// Parsed records for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryData<T> {
    pub records: Vec<T>,
    /// Entries dropped because they could not be read
    pub skipped: usize,
}

/// The raw input document: category name to an ordered list of records
#[derive(Debug, Clone, Default)]
pub struct RawHealthDocument {
    pub sleep: Option<CategoryData<SleepRecord>>,
    pub exercise: Option<CategoryData<ExerciseRecord>>,
    pub nutrition: Option<CategoryData<NutritionRecord>>,
    pub vitals: Option<CategoryData<VitalsRecord>>,
    /// Word-count size of the document as supplied
    pub raw_size: usize,
}

impl RawHealthDocument {
    /// Parse a document of the shape `{category: [record, ...], ...}`
    ///
    /// Categories that are missing, empty, or not a list are absent.
    pub fn from_value(value: &Value) -> Result<Self, CoreError> {
        let map = value.as_object().ok_or(CoreError::InvalidDocument)?;
        Ok(Self {
            sleep: parse_category(map),
            exercise: parse_category(map),
            nutrition: parse_category(map),
            vitals: parse_category(map),
            raw_size: healthcoach_telemetry::estimate_size(value),
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Categories present in the document, in processing order
    pub fn categories(&self) -> Vec<Category> {
        let present = [
            self.sleep.is_some(),
            self.exercise.is_some(),
            self.nutrition.is_some(),
            self.vitals.is_some(),
        ];
        Category::ALL
            .into_iter()
            .zip(present)
            .filter_map(|(category, present)| present.then_some(category))
            .collect()
    }
}

fn parse_category<T: HealthRecord>(map: &Map<String, Value>) -> Option<CategoryData<T>> {
    let category = T::CATEGORY;
    let entries = match map.get(category.as_str())? {
        Value::Array(entries) if !entries.is_empty() => entries,
        Value::Array(_) => return None,
        _ => {
            tracing::warn!(category = %category, "category data is not a list, skipping");
            return None;
        }
    };

    let mut records = Vec::with_capacity(entries.len());
    let mut skipped = 0;
    for (index, entry) in entries.iter().enumerate() {
        match T::from_entry(entry) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!(category = %category, index, error = %e, "skipping unreadable record");
                skipped += 1;
            }
        }
    }

    Some(CategoryData { records, skipped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap();
        assert_eq!(parse_timestamp("2024-03-01T08:30:00Z").unwrap(), expected);
        assert_eq!(
            parse_timestamp("2024-03-01T10:30:00+02:00").unwrap(),
            expected
        );
        assert_eq!(parse_timestamp("2024-03-01T08:30:00").unwrap(), expected);
        assert_eq!(
            parse_timestamp("2024-03-01T08:30:00.000").unwrap(),
            expected
        );
        assert_eq!(
            parse_timestamp("2024-03-01").unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(matches!(
            parse_timestamp("yesterday"),
            Err(CoreError::InvalidTimestamp(_))
        ));
        assert!(parse_timestamp("").is_err());
    }

    #[test]
    fn test_missing_numeric_fields_default_to_zero() {
        let sleep = SleepRecord::from_entry(&json!({"date": "2024-01-01"})).unwrap();
        assert_eq!(sleep.hours(), 0.0);

        let meal = NutritionRecord::from_entry(&json!({"date": "2024-01-01"})).unwrap();
        assert_eq!(meal.kcal(), 0.0);

        let session = ExerciseRecord::from_entry(&json!({"date": "2024-01-01"})).unwrap();
        assert_eq!(session.minutes(), 0.0);
        assert_eq!(session.normalized_type(), "");
    }

    #[test]
    fn test_exercise_type_field() {
        let session = ExerciseRecord::from_entry(
            &json!({"date": "2024-01-01", "duration_minutes": 45, "type": "Cardio"}),
        )
        .unwrap();
        assert_eq!(session.activity_type.as_deref(), Some("Cardio"));
        assert_eq!(session.normalized_type(), "cardio");
        assert_eq!(session.minutes(), 45.0);
    }

    #[test]
    fn test_zero_heart_rate_counts_as_absent() {
        let zero = VitalsRecord::from_entry(&json!({"date": "2024-01-01", "heart_rate": 0}))
            .unwrap();
        assert_eq!(zero.reading(), None);

        let missing = VitalsRecord::from_entry(&json!({"date": "2024-01-01"})).unwrap();
        assert_eq!(missing.reading(), None);

        let present =
            VitalsRecord::from_entry(&json!({"date": "2024-01-01", "heart_rate": 72})).unwrap();
        assert_eq!(present.reading(), Some(72.0));
    }

    #[test]
    fn test_document_rejects_non_object() {
        assert!(matches!(
            RawHealthDocument::from_value(&json!([1, 2, 3])),
            Err(CoreError::InvalidDocument)
        ));
    }

    #[test]
    fn test_document_skips_bad_categories_and_records() {
        let doc = RawHealthDocument::from_value(&json!({
            "sleep": "not a list",
            "exercise": [],
            "nutrition": [
                {"date": "2024-01-01T00:00:00Z", "calories": 2000},
                {"date": "not a date", "calories": 1800},
                {"calories": 1500},
                "string entry"
            ],
            "notes": ["free text"]
        }))
        .unwrap();

        assert!(doc.sleep.is_none());
        assert!(doc.exercise.is_none());
        assert!(doc.vitals.is_none());

        let nutrition = doc.nutrition.as_ref().unwrap();
        assert_eq!(nutrition.records.len(), 1);
        assert_eq!(nutrition.skipped, 3);
        assert_eq!(doc.categories(), vec![Category::Nutrition]);
    }

    #[test]
    fn test_document_raw_size_counts_everything() {
        let doc = RawHealthDocument::from_value(&json!({
            "sleep": [{"date": "2024-01-01", "duration_hours": 7}],
            "notes": "felt great today"
        }))
        .unwrap();
        // sleep + date + ts + duration_hours + 7, notes + 3 words
        assert_eq!(doc.raw_size, 9);
    }

    #[test]
    fn test_empty_document() {
        let doc = RawHealthDocument::from_json_str("{}").unwrap();
        assert_eq!(doc.raw_size, 0);
        assert!(doc.categories().is_empty());
    }
}
