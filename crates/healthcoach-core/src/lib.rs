//! Core health data types, input parsing and configuration

mod config;
mod error;
mod records;
mod types;

pub use config::{Config, API_KEY_ENV, API_URL_ENV, DEFAULT_API_BASE_URL};
pub use error::CoreError;
pub use records::{
    parse_timestamp, CategoryData, ExerciseRecord, HealthRecord, NutritionRecord,
    RawHealthDocument, SleepRecord, VitalsRecord,
};
pub use types::{BudgetTier, Category};
