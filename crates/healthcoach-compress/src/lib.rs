//! Health data compression with explainability, plus the compressed memory store

mod compressor;
mod digest;
mod error;
mod explain;
pub mod retention;
mod storage;
pub mod trends;
mod types;

pub use compressor::{compress_health_data, Compressor};
pub use digest::health_digest;
pub use error::CompressError;
pub use explain::ExplainabilityLog;
pub use storage::{HealthMemory, HealthState, MemoryStats, MemoryStore, StoredSummary};
pub use types::{
    CompressedArtifact, CompressedBody, CompressionSummary, ExerciseTrend, HeartRateTrend,
    NutritionTrend, SizeReport, SleepTrend, Trends,
};
