use crate::{CompressedArtifact, CompressionSummary, Trends};
use anyhow::Result;
use chrono::{DateTime, Utc};
use healthcoach_core::BudgetTier;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One compressed run kept in history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSummary {
    pub timestamp: DateTime<Utc>,
    pub budget_mode: BudgetTier,
    pub summary: CompressionSummary,
    pub trends: Trends,
    pub retained_fields: Vec<String>,
    pub discarded_fields: Vec<String>,
}

/// Most recent health state, overwritten on every store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthState {
    pub last_compression: DateTime<Utc>,
    pub budget_mode: BudgetTier,
    pub trends: Trends,
    pub summary: CompressionSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMemory {
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub compressed_summaries: Vec<StoredSummary>,
    #[serde(default)]
    pub current_health_state: Option<HealthState>,
}

impl HealthMemory {
    pub fn empty() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            last_updated: now,
            compressed_summaries: Vec::new(),
            current_health_state: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemoryStats {
    pub total_summaries_stored: usize,
    pub last_updated: DateTime<Utc>,
    pub has_current_state: bool,
    pub file_size_bytes: u64,
}

/// JSON-file memory of compressed summaries
///
/// Holds a capped history of the last `max_summaries` runs plus a single
/// current-state slot. Raw records are never written.
pub struct MemoryStore {
    path: PathBuf,
    max_summaries: usize,
}

impl MemoryStore {
    /// Open the store, creating an empty memory file when missing
    pub fn open(path: impl Into<PathBuf>, max_summaries: usize) -> Result<Self> {
        let store = Self {
            path: path.into(),
            max_summaries,
        };
        if !store.path.exists() {
            store.write(&HealthMemory::empty())?;
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the memory, falling back to an empty one if the file is unreadable
    pub fn load(&self) -> HealthMemory {
        match healthcoach_telemetry::read_json(&self.path) {
            Ok(Some(memory)) => memory,
            Ok(None) => HealthMemory::empty(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to load health memory");
                HealthMemory::empty()
            }
        }
    }

    /// Append a summary of `artifact` and overwrite the current state
    pub fn store(&self, artifact: &CompressedArtifact) -> Result<()> {
        let mut memory = self.load();
        let body = &artifact.body;

        memory.last_updated = Utc::now();
        memory.compressed_summaries.push(StoredSummary {
            timestamp: body.compression_timestamp,
            budget_mode: body.budget_mode,
            summary: body.summary.clone(),
            trends: body.trends.clone(),
            retained_fields: body.retained_fields.clone(),
            discarded_fields: body.discarded_fields.clone(),
        });

        let len = memory.compressed_summaries.len();
        if len > self.max_summaries {
            memory.compressed_summaries.drain(..len - self.max_summaries);
        }

        memory.current_health_state = Some(HealthState {
            last_compression: body.compression_timestamp,
            budget_mode: body.budget_mode,
            trends: body.trends.clone(),
            summary: body.summary.clone(),
        });

        self.write(&memory)?;
        tracing::debug!(
            path = %self.path.display(),
            stored = memory.compressed_summaries.len(),
            "stored compressed summary"
        );
        Ok(())
    }

    pub fn current_state(&self) -> Option<HealthState> {
        self.load().current_health_state
    }

    /// The most recent `limit` summaries, oldest first
    pub fn history(&self, limit: usize) -> Vec<StoredSummary> {
        let summaries = self.load().compressed_summaries;
        let skip = summaries.len().saturating_sub(limit);
        summaries.into_iter().skip(skip).collect()
    }

    /// Reset to an empty memory
    pub fn clear(&self) -> Result<()> {
        self.write(&HealthMemory::empty())
    }

    pub fn stats(&self) -> MemoryStats {
        let memory = self.load();
        MemoryStats {
            total_summaries_stored: memory.compressed_summaries.len(),
            last_updated: memory.last_updated,
            has_current_state: memory.current_health_state.is_some(),
            file_size_bytes: std::fs::metadata(&self.path).map_or(0, |m| m.len()),
        }
    }

    fn write(&self, memory: &HealthMemory) -> Result<()> {
        healthcoach_telemetry::write_json(&self.path, memory)?;
        Ok(())
    }
}
