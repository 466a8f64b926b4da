//! Explainability log accumulated during compression

use crate::retention::Discard;
use crate::types::SizeReport;
use healthcoach_core::Category;

/// Ordered, append-only record of compression decisions
#[derive(Debug, Clone, Default)]
pub struct ExplainabilityLog {
    entries: Vec<String>,
}

impl ExplainabilityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn retained(&mut self, detail: impl AsRef<str>) {
        self.entries.push(format!("Retained: {}", detail.as_ref()));
    }

    pub fn discarded(&mut self, discard: &Discard) {
        self.entries.push(format!(
            "Discarded: {} - Reason: {}",
            discard.detail, discard.reason
        ));
    }

    pub fn skipped(&mut self, category: Category, count: usize) {
        if count > 0 {
            self.entries.push(format!(
                "Skipped: {count} {category} entries with unreadable data"
            ));
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Frame the category entries with size metrics and the reduction line
    pub fn finish(self, sizes: &SizeReport) -> Vec<String> {
        let mut log = Vec::with_capacity(self.entries.len() + 4);
        log.push(format!("Raw size: {} words", sizes.raw_size));
        log.push(format!(
            "Compressed JSON size: {} words",
            sizes.compressed_size
        ));
        log.push(format!(
            "Health summary text size: {} words",
            sizes.digest_size
        ));
        log.extend(self.entries);
        log.push(match sizes.reduction_percent() {
            Ok(percent) => format!("Compression achieved: {percent:.1}% reduction"),
            Err(_) => "Compression achieved: undefined (empty input)".to_string(),
        });
        log
    }
}
