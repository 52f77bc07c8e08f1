//! Statistics collected over a conversion run

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::conversion::engine::FileOutcome;
use crate::error::ConversionError;

/// A source file that could not be converted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailedFile {
    pub path: PathBuf,
    pub message: String,
}

/// Per-run statistics for a directory conversion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionReport {
    /// Root directory the run started from
    pub root: PathBuf,
    /// Eligible source images found
    pub discovered: usize,
    /// Sources encoded and written
    pub converted: usize,
    /// Sources whose target already existed
    pub skipped_existing: usize,
    /// Sources whose target was written earlier in the same run by another source
    pub collisions: usize,
    /// Sources listed by a dry run
    pub planned: usize,
    /// Sources that failed under continue-on-error
    pub failures: Vec<FailedFile>,
    /// Bytes read from converted sources
    pub input_bytes: u64,
    /// Bytes written to new targets
    pub output_bytes: u64,
    /// Wall-clock time of the run in milliseconds
    pub processing_time_ms: u64,
    /// Timestamp of when the report was finished
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

impl ConversionReport {
    /// Create an empty report for a run rooted at `root`
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            discovered: 0,
            converted: 0,
            skipped_existing: 0,
            collisions: 0,
            planned: 0,
            failures: Vec::new(),
            input_bytes: 0,
            output_bytes: 0,
            processing_time_ms: 0,
            collected_at: chrono::Utc::now(),
        }
    }

    /// Count a finished file
    pub fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Converted {
                input_bytes,
                output_bytes,
                ..
            } => {
                self.converted += 1;
                self.input_bytes += input_bytes;
                self.output_bytes += output_bytes;
            }
            FileOutcome::SkippedExisting { .. } => self.skipped_existing += 1,
            FileOutcome::SkippedCollision { .. } => self.collisions += 1,
            FileOutcome::Planned { .. } => self.planned += 1,
        }
    }

    /// Count a file that failed without aborting the run
    pub fn record_failure(&mut self, path: &Path, error: &ConversionError) {
        self.failures.push(FailedFile {
            path: path.to_path_buf(),
            message: error.user_message(),
        });
    }

    /// Stamp the elapsed time and completion timestamp
    pub fn finish(&mut self, elapsed: Duration) {
        self.processing_time_ms = elapsed.as_millis() as u64;
        self.collected_at = chrono::Utc::now();
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// True when no file failed
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Size saved by the written targets relative to their sources, as a percentage
    pub fn size_reduction_percent(&self) -> f32 {
        if self.input_bytes == 0 {
            return 0.0;
        }
        ((self.input_bytes as f32 - self.output_bytes as f32) / self.input_bytes as f32) * 100.0
    }

    /// Get a formatted summary
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Converted {} of {} images in {:.1}s ({} already present",
            self.converted,
            self.discovered,
            self.processing_time_ms as f32 / 1000.0,
            self.skipped_existing,
        );
        if self.collisions > 0 {
            summary.push_str(&format!(", {} same-stem collisions", self.collisions));
        }
        if self.planned > 0 {
            summary.push_str(&format!(", {} planned", self.planned));
        }
        if !self.failures.is_empty() {
            summary.push_str(&format!(", {} failed", self.failures.len()));
        }
        summary.push(')');

        if self.converted > 0 {
            summary.push_str(&format!(
                " - {:.1}% smaller",
                self.size_reduction_percent()
            ));
        }
        summary
    }

    /// Export to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
