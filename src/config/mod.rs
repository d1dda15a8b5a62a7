// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Configuration management for SyncMatch

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::mood::MoodTag;

/// Main application configuration
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    /// Web UI settings
    #[serde(default)]
    pub web: WebConfig,

    /// Simulated analysis settings
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WebConfig {
    #[serde(default = "default_web_host")]
    pub host: String,
    #[serde(default = "default_web_port")]
    pub port: u16,
    /// Largest accepted upload, in megabytes
    #[serde(default = "default_max_upload_mb")]
    pub max_upload_mb: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AnalysisConfig {
    /// Number of progress ticks while "analyzing"
    #[serde(default = "default_progress_steps")]
    pub progress_steps: u32,
    #[serde(default = "default_step_delay_ms")]
    pub step_delay_ms: u64,
    /// Mood used when the caller does not pick one
    #[serde(default = "default_mood")]
    pub default_mood: MoodTag,
    #[serde(default = "default_accepted_extensions")]
    pub accepted_extensions: Vec<String>,
    #[serde(default)]
    pub bpm_ranges: BpmRanges,
}

/// Inclusive BPM range
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct BpmRange {
    pub min: u32,
    pub max: u32,
}

/// One BPM range per mood
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct BpmRanges {
    #[serde(default = "default_playful_bpm")]
    pub playful: BpmRange,
    #[serde(default = "default_relaxed_bpm")]
    pub relaxed: BpmRange,
    #[serde(default = "default_cinematic_bpm")]
    pub cinematic: BpmRange,
    #[serde(default = "default_corporate_bpm")]
    pub corporate: BpmRange,
}

impl BpmRanges {
    pub fn get(&self, mood: MoodTag) -> BpmRange {
        match mood {
            MoodTag::Playful => self.playful,
            MoodTag::Relaxed => self.relaxed,
            MoodTag::Cinematic => self.cinematic,
            MoodTag::Corporate => self.corporate,
        }
    }
}

// Default value functions
fn default_web_host() -> String { "127.0.0.1".to_string() }
fn default_web_port() -> u16 { 8080 }
fn default_max_upload_mb() -> usize { 100 }
fn default_progress_steps() -> u32 { 100 }
fn default_step_delay_ms() -> u64 { 5 }
fn default_mood() -> MoodTag { MoodTag::Playful }
fn default_playful_bpm() -> BpmRange { BpmRange { min: 100, max: 140 } }
fn default_relaxed_bpm() -> BpmRange { BpmRange { min: 70, max: 90 } }
fn default_cinematic_bpm() -> BpmRange { BpmRange { min: 80, max: 110 } }
fn default_corporate_bpm() -> BpmRange { BpmRange { min: 90, max: 130 } }

fn default_accepted_extensions() -> Vec<String> {
    vec!["mp4", "mov", "mp3", "wav"].into_iter().map(String::from).collect()
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_web_host(),
            port: default_web_port(),
            max_upload_mb: default_max_upload_mb(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            progress_steps: default_progress_steps(),
            step_delay_ms: default_step_delay_ms(),
            default_mood: default_mood(),
            accepted_extensions: default_accepted_extensions(),
            bpm_ranges: BpmRanges::default(),
        }
    }
}

impl Default for BpmRanges {
    fn default() -> Self {
        Self {
            playful: default_playful_bpm(),
            relaxed: default_relaxed_bpm(),
            cinematic: default_cinematic_bpm(),
            corporate: default_corporate_bpm(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = serde_json::from_str(&content)
                .map_err(|e| crate::SyncMatchError::Config(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            tracing::info!("Config file not found at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Save configuration to a JSON file
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject settings the analysis stub cannot work with
    pub fn validate(&self) -> crate::Result<()> {
        for mood in MoodTag::ALL {
            let range = self.analysis.bpm_ranges.get(mood);
            if range.min > range.max {
                return Err(crate::SyncMatchError::Config(format!(
                    "BPM range for {} is empty ({} > {})",
                    mood.key(), range.min, range.max
                )));
            }
        }
        if self.analysis.accepted_extensions.is_empty() {
            return Err(crate::SyncMatchError::Config(
                "accepted_extensions must not be empty".to_string(),
            ));
        }
        if self.web.max_upload_mb == 0 {
            return Err(crate::SyncMatchError::Config(
                "max_upload_mb must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Upload limit in bytes
    pub fn max_upload_bytes(&self) -> usize {
        self.web.max_upload_mb.saturating_mul(1024 * 1024)
    }
}
