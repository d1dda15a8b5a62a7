// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Stand-in classifier: a timed progress loop and a random BPM
//!
//! Never looks at the media content. The mood comes from the caller (the
//! user confirms it on the form) or falls back to the configured default.

use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;
use tracing::{debug, info};

use super::{check_upload, Classification, Classifier, MediaUpload};
use crate::config::{AnalysisConfig, BpmRange};
use crate::mood::MoodTag;
use crate::Result;

/// Classifier that simulates analysis
pub struct SimulatedClassifier {
    config: AnalysisConfig,
}

impl SimulatedClassifier {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self { config: config.clone() }
    }

    async fn simulate_progress(&self, file_name: &str) {
        let steps = self.config.progress_steps;
        let delay = Duration::from_millis(self.config.step_delay_ms);

        let log_every = (steps / 10).max(1);

        for step in 1..=steps {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            if step % log_every == 0 || step == steps {
                debug!("Analyzing {}: {}%", file_name, percent_done(step, steps));
            }
        }
    }
}

fn percent_done(step: u32, steps: u32) -> u64 {
    u64::from(step) * 100 / u64::from(steps.max(1))
}

/// Uniform draw from an inclusive range
pub fn draw_bpm<R: Rng + ?Sized>(rng: &mut R, range: BpmRange) -> u32 {
    rng.random_range(range.min..=range.max)
}

#[async_trait]
impl Classifier for SimulatedClassifier {
    fn name(&self) -> &'static str {
        "simulated"
    }

    fn supported_extensions(&self) -> &[String] {
        &self.config.accepted_extensions
    }

    async fn classify(&self, upload: &MediaUpload, hint: Option<MoodTag>) -> Result<Classification> {
        check_upload(self, upload)?;
        info!("Analyzing upload: {} ({} bytes)", upload.file_name, upload.bytes.len());

        self.simulate_progress(&upload.file_name).await;

        let mood = hint.unwrap_or(self.config.default_mood);
        let bpm = draw_bpm(&mut rand::rng(), self.config.bpm_ranges.get(mood));

        info!("Mood: {} ({}), BPM: {}", mood, mood.label(), bpm);

        Ok(Classification { mood, bpm: Some(bpm) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SyncMatchError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fast_config() -> AnalysisConfig {
        AnalysisConfig {
            progress_steps: 3,
            step_delay_ms: 0,
            ..AnalysisConfig::default()
        }
    }

    fn upload(name: &str) -> MediaUpload {
        MediaUpload::new(name, None, vec![0u8; 16])
    }

    #[test]
    fn test_draw_bpm_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let range = BpmRange { min: 70, max: 90 };
        for _ in 0..500 {
            let bpm = draw_bpm(&mut rng, range);
            assert!((70..=90).contains(&bpm));
        }
    }

    #[test]
    fn test_draw_bpm_single_value_range() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(draw_bpm(&mut rng, BpmRange { min: 120, max: 120 }), 120);
    }

    #[tokio::test]
    async fn test_hint_is_used() {
        let classifier = SimulatedClassifier::new(&fast_config());
        let result = classifier.classify(&upload("reel.mov"), Some(MoodTag::Cinematic)).await.unwrap();
        assert_eq!(result.mood, MoodTag::Cinematic);
        let bpm = result.bpm.unwrap();
        assert!((80..=110).contains(&bpm));
    }

    #[tokio::test]
    async fn test_default_mood_without_hint() {
        let config = AnalysisConfig {
            default_mood: MoodTag::Relaxed,
            ..fast_config()
        };
        let classifier = SimulatedClassifier::new(&config);
        let result = classifier.classify(&upload("walk.MP3"), None).await.unwrap();
        assert_eq!(result.mood, MoodTag::Relaxed);
    }

    #[tokio::test]
    async fn test_rejects_unsupported_extension() {
        let classifier = SimulatedClassifier::new(&fast_config());
        let err = classifier.classify(&upload("slides.pdf"), None).await.unwrap_err();
        assert!(matches!(err, SyncMatchError::UnsupportedFileType(ext) if ext == "pdf"));
    }

    #[tokio::test]
    async fn test_rejects_empty_upload() {
        let classifier = SimulatedClassifier::new(&fast_config());
        let empty = MediaUpload::new("silence.wav", None, Vec::new());
        let err = classifier.classify(&empty, None).await.unwrap_err();
        assert!(matches!(err, SyncMatchError::Upload(_)));
    }

    #[test]
    fn test_percent_done_handles_large_step_counts() {
        assert_eq!(percent_done(1, 4), 25);
        assert_eq!(percent_done(u32::MAX, u32::MAX), 100);
        assert_eq!(percent_done(u32::MAX / 2, u32::MAX), 49);
        assert_eq!(percent_done(0, 0), 0);
    }

    #[tokio::test]
    async fn test_zero_steps_completes() {
        let config = AnalysisConfig {
            progress_steps: 0,
            ..fast_config()
        };
        let classifier = SimulatedClassifier::new(&config);
        assert!(classifier.classify(&upload("a.mp4"), None).await.is_ok());
    }
}
