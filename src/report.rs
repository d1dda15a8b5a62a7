// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Per-request results: keyword lookups for every platform, plus upload reports

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::analyzers::{Classifier, MediaInfo, MediaUpload};
use crate::keywords::{resolve, KeywordEntry};
use crate::links::build_link;
use crate::mood::MoodTag;
use crate::platform::Platform;
use crate::Result;

/// Keywords and search link for one platform and mood
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedResult {
    pub platform: Platform,
    pub platform_name: &'static str,
    pub mood: MoodTag,
    pub keywords: KeywordEntry,
    pub display_text: String,
    pub query: String,
    pub search_url: String,
}

/// Everything shown after an upload has been analyzed
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub id: String,
    pub generated_at: DateTime<Utc>,
    pub file: MediaInfo,
    pub mood: MoodTag,
    pub mood_label: &'static str,
    pub bpm: Option<u32>,
    pub classifier: &'static str,
    pub results: Vec<ResolvedResult>,
}

/// Resolve and build the link for a single platform
pub fn resolve_one(platform: Platform, mood: MoodTag) -> Result<ResolvedResult> {
    let profile = platform.profile();
    let keywords = *resolve(platform, mood);
    let link = build_link(profile, &keywords)?;

    Ok(ResolvedResult {
        platform,
        platform_name: profile.name,
        mood,
        keywords,
        display_text: link.display_text,
        query: link.query,
        search_url: link.search_url,
    })
}

/// One result per platform, in display order. Fails as a whole if any platform fails.
pub fn resolve_all(mood: MoodTag) -> Result<Vec<ResolvedResult>> {
    Platform::ALL
        .into_iter()
        .map(|platform| resolve_one(platform, mood))
        .collect()
}

/// Classify an upload and build its report
pub async fn analyze_upload(
    classifier: &dyn Classifier,
    upload: &MediaUpload,
    hint: Option<MoodTag>,
) -> Result<AnalysisReport> {
    let classification = classifier.classify(upload, hint).await?;
    let results = resolve_all(classification.mood)?;

    let report = AnalysisReport {
        id: Uuid::new_v4().to_string(),
        generated_at: Utc::now(),
        file: upload.info(),
        mood: classification.mood,
        mood_label: classification.mood.label(),
        bpm: classification.bpm,
        classifier: classifier.name(),
        results,
    };

    info!("Report {} for {}: {}", report.id, report.file.name, report.mood);
    Ok(report)
}
