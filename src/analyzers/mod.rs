// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Mood classifiers for uploaded media
//!
//! A [`Classifier`] turns an upload into a [`MoodTag`] (and optionally a BPM
//! estimate). The keyword lookup only ever sees the mood, so any classifier
//! that emits one of the four moods can be swapped in.

pub mod simulated;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::mood::MoodTag;
use crate::{Result, SyncMatchError};

pub use simulated::SimulatedClassifier;

/// Output of a classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub mood: MoodTag,
    /// Display-only tempo estimate
    pub bpm: Option<u32>,
}

/// Coarse media type, from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Audio,
    Video,
    Unknown,
}

impl MediaKind {
    pub fn from_file_name(name: &str) -> Self {
        match extension_of(name).as_deref() {
            Some("mp3" | "wav" | "flac" | "ogg" | "m4a" | "aac") => MediaKind::Audio,
            Some("mp4" | "mov" | "mkv" | "webm" | "avi") => MediaKind::Video,
            _ => MediaKind::Unknown,
        }
    }
}

/// An uploaded media file, held in memory for the duration of one request
#[derive(Debug, Clone)]
pub struct MediaUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// What a report shows about the upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaInfo {
    pub name: String,
    pub content_type: Option<String>,
    pub size_bytes: usize,
    pub media_kind: MediaKind,
    /// blake3 of the content
    pub fingerprint: String,
}

impl MediaUpload {
    pub fn new(file_name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            bytes,
        }
    }

    /// Read a local file as if it had been uploaded
    pub fn from_path(path: &Path) -> Result<Self> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| SyncMatchError::Upload(format!("Invalid file name: {:?}", path)))?
            .to_string();
        let bytes = std::fs::read(path)?;
        let content_type = guess_content_type(&file_name).map(String::from);
        Ok(Self::new(file_name, content_type, bytes))
    }

    pub fn extension(&self) -> Option<String> {
        extension_of(&self.file_name)
    }

    pub fn info(&self) -> MediaInfo {
        MediaInfo {
            name: self.file_name.clone(),
            content_type: self.content_type.clone(),
            size_bytes: self.bytes.len(),
            media_kind: MediaKind::from_file_name(&self.file_name),
            fingerprint: blake3::hash(&self.bytes).to_hex().to_string(),
        }
    }
}

/// Trait for mood classifiers
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Name of this classifier
    fn name(&self) -> &'static str;

    /// File extensions this classifier accepts
    fn supported_extensions(&self) -> &[String];

    /// Check if this classifier can handle an upload
    fn can_handle(&self, upload: &MediaUpload) -> bool {
        match upload.extension() {
            Some(ext) => self.supported_extensions().iter().any(|e| e.eq_ignore_ascii_case(&ext)),
            None => false,
        }
    }

    /// Classify an upload. `hint` is a mood already confirmed by the user.
    async fn classify(&self, upload: &MediaUpload, hint: Option<MoodTag>) -> Result<Classification>;
}

/// Check an upload before handing it to a classifier
pub fn check_upload(classifier: &dyn Classifier, upload: &MediaUpload) -> Result<()> {
    if upload.bytes.is_empty() {
        return Err(SyncMatchError::Upload(format!("{} is empty", upload.file_name)));
    }
    if !classifier.can_handle(upload) {
        return Err(SyncMatchError::UnsupportedFileType(
            upload.extension().unwrap_or_else(|| upload.file_name.clone()),
        ));
    }
    Ok(())
}

fn extension_of(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

fn guess_content_type(name: &str) -> Option<&'static str> {
    match extension_of(name).as_deref() {
        Some("mp3") => Some("audio/mpeg"),
        Some("wav") => Some("audio/wav"),
        Some("mp4") => Some("video/mp4"),
        Some("mov") => Some("video/quicktime"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_media_kind() {
        assert_eq!(MediaKind::from_file_name("trailer.MOV"), MediaKind::Video);
        assert_eq!(MediaKind::from_file_name("take_3.wav"), MediaKind::Audio);
        assert_eq!(MediaKind::from_file_name("notes.txt"), MediaKind::Unknown);
        assert_eq!(MediaKind::from_file_name("no_extension"), MediaKind::Unknown);
    }

    #[test]
    fn test_info_fingerprint() {
        let a = MediaUpload::new("a.mp3", None, b"abc".to_vec());
        let b = MediaUpload::new("b.mp3", None, b"abc".to_vec());
        let info = a.info();
        assert_eq!(info.size_bytes, 3);
        assert_eq!(info.media_kind, MediaKind::Audio);
        assert_eq!(info.fingerprint, b.info().fingerprint);
        assert_eq!(info.fingerprint.len(), 64);
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.mp4");
        std::fs::File::create(&path).unwrap().write_all(b"\x00\x00\x00\x18ftyp").unwrap();

        let upload = MediaUpload::from_path(&path).unwrap();
        assert_eq!(upload.file_name, "clip.mp4");
        assert_eq!(upload.content_type.as_deref(), Some("video/mp4"));
        assert_eq!(upload.bytes.len(), 8);
    }
}
