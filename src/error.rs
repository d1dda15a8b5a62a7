// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Error types for SyncMatch

use thiserror::Error;

/// Result type alias for SyncMatch operations
pub type Result<T> = std::result::Result<T, SyncMatchError>;

/// SyncMatch error types
#[derive(Error, Debug)]
pub enum SyncMatchError {
    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("Unknown mood: {0}")]
    UnknownMood(String),

    #[error("Platform {platform} has no '{dimension}' keywords")]
    MissingDimension {
        platform: String,
        dimension: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("Upload too large: {0}")]
    UploadTooLarge(String),
}

impl SyncMatchError {
    /// Whether the error was caused by caller input rather than a broken table or server
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownPlatform(_)
                | Self::UnknownMood(_)
                | Self::UnsupportedFileType(_)
                | Self::Upload(_)
                | Self::UploadTooLarge(_)
        )
    }
}
