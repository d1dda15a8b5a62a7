// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! SyncMatch: music keyword finder
//!
//! Maps a mood tag to curated search keywords for Musicbed, Artlist and
//! PremiumBeat, and builds a search link for each platform. Ships with a
//! web UI that accepts a media upload and a simulated analysis step.

pub mod analyzers;
pub mod config;
pub mod error;
pub mod keywords;
pub mod links;
pub mod mood;
pub mod platform;
pub mod report;
pub mod web;

pub use config::AppConfig;
pub use error::{Result, SyncMatchError};
pub use mood::MoodTag;
pub use platform::Platform;
