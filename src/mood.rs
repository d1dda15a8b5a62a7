// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! The closed set of mood tags used as lookup keys

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::SyncMatchError;

/// Style category of a piece of footage, one of exactly four
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodTag {
    Playful,
    Relaxed,
    Cinematic,
    Corporate,
}

impl MoodTag {
    /// All moods, in the order they are offered to the user
    pub const ALL: [MoodTag; 4] = [
        MoodTag::Playful,
        MoodTag::Relaxed,
        MoodTag::Cinematic,
        MoodTag::Corporate,
    ];

    /// Stable machine key
    pub fn key(self) -> &'static str {
        match self {
            MoodTag::Playful => "playful",
            MoodTag::Relaxed => "relaxed",
            MoodTag::Cinematic => "cinematic",
            MoodTag::Corporate => "corporate",
        }
    }

    /// English name
    pub fn name(self) -> &'static str {
        match self {
            MoodTag::Playful => "Playful",
            MoodTag::Relaxed => "Relaxed",
            MoodTag::Cinematic => "Cinematic",
            MoodTag::Corporate => "Corporate",
        }
    }

    /// Display label shown on the upload form
    pub fn label(self) -> &'static str {
        match self {
            MoodTag::Playful => "开心/俏皮",
            MoodTag::Relaxed => "放松/生活",
            MoodTag::Cinematic => "史诗/电影感",
            MoodTag::Corporate => "科技/商业",
        }
    }

    /// Position of this mood in [`MoodTag::ALL`]
    pub(crate) fn index(self) -> usize {
        match self {
            MoodTag::Playful => 0,
            MoodTag::Relaxed => 1,
            MoodTag::Cinematic => 2,
            MoodTag::Corporate => 3,
        }
    }
}

impl fmt::Display for MoodTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MoodTag {
    type Err = SyncMatchError;

    /// Accepts the key, the English name (any case) or the display label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        MoodTag::ALL
            .into_iter()
            .find(|mood| {
                mood.key().eq_ignore_ascii_case(needle)
                    || mood.name().eq_ignore_ascii_case(needle)
                    || mood.label() == needle
            })
            .ok_or_else(|| SyncMatchError::UnknownMood(s.to_string()))
    }
}
