// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Music-licensing platforms and their search profiles
//!
//! Everything that differs between platforms (display order, which dimensions
//! feed the search query, the search URL) lives in [`PlatformProfile`] data.
//! Adding a platform means adding a profile and a row in the keyword table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::SyncMatchError;

/// Substitution point inside a URL template
pub const QUERY_PLACEHOLDER: &str = "{query}";

/// Supported music-licensing platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Musicbed,
    Artlist,
    PremiumBeat,
}

impl Platform {
    /// All platforms, in display order
    pub const ALL: [Platform; 3] = [Platform::Musicbed, Platform::Artlist, Platform::PremiumBeat];

    /// Search profile for this platform
    pub fn profile(self) -> &'static PlatformProfile {
        &PROFILES[self.index()]
    }

    pub fn id(self) -> &'static str {
        self.profile().id
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Platform::Musicbed => 0,
            Platform::Artlist => 1,
            Platform::PremiumBeat => 2,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.profile().name)
    }
}

impl FromStr for Platform {
    type Err = SyncMatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Platform::ALL
            .into_iter()
            .find(|p| {
                let profile = p.profile();
                profile.id.eq_ignore_ascii_case(needle) || profile.name.eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| SyncMatchError::UnknownPlatform(s.to_string()))
    }
}

/// Which part of a comma-separated keyword value goes into the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenSelector {
    /// The n-th comma-separated term
    Token(usize),
    /// The whole value
    Full,
}

/// One contribution to the derived search query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueryDimension {
    pub dimension: &'static str,
    pub selector: TokenSelector,
}

impl QueryDimension {
    pub const fn first(dimension: &'static str) -> Self {
        Self { dimension, selector: TokenSelector::Token(0) }
    }

    pub const fn full(dimension: &'static str) -> Self {
        Self { dimension, selector: TokenSelector::Full }
    }
}

/// How keywords are shown and searched for one platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformProfile {
    /// Stable identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Search URL containing exactly one [`QUERY_PLACEHOLDER`]
    pub url_template: &'static str,
    /// Dimensions in the order they are rendered
    pub dimension_order: &'static [&'static str],
    /// Dimensions feeding the search query, in query order
    pub query_dimensions: &'static [QueryDimension],
}

impl PlatformProfile {
    /// Substitute an already-encoded query into the URL template
    pub fn search_url(&self, encoded_query: &str) -> String {
        self.url_template.replacen(QUERY_PLACEHOLDER, encoded_query, 1)
    }
}

static PROFILES: [PlatformProfile; 3] = [
    PlatformProfile {
        id: "musicbed",
        name: "Musicbed",
        url_template: "https://www.musicbed.com/search?q={query}",
        dimension_order: &["Mood", "Genre", "Attr"],
        query_dimensions: &[QueryDimension::first("Mood"), QueryDimension::first("Genre")],
    },
    PlatformProfile {
        id: "artlist",
        name: "Artlist",
        url_template: "https://artlist.io/royalty-free-music/search?term={query}",
        dimension_order: &["Theme", "Mood", "Genre"],
        query_dimensions: &[QueryDimension::first("Mood"), QueryDimension::first("Genre")],
    },
    PlatformProfile {
        id: "premiumbeat",
        name: "PremiumBeat",
        url_template: "https://www.premiumbeat.com/royalty-free-music?q={query}",
        dimension_order: &["Genre", "Mood", "Sub"],
        query_dimensions: &[QueryDimension::full("Genre"), QueryDimension::first("Mood")],
    },
];
