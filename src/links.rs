// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Search-link builder: keyword text and outbound search URLs

use serde::Serialize;

use crate::keywords::KeywordEntry;
use crate::platform::{PlatformProfile, TokenSelector};
use crate::{Result, SyncMatchError};

/// Rendered keywords and search link for one platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchLink {
    /// One `Dimension: value` line per dimension
    pub display_text: String,
    /// Query before encoding
    pub query: String,
    pub search_url: String,
}

/// Render an entry and derive its search link
pub fn build_link(profile: &PlatformProfile, entry: &KeywordEntry) -> Result<SearchLink> {
    let display_text = render_display_text(profile, entry)?;
    let query = derive_query(profile, entry)?;
    let search_url = profile.search_url(&urlencoding::encode(&query));

    Ok(SearchLink {
        display_text,
        query,
        search_url,
    })
}

/// `Dimension: value` lines in the profile's display order
pub fn render_display_text(profile: &PlatformProfile, entry: &KeywordEntry) -> Result<String> {
    let lines = profile
        .dimension_order
        .iter()
        .map(|dimension| {
            lookup(profile, entry, dimension).map(|value| format!("{}: {}", dimension, value))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(lines.join("\n"))
}

/// Headline terms of the query dimensions, joined with single spaces
pub fn derive_query(profile: &PlatformProfile, entry: &KeywordEntry) -> Result<String> {
    let terms = profile
        .query_dimensions
        .iter()
        .map(|q| {
            let value = lookup(profile, entry, q.dimension)?;
            select_token(value, q.selector).ok_or_else(|| missing(profile, q.dimension))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(terms.join(" "))
}

/// Pick a trimmed, non-empty term out of a comma-separated value
fn select_token(value: &str, selector: TokenSelector) -> Option<&str> {
    let term = match selector {
        TokenSelector::Full => value.trim(),
        TokenSelector::Token(index) => value.split(',').nth(index)?.trim(),
    };
    (!term.is_empty()).then_some(term)
}

fn lookup(profile: &PlatformProfile, entry: &KeywordEntry, dimension: &str) -> Result<&'static str> {
    entry.get(dimension).ok_or_else(|| missing(profile, dimension))
}

fn missing(profile: &PlatformProfile, dimension: &str) -> SyncMatchError {
    SyncMatchError::MissingDimension {
        platform: profile.id.to_string(),
        dimension: dimension.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::resolve;
    use crate::mood::MoodTag;
    use crate::platform::{Platform, QueryDimension};

    fn link(platform: Platform, mood: MoodTag) -> SearchLink {
        build_link(platform.profile(), resolve(platform, mood)).unwrap()
    }

    #[test]
    fn test_musicbed_playful() {
        let l = link(Platform::Musicbed, MoodTag::Playful);
        assert_eq!(l.query, "Whimsical Indie Pop");
        assert_eq!(l.search_url, "https://www.musicbed.com/search?q=Whimsical%20Indie%20Pop");
        assert_eq!(
            l.display_text,
            "Mood: Whimsical, Carefree, Playful\nGenre: Indie Pop, World\nAttr: Bright, Quirky"
        );
    }

    #[test]
    fn test_artlist_corporate() {
        let l = link(Platform::Artlist, MoodTag::Corporate);
        assert_eq!(l.query, "Corporate Electronic");
        assert_eq!(
            l.search_url,
            "https://artlist.io/royalty-free-music/search?term=Corporate%20Electronic"
        );
        assert!(l.display_text.starts_with("Theme: Technology, Business\n"));
    }

    #[test]
    fn test_premiumbeat_relaxed() {
        let l = link(Platform::PremiumBeat, MoodTag::Relaxed);
        assert_eq!(l.query, "Easy Listening Relaxing");
        assert_eq!(
            l.search_url,
            "https://www.premiumbeat.com/royalty-free-music?q=Easy%20Listening%20Relaxing"
        );
        assert_eq!(l.display_text, "Genre: Easy Listening\nMood: Relaxing, Romantic\nSub: Acoustic");
    }

    #[test]
    fn test_reserved_characters_are_encoded() {
        let l = link(Platform::PremiumBeat, MoodTag::Playful);
        assert_eq!(l.query, "Comedy / Cartoons Positive");
        assert_eq!(
            l.search_url,
            "https://www.premiumbeat.com/royalty-free-music?q=Comedy%20%2F%20Cartoons%20Positive"
        );
    }

    #[test]
    fn test_links_are_stable() {
        for platform in Platform::ALL {
            for mood in MoodTag::ALL {
                assert_eq!(link(platform, mood), link(platform, mood));
            }
        }
    }

    #[test]
    fn test_queries_are_clean() {
        for platform in Platform::ALL {
            let prefix = platform.profile().search_url("");
            for mood in MoodTag::ALL {
                let l = link(platform, mood);
                assert_eq!(l.query, l.query.trim());
                assert!(!l.query.contains("  "));
                let encoded = l.search_url.strip_prefix(&prefix).unwrap();
                assert!(!encoded.contains(' '));
                assert!(!encoded.is_empty());
            }
        }
    }

    static SOLO_PROFILE: PlatformProfile = PlatformProfile {
        id: "solo",
        name: "Solo",
        url_template: "https://example.test/?q={query}",
        dimension_order: &["Mood"],
        query_dimensions: &[QueryDimension::first("Mood")],
    };

    #[test]
    fn test_single_term_value() {
        let entry = KeywordEntry::new(&[("Mood", "  Cinematic  ")]);
        let l = build_link(&SOLO_PROFILE, &entry).unwrap();
        assert_eq!(l.query, "Cinematic");
        assert_eq!(l.search_url, "https://example.test/?q=Cinematic");
    }

    #[test]
    fn test_missing_query_dimension() {
        let entry = KeywordEntry::new(&[("Genre", "Folk")]);
        match build_link(&SOLO_PROFILE, &entry) {
            Err(SyncMatchError::MissingDimension { platform, dimension }) => {
                assert_eq!(platform, "solo");
                assert_eq!(dimension, "Mood");
            }
            other => panic!("Expected MissingDimension, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_display_dimension() {
        let profile = PlatformProfile {
            dimension_order: &["Mood", "Sub"],
            ..SOLO_PROFILE.clone()
        };
        let entry = KeywordEntry::new(&[("Mood", "Happy")]);
        assert!(matches!(
            render_display_text(&profile, &entry),
            Err(SyncMatchError::MissingDimension { dimension, .. }) if dimension == "Sub"
        ));
    }

    #[test]
    fn test_blank_terms_are_rejected() {
        const QUERY_DIMENSIONS: &[QueryDimension] =
            &[QueryDimension::first("Mood"), QueryDimension::full("Genre")];
        let profile = PlatformProfile {
            dimension_order: &["Mood", "Genre"],
            query_dimensions: QUERY_DIMENSIONS,
            ..SOLO_PROFILE.clone()
        };

        for pairs in [
            &[("Mood", ", Happy"), ("Genre", "Pop")][..],
            &[("Mood", ""), ("Genre", "Pop")][..],
            &[("Mood", "Happy"), ("Genre", "   ")][..],
        ] {
            let entry = KeywordEntry::new(pairs);
            match build_link(&profile, &entry) {
                Err(SyncMatchError::MissingDimension { platform, .. }) => assert_eq!(platform, "solo"),
                other => panic!("Expected MissingDimension for {:?}, got {:?}", pairs, other),
            }
        }

        let entry = KeywordEntry::new(&[("Mood", "Happy,"), ("Genre", " Pop ")]);
        assert_eq!(derive_query(&profile, &entry).unwrap(), "Happy Pop");
    }

    #[test]
    fn test_token_index_out_of_range() {
        let profile = PlatformProfile {
            query_dimensions: &[QueryDimension {
                dimension: "Mood",
                selector: TokenSelector::Token(2),
            }],
            ..SOLO_PROFILE.clone()
        };
        let entry = KeywordEntry::new(&[("Mood", "Happy, Bright")]);
        assert!(derive_query(&profile, &entry).is_err());

        let entry = KeywordEntry::new(&[("Mood", "Happy, Bright, Bouncy")]);
        assert_eq!(derive_query(&profile, &entry).unwrap(), "Bouncy");
    }
}
