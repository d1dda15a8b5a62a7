// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Mood-to-keyword lookup table
//!
//! The table is a fixed-size array indexed by [`Platform`] and [`MoodTag`],
//! so every (platform, mood) pair has an entry by construction.

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

use crate::mood::MoodTag;
use crate::platform::Platform;
use crate::Result;

/// Dimension name to comma-separated keyword list, in table order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordEntry {
    pairs: &'static [(&'static str, &'static str)],
}

impl KeywordEntry {
    pub const fn new(pairs: &'static [(&'static str, &'static str)]) -> Self {
        Self { pairs }
    }

    /// Keyword value for a dimension
    pub fn get(&self, dimension: &str) -> Option<&'static str> {
        self.pairs
            .iter()
            .find(|(name, _)| *name == dimension)
            .map(|(_, value)| *value)
    }

    pub fn dimensions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pairs.iter().map(|(name, _)| *name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.pairs.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl Serialize for KeywordEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

// Rows follow Platform::ALL, columns follow MoodTag::ALL
// (Playful, Relaxed, Cinematic, Corporate).
static TABLE: [[KeywordEntry; 4]; 3] = [
    // Musicbed
    [
        KeywordEntry::new(&[
            ("Mood", "Whimsical, Carefree, Playful"),
            ("Genre", "Indie Pop, World"),
            ("Attr", "Bright, Quirky"),
        ]),
        KeywordEntry::new(&[
            ("Mood", "Relaxed, Intimate, Chill"),
            ("Genre", "Folk, Acoustic"),
            ("Attr", "Earthy, Organic"),
        ]),
        KeywordEntry::new(&[
            ("Mood", "Cinematic, Euphoric, Anthemic"),
            ("Genre", "Score, Orchestral"),
            ("Attr", "Build, Wide"),
        ]),
        KeywordEntry::new(&[
            ("Mood", "Driving, Confident"),
            ("Genre", "Electronic, Pop"),
            ("Attr", "Minimal, Tech"),
        ]),
    ],
    // Artlist
    [
        KeywordEntry::new(&[
            ("Theme", "Vlog, Kids"),
            ("Mood", "Happy, Uplifting"),
            ("Genre", "Acoustic, Pop"),
        ]),
        KeywordEntry::new(&[
            ("Theme", "Lifestyle, Food"),
            ("Mood", "Peaceful, Love"),
            ("Genre", "Acoustic, Folk"),
        ]),
        KeywordEntry::new(&[
            ("Theme", "Film, Trailer"),
            ("Mood", "Powerful, Serious"),
            ("Genre", "Cinematic"),
        ]),
        KeywordEntry::new(&[
            ("Theme", "Technology, Business"),
            ("Mood", "Corporate, Motivation"),
            ("Genre", "Electronic"),
        ]),
    ],
    // PremiumBeat
    [
        KeywordEntry::new(&[
            ("Genre", "Comedy / Cartoons"),
            ("Mood", "Positive, Happy"),
            ("Sub", "Childlike"),
        ]),
        KeywordEntry::new(&[
            ("Genre", "Easy Listening"),
            ("Mood", "Relaxing, Romantic"),
            ("Sub", "Acoustic"),
        ]),
        KeywordEntry::new(&[
            ("Genre", "Production Music"),
            ("Mood", "Adventure, Dramatic"),
            ("Sub", "Trailer"),
        ]),
        KeywordEntry::new(&[
            ("Genre", "Corporate"),
            ("Mood", "Motivational, Driving"),
            ("Sub", "Tech"),
        ]),
    ],
];

/// Keyword entry registered for a platform and mood
pub fn resolve(platform: Platform, mood: MoodTag) -> &'static KeywordEntry {
    &TABLE[platform.index()][mood.index()]
}

/// Resolve from unvalidated text, e.g. a form field or an external classifier
pub fn resolve_by_name(platform: &str, mood: &str) -> Result<&'static KeywordEntry> {
    let platform: Platform = platform.parse()?;
    let mood: MoodTag = mood.parse()?;
    debug!("Resolving keywords for {} / {}", platform, mood);
    Ok(resolve(platform, mood))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SyncMatchError;

    fn expected(platform: Platform, mood: MoodTag) -> [(&'static str, &'static str); 3] {
        use MoodTag::*;
        use Platform::*;
        match (platform, mood) {
            (Musicbed, Playful) => [("Mood", "Whimsical, Carefree, Playful"), ("Genre", "Indie Pop, World"), ("Attr", "Bright, Quirky")],
            (Musicbed, Cinematic) => [("Mood", "Cinematic, Euphoric, Anthemic"), ("Genre", "Score, Orchestral"), ("Attr", "Build, Wide")],
            (Musicbed, Relaxed) => [("Mood", "Relaxed, Intimate, Chill"), ("Genre", "Folk, Acoustic"), ("Attr", "Earthy, Organic")],
            (Musicbed, Corporate) => [("Mood", "Driving, Confident"), ("Genre", "Electronic, Pop"), ("Attr", "Minimal, Tech")],
            (Artlist, Playful) => [("Theme", "Vlog, Kids"), ("Mood", "Happy, Uplifting"), ("Genre", "Acoustic, Pop")],
            (Artlist, Cinematic) => [("Theme", "Film, Trailer"), ("Mood", "Powerful, Serious"), ("Genre", "Cinematic")],
            (Artlist, Relaxed) => [("Theme", "Lifestyle, Food"), ("Mood", "Peaceful, Love"), ("Genre", "Acoustic, Folk")],
            (Artlist, Corporate) => [("Theme", "Technology, Business"), ("Mood", "Corporate, Motivation"), ("Genre", "Electronic")],
            (PremiumBeat, Playful) => [("Genre", "Comedy / Cartoons"), ("Mood", "Positive, Happy"), ("Sub", "Childlike")],
            (PremiumBeat, Cinematic) => [("Genre", "Production Music"), ("Mood", "Adventure, Dramatic"), ("Sub", "Trailer")],
            (PremiumBeat, Relaxed) => [("Genre", "Easy Listening"), ("Mood", "Relaxing, Romantic"), ("Sub", "Acoustic")],
            (PremiumBeat, Corporate) => [("Genre", "Corporate"), ("Mood", "Motivational, Driving"), ("Sub", "Tech")],
        }
    }

    #[test]
    fn test_all_twelve_entries() {
        for platform in Platform::ALL {
            for mood in MoodTag::ALL {
                let entry = resolve(platform, mood);
                for (dimension, value) in expected(platform, mood) {
                    assert_eq!(entry.get(dimension), Some(value), "{} / {} / {}", platform, mood, dimension);
                }
                assert_eq!(entry.len(), 3);
            }
        }
    }

    #[test]
    fn test_entries_match_dimension_order() {
        for platform in Platform::ALL {
            let order = platform.profile().dimension_order;
            for mood in MoodTag::ALL {
                let dims: Vec<_> = resolve(platform, mood).dimensions().collect();
                assert_eq!(dims.as_slice(), order, "{} / {}", platform, mood);
            }
        }
    }

    #[test]
    fn test_resolve_by_name() {
        let entry = resolve_by_name("artlist", "放松/生活").unwrap();
        assert_eq!(entry.get("Theme"), Some("Lifestyle, Food"));
    }

    #[test]
    fn test_resolve_by_name_errors() {
        assert!(matches!(
            resolve_by_name("soundstripe", "playful"),
            Err(SyncMatchError::UnknownPlatform(p)) if p == "soundstripe"
        ));
        assert!(matches!(
            resolve_by_name("musicbed", "angry"),
            Err(SyncMatchError::UnknownMood(m)) if m == "angry"
        ));
    }

    #[test]
    fn test_entry_serializes_in_order() {
        let json = serde_json::to_string(resolve(Platform::PremiumBeat, MoodTag::Corporate)).unwrap();
        assert_eq!(json, r#"{"Genre":"Corporate","Mood":"Motivational, Driving","Sub":"Tech"}"#);
    }

    #[test]
    fn test_entry_iterates_in_order() {
        let entry = resolve(Platform::Musicbed, MoodTag::Relaxed);
        let pairs: Vec<_> = entry.iter().collect();
        assert_eq!(pairs.len(), entry.len());
        assert_eq!(pairs[0].0, "Mood");
        assert_eq!(entry.dimensions().collect::<Vec<_>>(), pairs.iter().map(|(n, _)| *n).collect::<Vec<_>>());
    }
}
