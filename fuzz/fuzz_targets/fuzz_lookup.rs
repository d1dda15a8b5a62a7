// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use syncmatch::keywords::resolve_by_name;
use syncmatch::links::build_link;
use syncmatch::{MoodTag, Platform, SyncMatchError};

#[derive(Arbitrary, Debug)]
struct LookupInput<'a> {
    platform: &'a str,
    mood: &'a str,
}

fuzz_target!(|input: LookupInput| {
    match resolve_by_name(input.platform, input.mood) {
        Ok(entry) => {
            let platform: Platform = input.platform.parse().expect("resolved platform parses");
            let link = build_link(platform.profile(), entry).expect("table entries are complete");
            assert!(!link.search_url.contains(' '));
        }
        Err(SyncMatchError::UnknownPlatform(_)) => assert!(input.platform.parse::<Platform>().is_err()),
        Err(SyncMatchError::UnknownMood(_)) => assert!(input.mood.parse::<MoodTag>().is_err()),
        Err(e) => panic!("unexpected error: {}", e),
    }
});
