//! Built-in token sets and the offline curated theme source.
//!
//! No network client ships with the game; a remote model client would plug in
//! behind the same `ThemeSource` trait. The curated source is deterministic:
//! the same theme string always yields the same set.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use futures::future;
use futures::future::BoxFuture;
use tracing::debug;

use crate::theme::provider::{ProviderError, ThemeResponse, ThemeSource};

pub const DEFAULT_THEME: &str = "Animals";

const ANIMALS: [&str; 8] = ["🦁", "🐯", "🐻", "🐨", "🐼", "🐸", "🐙", "🦄"];
const PETS: [&str; 8] = ["🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼"];
const FRUITS: [&str; 8] = ["🍎", "🍌", "🍇", "🍓", "🍒", "🍑", "🍍", "🥥"];
const ELEMENTS: [&str; 8] = ["⚡", "🔥", "💧", "❄️", "🌪️", "🌈", "☀️", "🌙"];
const SPACE: [&str; 8] = ["🚀", "🪐", "🌟", "🌑", "👽", "🛸", "☄️", "🔭"];
const OCEAN: [&str; 8] = ["🐠", "🐬", "🦈", "🐙", "🦀", "🐚", "🌊", "🐡"];
const FOOD: [&str; 8] = ["🍕", "🍔", "🌮", "🍣", "🍜", "🥐", "🧁", "🍩"];
const SPORTS: [&str; 8] = ["⚽", "🏀", "🎾", "🏈", "⚾", "🏐", "🏓", "🥊"];
const MUSIC: [&str; 8] = ["🎸", "🎹", "🎻", "🥁", "🎺", "🎷", "🎤", "🎧"];
const TRAVEL: [&str; 8] = ["✈️", "🗼", "🗽", "🏰", "⛺", "🚂", "🛳️", "🗺️"];

/// Keyword table consulted before falling back to a hashed pick.
const KEYWORDS: [(&str, &[&str; 8]); 15] = [
    ("animal", &ANIMALS),
    ("pet", &PETS),
    ("dog", &PETS),
    ("cat", &PETS),
    ("fruit", &FRUITS),
    ("space", &SPACE),
    ("planet", &SPACE),
    ("galaxy", &SPACE),
    ("ocean", &OCEAN),
    ("sea", &OCEAN),
    ("fish", &OCEAN),
    ("food", &FOOD),
    ("sport", &SPORTS),
    ("music", &MUSIC),
    ("travel", &TRAVEL),
];

const ALL_SETS: [&[&str; 8]; 10] = [
    &ANIMALS, &PETS, &FRUITS, &ELEMENTS, &SPACE, &OCEAN, &FOOD, &SPORTS, &MUSIC, &TRAVEL,
];

/// Tokens used when no theme is requested at all.
pub fn default_set() -> Vec<String> {
    to_strings(&ANIMALS)
}

/// Tokens appended when a provider returns fewer than a full board's worth.
pub fn pad_set() -> Vec<String> {
    to_strings(&PETS)
}

/// Full replacement set used when the provider fails outright.
pub fn failure_fallback() -> Vec<String> {
    to_strings(&ELEMENTS)
}

fn to_strings(set: &[&str; 8]) -> Vec<String> {
    set.iter().map(|s| s.to_string()).collect()
}

fn lookup(theme: &str) -> &'static [&'static str; 8] {
    let needle = theme.trim().to_lowercase();

    for (keyword, set) in &KEYWORDS {
        if needle.contains(keyword) {
            return set;
        }
    }

    // Unknown theme: pick a set deterministically from the theme string
    let mut hasher = DefaultHasher::new();
    needle.hash(&mut hasher);
    ALL_SETS[(hasher.finish() % ALL_SETS.len() as u64) as usize]
}

/// Offline `ThemeSource` backed by the keyword table above.
pub struct CuratedSource;

impl ThemeSource for CuratedSource {
    fn fetch(&self, theme: &str) -> BoxFuture<'_, Result<ThemeResponse, ProviderError>> {
        let set = lookup(theme);
        debug!("Curated lookup for '{}' resolved to {:?}", theme, set[0]);
        Box::pin(future::ready(Ok(ThemeResponse {
            items: to_strings(set),
        })))
    }
}
