//! Built-in starter catalog

use crate::types::Song;
use std::time::Duration;

/// (title, artist, seconds)
const SEED_SONGS: [(&str, &str, u64); 10] = [
    ("Chalk Outlines", "Ren", 210),
    ("Blinding Lights", "The Weeknd", 200),
    ("Levitating", "Dua Lipa", 203),
    ("Peaches", "Justin Bieber", 198),
    ("Save Your Tears", "The Weeknd", 215),
    ("Watermelon Sugar", "Harry Styles", 174),
    ("Good 4 U", "Olivia Rodrigo", 178),
    ("dying lately", "iamjakehill", 160),
    ("Gasoline", "Connor Price", 240),
    ("Lucid Dreams", "Juice WRLD", 239),
];

/// The ten songs a fresh library starts with
pub fn seed_songs() -> Vec<Song> {
    SEED_SONGS
        .iter()
        .map(|&(title, artist, secs)| Song::new(title, artist, Duration::from_secs(secs)))
        .collect()
}
