use serde::{Deserialize, Serialize};

/// A playable item: a song from the catalog or a house advertisement.
///
/// Advertisements never carry a catalog id; they use the `0` sentinel and are
/// produced by the ad scheduler's pool, never by server payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Track {
    #[serde(default)]
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default, alias = "coverUrl")]
    pub cover_url: Option<String>,
    #[serde(default, alias = "audioUrl", alias = "audioSrc")]
    pub audio_url: Option<String>,
    #[serde(default, alias = "isFavorite")]
    pub favorite: bool,
    #[serde(default, alias = "isPremium")]
    pub premium: bool,
    #[serde(default)]
    pub duration: u32,
}

impl Track {
    /// The stream URL, if this track actually has one. A missing or blank
    /// source means the track is unplayable and must be rejected before it
    /// reaches the media element.
    pub fn playable_source(&self) -> Option<&str> {
        self.audio_url
            .as_deref()
            .map(str::trim)
            .filter(|src| !src.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Album {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default, alias = "coverUrl")]
    pub cover_url: Option<String>,
    #[serde(default, alias = "songCount")]
    pub song_count: u32,
    #[serde(default)]
    pub year: Option<u32>,
    #[serde(default)]
    pub genre: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Playlist {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "coverUrl")]
    pub cover_url: Option<String>,
    #[serde(default, alias = "songCount")]
    pub song_count: u32,
    #[serde(default)]
    pub owner: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Genre {
    pub name: String,
    #[serde(default, alias = "songCount")]
    pub song_count: u32,
}

/// Subscription status for the current session, polled once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PremiumStatus {
    #[serde(default, alias = "isPremium")]
    pub is_premium: bool,
    #[serde(default, alias = "noAds")]
    pub no_ads: bool,
}

pub fn format_duration(seconds: u32) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    format!("{}:{:02}", mins, secs)
}
