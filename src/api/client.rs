use crate::api::models::*;
use once_cell::sync::Lazy;
use serde::Deserialize;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Thin wrapper over the SoundHaven site API. The player consumes these
/// endpoints as collaborators: detail fetches seed queues, the two recording
/// endpoints are fire-and-forget (call sites discard the `Result`).
pub struct SoundHavenClient {
    base_url: String,
}

fn json_pick_value<'a>(
    value: &'a serde_json::Value,
    keys: &[&str],
) -> Option<&'a serde_json::Value> {
    let object = value.as_object()?;
    for key in keys {
        if let Some(found) = object.get(*key) {
            return Some(found);
        }
    }
    None
}

fn json_pick_bool(value: &serde_json::Value, keys: &[&str]) -> Option<bool> {
    let picked = json_pick_value(value, keys)?;
    match picked {
        serde_json::Value::Bool(boolean) => Some(*boolean),
        serde_json::Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Some(true),
            "0" | "false" | "no" => Some(false),
            _ => None,
        },
        serde_json::Value::Number(number) => {
            if let Some(unsigned) = number.as_u64() {
                Some(unsigned > 0)
            } else if let Some(signed) = number.as_i64() {
                Some(signed > 0)
            } else {
                None
            }
        }
        _ => None,
    }
}

#[derive(Debug, Deserialize)]
struct SongListResponse {
    #[serde(default)]
    songs: Vec<Track>,
}

#[derive(Debug, Deserialize)]
struct AlbumListResponse {
    #[serde(default)]
    albums: Vec<Album>,
}

#[derive(Debug, Deserialize)]
struct AlbumDetailResponse {
    album: Album,
    #[serde(default)]
    songs: Vec<Track>,
}

#[derive(Debug, Deserialize)]
struct PlaylistListResponse {
    #[serde(default)]
    playlists: Vec<Playlist>,
}

#[derive(Debug, Deserialize)]
struct PlaylistDetailResponse {
    playlist: Playlist,
    #[serde(default)]
    songs: Vec<Track>,
}

#[derive(Debug, Deserialize)]
struct GenreListResponse {
    #[serde(default)]
    genres: Vec<Genre>,
}

impl SoundHavenClient {
    /// Same-origin client; the player is served by the site it talks to.
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    #[allow(dead_code)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        let response = HTTP_CLIENT
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        response.json::<T>().await.map_err(|e| e.to_string())
    }

    /// Polled once at session start to seed premium gating and ad exemption.
    /// Payload key casing has drifted across site deployments, so probe
    /// loosely instead of relying on one exact shape.
    pub async fn get_premium_status(&self) -> Result<PremiumStatus, String> {
        let value: serde_json::Value = self.get_json("/api/premium/status").await?;
        Ok(PremiumStatus {
            is_premium: json_pick_bool(&value, &["isPremium", "is_premium", "premium"])
                .unwrap_or(false),
            no_ads: json_pick_bool(&value, &["noAds", "no_ads", "adFree"]).unwrap_or(false),
        })
    }

    /// Play-count increment. No response contract is relied upon.
    pub async fn record_play(&self, track_id: u64) -> Result<(), String> {
        HTTP_CLIENT
            .post(self.url(&format!("/player/play/{track_id}")))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        Ok(())
    }

    /// Revenue attribution for a premium play. Premium session + premium
    /// track only; the caller enforces that.
    pub async fn record_premium_play(&self, track_id: u64) -> Result<(), String> {
        HTTP_CLIENT
            .post(self.url(&format!("/api/premium/record-play/{track_id}")))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        Ok(())
    }

    pub async fn get_albums(&self) -> Result<Vec<Album>, String> {
        let response: AlbumListResponse = self.get_json("/api/albums").await?;
        Ok(response.albums)
    }

    pub async fn get_album(&self, album_id: u64) -> Result<(Album, Vec<Track>), String> {
        let response: AlbumDetailResponse =
            self.get_json(&format!("/api/albums/{album_id}")).await?;
        Ok((response.album, response.songs))
    }

    pub async fn get_playlists(&self) -> Result<Vec<Playlist>, String> {
        let response: PlaylistListResponse = self.get_json("/api/playlists").await?;
        Ok(response.playlists)
    }

    pub async fn get_playlist(&self, playlist_id: u64) -> Result<(Playlist, Vec<Track>), String> {
        let response: PlaylistDetailResponse = self
            .get_json(&format!("/api/playlists/{playlist_id}"))
            .await?;
        Ok((response.playlist, response.songs))
    }

    pub async fn get_favorites(&self) -> Result<Vec<Track>, String> {
        let response: SongListResponse = self.get_json("/favorites/songs").await?;
        Ok(response.songs)
    }

    pub async fn get_genres(&self) -> Result<Vec<Genre>, String> {
        let response: GenreListResponse = self.get_json("/api/genres").await?;
        Ok(response.genres)
    }

    pub async fn get_genre_tracks(&self, genre: &str) -> Result<Vec<Track>, String> {
        let encoded = urlencoding::encode(genre);
        let response: SongListResponse = self
            .get_json(&format!("/api/genres/{encoded}/songs"))
            .await?;
        Ok(response.songs)
    }

    pub async fn get_featured_tracks(&self) -> Result<Vec<Track>, String> {
        let response: SongListResponse = self.get_json("/api/songs/featured").await?;
        Ok(response.songs)
    }
}

impl Default for SoundHavenClient {
    fn default() -> Self {
        Self::new()
    }
}
