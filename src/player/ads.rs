use crate::api::models::Track;
use rand::Rng;

/// Completed song plays between forced advertisements.
pub const DEFAULT_AD_INTERVAL: u32 = 3;

/// Nominal ad length driving the overlay countdown. The media element's own
/// clock stays authoritative over actual playback length.
pub const AD_BREAK_SECONDS: u32 = 28;

/// Sentinel id for advertisement tracks; catalog ids start at 1.
pub const AD_TRACK_ID: u64 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdState {
    Idle,
    AdPlaying,
    /// Ad audio failed to start after the UI committed to the break.
    /// Transient: the next `end_ad` recovers to `Idle`.
    Suspended,
}

/// Counts completed plays and, for sessions without an ad exemption,
/// intercepts the play request that crosses the interval, parking the
/// requested track until the advertisement resolves.
#[derive(Debug, Clone)]
pub struct AdScheduler {
    state: AdState,
    plays_since_ad: u32,
    interval: u32,
    pending: Option<Track>,
    pool: Vec<Track>,
}

fn house_ad(title: &str, audio_url: &str) -> Track {
    Track {
        id: AD_TRACK_ID,
        title: title.to_string(),
        artist: "SoundHaven".to_string(),
        cover_url: Some("/static/ads/ad-cover.png".to_string()),
        audio_url: Some(audio_url.to_string()),
        favorite: false,
        premium: false,
        duration: AD_BREAK_SECONDS,
    }
}

/// House inventory baked into the client. Swappable through
/// `AdScheduler::new` if the pool ever becomes server-driven.
pub fn default_ad_pool() -> Vec<Track> {
    vec![
        house_ad("Go Premium, skip the ads", "/static/ads/premium-pitch.mp3"),
        house_ad("Discover Weekly, every Monday", "/static/ads/discover-weekly.mp3"),
        house_ad("SoundHaven, now on mobile", "/static/ads/mobile-app.mp3"),
    ]
}

impl AdScheduler {
    pub fn new(interval: u32, pool: Vec<Track>) -> Self {
        debug_assert!(interval > 0, "ad interval must be positive");
        Self {
            state: AdState::Idle,
            plays_since_ad: 0,
            interval: interval.max(1),
            pending: None,
            pool,
        }
    }

    pub fn with_default_pool() -> Self {
        Self::new(DEFAULT_AD_INTERVAL, default_ad_pool())
    }

    pub fn state(&self) -> AdState {
        self.state
    }

    pub fn plays_since_ad(&self) -> u32 {
        self.plays_since_ad
    }

    /// Record one completed song play. Frozen while an ad is up so the break
    /// itself never counts toward the next one.
    pub fn note_play(&mut self) {
        if self.state == AdState::Idle {
            self.plays_since_ad += 1;
        }
    }

    /// Whether the next play request must be intercepted. Exempt sessions
    /// never intercept; their counter still accrues (see `note_play`) so a
    /// lapsed subscription resumes from a sane position rather than zero.
    pub fn should_intercept(&self, ads_exempt: bool) -> bool {
        !ads_exempt
            && self.state == AdState::Idle
            && !self.pool.is_empty()
            && self.plays_since_ad >= self.interval
    }

    /// `Idle -> AdPlaying`: park the requested track, zero the counter, and
    /// hand back a pool ad to play in its place.
    pub fn begin_ad<R: Rng>(&mut self, rng: &mut R, requested: Track) -> Track {
        debug_assert_eq!(self.state, AdState::Idle, "begin_ad outside Idle");
        debug_assert!(!self.pool.is_empty(), "begin_ad with an empty pool");
        self.state = AdState::AdPlaying;
        self.pending = Some(requested);
        self.plays_since_ad = 0;
        let pick = rng.gen_range(0..self.pool.len());
        self.pool[pick].clone()
    }

    /// Ad audio failed to start. The caller must still drive `end_ad` so the
    /// parked track is not stranded.
    pub fn suspend(&mut self) {
        if self.state == AdState::AdPlaying {
            self.state = AdState::Suspended;
        }
    }

    /// Back to `Idle`, returning (and clearing) the parked track. Idempotent:
    /// a second call yields `None`, not an error.
    pub fn end_ad(&mut self) -> Option<Track> {
        self.state = AdState::Idle;
        self.pending.take()
    }

    /// The user bailed out of the break toward the upgrade flow. The
    /// interrupted song is abandoned, not resumed.
    pub fn skip_for_upgrade(&mut self) {
        self.pending = None;
        self.plays_since_ad = 0;
        self.state = AdState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn song(id: u64) -> Track {
        Track {
            id,
            title: format!("Song {id}"),
            audio_url: Some(format!("/audio/{id}.mp3")),
            ..Default::default()
        }
    }

    fn scheduler() -> AdScheduler {
        AdScheduler::new(3, default_ad_pool())
    }

    #[test]
    fn intercepts_once_counter_reaches_interval() {
        let mut ads = scheduler();
        for expected in 1..=3u32 {
            assert!(!ads.should_intercept(false));
            ads.note_play();
            assert_eq!(ads.plays_since_ad(), expected);
        }
        assert!(ads.should_intercept(false));
    }

    #[test]
    fn exempt_sessions_never_intercept_but_still_accrue() {
        let mut ads = scheduler();
        for _ in 0..10 {
            ads.note_play();
        }
        assert!(!ads.should_intercept(true));
        assert_eq!(ads.plays_since_ad(), 10);
        // exemption lapses: interception resumes from the accrued counter
        assert!(ads.should_intercept(false));
    }

    #[test]
    fn begin_ad_parks_the_request_and_zeroes_the_counter() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut ads = scheduler();
        for _ in 0..3 {
            ads.note_play();
        }

        let ad = ads.begin_ad(&mut rng, song(9));
        assert_eq!(ad.id, AD_TRACK_ID);
        assert_eq!(ads.state(), AdState::AdPlaying);
        assert_eq!(ads.plays_since_ad(), 0);

        let pending = ads.end_ad();
        assert_eq!(pending.map(|t| t.id), Some(9));
        assert_eq!(ads.state(), AdState::Idle);
    }

    #[test]
    fn counter_is_frozen_while_an_ad_plays() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut ads = scheduler();
        ads.begin_ad(&mut rng, song(1));
        ads.note_play();
        assert_eq!(ads.plays_since_ad(), 0);
    }

    #[test]
    fn end_ad_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut ads = scheduler();
        ads.begin_ad(&mut rng, song(5));
        assert!(ads.end_ad().is_some());
        assert!(ads.end_ad().is_none());
        assert_eq!(ads.state(), AdState::Idle);
    }

    #[test]
    fn suspend_recovers_through_end_ad() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut ads = scheduler();
        ads.begin_ad(&mut rng, song(5));
        ads.suspend();
        assert_eq!(ads.state(), AdState::Suspended);
        assert_eq!(ads.end_ad().map(|t| t.id), Some(5));
        assert_eq!(ads.state(), AdState::Idle);
    }

    #[test]
    fn skip_for_upgrade_abandons_the_parked_track() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut ads = scheduler();
        for _ in 0..3 {
            ads.note_play();
        }
        ads.begin_ad(&mut rng, song(7));
        ads.skip_for_upgrade();
        assert_eq!(ads.state(), AdState::Idle);
        assert_eq!(ads.plays_since_ad(), 0);
        assert!(ads.end_ad().is_none());
    }

    #[test]
    fn empty_pool_disables_interception() {
        let mut ads = AdScheduler::new(1, Vec::new());
        ads.note_play();
        assert!(!ads.should_intercept(false));
    }
}
