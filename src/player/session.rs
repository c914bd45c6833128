use std::fmt;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::api::models::Track;
use crate::player::ads::AdScheduler;
use crate::player::loop_mode::LoopMode;
use crate::player::queue::{Advance, Direction, Queue};
use crate::player::shuffle::ShuffleState;
use crate::player::source::QueueSource;

/// Rejection reasons surfaced to the UI. Neither mutates any session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayError {
    NoAudioSource,
    PremiumRequired,
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::NoAudioSource => write!(f, "this track has no audio source"),
            PlayError::PremiumRequired => write!(f, "this track needs a Premium subscription"),
        }
    }
}

/// What an accepted play request resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayOutcome {
    Song(Track),
    /// The request was intercepted; the ad plays first and the requested
    /// track is parked with the scheduler.
    Advertisement(Track),
}

/// Fire-and-forget collaborator calls owed after playback actually starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideEffect {
    RecordPlay(u64),
    RecordPremiumPlay(u64),
}

/// The one owned playback state machine: queue, shuffle, loop, ads, premium
/// gating. Constructed at page start, held in a single `Signal`, and driven
/// by UI clicks and media element events. The media element itself is
/// untouched here; `components::audio_manager` reacts to `epoch` bumps.
pub struct PlayerSession {
    queue: Queue,
    shuffle: ShuffleState,
    loop_mode: LoopMode,
    ads: AdScheduler,
    premium: bool,
    no_ads: bool,
    active_ad: Option<Track>,
    playing: bool,
    /// Bumped on every accepted play so the audio layer can tell a loop-one
    /// replay (same source) from "nothing changed".
    epoch: u64,
    /// Last epoch whose playback-start side effects were emitted; keeps a
    /// resume after pause from double-recording.
    started_epoch: u64,
    rng: StdRng,
}

impl PlayerSession {
    pub fn new() -> Self {
        Self::from_parts(AdScheduler::with_default_pool(), StdRng::from_entropy())
    }

    pub(crate) fn from_parts(ads: AdScheduler, rng: StdRng) -> Self {
        Self {
            queue: Queue::new(),
            shuffle: ShuffleState::new(),
            loop_mode: LoopMode::Off,
            ads,
            premium: false,
            no_ads: false,
            active_ad: None,
            playing: false,
            epoch: 0,
            started_epoch: 0,
            rng,
        }
    }

    // --- observable state ---------------------------------------------------

    /// The track the media element should be showing: an active ad first,
    /// else the queue's current track.
    pub fn now_playing(&self) -> Option<&Track> {
        self.active_ad.as_ref().or_else(|| self.queue.current())
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_ad_playing(&self) -> bool {
        self.active_ad.is_some()
    }

    pub fn is_shuffled(&self) -> bool {
        self.shuffle.is_active()
    }

    pub fn loop_mode(&self) -> LoopMode {
        self.loop_mode
    }

    pub fn is_premium_session(&self) -> bool {
        self.premium
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn queue_tracks(&self) -> &[Track] {
        self.queue.tracks()
    }

    pub fn queue_cursor(&self) -> Option<usize> {
        self.queue.cursor()
    }

    /// The song that resumes once the current ad finishes, for the overlay's
    /// "up next" line.
    pub fn pending_after_ad(&self) -> Option<&Track> {
        if self.active_ad.is_some() {
            self.queue.current()
        } else {
            None
        }
    }

    // --- session configuration ----------------------------------------------

    pub fn set_premium_status(&mut self, is_premium: bool, no_ads: bool) {
        self.premium = is_premium;
        self.no_ads = no_ads;
    }

    pub fn restore_loop_mode(&mut self, mode: LoopMode) {
        self.loop_mode = mode;
    }

    fn ads_exempt(&self) -> bool {
        self.premium || self.no_ads
    }

    // --- queue plumbing -----------------------------------------------------

    /// Replace the queue wholesale. With shuffle active the new list becomes
    /// the new canonical order and the view is immediately reshuffled, the
    /// cursor following the start track by id.
    pub fn load_queue(&mut self, tracks: Vec<Track>, start_index: usize) {
        debug_assert!(!tracks.is_empty(), "load_queue requires tracks");
        if tracks.is_empty() {
            return;
        }
        self.queue.load(tracks, start_index);
        self.shuffle.recapture_for_load(&mut self.rng, &mut self.queue);
    }

    pub fn clear_queue(&mut self) {
        if self.is_ad_playing() {
            return;
        }
        self.queue.clear();
        self.shuffle.sync_cleared();
        self.playing = false;
    }

    /// Resolve a queue source, load it, and request play of its start track.
    /// Gating runs before the load so a rejected request leaves the previous
    /// queue untouched.
    pub fn play_from_source(
        &mut self,
        source: QueueSource,
        scan: impl FnOnce(&str) -> Vec<Track>,
    ) -> Result<PlayOutcome, PlayError> {
        let Some((tracks, start_index)) = source.resolve(scan) else {
            return Err(PlayError::NoAudioSource);
        };
        let start = if start_index < tracks.len() {
            start_index
        } else {
            0
        };
        let target = tracks[start].clone();
        if target.playable_source().is_none() {
            return Err(PlayError::NoAudioSource);
        }
        if target.premium && !self.premium {
            return Err(PlayError::PremiumRequired);
        }
        self.load_queue(tracks, start);
        self.request_play(target)
    }

    // --- the orchestration algorithm ----------------------------------------

    /// Decide what actually plays for a requested track. Order matters:
    /// unplayable and premium gates reject before any state changes, premium
    /// gating outranks ad insertion, and only then may the scheduler swap in
    /// an advertisement.
    pub fn request_play(&mut self, track: Track) -> Result<PlayOutcome, PlayError> {
        if track.playable_source().is_none() {
            return Err(PlayError::NoAudioSource);
        }
        if track.premium && !self.premium {
            return Err(PlayError::PremiumRequired);
        }
        if self.ads.should_intercept(self.ads_exempt()) {
            let ad = self.ads.begin_ad(&mut self.rng, track);
            self.active_ad = Some(ad.clone());
            self.playing = true;
            self.epoch += 1;
            return Ok(PlayOutcome::Advertisement(ad));
        }

        // normal path: align the cursor with the requested track; a foreign
        // track becomes its own single-entry queue
        match self.queue.position_of(track.id) {
            Some(position) => self.queue.set_cursor(position),
            None => self.load_queue(vec![track.clone()], 0),
        }
        self.active_ad = None;
        self.playing = true;
        self.epoch += 1;
        Ok(PlayOutcome::Song(track))
    }

    /// Called by the audio layer once the media element reports playback has
    /// started. Emits the owed collaborator calls exactly once per accepted
    /// play; ads owe nothing.
    pub fn playback_started(&mut self) -> Vec<SideEffect> {
        if self.started_epoch == self.epoch {
            return Vec::new();
        }
        self.started_epoch = self.epoch;
        if self.active_ad.is_some() {
            return Vec::new();
        }
        let Some(track) = self.queue.current() else {
            return Vec::new();
        };
        self.ads.note_play();
        let mut effects = vec![SideEffect::RecordPlay(track.id)];
        if track.premium && self.premium {
            effects.push(SideEffect::RecordPremiumPlay(track.id));
        }
        effects
    }

    /// Media start failure (excluding the expected aborted-load case). A
    /// failed ad must not strand the session: the scheduler is forced through
    /// `end_ad` and the parked track comes back for a retry. A failed song
    /// leaves queue and cursor exactly where they were.
    pub fn playback_failed(&mut self) -> Option<Track> {
        if self.active_ad.take().is_some() {
            self.ads.suspend();
            let pending = self.ads.end_ad();
            if pending.is_none() {
                self.playing = false;
            }
            return pending;
        }
        self.playing = false;
        None
    }

    /// The media element finished naturally. Returns the track to request
    /// next, if any; the caller routes it back through `request_play`.
    pub fn on_track_ended(&mut self) -> Option<Track> {
        if self.active_ad.take().is_some() {
            match self.ads.end_ad() {
                Some(pending) => return Some(pending),
                None => {
                    self.playing = false;
                    return None;
                }
            }
        }

        match self.loop_mode {
            // replay without advancing; the replay is a genuine new play and
            // goes back through request_play for counting and recording
            LoopMode::One => self.queue.current().cloned(),
            mode => {
                if self.queue.is_empty() {
                    self.playing = false;
                    return None;
                }
                match self.queue.advance(Direction::Next, mode) {
                    Advance::To(index) => Some(self.queue.tracks()[index].clone()),
                    Advance::EndOfQueue => {
                        // last track stays loaded, UI shows stopped
                        self.playing = false;
                        None
                    }
                }
            }
        }
    }

    /// Manual skip forward. Locked out during an ad; a no-op at the end of
    /// the queue with loop off. Under loop-one this replays the current
    /// track, matching the natural-end behavior.
    pub fn next(&mut self) -> Option<Track> {
        if self.is_ad_playing() || self.queue.is_empty() {
            return None;
        }
        match self.loop_mode {
            LoopMode::One => self.queue.current().cloned(),
            mode => match self.queue.advance(Direction::Next, mode) {
                Advance::To(index) => Some(self.queue.tracks()[index].clone()),
                Advance::EndOfQueue => None,
            },
        }
    }

    /// Manual skip backward; wraps unconditionally.
    pub fn previous(&mut self) -> Option<Track> {
        if self.is_ad_playing() || self.queue.is_empty() {
            return None;
        }
        match self.queue.advance(Direction::Previous, self.loop_mode) {
            Advance::To(index) => Some(self.queue.tracks()[index].clone()),
            Advance::EndOfQueue => None,
        }
    }

    pub fn toggle_shuffle(&mut self) {
        if self.is_ad_playing() {
            return;
        }
        if self.shuffle.is_active() {
            self.shuffle.disable(&mut self.queue);
        } else {
            self.shuffle.enable(&mut self.rng, &mut self.queue);
        }
    }

    pub fn cycle_loop(&mut self) {
        if self.is_ad_playing() {
            return;
        }
        self.loop_mode = self.loop_mode.cycle();
    }

    /// The upgrade escape hatch inside the ad overlay. The interrupted song
    /// is abandoned, not resumed: skipping is a conversion action.
    pub fn skip_ad_for_upgrade(&mut self) {
        if self.active_ad.take().is_none() {
            return;
        }
        self.ads.skip_for_upgrade();
        self.playing = false;
    }

    pub fn set_playing(&mut self, playing: bool) {
        if playing && self.now_playing().is_none() {
            return;
        }
        self.playing = playing;
    }
}

impl Default for PlayerSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::ads::{default_ad_pool, AdState};

    fn song(id: u64) -> Track {
        Track {
            id,
            title: format!("Song {id}"),
            artist: "Test Artist".to_string(),
            audio_url: Some(format!("/audio/{id}.mp3")),
            ..Default::default()
        }
    }

    fn premium_song(id: u64) -> Track {
        Track {
            premium: true,
            ..song(id)
        }
    }

    fn session() -> PlayerSession {
        PlayerSession::from_parts(
            AdScheduler::new(3, default_ad_pool()),
            StdRng::seed_from_u64(42),
        )
    }

    fn play_and_start(session: &mut PlayerSession, track: Track) -> Vec<SideEffect> {
        session.request_play(track).expect("request accepted");
        session.playback_started()
    }

    #[test]
    fn load_queue_then_current_returns_the_start_track() {
        let mut s = session();
        s.load_queue(vec![song(1), song(2), song(3)], 2);
        assert_eq!(s.now_playing().map(|t| t.id), Some(3));
    }

    #[test]
    fn unplayable_track_is_rejected_without_state_changes() {
        let mut s = session();
        s.load_queue(vec![song(1)], 0);
        let cursor = s.queue_cursor();

        let mut broken = song(9);
        broken.audio_url = Some("   ".to_string());
        assert_eq!(s.request_play(broken), Err(PlayError::NoAudioSource));
        assert_eq!(s.queue_cursor(), cursor);
        assert_eq!(s.epoch(), 0);
        assert!(!s.is_playing());
    }

    #[test]
    fn premium_track_is_rejected_for_free_sessions_before_the_scheduler() {
        let mut s = session();
        // counter sits at the interception threshold; gating must win anyway
        for id in 1..=3 {
            play_and_start(&mut s, song(id));
        }
        let result = s.request_play(premium_song(50));
        assert_eq!(result, Err(PlayError::PremiumRequired));
        assert!(!s.is_ad_playing());
        assert_eq!(s.ads.state(), AdState::Idle);
        assert_eq!(s.ads.plays_since_ad(), 3);
    }

    #[test]
    fn ad_intercepts_the_fourth_play_and_resumes_after_end_ad() {
        let mut s = session();
        for (id, expected_count) in [(1u64, 1u32), (2, 2), (3, 3)] {
            let outcome = s.request_play(song(id)).unwrap();
            assert!(matches!(outcome, PlayOutcome::Song(_)));
            s.playback_started();
            assert_eq!(s.ads.plays_since_ad(), expected_count);
        }

        let outcome = s.request_play(song(4)).unwrap();
        let PlayOutcome::Advertisement(ad) = outcome else {
            panic!("fourth play should intercept");
        };
        assert!(ad.playable_source().is_some());
        assert!(s.is_ad_playing());
        assert_eq!(s.ads.plays_since_ad(), 0);
        // ads record nothing
        assert!(s.playback_started().is_empty());

        // ad finishes naturally; the parked track comes back
        let resumed = s.on_track_ended().expect("pending track resumes");
        assert_eq!(resumed.id, 4);
        assert!(!s.is_ad_playing());
        let outcome = s.request_play(resumed).unwrap();
        assert!(matches!(outcome, PlayOutcome::Song(t) if t.id == 4));
    }

    #[test]
    fn premium_sessions_are_never_intercepted() {
        let mut s = session();
        s.set_premium_status(true, true);
        for id in 1..=8 {
            let outcome = s.request_play(song(id)).unwrap();
            assert!(matches!(outcome, PlayOutcome::Song(_)));
            s.playback_started();
        }
        assert!(!s.is_ad_playing());
        // the counter still accrued underneath
        assert_eq!(s.ads.plays_since_ad(), 8);
    }

    #[test]
    fn play_recording_effects_depend_on_premium_flags() {
        let mut s = session();
        let effects = play_and_start(&mut s, song(1));
        assert_eq!(effects, vec![SideEffect::RecordPlay(1)]);

        let mut premium = session();
        premium.set_premium_status(true, true);
        let effects = play_and_start(&mut premium, premium_song(2));
        assert_eq!(
            effects,
            vec![
                SideEffect::RecordPlay(2),
                SideEffect::RecordPremiumPlay(2)
            ]
        );

        // premium track, premium session, but record-premium only fires once
        // per accepted play
        assert!(premium.playback_started().is_empty());
    }

    #[test]
    fn loop_one_replays_without_advancing() {
        let mut s = session();
        s.load_queue(vec![song(1), song(2), song(3)], 1);
        s.restore_loop_mode(LoopMode::One);
        s.request_play(song(2)).unwrap();

        let replay = s.on_track_ended().expect("loop-one replays");
        assert_eq!(replay.id, 2);
        assert_eq!(s.queue_cursor(), Some(1));
    }

    #[test]
    fn end_of_queue_with_loop_off_stops_with_last_track_loaded() {
        let mut s = session();
        s.load_queue(vec![song(1), song(2)], 1);
        s.request_play(song(2)).unwrap();
        s.playback_started();

        assert_eq!(s.on_track_ended(), None);
        assert!(!s.is_playing());
        assert_eq!(s.now_playing().map(|t| t.id), Some(2));
    }

    #[test]
    fn loop_all_wraps_through_the_whole_queue() {
        let mut s = session();
        s.set_premium_status(true, true); // keep ads out of the traversal
        s.load_queue(vec![song(1), song(2), song(3)], 1);
        s.restore_loop_mode(LoopMode::All);
        s.request_play(song(2)).unwrap();

        let mut visited = Vec::new();
        for _ in 0..3 {
            let next = s.on_track_ended().expect("loop-all never ends");
            visited.push(next.id);
            s.request_play(next).unwrap();
            s.playback_started();
        }
        assert_eq!(visited, vec![3, 1, 2]);
    }

    #[test]
    fn manual_previous_wraps_from_the_first_track() {
        let mut s = session();
        s.load_queue(vec![song(1), song(2), song(3)], 0);
        let previous = s.previous().expect("previous always wraps");
        assert_eq!(previous.id, 3);
    }

    #[test]
    fn manual_next_stops_quietly_at_the_end_with_loop_off() {
        let mut s = session();
        s.load_queue(vec![song(1), song(2)], 1);
        s.request_play(song(2)).unwrap();
        assert_eq!(s.next(), None);
        assert_eq!(s.queue_cursor(), Some(1));
        assert!(s.is_playing());
    }

    #[test]
    fn controls_are_locked_while_an_ad_plays() {
        let mut s = session();
        s.load_queue(vec![song(1), song(2)], 0);
        for id in 1..=3 {
            play_and_start(&mut s, song(id));
        }
        s.request_play(song(2)).unwrap();
        assert!(s.is_ad_playing());

        let mode = s.loop_mode();
        let shuffled = s.is_shuffled();
        assert_eq!(s.next(), None);
        assert_eq!(s.previous(), None);
        s.cycle_loop();
        s.toggle_shuffle();
        assert_eq!(s.loop_mode(), mode);
        assert_eq!(s.is_shuffled(), shuffled);
    }

    #[test]
    fn failed_ad_audio_recovers_the_parked_track() {
        let mut s = session();
        for id in 1..=3 {
            play_and_start(&mut s, song(id));
        }
        s.request_play(song(4)).unwrap();
        assert!(s.is_ad_playing());

        let recovered = s.playback_failed().expect("parked track comes back");
        assert_eq!(recovered.id, 4);
        assert!(!s.is_ad_playing());
        assert_eq!(s.ads.state(), AdState::Idle);
    }

    #[test]
    fn failed_song_start_leaves_the_queue_alone() {
        let mut s = session();
        s.load_queue(vec![song(1), song(2)], 1);
        s.request_play(song(2)).unwrap();
        assert_eq!(s.playback_failed(), None);
        assert_eq!(s.queue_cursor(), Some(1));
        assert!(!s.is_playing());
    }

    #[test]
    fn skip_for_upgrade_abandons_the_interrupted_song() {
        let mut s = session();
        for id in 1..=3 {
            play_and_start(&mut s, song(id));
        }
        s.request_play(song(4)).unwrap();
        s.skip_ad_for_upgrade();

        assert!(!s.is_ad_playing());
        assert!(!s.is_playing());
        // nothing pending: an ended event from a stale ad load resolves to
        // nothing rather than resuming the abandoned track
        assert_eq!(s.on_track_ended(), None);
    }

    #[test]
    fn toggling_shuffle_keeps_the_current_track() {
        let mut s = session();
        s.load_queue(vec![song(1), song(2), song(3), song(4), song(5)], 2);
        s.toggle_shuffle();
        assert!(s.is_shuffled());
        assert_eq!(s.now_playing().map(|t| t.id), Some(3));
        s.toggle_shuffle();
        assert!(!s.is_shuffled());
        assert_eq!(s.now_playing().map(|t| t.id), Some(3));
        let ids: Vec<u64> = s.queue_tracks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn foreign_track_becomes_its_own_queue() {
        let mut s = session();
        s.load_queue(vec![song(1), song(2)], 0);
        s.request_play(song(99)).unwrap();
        assert_eq!(s.queue_tracks().len(), 1);
        assert_eq!(s.now_playing().map(|t| t.id), Some(99));
    }

    #[test]
    fn play_from_scanned_source_seeds_an_implicit_queue() {
        let mut s = session();
        let clicked = song(2);
        let outcome = s
            .play_from_source(
                QueueSource::Scanned {
                    selector: "#view-home".to_string(),
                    clicked,
                },
                |_| vec![song(1), song(2), song(3), song(2)],
            )
            .unwrap();
        assert!(matches!(outcome, PlayOutcome::Song(t) if t.id == 2));
        assert_eq!(s.queue_tracks().len(), 3);
        assert_eq!(s.queue_cursor(), Some(1));
    }

    #[test]
    fn rejected_source_play_leaves_the_previous_queue_loaded() {
        let mut s = session();
        s.load_queue(vec![song(1), song(2)], 0);
        let result = s.play_from_source(
            QueueSource::Explicit {
                tracks: vec![premium_song(7), song(8)],
                start_index: 0,
            },
            |_| Vec::new(),
        );
        assert_eq!(result, Err(PlayError::PremiumRequired));
        let ids: Vec<u64> = s.queue_tracks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
