//! Audio Manager - Handles audio playback outside of the component render cycle
//! This prevents audio from restarting when unrelated state changes.
//!
//! The one media element on the page is created and mutated here and nowhere
//! else. Everything flows through the `PlayerSession` state machine: UI
//! clicks call the `play_*` entry points, media element events feed back in
//! through the listeners installed by `AudioController`.

use dioxus::prelude::*;

use crate::api::{SoundHavenClient, Track};
use crate::components::app_view::AppView;
use crate::player::{PlayError, PlayOutcome, PlayerSession, QueueSource, SideEffect};

#[cfg(target_arch = "wasm32")]
use crate::components::VolumeSignal;
#[cfg(target_arch = "wasm32")]
use crate::diagnostics::log_player;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

/// Global audio state that persists across renders.
#[derive(Clone)]
pub struct AudioState {
    pub current_time: Signal<f64>,
    pub duration: Signal<f64>,
    pub playback_error: Signal<Option<String>>,
    #[allow(dead_code)]
    pub is_initialized: Signal<bool>,
}

impl Default for AudioState {
    fn default() -> Self {
        Self {
            current_time: Signal::new(0.0),
            duration: Signal::new(0.0),
            playback_error: Signal::new(None),
            is_initialized: Signal::new(false),
        }
    }
}

/// Initialize the global audio element once.
#[cfg(target_arch = "wasm32")]
pub fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id("soundhaven-audio") {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id("soundhaven-audio");
    // Keep preload light so we stream instead of buffering entire files
    audio.set_attribute("preload", "metadata").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(dead_code)]
pub fn get_or_create_audio_element() -> Option<()> {
    None
}

// --- playback entry points (UI-facing) --------------------------------------

/// Route a single track straight through the session. Used for queue jumps
/// and for resuming a parked track after an ad.
pub fn play_track(
    mut session: Signal<PlayerSession>,
    audio_state: Signal<AudioState>,
    current_view: Signal<AppView>,
    track: Track,
) {
    let result = session.write().request_play(track);
    handle_play_result(result, audio_state, current_view);
}

/// "Play this queue from index N" - albums, playlists, favorites, genres.
pub fn play_queue(
    mut session: Signal<PlayerSession>,
    audio_state: Signal<AudioState>,
    current_view: Signal<AppView>,
    tracks: Vec<Track>,
    start_index: usize,
) {
    if tracks.is_empty() {
        return;
    }
    let result = session.write().play_from_source(
        QueueSource::Explicit {
            tracks,
            start_index,
        },
        scan_view_tracks,
    );
    handle_play_result(result, audio_state, current_view);
}

/// A lone card was clicked outside any play-all context: the visible section
/// is scanned for track cards to build the implicit queue.
pub fn play_card(
    mut session: Signal<PlayerSession>,
    audio_state: Signal<AudioState>,
    current_view: Signal<AppView>,
    track: Track,
    section_id: &str,
) {
    let result = session.write().play_from_source(
        QueueSource::Scanned {
            selector: format!("#{section_id}"),
            clicked: track,
        },
        scan_view_tracks,
    );
    handle_play_result(result, audio_state, current_view);
}

fn handle_play_result(
    result: Result<PlayOutcome, PlayError>,
    audio_state: Signal<AudioState>,
    mut current_view: Signal<AppView>,
) {
    match result {
        // the epoch bump is picked up by AudioController
        Ok(_) => {}
        Err(PlayError::PremiumRequired) => current_view.set(AppView::Premium),
        Err(err @ PlayError::NoAudioSource) => {
            show_playback_error(audio_state, err.to_string());
        }
    }
}

/// Surface a toast above the player bar, clearing itself after a few seconds
/// unless a newer message replaced it.
fn show_playback_error(audio_state: Signal<AudioState>, message: String) {
    let mut error_signal = audio_state.peek().playback_error;
    error_signal.set(Some(message.clone()));
    #[cfg(target_arch = "wasm32")]
    spawn(async move {
        gloo_timers::future::TimeoutFuture::new(6_000).await;
        if error_signal.peek().as_deref() == Some(message.as_str()) {
            error_signal.set(None);
        }
    });
}

/// Fire-and-forget collaborator calls. Failures are dropped: no retry, no
/// user surfacing, no influence on playback.
fn dispatch_side_effects(effects: Vec<SideEffect>) {
    for effect in effects {
        spawn(async move {
            let client = SoundHavenClient::new();
            match effect {
                SideEffect::RecordPlay(id) => {
                    let _ = client.record_play(id).await;
                }
                SideEffect::RecordPremiumPlay(id) => {
                    let _ = client.record_premium_play(id).await;
                }
            }
        });
    }
}

// --- DOM scan (implicit queue source) ---------------------------------------

/// Walk a view section for track cards in document order. De-dup and start
/// positioning happen in `QueueSource::resolve`.
#[cfg(target_arch = "wasm32")]
pub(crate) fn scan_view_tracks(selector: &str) -> Vec<Track> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(&format!("{selector} [data-track-id]")) else {
        return Vec::new();
    };

    let mut tracks = Vec::new();
    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<web_sys::Element>() else {
            continue;
        };
        if let Some(track) = track_from_element(&element) {
            tracks.push(track);
        }
    }
    tracks
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn scan_view_tracks(_selector: &str) -> Vec<Track> {
    Vec::new()
}

#[cfg(target_arch = "wasm32")]
fn track_from_element(element: &web_sys::Element) -> Option<Track> {
    let id = element.get_attribute("data-track-id")?.trim().parse().ok()?;
    let flag = |name: &str| {
        element
            .get_attribute(name)
            .map(|value| value == "true")
            .unwrap_or(false)
    };
    Some(Track {
        id,
        title: element.get_attribute("data-title").unwrap_or_default(),
        artist: element.get_attribute("data-artist").unwrap_or_default(),
        cover_url: element.get_attribute("data-cover"),
        audio_url: element.get_attribute("data-src"),
        favorite: flag("data-favorite"),
        premium: flag("data-premium"),
        duration: element
            .get_attribute("data-duration")
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(0),
    })
}

// --- media element plumbing --------------------------------------------------

#[cfg(target_arch = "wasm32")]
fn js_error_name(err: &JsValue) -> Option<String> {
    js_sys::Reflect::get(err, &"name".into())
        .ok()
        .and_then(|value| value.as_string())
}

/// Map the element's MediaError to a user-facing message. Code 1 (aborted)
/// is the expected new-load-cancelled-old-load case and is never surfaced.
#[cfg(target_arch = "wasm32")]
fn web_media_error(audio: &HtmlAudioElement) -> Option<(u16, String)> {
    let audio_js = JsValue::from(audio.clone());
    let error_js = js_sys::Reflect::get(&audio_js, &"error".into()).ok()?;
    if error_js.is_null() || error_js.is_undefined() {
        return None;
    }
    let code = js_sys::Reflect::get(&error_js, &"code".into())
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0) as u16;

    let message = match code {
        1 => "Playback was aborted before the stream loaded.".to_string(),
        2 => "Network error while loading this track.".to_string(),
        3 => "Audio playback failed due to a decode error.".to_string(),
        4 => "Failed to load audio because no supported source was found.".to_string(),
        _ => "Unable to load this audio source.".to_string(),
    };
    Some((code, message))
}

/// A media start failure (distinct from an aborted load). Pushes the session
/// through its recovery path; a failed ad hands back the parked song, which
/// is immediately re-requested so the listener is not stranded in silence.
#[cfg(target_arch = "wasm32")]
fn handle_media_failure(
    mut session: Signal<PlayerSession>,
    audio_state: Signal<AudioState>,
    current_view: Signal<AppView>,
    message: String,
) {
    log_player("media-failure", &message);
    let was_ad = session.peek().is_ad_playing();
    let recovered = session.write().playback_failed();
    if !was_ad {
        show_playback_error(audio_state, message);
    }
    if let Some(track) = recovered {
        play_track(session, audio_state, current_view, track);
    }
}

/// Kick the element and settle the session once the play promise resolves.
/// Success clears any stale error toast and releases the owed recording
/// calls; the started-epoch guard in the session keeps a pause/resume from
/// recording twice.
#[cfg(target_arch = "wasm32")]
fn web_start_playback(
    audio: &HtmlAudioElement,
    mut session: Signal<PlayerSession>,
    audio_state: Signal<AudioState>,
    current_view: Signal<AppView>,
) {
    let Ok(promise) = audio.play() else {
        handle_media_failure(
            session,
            audio_state,
            current_view,
            "Unable to start playback.".to_string(),
        );
        return;
    };
    let audio = audio.clone();
    spawn(async move {
        match wasm_bindgen_futures::JsFuture::from(promise).await {
            Ok(_) => {
                let mut error_signal = audio_state.peek().playback_error;
                error_signal.set(None);
                let effects = session.write().playback_started();
                dispatch_side_effects(effects);
            }
            Err(err) => {
                if js_error_name(&err).as_deref() == Some("AbortError") {
                    // a newer load cancelled this one; expected, stay quiet
                    return;
                }
                let message = web_media_error(&audio)
                    .map(|(_, message)| message)
                    .unwrap_or_else(|| "Unable to start playback.".to_string());
                handle_media_failure(session, audio_state, current_view, message);
            }
        }
    });
}

/// Audio controller hook - manages playback imperatively.
#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn AudioController() -> Element {
    rsx! {}
}

/// Audio controller hook - manages playback imperatively.
#[cfg(target_arch = "wasm32")]
#[component]
pub fn AudioController() -> Element {
    let mut session = use_context::<Signal<PlayerSession>>();
    let audio_state = use_context::<Signal<AudioState>>();
    let current_view = use_context::<Signal<AppView>>();
    let volume = use_context::<VolumeSignal>().0;

    let mut last_epoch = use_signal(|| 0u64);
    let mut last_src = use_signal(|| None::<String>);

    // Initialize audio element and set up event listeners
    use_effect(move || {
        let Some(audio) = get_or_create_audio_element() else {
            return;
        };

        // Throttle time updates to ~5fps to avoid excessive re-renders
        let mut current_time_signal = audio_state().current_time;
        let mut last_emit = 0.0f64;
        let time_closure = Closure::wrap(Box::new(move || {
            if let Some(audio) = get_or_create_audio_element() {
                let time = audio.current_time();
                if (time - last_emit).abs() >= 0.2 {
                    last_emit = time;
                    current_time_signal.set(time);
                }
            }
        }) as Box<dyn FnMut()>);
        audio.set_ontimeupdate(Some(time_closure.as_ref().unchecked_ref()));
        time_closure.forget();

        let mut duration_signal = audio_state().duration;
        let dur_closure = Closure::wrap(Box::new(move || {
            if let Some(audio) = get_or_create_audio_element() {
                let dur = audio.duration();
                if !dur.is_nan() {
                    duration_signal.set(dur);
                }
            }
        }) as Box<dyn FnMut()>);
        audio.set_onloadedmetadata(Some(dur_closure.as_ref().unchecked_ref()));
        dur_closure.forget();

        // Natural end: the session resolves what comes next (ad resume,
        // loop-one replay, queue advance, or stop)
        let end_closure = Closure::wrap(Box::new(move || {
            let next = session.write().on_track_ended();
            if let Some(track) = next {
                play_track(session, audio_state, current_view, track);
            }
        }) as Box<dyn FnMut()>);
        audio.set_onended(Some(end_closure.as_ref().unchecked_ref()));
        end_closure.forget();

        // Element-level errors (network/decode); aborted loads are expected
        let err_closure = Closure::wrap(Box::new(move || {
            if let Some(audio) = get_or_create_audio_element() {
                if let Some((code, message)) = web_media_error(&audio) {
                    if code == 1 {
                        return;
                    }
                    handle_media_failure(session, audio_state, current_view, message);
                }
            }
        }) as Box<dyn FnMut()>);
        audio.set_onerror(Some(err_closure.as_ref().unchecked_ref()));
        err_closure.forget();

        audio_state().is_initialized.set(true);
    });

    // Epoch changes mean "something new was accepted for playback" - a new
    // source, or the same source again (loop-one replay, which must restart
    // from zero rather than reload)
    use_effect(move || {
        let (epoch, playing, track, position) = {
            let s = session.read();
            (
                s.epoch(),
                s.is_playing(),
                s.now_playing().cloned(),
                s.queue_cursor(),
            )
        };
        if epoch == *last_epoch.peek() {
            return;
        }
        last_epoch.set(epoch);

        let Some(track) = track else {
            return;
        };
        let Some(src) = track.playable_source().map(str::to_string) else {
            return;
        };
        let Some(audio) = get_or_create_audio_element() else {
            return;
        };

        if last_src.peek().as_deref() != Some(src.as_str()) {
            last_src.set(Some(src.clone()));
            audio.set_src(&src);
        } else {
            audio.set_current_time(0.0);
        }
        audio.set_volume(volume.peek().clamp(0.0, 1.0));
        log_player(
            "load",
            &format!("epoch={epoch} queue_pos={position:?} title={:?}", track.title),
        );
        if playing {
            web_start_playback(&audio, session, audio_state, current_view);
        }
    });

    // Handle play/pause state changes
    use_effect(move || {
        let playing = session.read().is_playing();
        if let Some(audio) = get_or_create_audio_element() {
            if playing {
                if audio.paused() {
                    web_start_playback(&audio, session, audio_state, current_view);
                }
            } else if !audio.paused() {
                let _ = audio.pause();
            }
        }
    });

    // Handle volume changes
    use_effect(move || {
        let vol = volume().clamp(0.0, 1.0);
        if let Some(audio) = get_or_create_audio_element() {
            audio.set_volume(vol);
        }
    });

    // Return empty element - this component just manages state
    rsx! {}
}

/// Seek to a specific position in the current track.
#[cfg(target_arch = "wasm32")]
pub fn seek_to(position: f64) {
    if let Some(audio) = get_or_create_audio_element() {
        audio.set_current_time(position);
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(dead_code)]
pub fn seek_to(_position: f64) {}
