use crate::components::{play_track, AppView, AudioState, Icon};
use crate::player::{LoopMode, PlayerSession};
use dioxus::prelude::*;

/// Play/Pause button - completely isolated component
#[component]
pub(super) fn PlayPauseButton() -> Element {
    let mut session = use_context::<Signal<PlayerSession>>();
    let playing = session.read().is_playing();

    rsx! {
        button {
            id: "play-pause-btn",
            r#type: "button",
            class: "w-10 h-10 rounded-full bg-white flex items-center justify-center hover:scale-105 transition-transform shadow-lg",
            onclick: move |_| {
                let current = session.peek().is_playing();
                session.write().set_playing(!current);
            },
            if playing {
                Icon {
                    name: "pause".to_string(),
                    class: "w-5 h-5 text-black".to_string(),
                }
            } else {
                Icon {
                    name: "play".to_string(),
                    class: "w-5 h-5 text-black ml-0.5".to_string(),
                }
            }
        }
    }
}

/// Previous button - completely isolated component
#[component]
pub(super) fn PrevButton() -> Element {
    let mut session = use_context::<Signal<PlayerSession>>();
    let audio_state = use_context::<Signal<AudioState>>();
    let current_view = use_context::<Signal<AppView>>();
    let locked = session.read().is_ad_playing();

    rsx! {
        button {
            id: "prev-btn",
            r#type: "button",
            disabled: locked,
            class: if locked { "p-1.5 sm:p-2 text-zinc-600 cursor-not-allowed" } else { "p-1.5 sm:p-2 text-zinc-300 hover:text-white transition-colors" },
            onclick: move |_| {
                let previous = session.write().previous();
                if let Some(track) = previous {
                    play_track(session, audio_state, current_view, track);
                }
            },
            Icon { name: "prev".to_string(), class: "w-4 h-4 sm:w-5 sm:h-5".to_string() }
        }
    }
}

/// Next button - completely isolated component
#[component]
pub(super) fn NextButton() -> Element {
    let mut session = use_context::<Signal<PlayerSession>>();
    let audio_state = use_context::<Signal<AudioState>>();
    let current_view = use_context::<Signal<AppView>>();
    let locked = session.read().is_ad_playing();

    rsx! {
        button {
            id: "next-btn",
            r#type: "button",
            disabled: locked,
            class: if locked { "p-1.5 sm:p-2 text-zinc-600 cursor-not-allowed" } else { "p-1.5 sm:p-2 text-zinc-300 hover:text-white transition-colors" },
            onclick: move |_| {
                let next = session.write().next();
                if let Some(track) = next {
                    play_track(session, audio_state, current_view, track);
                }
            },
            Icon { name: "next".to_string(), class: "w-4 h-4 sm:w-5 sm:h-5".to_string() }
        }
    }
}

/// Shuffle button - toggle shuffle mode
#[component]
pub(super) fn ShuffleButton() -> Element {
    let mut session = use_context::<Signal<PlayerSession>>();
    let (enabled, locked) = {
        let s = session.read();
        (s.is_shuffled(), s.is_ad_playing())
    };

    rsx! {
        button {
            id: "shuffle-btn",
            r#type: "button",
            disabled: locked,
            class: if locked { "p-1.5 sm:p-2 text-zinc-600 cursor-not-allowed" } else if enabled { "p-1.5 sm:p-2 text-emerald-400 hover:text-emerald-300 transition-colors" } else { "p-1.5 sm:p-2 text-zinc-400 hover:text-white transition-colors" },
            onclick: move |_| {
                session.write().toggle_shuffle();
            },
            Icon { name: "shuffle".to_string(), class: "w-4 h-4 sm:w-5 sm:h-5".to_string() }
        }
    }
}

/// Repeat button - cycles off -> all -> one
#[component]
pub(super) fn RepeatButton() -> Element {
    let mut session = use_context::<Signal<PlayerSession>>();
    let (mode, locked) = {
        let s = session.read();
        (s.loop_mode(), s.is_ad_playing())
    };

    rsx! {
        button {
            id: "repeat-btn",
            r#type: "button",
            disabled: locked,
            class: if locked { "p-1.5 sm:p-2 text-zinc-600 cursor-not-allowed" } else {
                match mode {
                    LoopMode::Off => "p-1.5 sm:p-2 text-zinc-400 hover:text-white transition-colors",
                    LoopMode::All | LoopMode::One => {
                        "p-1.5 sm:p-2 text-emerald-400 hover:text-emerald-300 transition-colors"
                    }
                }
            },
            onclick: move |_| {
                session.write().cycle_loop();
            },
            Icon {
                name: match mode {
                    LoopMode::One => "repeat-1".to_string(),
                    _ => "repeat".to_string(),
                },
                class: "w-4 h-4 sm:w-5 sm:h-5".to_string(),
            }
        }
    }
}
