use crate::api::models::format_duration;
use crate::components::{
    seek_to, AppView, AudioState, Icon, VolumeSignal,
};
use crate::player::PlayerSession;
use dioxus::prelude::*;

mod controls;

use controls::{NextButton, PlayPauseButton, PrevButton, RepeatButton, ShuffleButton};

#[component]
pub fn Player() -> Element {
    let session = use_context::<Signal<PlayerSession>>();
    let mut volume = use_context::<VolumeSignal>().0;
    let mut current_view = use_context::<Signal<AppView>>();
    let audio_state = use_context::<Signal<AudioState>>();

    let (current_track, is_ad) = {
        let s = session.read();
        (s.now_playing().cloned(), s.is_ad_playing())
    };

    // Get time from audio state (Signal fields need to be read with ())
    let current_time = (audio_state().current_time)();
    let duration = (audio_state().duration)();
    let playback_error = (audio_state().playback_error)();

    let on_volume_change = move |e: Event<FormData>| {
        if let Ok(val) = e.value().parse::<f64>() {
            volume.set((val / 100.0).clamp(0.0, 1.0));
        }
    };

    // Seeking is locked while an advertisement plays
    let on_seek = {
        let mut audio_state = audio_state.clone();
        move |e: Event<FormData>| {
            if is_ad {
                return;
            }
            if let Ok(percent) = e.value().parse::<f64>() {
                let percent = percent.clamp(0.0, 100.0);
                if duration > 0.0 {
                    let new_time = (percent / 100.0) * duration;
                    audio_state.write().current_time.set(new_time);
                    seek_to(new_time);
                }
            }
        }
    };

    let on_open_queue = move |_| current_view.set(AppView::Queue);

    rsx! {
        if let Some(message) = playback_error.clone() {
            div { class: "fixed left-0 right-0 bottom-28 md:bottom-24 px-3 md:px-6 z-[60] pointer-events-none",
                div { class: "rounded-lg border border-rose-500/35 bg-rose-500/10 px-3 py-2 text-center text-xs text-rose-200 shadow-lg",
                    "{message}"
                }
            }
        }
        div { class: "player-shell fixed bottom-0 left-0 right-0 bg-zinc-950/90 backdrop-blur-xl border-t border-zinc-800/60 z-50 md:h-24",
            div { class: "h-full flex flex-col md:flex-row md:items-center md:justify-between px-4 md:px-6 gap-3 md:gap-8 py-2 md:py-0",
                // Now playing info
                div { class: "flex items-center gap-3 md:gap-4 min-w-0 w-full md:w-1/4",
                    {
                        match &current_track {
                            Some(track) => rsx! {
                                div { class: "w-14 h-14 md:w-16 md:h-16 rounded-lg bg-zinc-800 overflow-hidden shadow-lg flex-shrink-0",
                                    {
                                        match &track.cover_url {
                                            Some(url) => rsx! {
                                                img {
                                                    src: "{url}",
                                                    alt: "{track.title}",
                                                    class: "w-full h-full object-cover",
                                                    loading: "lazy",
                                                }
                                            },
                                            None => rsx! {
                                                div { class: "w-full h-full flex items-center justify-center bg-gradient-to-br from-emerald-600 to-teal-700",
                                                    Icon { name: "music".to_string(), class: "w-6 h-6 text-white/70".to_string() }
                                                }
                                            },
                                        }
                                    }
                                }
                                div { class: "min-w-0 flex-1 overflow-hidden",
                                    p { class: "text-sm font-medium text-white truncate max-w-full", "{track.title}" }
                                    p { class: "text-xs text-zinc-400 truncate max-w-full",
                                        {
                                            if is_ad {
                                                "Advertisement".to_string()
                                            } else {
                                                track.artist.clone()
                                            }
                                        }
                                    }
                                }
                                if track.premium && !is_ad {
                                    span { class: "flex-shrink-0 text-amber-400", title: "Premium track",
                                        Icon { name: "crown".to_string(), class: "w-4 h-4".to_string() }
                                    }
                                }
                            },
                            None => rsx! {
                                div { class: "w-14 h-14 rounded-lg bg-zinc-800/50 flex items-center justify-center",
                                    Icon { name: "music".to_string(), class: "w-6 h-6 text-zinc-600".to_string() }
                                }
                                div { class: "min-w-0 flex-1",
                                    p { class: "text-sm text-zinc-500", "No track playing" }
                                    p { class: "text-xs text-zinc-600", "Select a song to start" }
                                }
                            },
                        }
                    }
                }

                // Player controls
                div { class: "flex flex-col items-center gap-3 w-full md:flex-1 md:max-w-2xl",
                    div { class: "flex items-center gap-1.5 sm:gap-2 md:gap-4 justify-center w-full",
                        ShuffleButton {}
                        PrevButton {}
                        PlayPauseButton {}
                        NextButton {}
                        RepeatButton {}
                    }
                    // Progress bar
                    div { class: "flex items-center gap-2 md:gap-3 w-full",
                        span { class: "text-xs text-zinc-500 w-10 text-right",
                            {format_duration(current_time as u32)}
                        }
                        input {
                            r#type: "range",
                            min: "0",
                            max: "100",
                            disabled: is_ad,
                            value: if duration > 0.0 { (current_time / duration * 100.0).round() as i32 } else { 0 },
                            class: "flex-1 h-1.5 bg-zinc-800 rounded-full appearance-none cursor-pointer accent-emerald-500",
                            oninput: on_seek,
                        }
                        span { class: "text-xs text-zinc-500 w-10",
                            {
                                current_track
                                    .as_ref()
                                    .map(|t| format_duration(t.duration))
                                    .unwrap_or_else(|| "--:--".to_string())
                            }
                        }
                    }
                }

                // Volume and queue shortcut
                div { class: "flex items-center w-full md:w-1/4 justify-end",
                    div { class: "hidden md:flex items-center gap-3",
                        button {
                            class: "p-2 text-zinc-400 hover:text-white transition-colors",
                            onclick: on_open_queue,
                            Icon {
                                name: "queue".to_string(),
                                class: "w-5 h-5".to_string(),
                            }
                        }
                        Icon { name: "volume".to_string(), class: "w-4 h-4 text-zinc-500".to_string() }
                        input {
                            r#type: "range",
                            min: "0",
                            max: "100",
                            value: (volume() * 100.0).round() as i32,
                            class: "w-24 h-1.5 bg-zinc-800 rounded-full appearance-none cursor-pointer accent-zinc-400",
                            oninput: on_volume_change,
                        }
                    }
                }
            }
        }
    }
}
