use crate::api::models::format_duration;
use crate::components::views::TrackRow;
use crate::components::{play_track, AppView, AudioState, Icon};
use crate::player::PlayerSession;
use dioxus::prelude::*;

#[component]
pub fn QueueView() -> Element {
    let mut session = use_context::<Signal<PlayerSession>>();
    let audio_state = use_context::<Signal<AudioState>>();
    let current_view = use_context::<Signal<AppView>>();

    let (tracks, is_shuffled, ad_playing) = {
        let s = session.read();
        (
            s.queue_tracks().to_vec(),
            s.is_shuffled(),
            s.is_ad_playing(),
        )
    };
    let total_secs: u32 = tracks.iter().map(|t| t.duration).sum();

    let on_clear = move |_| {
        session.write().clear_queue();
    };

    rsx! {
        div { class: "space-y-8 pb-32",
            header { class: "page-header page-header--split",
                div {
                    h1 { class: "page-title", "Play Queue" }
                    p { class: "page-subtitle",
                        "{tracks.len()} songs • {format_duration(total_secs)}"
                        if is_shuffled {
                            span { class: "ml-2 text-emerald-400", "(shuffled)" }
                        }
                    }
                }

                if !tracks.is_empty() {
                    button {
                        class: "px-4 py-2 rounded-xl bg-zinc-800 hover:bg-zinc-700 text-zinc-300 hover:text-white transition-colors flex items-center gap-2",
                        disabled: ad_playing,
                        onclick: on_clear,
                        Icon {
                            name: "trash".to_string(),
                            class: "w-4 h-4".to_string(),
                        }
                        "Clear Queue"
                    }
                }
            }

            if tracks.is_empty() {
                div { class: "flex flex-col items-center justify-center py-20",
                    Icon {
                        name: "queue".to_string(),
                        class: "w-16 h-16 text-zinc-600 mb-4".to_string(),
                    }
                    p { class: "text-zinc-400", "Your queue is empty" }
                    p { class: "text-zinc-500 text-sm mt-2",
                        "Play something from an album, playlist, or your favorites"
                    }
                }
            } else {
                div { class: "space-y-1",
                    for (index , track) in tracks.iter().enumerate() {
                        TrackRow {
                            track: track.clone(),
                            index: index + 1,
                            onclick: {
                                let track = track.clone();
                                move |_| {
                                    if !session.peek().is_ad_playing() {
                                        play_track(session, audio_state, current_view, track.clone());
                                    }
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}
