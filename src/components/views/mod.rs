//! Page views. Each view fetches its own track arrays from the site API and
//! hands them to the player as explicit queues; lone cards go through the
//! scanned fallback instead. Every rendered track element carries the
//! `data-*` attributes the scanner reads.

mod album_detail;
mod favorites;
mod genre;
mod home;
mod playlist_detail;
mod premium;
mod queue;

pub use album_detail::AlbumDetailView;
pub use favorites::FavoritesView;
pub use genre::GenreDetailView;
pub use home::HomeView;
pub use playlist_detail::PlaylistDetailView;
pub use premium::PremiumView;
pub use queue::QueueView;

use crate::api::models::{format_duration, Track};
use crate::components::{play_card, AppView, AudioState, Icon};
use crate::player::PlayerSession;
use dioxus::prelude::*;

/// One track in a list. The parent decides what a click means (usually
/// "explicit queue starting here").
#[component]
pub fn TrackRow(track: Track, index: usize, onclick: EventHandler<MouseEvent>) -> Element {
    let session = use_context::<Signal<PlayerSession>>();
    let is_current = {
        let s = session.read();
        !s.is_ad_playing() && s.now_playing().map(|t| t.id) == Some(track.id)
    };

    rsx! {
        div {
            class: if is_current { "group flex items-center gap-4 px-4 py-2.5 rounded-xl bg-emerald-500/10 cursor-pointer" } else { "group flex items-center gap-4 px-4 py-2.5 rounded-xl hover:bg-zinc-800/50 cursor-pointer transition-colors" },
            "data-track-id": "{track.id}",
            "data-title": "{track.title}",
            "data-artist": "{track.artist}",
            "data-src": track.audio_url.clone().unwrap_or_default(),
            "data-cover": track.cover_url.clone().unwrap_or_default(),
            "data-premium": "{track.premium}",
            "data-favorite": "{track.favorite}",
            "data-duration": "{track.duration}",
            onclick: move |evt| onclick.call(evt),

            span { class: "w-6 text-right text-sm text-zinc-500",
                if is_current {
                    Icon { name: "volume".to_string(), class: "w-4 h-4 text-emerald-400".to_string() }
                } else {
                    "{index}"
                }
            }

            div { class: "w-10 h-10 rounded-lg bg-zinc-800 overflow-hidden flex-shrink-0",
                {
                    match &track.cover_url {
                        Some(url) => rsx! {
                            img { src: "{url}", alt: "{track.title}", class: "w-full h-full object-cover", loading: "lazy" }
                        },
                        None => rsx! {
                            div { class: "w-full h-full flex items-center justify-center",
                                Icon { name: "music".to_string(), class: "w-4 h-4 text-zinc-600".to_string() }
                            }
                        },
                    }
                }
            }

            div { class: "min-w-0 flex-1",
                p { class: if is_current { "text-sm font-medium text-emerald-400 truncate" } else { "text-sm font-medium text-white truncate" },
                    "{track.title}"
                }
                p { class: "text-xs text-zinc-400 truncate", "{track.artist}" }
            }

            if track.premium {
                span { class: "text-amber-400 flex-shrink-0", title: "Premium track",
                    Icon { name: "crown".to_string(), class: "w-4 h-4".to_string() }
                }
            }
            if track.favorite {
                span { class: "text-emerald-400 flex-shrink-0",
                    Icon { name: "heart-filled".to_string(), class: "w-4 h-4".to_string() }
                }
            }

            span { class: "text-xs text-zinc-500 w-10 text-right", {format_duration(track.duration)} }
        }
    }
}

/// A standalone card. Clicking it has no explicit queue to lean on, so the
/// play request goes through the scanned fallback: the enclosing section is
/// walked for sibling cards to build the implicit queue.
#[component]
pub fn TrackCard(track: Track, section_id: String) -> Element {
    let session = use_context::<Signal<PlayerSession>>();
    let audio_state = use_context::<Signal<AudioState>>();
    let current_view = use_context::<Signal<AppView>>();

    let on_play = {
        let track = track.clone();
        let section_id = section_id.clone();
        move |_| {
            play_card(session, audio_state, current_view, track.clone(), &section_id)
        }
    };

    rsx! {
        div {
            class: "group w-40 flex-shrink-0 cursor-pointer",
            "data-track-id": "{track.id}",
            "data-title": "{track.title}",
            "data-artist": "{track.artist}",
            "data-src": track.audio_url.clone().unwrap_or_default(),
            "data-cover": track.cover_url.clone().unwrap_or_default(),
            "data-premium": "{track.premium}",
            "data-favorite": "{track.favorite}",
            "data-duration": "{track.duration}",
            onclick: on_play,

            div { class: "relative w-40 h-40 rounded-xl bg-zinc-800 overflow-hidden shadow-lg mb-3",
                {
                    match &track.cover_url {
                        Some(url) => rsx! {
                            img { src: "{url}", alt: "{track.title}", class: "w-full h-full object-cover", loading: "lazy" }
                        },
                        None => rsx! {
                            div { class: "w-full h-full flex items-center justify-center bg-gradient-to-br from-zinc-700 to-zinc-800",
                                Icon { name: "music".to_string(), class: "w-10 h-10 text-zinc-500".to_string() }
                            }
                        },
                    }
                }
                div { class: "absolute inset-0 bg-black/40 opacity-0 group-hover:opacity-100 transition-opacity flex items-center justify-center",
                    div { class: "w-12 h-12 rounded-full bg-emerald-500 flex items-center justify-center shadow-xl",
                        Icon { name: "play".to_string(), class: "w-5 h-5 text-white ml-0.5".to_string() }
                    }
                }
                if track.premium {
                    span { class: "absolute top-2 right-2 text-amber-400 drop-shadow",
                        Icon { name: "crown".to_string(), class: "w-4 h-4".to_string() }
                    }
                }
            }

            p { class: "text-sm font-medium text-white truncate", "{track.title}" }
            p { class: "text-xs text-zinc-400 truncate", "{track.artist}" }
        }
    }
}
