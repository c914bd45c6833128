use crate::api::*;
use crate::components::views::TrackRow;
use crate::components::{play_queue, AppView, AudioState, Icon};
use crate::player::PlayerSession;
use dioxus::prelude::*;

#[component]
pub fn PlaylistDetailView(playlist_id: u64) -> Element {
    let session = use_context::<Signal<PlayerSession>>();
    let audio_state = use_context::<Signal<AudioState>>();
    let mut current_view = use_context::<Signal<AppView>>();

    let playlist_data = use_resource(move || async move {
        SoundHavenClient::new().get_playlist(playlist_id).await.ok()
    });

    let on_play_all = {
        let playlist_data = playlist_data.clone();
        move |_| {
            if let Some(Some((_, songs))) = playlist_data() {
                if !songs.is_empty() {
                    play_queue(session, audio_state, current_view, songs, 0);
                }
            }
        }
    };

    rsx! {
        div { class: "space-y-8 pb-32",
            button {
                class: "flex items-center gap-2 text-zinc-400 hover:text-white transition-colors mb-4",
                onclick: move |_| current_view.set(AppView::Home),
                Icon { name: "arrow-left".to_string(), class: "w-4 h-4".to_string() }
                "Back"
            }

            {
                match playlist_data() {
                    Some(Some((playlist, songs))) => rsx! {
                        div { class: "flex flex-col md:flex-row gap-8 mb-8",
                            div { class: "w-64 h-64 rounded-2xl bg-zinc-800 overflow-hidden shadow-2xl flex-shrink-0",
                                {
                                    match &playlist.cover_url {
                                        Some(url) => rsx! {
                                            img { class: "w-full h-full object-cover", src: "{url}" }
                                        },
                                        None => rsx! {
                                            div { class: "w-full h-full flex items-center justify-center bg-gradient-to-br from-zinc-700 to-zinc-800",
                                                Icon {
                                                    name: "playlist".to_string(),
                                                    class: "w-20 h-20 text-zinc-500".to_string(),
                                                }
                                            }
                                        },
                                    }
                                }
                            }
                            div { class: "flex flex-col justify-end",
                                p { class: "text-sm text-zinc-400 uppercase tracking-wide mb-2", "Playlist" }
                                h1 { class: "text-4xl font-bold text-white mb-4", "{playlist.name}" }
                                if let Some(description) = playlist.description.clone() {
                                    p { class: "text-sm text-zinc-400 mb-2", "{description}" }
                                }
                                div { class: "flex items-center gap-4 text-sm text-zinc-400",
                                    if let Some(owner) = playlist.owner.clone() {
                                        span { "by {owner}" }
                                    }
                                    span { "{songs.len()} songs" }
                                }
                                div { class: "flex gap-3 mt-6",
                                    button {
                                        class: "px-8 py-3 rounded-full bg-emerald-500 hover:bg-emerald-400 text-white font-medium transition-colors flex items-center gap-2",
                                        onclick: on_play_all,
                                        Icon { name: "play".to_string(), class: "w-5 h-5".to_string() }
                                        "Play"
                                    }
                                }
                            }
                        }

                        div { class: "space-y-1",
                            for (index , song) in songs.iter().enumerate() {
                                TrackRow {
                                    track: song.clone(),
                                    index: index + 1,
                                    onclick: {
                                        let songs = songs.clone();
                                        move |_| {
                                            play_queue(
                                                session,
                                                audio_state,
                                                current_view,
                                                songs.clone(),
                                                index,
                                            );
                                        }
                                    },
                                }
                            }
                        }
                    },
                    Some(None) => rsx! {
                        p { class: "text-zinc-400", "Playlist not found." }
                    },
                    None => rsx! {
                        p { class: "text-zinc-500", "Loading..." }
                    },
                }
            }
        }
    }
}
