use crate::api::*;
use crate::components::views::TrackRow;
use crate::components::{play_queue, AppView, AudioState, Icon};
use crate::player::PlayerSession;
use dioxus::prelude::*;

#[component]
pub fn GenreDetailView(genre: String) -> Element {
    let session = use_context::<Signal<PlayerSession>>();
    let audio_state = use_context::<Signal<AudioState>>();
    let mut current_view = use_context::<Signal<AppView>>();

    let genre_for_fetch = genre.clone();
    let tracks = use_resource(move || {
        let genre = genre_for_fetch.clone();
        async move { SoundHavenClient::new().get_genre_tracks(&genre).await.ok() }
    });

    let on_play_all = {
        let tracks = tracks.clone();
        move |_| {
            if let Some(Some(songs)) = tracks() {
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

            header { class: "page-header page-header--split",
                div {
                    p { class: "text-sm text-zinc-400 uppercase tracking-wide mb-1", "Genre" }
                    h1 { class: "page-title", "{genre}" }
                }
                button {
                    class: "px-6 py-2.5 rounded-full bg-emerald-500 hover:bg-emerald-400 text-white font-medium transition-colors flex items-center gap-2",
                    onclick: on_play_all,
                    Icon { name: "play".to_string(), class: "w-4 h-4".to_string() }
                    "Play all"
                }
            }

            {
                match tracks() {
                    Some(Some(songs)) if !songs.is_empty() => rsx! {
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
                    Some(_) => rsx! {
                        p { class: "text-zinc-400", "Nothing in this genre yet." }
                    },
                    None => rsx! {
                        p { class: "text-zinc-500", "Loading..." }
                    },
                }
            }
        }
    }
}
