use crate::api::*;
use crate::components::views::TrackRow;
use crate::components::{play_queue, AppView, AudioState, Icon};
use crate::player::PlayerSession;
use dioxus::prelude::*;

#[component]
pub fn FavoritesView() -> Element {
    let session = use_context::<Signal<PlayerSession>>();
    let audio_state = use_context::<Signal<AudioState>>();
    let current_view = use_context::<Signal<AppView>>();

    let favorites =
        use_resource(|| async move { SoundHavenClient::new().get_favorites().await.ok() });

    let on_play_all = {
        let favorites = favorites.clone();
        move |_| {
            if let Some(Some(songs)) = favorites() {
                if !songs.is_empty() {
                    play_queue(session, audio_state, current_view, songs, 0);
                }
            }
        }
    };

    rsx! {
        div { class: "space-y-8 pb-32",
            header { class: "page-header page-header--split",
                div {
                    h1 { class: "page-title", "Favorites" }
                    p { class: "page-subtitle", "Songs you have hearted" }
                }
                button {
                    class: "px-6 py-2.5 rounded-full bg-emerald-500 hover:bg-emerald-400 text-white font-medium transition-colors flex items-center gap-2",
                    onclick: on_play_all,
                    Icon { name: "play".to_string(), class: "w-4 h-4".to_string() }
                    "Play all"
                }
            }

            {
                match favorites() {
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
                        div { class: "flex flex-col items-center justify-center py-20",
                            Icon { name: "heart".to_string(), class: "w-16 h-16 text-zinc-600 mb-4".to_string() }
                            p { class: "text-zinc-400", "No favorites yet" }
                            p { class: "text-zinc-500 text-sm mt-2", "Heart a song to find it here" }
                        }
                    },
                    None => rsx! {
                        p { class: "text-zinc-500", "Loading..." }
                    },
                }
            }
        }
    }
}
