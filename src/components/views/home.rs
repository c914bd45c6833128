use crate::api::*;
use crate::components::views::TrackCard;
use crate::components::{AppView, Icon};
use crate::utils::slugify;
use dioxus::prelude::*;

#[component]
pub fn HomeView() -> Element {
    let mut current_view = use_context::<Signal<AppView>>();

    let featured = use_resource(|| async move {
        SoundHavenClient::new().get_featured_tracks().await.ok()
    });
    let albums = use_resource(|| async move { SoundHavenClient::new().get_albums().await.ok() });
    let playlists =
        use_resource(|| async move { SoundHavenClient::new().get_playlists().await.ok() });
    let genres = use_resource(|| async move { SoundHavenClient::new().get_genres().await.ok() });

    let featured_section_id = slugify("Featured Tracks");

    rsx! {
        div { class: "space-y-10",
            header { class: "page-header",
                h1 { class: "page-title", "Listen Now" }
                p { class: "page-subtitle", "Fresh picks, your playlists, and more" }
            }

            // Featured tracks: standalone cards, so playback seeds its queue
            // by scanning this section
            section {
                h2 { class: "text-lg font-semibold text-white mb-4", "Featured Tracks" }
                div {
                    id: "{featured_section_id}",
                    class: "flex gap-4 overflow-x-auto pb-2",
                    {
                        match featured() {
                            Some(Some(tracks)) if !tracks.is_empty() => rsx! {
                                for track in tracks {
                                    TrackCard { track: track.clone(), section_id: featured_section_id.clone() }
                                }
                            },
                            Some(_) => rsx! {
                                p { class: "text-sm text-zinc-500", "Nothing featured right now." }
                            },
                            None => rsx! {
                                p { class: "text-sm text-zinc-500", "Loading..." }
                            },
                        }
                    }
                }
            }

            section {
                h2 { class: "text-lg font-semibold text-white mb-4", "Albums" }
                div { class: "grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-5 gap-4",
                    {
                        match albums() {
                            Some(Some(albums)) => rsx! {
                                for album in albums {
                                    button {
                                        class: "group text-left",
                                        onclick: {
                                            let album_id = album.id;
                                            move |_| current_view.set(AppView::AlbumDetail(album_id))
                                        },
                                        div { class: "w-full aspect-square rounded-xl bg-zinc-800 overflow-hidden shadow-lg mb-3",
                                            {
                                                match &album.cover_url {
                                                    Some(url) => rsx! {
                                                        img { src: "{url}", alt: "{album.title}", class: "w-full h-full object-cover", loading: "lazy" }
                                                    },
                                                    None => rsx! {
                                                        div { class: "w-full h-full flex items-center justify-center",
                                                            Icon { name: "album".to_string(), class: "w-10 h-10 text-zinc-600".to_string() }
                                                        }
                                                    },
                                                }
                                            }
                                        }
                                        p { class: "text-sm font-medium text-white truncate group-hover:text-emerald-400 transition-colors",
                                            "{album.title}"
                                        }
                                        p { class: "text-xs text-zinc-400 truncate", "{album.artist}" }
                                    }
                                }
                            },
                            _ => rsx! {
                                p { class: "text-sm text-zinc-500", "Loading..." }
                            },
                        }
                    }
                }
            }

            section {
                h2 { class: "text-lg font-semibold text-white mb-4", "Playlists" }
                div { class: "grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-5 gap-4",
                    {
                        match playlists() {
                            Some(Some(playlists)) => rsx! {
                                for playlist in playlists {
                                    button {
                                        class: "group text-left",
                                        onclick: {
                                            let playlist_id = playlist.id;
                                            move |_| current_view.set(AppView::PlaylistDetail(playlist_id))
                                        },
                                        div { class: "w-full aspect-square rounded-xl bg-zinc-800 overflow-hidden shadow-lg mb-3",
                                            {
                                                match &playlist.cover_url {
                                                    Some(url) => rsx! {
                                                        img { src: "{url}", alt: "{playlist.name}", class: "w-full h-full object-cover", loading: "lazy" }
                                                    },
                                                    None => rsx! {
                                                        div { class: "w-full h-full flex items-center justify-center",
                                                            Icon { name: "playlist".to_string(), class: "w-10 h-10 text-zinc-600".to_string() }
                                                        }
                                                    },
                                                }
                                            }
                                        }
                                        p { class: "text-sm font-medium text-white truncate group-hover:text-emerald-400 transition-colors",
                                            "{playlist.name}"
                                        }
                                        p { class: "text-xs text-zinc-400 truncate", "{playlist.song_count} songs" }
                                    }
                                }
                            },
                            _ => rsx! {
                                p { class: "text-sm text-zinc-500", "Loading..." }
                            },
                        }
                    }
                }
            }

            section { class: "pb-32",
                h2 { class: "text-lg font-semibold text-white mb-4", "Browse by Genre" }
                div { class: "flex flex-wrap gap-2",
                    {
                        match genres() {
                            Some(Some(genres)) => rsx! {
                                for genre in genres {
                                    button {
                                        class: "px-4 py-2 rounded-full bg-zinc-800/70 hover:bg-zinc-700 text-sm text-zinc-300 hover:text-white transition-colors",
                                        onclick: {
                                            let name = genre.name.clone();
                                            move |_| current_view.set(AppView::GenreDetail(name.clone()))
                                        },
                                        "{genre.name}"
                                    }
                                }
                            },
                            _ => rsx! {
                                p { class: "text-sm text-zinc-500", "Loading..." }
                            },
                        }
                    }
                }
            }
        }
    }
}
