use crate::api::*;
use crate::components::{
    views, AdOverlay, AppView, AudioController, AudioState, Player, Sidebar, VolumeSignal,
    view_label,
};
use crate::db::{load_settings, save_settings, AppSettings};
use crate::diagnostics::log_player;
use crate::player::PlayerSession;
use dioxus::prelude::*;

fn normalize_volume(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.8;
    }
    value.clamp(0.0, 1.0)
}

#[component]
pub fn AppShell() -> Element {
    let mut session = use_signal(PlayerSession::new);
    let current_view = use_signal(|| AppView::Home);
    let mut volume = use_signal(|| 0.8f64);
    let audio_state = use_signal(AudioState::default);
    let mut app_settings = use_signal(AppSettings::default);
    let mut settings_loaded = use_signal(|| false);

    // Provide state via context
    use_context_provider(|| session);
    use_context_provider(|| current_view);
    use_context_provider(|| audio_state);
    use_context_provider(|| VolumeSignal(volume));

    // Restore preferences, then seed the premium status once per session
    use_effect(move || {
        spawn(async move {
            if let Ok(settings) = load_settings().await {
                volume.set(normalize_volume(settings.volume));
                session.write().restore_loop_mode(settings.loop_mode);
                if settings.shuffle_enabled {
                    session.write().toggle_shuffle();
                }
                app_settings.set(settings);
            }
            settings_loaded.set(true);

            let client = SoundHavenClient::new();
            match client.get_premium_status().await {
                Ok(status) => {
                    session
                        .write()
                        .set_premium_status(status.is_premium, status.no_ads);
                }
                Err(err) => log_player("premium-status", &err),
            }
        });
    });

    // Auto-save preferences when volume, shuffle, or loop mode changes
    use_effect(move || {
        let vol = normalize_volume(volume());
        let (shuffle, loop_mode) = {
            let s = session.read();
            (s.is_shuffled(), s.loop_mode())
        };

        if settings_loaded() {
            let mut settings = app_settings.peek().clone();
            let changed = (settings.volume - vol).abs() > 0.01
                || settings.shuffle_enabled != shuffle
                || settings.loop_mode != loop_mode;

            if changed {
                settings.volume = vol;
                settings.shuffle_enabled = shuffle;
                settings.loop_mode = loop_mode;
                app_settings.set(settings.clone());
                spawn(async move {
                    let _ = save_settings(settings).await;
                });
            }
        }
    });

    let view = current_view();
    let label = view_label(&view);

    rsx! {
        div { class: "app-container flex min-h-screen text-white overflow-hidden",
            Sidebar {}

            div { class: "flex-1 flex flex-col overflow-hidden",
                header { class: "md:hidden border-b border-zinc-800/60 bg-zinc-950/80 backdrop-blur-xl",
                    div { class: "flex items-center justify-between px-4 py-3",
                        div { class: "flex flex-col",
                            span { class: "text-xs uppercase tracking-widest text-zinc-500",
                                "SoundHaven"
                            }
                            span { class: "text-sm font-semibold text-white", "{label}" }
                        }
                    }
                }

                main { class: "flex-1 overflow-y-auto main-scroll",
                    div { class: "page-shell",
                        {
                            match view {
                                AppView::Home => rsx! {
                                    views::HomeView {}
                                },
                                AppView::Favorites => rsx! {
                                    views::FavoritesView {}
                                },
                                AppView::Queue => rsx! {
                                    views::QueueView {}
                                },
                                AppView::Premium => rsx! {
                                    views::PremiumView {}
                                },
                                AppView::AlbumDetail(album_id) => rsx! {
                                    views::AlbumDetailView { album_id }
                                },
                                AppView::PlaylistDetail(playlist_id) => rsx! {
                                    views::PlaylistDetailView { playlist_id }
                                },
                                AppView::GenreDetail(genre) => rsx! {
                                    views::GenreDetailView { genre }
                                },
                            }
                        }
                    }
                }
            }

            // Fixed bottom player
            Player {}
        }

        // Advertisement overlay sits above everything while an ad plays
        AdOverlay {}

        // Audio controller - manages playback separately from UI
        AudioController {}
    }
}
