use crate::components::{AppView, AudioState, Icon};
use crate::player::{PlayerSession, AD_BREAK_SECONDS};
use dioxus::prelude::*;

/// Full-screen advertisement overlay. Shown while the ad scheduler holds the
/// session; playback controls underneath are locked for the duration. The
/// countdown runs off the element clock against the nominal break length;
/// the audio itself decides when the break actually ends.
#[component]
pub fn AdOverlay() -> Element {
    let mut session = use_context::<Signal<PlayerSession>>();
    let audio_state = use_context::<Signal<AudioState>>();
    let mut current_view = use_context::<Signal<AppView>>();

    let (is_ad, ad_track, up_next) = {
        let s = session.read();
        (
            s.is_ad_playing(),
            s.now_playing().cloned(),
            s.pending_after_ad().cloned(),
        )
    };

    if !is_ad {
        return rsx! {};
    }

    let current_time = (audio_state().current_time)();
    let remaining = (AD_BREAK_SECONDS as f64 - current_time).max(0.0).ceil() as u32;
    let progress = ((current_time / AD_BREAK_SECONDS as f64) * 100.0).clamp(0.0, 100.0);

    let on_upgrade = move |_| {
        // conversion action: the interrupted song is abandoned, not resumed
        session.write().skip_ad_for_upgrade();
        current_view.set(AppView::Premium);
    };

    rsx! {
        div { class: "fixed inset-0 z-[70] bg-zinc-950/95 backdrop-blur-xl flex items-center justify-center px-4",
            div { class: "w-full max-w-md flex flex-col items-center text-center gap-6",
                div { class: "w-40 h-40 rounded-2xl bg-zinc-800 overflow-hidden shadow-2xl flex items-center justify-center",
                    {
                        match ad_track.as_ref().and_then(|t| t.cover_url.clone()) {
                            Some(url) => rsx! {
                                img { src: "{url}", alt: "Advertisement", class: "w-full h-full object-cover" }
                            },
                            None => rsx! {
                                Icon { name: "megaphone".to_string(), class: "w-16 h-16 text-emerald-400".to_string() }
                            },
                        }
                    }
                }

                div {
                    p { class: "text-xs font-semibold text-emerald-400 uppercase tracking-widest mb-2",
                        "Advertisement"
                    }
                    h2 { class: "text-xl font-bold text-white",
                        {ad_track.as_ref().map(|t| t.title.clone()).unwrap_or_default()}
                    }
                    p { class: "text-sm text-zinc-400 mt-1", "Your music returns in {remaining}s" }
                }

                div { class: "w-full h-1.5 bg-zinc-800 rounded-full overflow-hidden",
                    div {
                        class: "h-full bg-emerald-500 transition-all",
                        style: "width: {progress}%",
                    }
                }

                if let Some(next) = up_next {
                    p { class: "text-xs text-zinc-500",
                        "Up next: "
                        span { class: "text-zinc-300", "{next.title}" }
                    }
                }

                button {
                    id: "ad-upgrade-btn",
                    r#type: "button",
                    class: "px-8 py-3 rounded-full bg-emerald-500 hover:bg-emerald-400 text-white font-medium transition-colors flex items-center gap-2",
                    onclick: on_upgrade,
                    Icon { name: "crown".to_string(), class: "w-5 h-5".to_string() }
                    "Remove ads with Premium"
                }
            }
        }
    }
}
