use crate::components::{AppView, Icon};
use crate::player::PlayerSession;
use dioxus::prelude::*;

/// Upgrade surface. Premium-required rejections and the ad overlay's skip
/// action both land here; checkout itself is the site's business, this page
/// just links out to it.
#[component]
pub fn PremiumView() -> Element {
    let mut current_view = use_context::<Signal<AppView>>();
    let session = use_context::<Signal<PlayerSession>>();
    let is_premium = session.read().is_premium_session();

    let perks = [
        "No advertisement breaks",
        "Play premium-only releases",
        "Support the artists you listen to",
    ];

    rsx! {
        div { class: "max-w-2xl mx-auto space-y-8 pb-32",
            button {
                class: "flex items-center gap-2 text-zinc-400 hover:text-white transition-colors mb-4",
                onclick: move |_| current_view.set(AppView::Home),
                Icon { name: "arrow-left".to_string(), class: "w-4 h-4".to_string() }
                "Back"
            }

            div { class: "text-center",
                div { class: "inline-flex items-center justify-center w-16 h-16 rounded-2xl bg-amber-500/10 text-amber-400 mb-4",
                    Icon { name: "crown".to_string(), class: "w-8 h-8".to_string() }
                }
                h1 { class: "text-3xl font-bold text-white mb-2", "SoundHaven Premium" }
                p { class: "text-zinc-400",
                    if is_premium {
                        "You are already on Premium. Enjoy the quiet."
                    } else {
                        "Uninterrupted listening, premium releases, one subscription."
                    }
                }
            }

            div { class: "bg-zinc-800/30 rounded-2xl border border-zinc-700/30 p-8 space-y-4",
                for perk in perks {
                    div { class: "flex items-center gap-3",
                        span { class: "text-emerald-400",
                            Icon { name: "play".to_string(), class: "w-4 h-4".to_string() }
                        }
                        p { class: "text-zinc-300", "{perk}" }
                    }
                }
            }

            if !is_premium {
                div { class: "text-center",
                    a {
                        href: "/premium/subscribe",
                        class: "inline-flex items-center gap-2 px-10 py-4 rounded-full bg-amber-500 hover:bg-amber-400 text-zinc-950 font-semibold transition-colors",
                        Icon { name: "crown".to_string(), class: "w-5 h-5".to_string() }
                        "Upgrade now"
                    }
                }
            }
        }
    }
}
