use crate::components::{AppView, Icon};
use crate::player::PlayerSession;
use dioxus::prelude::*;

#[component]
pub fn Sidebar() -> Element {
    let mut current_view = use_context::<Signal<AppView>>();
    let session = use_context::<Signal<PlayerSession>>();
    let is_premium = session.read().is_premium_session();

    let nav_items = [
        ("home", "Home", AppView::Home),
        ("heart", "Favorites", AppView::Favorites),
        ("queue", "Queue", AppView::Queue),
    ];

    let active = current_view();

    rsx! {
        aside { class: "hidden md:flex w-60 flex-col border-r border-zinc-800/60 bg-zinc-950/80 backdrop-blur-xl",
            div { class: "flex items-center gap-2 px-6 py-6",
                Icon { name: "music".to_string(), class: "w-6 h-6 text-emerald-400".to_string() }
                span { class: "text-lg font-bold text-white tracking-tight", "SoundHaven" }
            }

            nav { class: "flex-1 px-3 space-y-1",
                for (icon , label , view) in nav_items {
                    button {
                        class: if active == view { "w-full flex items-center gap-3 px-3 py-2.5 rounded-xl bg-zinc-800/80 text-white transition-colors" } else { "w-full flex items-center gap-3 px-3 py-2.5 rounded-xl text-zinc-400 hover:text-white hover:bg-zinc-800/40 transition-colors" },
                        onclick: {
                            let view = view.clone();
                            move |_| current_view.set(view.clone())
                        },
                        Icon { name: icon.to_string(), class: "w-5 h-5".to_string() }
                        span { class: "text-sm font-medium", "{label}" }
                    }
                }
            }

            if !is_premium {
                div { class: "px-3 pb-28",
                    button {
                        class: "w-full flex items-center gap-3 px-3 py-2.5 rounded-xl border border-amber-500/30 text-amber-400 hover:text-amber-300 hover:border-amber-400/50 transition-colors",
                        onclick: move |_| current_view.set(AppView::Premium),
                        Icon { name: "crown".to_string(), class: "w-5 h-5".to_string() }
                        span { class: "text-sm font-medium", "Go Premium" }
                    }
                }
            }
        }
    }
}
