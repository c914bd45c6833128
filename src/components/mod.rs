//! The components module contains all shared components for our app.

mod ad_overlay;
mod app;
mod app_view;
mod audio_manager;
mod icons;
mod player;
mod sidebar;
pub mod views;

pub use ad_overlay::*;
pub use app::*;
pub use app_view::*;
pub use audio_manager::*;
pub use icons::*;
pub use player::*;
pub use sidebar::*;

use dioxus::prelude::*;

/// Newtype so the volume slider's `Signal<f64>` is unambiguous in context.
#[derive(Clone, Copy)]
pub struct VolumeSignal(pub Signal<f64>);
