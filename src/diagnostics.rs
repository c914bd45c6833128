/// Lightweight playback diagnostics: browser console on web, stderr on
/// native builds.
pub fn log_player(scope: &str, details: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&format!("[player] {scope} | {details}").into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("[player] {scope} | {details}");
}
