//! Browser demo mounting every `ui_kit` primitive under a notifications provider.

mod showcase_app;

pub use showcase_app::ShowcaseApp;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    if let Err(err) = ui_kit::install_console_logger(level) {
        leptos::logging::warn!("console logger not installed: {err}");
    }
    leptos::mount_to_body(|| leptos::view! { <ShowcaseApp /> })
}
