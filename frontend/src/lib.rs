pub mod api;
pub mod components;
pub mod config;
mod pages;
pub mod router;
pub mod routes;
pub mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("logger already initialised: {err}").into());
    }
    log::info!("Starting KidsLink frontend");

    // Config loads in the background; the API client awaits it on first request.
    leptos::spawn_local(async {
        config::init().await;
        log::debug!("runtime config initialised");
    });

    router::mount_app();
}
