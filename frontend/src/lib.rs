use leptos::*;
use leptos_meta::*;
use leptos_router::*;

mod api;
pub mod config;
mod pages;
#[cfg(test)]
mod test_support;

use pages::reminder::ReminderPage;

/// Installs logging and the panic hook, resolves the runtime config, then
/// mounts the app.
pub fn run() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Starting Remainder.io frontend (wasm)");

    spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
        mount_to_body(App);
    });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Remainder.io" />
        <Router>
            <Routes>
                <Route path="/" view=ReminderPage />
            </Routes>
        </Router>
    }
}
