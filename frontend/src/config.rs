use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

static API_BASE_URL: OnceLock<String> = OnceLock::new();

pub fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

fn read_global_key(global: &str, keys: &[&str]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(&obj, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

fn snapshot_from_globals() -> Option<String> {
    // window.__REMAINDER_ENV = { API_BASE_URL: "..." } (env.js) wins over
    // window.__REMAINDER_CONFIG = { api_base_url: "..." }
    read_global_key("__REMAINDER_ENV", &["API_BASE_URL", "api_base_url"])
        .or_else(|| read_global_key("__REMAINDER_CONFIG", &["api_base_url", "API_BASE_URL"]))
        .filter(|v| !v.trim().is_empty())
}

fn cache_base_url(value: &str) -> String {
    let value = normalize_base_url(value);
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

/// Picks the base URL from a window-global override, falling back to the
/// local service address.
fn resolve_base_url(override_url: Option<String>) -> String {
    match override_url {
        Some(url) => normalize_base_url(&url),
        None => {
            log::info!("No base URL override, using {}", DEFAULT_API_BASE_URL);
            DEFAULT_API_BASE_URL.to_string()
        }
    }
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    cache_base_url(&resolve_base_url(snapshot_from_globals()))
}

pub async fn init() {
    let url = await_api_base_url().await;
    log::info!("API base URL: {}", url);
}
