use web_sys::{Storage, Window};

const ACCESS_TOKEN_KEY: &str = "kidslink.access_token";

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

#[cfg(target_arch = "wasm32")]
pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

// Host builds (SSR tests) never have a browser storage to talk to.
#[cfg(not(target_arch = "wasm32"))]
pub fn local_storage() -> Result<Storage, String> {
    Err("No localStorage".to_string())
}

pub fn access_token() -> Option<String> {
    local_storage()
        .ok()?
        .get_item(ACCESS_TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.is_empty())
}

pub fn store_access_token(token: &str) {
    match local_storage() {
        Ok(storage) => {
            if storage.set_item(ACCESS_TOKEN_KEY, token).is_err() {
                log::warn!("failed to persist access token");
            }
        }
        Err(err) => log::warn!("access token not persisted: {}", err),
    }
}

pub fn clear_access_token() {
    if let Ok(storage) = local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
    }
}
