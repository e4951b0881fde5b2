use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

use crate::{routes::paths, state::role::Role};

/// Query parameter carrying the originally requested location to the sign-in page.
pub const RETURN_PARAM: &str = "redirect";

/// Query parameter telling the sign-in page the user just signed out.
pub const SIGNED_OUT_PARAM: &str = "signed_out";

pub fn signed_out_login_path() -> String {
    format!("{}?{}=1", paths::LOGIN, SIGNED_OUT_PARAM)
}

/// Sign-in URL that remembers `requested` (path plus query).
pub fn login_path_with_return(requested: &str) -> String {
    match sanitize_return_target(requested) {
        Some(target) => format!(
            "{}?{}={}",
            paths::LOGIN,
            RETURN_PARAM,
            utf8_percent_encode(&target, NON_ALPHANUMERIC)
        ),
        None => paths::LOGIN.to_string(),
    }
}

/// Accepts only same-origin absolute paths and never points back at the sign-in page.
pub fn sanitize_return_target(raw: &str) -> Option<String> {
    let target = raw.trim();
    if !target.starts_with('/') || target.chars().any(|c| c.is_ascii_control()) {
        return None;
    }
    let path = target.split(['?', '#']).next().unwrap_or_default();
    // Browsers read `\` as `/`, so `/\host` and `//host` leave the site.
    let leading = path[1..].split('/').next().unwrap_or_default();
    if (leading.is_empty() && path.len() > 1) || leading.contains('\\') {
        return None;
    }
    if path == paths::LOGIN {
        return None;
    }
    Some(target.to_string())
}

/// Decodes an already-extracted `redirect` parameter value.
pub fn decode_return_param(value: &str) -> Option<String> {
    let decoded = percent_decode_str(value).decode_utf8().ok()?;
    sanitize_return_target(&decoded)
}

pub fn return_target_from_search(search: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == RETURN_PARAM)
        .and_then(|(_, value)| decode_return_param(value))
}

pub fn post_login_destination(return_to: Option<&str>, role: Role) -> String {
    return_to
        .and_then(sanitize_return_target)
        .unwrap_or_else(|| role.home_path().to_string())
}

pub fn current_location() -> Option<String> {
    let location = web_sys::window()?.location();
    let pathname = location.pathname().ok()?;
    let search = location.search().unwrap_or_default();
    Some(format!("{}{}", pathname, search))
}

pub fn navigate(target: &str) {
    log::info!("navigating to {}", target);
    if let Some(win) = web_sys::window() {
        let _ = win.location().set_href(target);
    }
}
