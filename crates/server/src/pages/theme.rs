//! Theme preference stored in a `theme` cookie.

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{IntoResponse, Redirect, Response},
};

use folio_core::theme::{ThemeMode, ThemePreference};

use crate::SharedState;

pub const THEME_COOKIE: &str = "theme";

/// Value of the theme cookie, if the request carries one
fn cookie_value(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == THEME_COOKIE)
        .map(|(_, value)| value)
}

/// Stored preference, else the configured system default
pub fn preference(headers: &HeaderMap, system: ThemeMode) -> ThemePreference {
    ThemePreference::resolve(cookie_value(headers), system)
}

/// Flip the theme and go back to the page
pub async fn toggle_theme(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let mut pref = preference(&headers, state.config.default_theme);
    let mode = pref.toggle();
    let cookie = format!(
        "{}={}; Path=/; Max-Age=31536000; SameSite=Lax",
        THEME_COOKIE,
        mode.as_str()
    );
    ([(header::SET_COOKIE, cookie)], Redirect::to("/")).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_reads_theme_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("session=abc; theme=dark; other=1"),
        );
        assert!(preference(&headers, ThemeMode::Light).is_dark());
    }

    #[test]
    fn test_no_cookie_uses_system_default() {
        let headers = HeaderMap::new();
        assert_eq!(preference(&headers, ThemeMode::Dark).mode(), ThemeMode::Dark);
    }
}
