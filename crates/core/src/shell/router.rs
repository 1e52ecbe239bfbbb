//! # Router
//!
//! Two outcomes only: the home page for the root path, the not-found page
//! for everything else.

use serde::Serialize;

pub const HOME_PATH: &str = "/";
/// Explicit alias for the not-found view; project demo links point here
pub const NOT_FOUND_PATH: &str = "/not-found";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    NotFound,
}

impl Route {
    /// Resolve a request path. Query and fragment are ignored.
    pub fn resolve(path: &str) -> Self {
        let path = path
            .split(|c: char| c == '?' || c == '#')
            .next()
            .unwrap_or_default();
        match path {
            "" | HOME_PATH => Route::Home,
            _ => Route::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_home() {
        assert_eq!(Route::resolve("/"), Route::Home);
        assert_eq!(Route::resolve(""), Route::Home);
        assert_eq!(Route::resolve("/?category=Backend"), Route::Home);
        assert_eq!(Route::resolve("/#projects"), Route::Home);
    }

    #[test]
    fn test_explicit_not_found_alias() {
        assert_eq!(Route::resolve(NOT_FOUND_PATH), Route::NotFound);
    }

    #[test]
    fn test_everything_else_is_not_found() {
        for path in ["/about", "/projects/1", "//", "/index.html", "/Home"] {
            assert_eq!(Route::resolve(path), Route::NotFound, "path {path}");
        }
    }
}
