// SPDX-License-Identifier: MPL-2.0
//! Router port definition.
//!
//! The gallery keeps its open photo in the host's route as a `photoId`
//! query parameter. Hosts implement [`Router`] to expose their history;
//! [`HistoryRouter`] is the in-memory implementation used by the desktop app.

use std::fmt;

/// Query parameter carrying the open photo index.
pub const PHOTO_ID_PARAM: &str = "photoId";

/// A route as seen by the gallery: either home or a single photo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Route {
    pub photo_id: Option<usize>,
}

impl Route {
    /// The cleared route (`/`).
    #[must_use]
    pub fn home() -> Self {
        Self { photo_id: None }
    }

    #[must_use]
    pub fn photo(id: usize) -> Self {
        Self { photo_id: Some(id) }
    }

    /// Query string pushed on navigation (`photoId=4`, empty for home).
    #[must_use]
    pub fn query(&self) -> String {
        match self.photo_id {
            Some(id) => format!("{PHOTO_ID_PARAM}={id}"),
            None => String::new(),
        }
    }

    /// Display path (`/p/4`, or `/` for home).
    #[must_use]
    pub fn as_path(&self) -> String {
        match self.photo_id {
            Some(id) => format!("/p/{id}"),
            None => "/".to_string(),
        }
    }

    /// Parses `/p/<n>`, `/?photoId=<n>` or `/`.
    ///
    /// Returns `None` for anything else.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        let (path, query) = match input.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (input, None),
        };

        if let Some(query) = query {
            let photo_id = query.split('&').find_map(|pair| {
                let (key, value) = pair.split_once('=')?;
                (key == PHOTO_ID_PARAM).then(|| value.parse::<usize>().ok())?
            });
            return match photo_id {
                Some(id) if path.is_empty() || path == "/" => Some(Self::photo(id)),
                _ => None,
            };
        }

        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Some(Self::home());
        }
        trimmed
            .strip_prefix("/p/")
            .and_then(|id| id.parse::<usize>().ok())
            .map(Self::photo)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_path())
    }
}

/// Port through which the gallery reads and writes the current route.
///
/// `push` is a shallow navigation: it records the route without asking the
/// host to rebuild the gallery.
pub trait Router: Send {
    /// The route currently at the top of the history.
    fn current(&self) -> Route;

    /// Records `route` as the new current route.
    fn push(&mut self, route: Route);
}

/// Routes kept by [`HistoryRouter`]; the oldest entries are dropped first.
pub const HISTORY_LIMIT: usize = 256;

/// In-memory history stack, bounded by [`HISTORY_LIMIT`].
#[derive(Debug, Clone)]
pub struct HistoryRouter {
    entries: Vec<Route>,
}

impl HistoryRouter {
    #[must_use]
    pub fn new() -> Self {
        Self::with_initial(Route::home())
    }

    #[must_use]
    pub fn with_initial(route: Route) -> Self {
        Self {
            entries: vec![route],
        }
    }

    /// Every route pushed so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Route] {
        &self.entries
    }
}

impl Default for HistoryRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl Router for HistoryRouter {
    fn current(&self) -> Route {
        self.entries.last().copied().unwrap_or_default()
    }

    /// Pushing the current route again leaves the history untouched.
    fn push(&mut self, route: Route) {
        if self.entries.last() == Some(&route) {
            return;
        }
        tracing::trace!(query = %route.query(), path = %route, "router push");
        if self.entries.len() == HISTORY_LIMIT {
            self.entries.remove(0);
        }
        self.entries.push(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_route_formats_query_and_path() {
        let route = Route::photo(4);
        assert_eq!(route.query(), "photoId=4");
        assert_eq!(route.as_path(), "/p/4");
        assert_eq!(route.to_string(), "/p/4");
    }

    #[test]
    fn home_route_is_cleared() {
        let route = Route::home();
        assert_eq!(route.query(), "");
        assert_eq!(route.as_path(), "/");
    }

    #[test]
    fn parse_accepts_known_forms() {
        assert_eq!(Route::parse("/p/7"), Some(Route::photo(7)));
        assert_eq!(Route::parse("/p/7/"), Some(Route::photo(7)));
        assert_eq!(Route::parse("/?photoId=3"), Some(Route::photo(3)));
        assert_eq!(Route::parse("?foo=1&photoId=2"), Some(Route::photo(2)));
        assert_eq!(Route::parse("/"), Some(Route::home()));
    }

    #[test]
    fn parse_rejects_unknown_forms() {
        assert_eq!(Route::parse("/p/abc"), None);
        assert_eq!(Route::parse("/gallery"), None);
        assert_eq!(Route::parse("/?photoId=-1"), None);
    }

    #[test]
    fn history_router_tracks_pushes() {
        let mut router = HistoryRouter::new();
        assert_eq!(router.current(), Route::home());

        router.push(Route::photo(1));
        router.push(Route::photo(2));
        assert_eq!(router.current(), Route::photo(2));
        assert_eq!(router.history().len(), 3);
    }

    #[test]
    fn repeated_push_is_collapsed() {
        let mut router = HistoryRouter::with_initial(Route::photo(1));
        router.push(Route::photo(1));
        router.push(Route::photo(2));
        router.push(Route::photo(2));
        assert_eq!(router.history(), &[Route::photo(1), Route::photo(2)]);
    }

    #[test]
    fn history_is_bounded() {
        let mut router = HistoryRouter::new();
        for id in 0..HISTORY_LIMIT * 2 {
            router.push(Route::photo(id));
        }
        assert_eq!(router.history().len(), HISTORY_LIMIT);
        assert_eq!(router.current(), Route::photo(HISTORY_LIMIT * 2 - 1));
        assert_eq!(router.history()[0], Route::photo(HISTORY_LIMIT));
    }
}
