//! Screen paths and the segment-list view of the current location.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::fmt;

/// First segment shared by every public (signed-out) screen.
pub const PUBLIC_GROUP: &str = "auth";

/// Protected home screen; the only redirect target.
pub const HOME_PATH: &str = "/home";

pub const SIGN_IN_PATH: &str = "/auth/signin";
pub const SIGN_UP_PATH: &str = "/auth/signup";

/// The currently displayed screen as ordered path segments.
///
/// Empty segments are dropped, so `""`, `"/"` and `"//"` all denote the
/// landing location.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Location {
    segments: Vec<String>,
}

impl Location {
    /// The landing location (no segments).
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments = path.split('/').filter(|s| !s.is_empty()).map(str::to_owned).collect();
        Self { segments }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether the first segment is exactly `group`.
    pub fn in_group(&self, group: &str) -> bool {
        self.segments.first().is_some_and(|s| s == group)
    }

    /// Whether this location is the screen at `path`.
    pub fn is_at(&self, path: &str) -> bool {
        *self == Self::from_path(path)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.segments.join("/"))
    }
}
