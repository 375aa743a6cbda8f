// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// What the window shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The photo modal is open.
    Gallery,
    /// The modal was dismissed; the page behind it is shown.
    Closed,
    /// No collection could be loaded.
    Unavailable,
}
