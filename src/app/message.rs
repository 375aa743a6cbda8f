// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::gallery;
use crate::ui::notifications;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Notification(notifications::NotificationMessage),
    /// Reopen the modal on the last viewed photo.
    Reopen,
    /// Result of the save dialog and download; `None` when cancelled.
    DownloadCompleted(Result<Option<PathBuf>, Error>),
    Tick(Instant), // Periodic tick for notification auto-dismiss
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_LIGHTBOX_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Photo manifest to load instead of `collection.toml` in the config dir.
    pub manifest: Option<String>,
    /// CDN account overriding `[gallery] cloud_name`.
    pub cloud_name: Option<String>,
    /// CDN host overriding `[gallery] cdn_host`.
    pub cdn_host: Option<String>,
    /// Starting route (`/p/3` or `/?photoId=3`).
    pub route: Option<String>,
    /// Photo to open when the route names none.
    pub photo: Option<usize>,
    /// Interaction mode overriding `[gallery] interaction`.
    pub interaction: Option<gallery::InteractionMode>,
    /// Open in the full-page presentation.
    pub full: bool,
}
