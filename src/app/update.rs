// SPDX-License-Identifier: MPL-2.0
//! Message handlers that turn gallery effects into application tasks.

use super::Message;
use crate::error::Error;
use crate::media::download::download_with_dialog;
use crate::ui::gallery::Effect;
use crate::ui::notifications::{Manager, Notification};
use iced::Task;
use std::path::{Path, PathBuf};

/// Performs a gallery side effect.
///
/// Downloads run as tasks; links are handed to the platform opener right
/// away, with a warning toast when that fails. Closing needs no task: the
/// caller re-syncs the screen after every gallery message.
pub fn apply_effect(
    effect: Effect,
    notifications: &mut Manager,
    download_dir: Option<PathBuf>,
) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::Closed => {
            tracing::info!("gallery closed by user");
            Task::none()
        }
        Effect::Download { url, file_name } => {
            tracing::info!(%url, %file_name, "starting download");
            Task::perform(
                download_with_dialog(url, file_name, download_dir),
                Message::DownloadCompleted,
            )
        }
        Effect::OpenUrl(url) => {
            if let Err(err) = open::that_detached(&url) {
                tracing::warn!(%url, %err, "failed to open link");
                notifications.push(Notification::warning("notification-open-url-error"));
            }
            Task::none()
        }
    }
}

/// Reports a finished download and returns the directory to reuse for the
/// next save dialog.
pub fn download_completed(
    result: Result<Option<PathBuf>, Error>,
    notifications: &mut Manager,
) -> Option<PathBuf> {
    match result {
        Ok(Some(path)) => {
            tracing::info!(path = %path.display(), "photo saved");
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            notifications
                .push(Notification::success("notification-download-success").with_arg("file", file_name));
            path.parent().map(Path::to_path_buf)
        }
        Ok(None) => {
            tracing::debug!("download cancelled");
            None
        }
        Err(err) => {
            tracing::warn!(%err, "download failed");
            notifications.push(
                Notification::error("notification-download-error")
                    .with_arg("reason", err.to_string()),
            );
            None
        }
    }
}
