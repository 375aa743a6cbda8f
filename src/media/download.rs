// SPDX-License-Identifier: MPL-2.0
//! Saving original assets to disk.

use crate::error::Result;
use crate::media::fetch::fetch_bytes;
use std::path::{Path, PathBuf};

/// Default file name offered in the save dialog (`<index>.jpg`).
#[must_use]
pub fn download_file_name(index: usize) -> String {
    format!("{index}.jpg")
}

/// Asks the user for a destination, then downloads `url` into it.
///
/// Returns `Ok(None)` if the dialog was cancelled.
///
/// # Errors
///
/// Returns an error if the download fails or the file cannot be written.
pub async fn download_with_dialog(
    url: String,
    file_name: String,
    directory: Option<PathBuf>,
) -> Result<Option<PathBuf>> {
    let dialog = rfd::AsyncFileDialog::new()
        .set_title("Save Photo")
        .add_filter("JPEG", &["jpg", "jpeg"])
        .set_file_name(&file_name);
    let dialog = match directory {
        Some(dir) => dialog.set_directory(dir),
        None => dialog,
    };

    let Some(handle) = dialog.save_file().await else {
        return Ok(None);
    };
    let path = handle.path().to_path_buf();
    save_url_to(&url, &path).await?;
    Ok(Some(path))
}

/// Downloads `url` and writes the body to `path`.
///
/// # Errors
///
/// Returns an error if the download fails or the file cannot be written.
pub async fn save_url_to(url: &str, path: &Path) -> Result<()> {
    let bytes = fetch_bytes(url).await?;
    tokio::fs::write(path, bytes).await?;
    Ok(())
}
