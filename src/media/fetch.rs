// SPDX-License-Identifier: MPL-2.0
//! HTTP retrieval of CDN images.

use crate::error::{Error, Result};
use crate::media::image::{decode_image, ImageData};
use std::sync::OnceLock;

fn client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("IcedLightbox/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|err| {
                tracing::warn!(%err, "falling back to default HTTP client");
                reqwest::Client::new()
            })
    })
}

/// Downloads the body at `url`.
///
/// # Errors
///
/// Returns [`Error::Network`] on transport failure or a non-success status.
pub async fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    let response = client().get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Network(format!("HTTP status: {status}")));
    }
    Ok(response.bytes().await?.to_vec())
}

/// Downloads and decodes the image at `url`.
///
/// Decoding runs on the blocking pool.
///
/// # Errors
///
/// Returns [`Error::Network`] if the download fails and [`Error::Decode`] if
/// the payload is not a supported image.
pub async fn fetch_image(url: String) -> Result<ImageData> {
    tracing::debug!(%url, "fetching image");
    let bytes = fetch_bytes(&url).await?;
    tokio::task::spawn_blocking(move || decode_image(&bytes))
        .await
        .map_err(|err| Error::Decode(err.to_string()))?
}
