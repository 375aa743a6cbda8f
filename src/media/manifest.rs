// SPDX-License-Identifier: MPL-2.0
//! Collection manifest loading.
//!
//! A manifest is a TOML file listing the photos in display order:
//!
//! ```toml
//! [[images]]
//! public_id = "conf/abc123"
//! format = "jpg"
//! ```

use crate::domain::gallery::{Collection, CollectionEntry};
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

fn default_format() -> String {
    "jpg".to_string()
}

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    #[serde(default)]
    id: Option<usize>,
    public_id: String,
    #[serde(default = "default_format")]
    format: String,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    images: Vec<ManifestEntry>,
}

/// Parses manifest text into a collection.
///
/// # Errors
///
/// Returns [`crate::error::Error::Config`] for malformed TOML and
/// [`crate::error::Error::Collection`] if the entries do not form a valid
/// collection.
pub fn parse(content: &str) -> Result<Collection> {
    let manifest: Manifest = toml::from_str(content)?;
    let entries = manifest.images.into_iter().map(|entry| CollectionEntry {
        id: entry.id,
        public_id: entry.public_id,
        format: entry.format,
    });
    Ok(Collection::from_entries(entries)?)
}

/// Reads and parses the manifest at `path`.
///
/// # Errors
///
/// Returns [`crate::error::Error::Io`] if the file cannot be read, or any
/// error from [`parse`].
pub fn load_from_path(path: &Path) -> Result<Collection> {
    let content = fs::read_to_string(path)?;
    let collection = parse(&content)?;
    tracing::info!(path = %path.display(), images = collection.len(), "loaded collection");
    Ok(collection)
}
