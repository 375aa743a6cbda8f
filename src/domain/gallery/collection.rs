// SPDX-License-Identifier: MPL-2.0
//! Ordered photo collection with dense, position-matching identifiers.

use std::fmt;

/// A single photo of the collection.
///
/// `id` doubles as the photo's position in the collection, so it is used
/// interchangeably as lookup key and ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    pub id: usize,
    /// Opaque storage reference on the image CDN.
    pub public_id: String,
    /// File extension served by the CDN (e.g. `jpg`, `webp`).
    pub format: String,
}

/// Reasons a photo collection is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// The collection lists no images.
    Empty,

    /// An entry carries an explicit id that differs from its position.
    IdMismatch { position: usize, id: usize },

    /// An entry has an empty storage reference.
    MissingPublicId { position: usize },
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionError::Empty => write!(f, "collection contains no images"),
            CollectionError::IdMismatch { position, id } => {
                write!(f, "image at position {} declares id {}", position, id)
            }
            CollectionError::MissingPublicId { position } => {
                write!(f, "image at position {} has no public_id", position)
            }
        }
    }
}

/// Raw entry before ids are assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionEntry {
    pub id: Option<usize>,
    pub public_id: String,
    pub format: String,
}

/// Non-empty, ordered list of photos whose ids are exactly `0..len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    images: Vec<ImageRecord>,
}

impl Collection {
    /// Builds a collection, assigning ids by position.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no entries, if an entry's explicit id
    /// does not match its position, or if an entry has no storage reference.
    pub fn from_entries(
        entries: impl IntoIterator<Item = CollectionEntry>,
    ) -> Result<Self, CollectionError> {
        let mut images = Vec::new();
        for (position, entry) in entries.into_iter().enumerate() {
            if let Some(id) = entry.id {
                if id != position {
                    return Err(CollectionError::IdMismatch { position, id });
                }
            }
            if entry.public_id.trim().is_empty() {
                return Err(CollectionError::MissingPublicId { position });
            }
            images.push(ImageRecord {
                id: position,
                public_id: entry.public_id,
                format: entry.format,
            });
        }

        if images.is_empty() {
            return Err(CollectionError::Empty);
        }
        Ok(Self { images })
    }

    /// Convenience constructor from `(public_id, format)` pairs.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Collection::from_entries`].
    pub fn from_pairs<I, S, F>(pairs: I) -> Result<Self, CollectionError>
    where
        I: IntoIterator<Item = (S, F)>,
        S: Into<String>,
        F: Into<String>,
    {
        Self::from_entries(pairs.into_iter().map(|(public_id, format)| CollectionEntry {
            id: None,
            public_id: public_id.into(),
            format: format.into(),
        }))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Always `false` for a constructed collection; kept for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: usize) -> Option<&ImageRecord> {
        self.images.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: usize) -> bool {
        id < self.images.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageRecord> {
        self.images.iter()
    }

    /// Returns the photos whose ids fall inside `range`.
    pub fn slice(&self, range: std::ops::Range<usize>) -> &[ImageRecord] {
        let end = range.end.min(self.images.len());
        let start = range.start.min(end);
        &self.images[start..end]
    }
}
