// SPDX-License-Identifier: MPL-2.0
//! LRU cache of decoded CDN images.
//!
//! Entries are keyed by URL, so a photo's thumbnail and main rendition are
//! cached independently. URLs with a fetch in flight are tracked separately
//! to avoid requesting the same image twice.

use crate::media::ImageData;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;

/// Default maximum number of cached images.
pub const DEFAULT_CACHE_CAPACITY: usize = 96;

/// LRU cache for fetched images.
pub struct ImageCache {
    cache: LruCache<String, ImageData>,
    pending: HashSet<String>,
}

impl ImageCache {
    /// Creates a cache holding at most `capacity` images (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            pending: HashSet::new(),
        }
    }

    /// Looks up an image without touching the LRU order.
    #[must_use]
    pub fn peek(&self, url: &str) -> Option<&ImageData> {
        self.cache.peek(url)
    }

    /// Looks up an image and marks it as recently used.
    pub fn get(&mut self, url: &str) -> Option<&ImageData> {
        self.cache.get(url)
    }

    #[must_use]
    pub fn contains(&self, url: &str) -> bool {
        self.cache.contains(url)
    }

    #[must_use]
    pub fn is_pending(&self, url: &str) -> bool {
        self.pending.contains(url)
    }

    /// Registers a fetch for `url`.
    ///
    /// Returns `false` if the image is already cached or being fetched, in
    /// which case no new fetch should start.
    pub fn mark_pending(&mut self, url: &str) -> bool {
        if self.cache.contains(url) || self.pending.contains(url) {
            return false;
        }
        self.pending.insert(url.to_string())
    }

    /// Stores a fetched image and clears its pending flag.
    pub fn insert(&mut self, url: String, image: ImageData) {
        self.pending.remove(&url);
        self.cache.put(url, image);
    }

    /// Clears the pending flag after a failed fetch so it can be retried.
    pub fn finish_failed(&mut self, url: &str) {
        self.pending.remove(url);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("len", &self.cache.len())
            .field("pending", &self.pending.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel() -> ImageData {
        ImageData::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    #[test]
    fn pending_urls_are_not_refetched() {
        let mut cache = ImageCache::default();
        assert!(cache.mark_pending("a"));
        assert!(!cache.mark_pending("a"));
        assert!(cache.is_pending("a"));

        cache.insert("a".to_string(), pixel());
        assert!(!cache.is_pending("a"));
        assert!(!cache.mark_pending("a"));
        assert!(cache.peek("a").is_some());
    }

    #[test]
    fn failed_fetch_can_be_retried() {
        let mut cache = ImageCache::default();
        assert!(cache.mark_pending("a"));
        cache.finish_failed("a");
        assert!(cache.mark_pending("a"));
    }

    #[test]
    fn least_recently_used_is_evicted() {
        let mut cache = ImageCache::new(2);
        cache.insert("a".to_string(), pixel());
        cache.insert("b".to_string(), pixel());
        assert!(cache.get("a").is_some());
        cache.insert("c".to_string(), pixel());

        assert!(cache.contains("a"));
        assert!(!cache.contains("b"));
        assert!(cache.contains("c"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn zero_capacity_falls_back_to_one() {
        let mut cache = ImageCache::new(0);
        cache.insert("a".to_string(), pixel());
        assert_eq!(cache.len(), 1);
    }
}
