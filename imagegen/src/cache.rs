//! Preview caching.
//!
//! Generated previews are cached by the prompt cache key so that repeated
//! requests for the same configuration do not hit the generation service.
//! LRU eviction with TTL keeps the cache bounded.

use crate::types::{GenerateFuture, GenerateRequest, GeneratedImage, ImageGenerator};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Cached preview with timestamps
#[derive(Clone, Debug)]
struct CachedPreview {
    image: GeneratedImage,
    cached_at: Instant,
    last_accessed: Instant,
}

impl CachedPreview {
    fn new(image: GeneratedImage) -> Self {
        let now = Instant::now();
        Self {
            image,
            cached_at: now,
            last_accessed: now,
        }
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.cached_at.elapsed() > ttl
    }

    fn touch(&mut self) {
        self.last_accessed = Instant::now();
    }
}

/// LRU cache for generated previews with TTL
#[derive(Clone, Debug)]
pub struct PreviewCache {
    /// Maximum entries
    capacity: usize,
    /// Time-to-live for entries
    ttl: Duration,
    /// Cache storage: cache key -> preview
    entries: HashMap<String, CachedPreview>,
}

impl PreviewCache {
    /// Create a cache with the given capacity and TTL
    #[must_use]
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            capacity,
            ttl,
            entries: HashMap::new(),
        }
    }

    /// Get a cached preview if present and not expired
    pub fn get(&mut self, key: &str) -> Option<GeneratedImage> {
        if let Some(entry) = self.entries.get_mut(key) {
            if entry.is_expired(self.ttl) {
                self.entries.remove(key);
                return None;
            }

            entry.touch();
            return Some(entry.image.clone());
        }

        None
    }

    /// Insert a preview, evicting expired and least-recently-used entries
    pub fn insert(&mut self, key: String, image: GeneratedImage) {
        self.evict_expired();

        if self.entries.len() >= self.capacity {
            self.evict_lru();
        }

        self.entries.insert(key, CachedPreview::new(image));
    }

    /// Number of cached previews
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn evict_expired(&mut self) {
        let ttl = self.ttl;
        self.entries.retain(|_, entry| !entry.is_expired(ttl));
    }

    fn evict_lru(&mut self) {
        if let Some(lru_key) = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_accessed)
            .map(|(key, _)| key.clone())
        {
            self.entries.remove(&lru_key);
        }
    }
}

/// Generator wrapper that serves repeats from the preview cache.
///
/// Requests without a cache key bypass the cache entirely. Cache hits are
/// reported with `cached: true`, fresh generations with `cached: false`.
#[derive(Clone)]
pub struct CachingGenerator {
    inner: Arc<dyn ImageGenerator>,
    cache: Arc<Mutex<PreviewCache>>,
}

impl CachingGenerator {
    /// Wrap a generator with a preview cache
    #[must_use]
    pub fn new(inner: Arc<dyn ImageGenerator>, capacity: usize, ttl: Duration) -> Self {
        Self {
            inner,
            cache: Arc::new(Mutex::new(PreviewCache::new(capacity, ttl))),
        }
    }

    /// Number of cached previews
    pub async fn cached_count(&self) -> usize {
        self.cache.lock().await.len()
    }
}

impl ImageGenerator for CachingGenerator {
    fn generate(&self, request: GenerateRequest) -> GenerateFuture<'_> {
        Box::pin(async move {
            let Some(key) = request.cache_key.clone() else {
                return self.inner.generate(request).await;
            };

            if let Some(mut hit) = self.cache.lock().await.get(&key) {
                tracing::debug!(key = %key, "preview served from cache");
                hit.cached = true;
                return Ok(hit);
            }

            let image = self.inner.generate(request).await?;
            self.cache.lock().await.insert(key, image.clone());
            Ok(image)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockGenerator;

    fn image(url: &str) -> GeneratedImage {
        GeneratedImage {
            image_url: url.to_string(),
            cached: false,
            width: 512,
            height: 512,
        }
    }

    #[test]
    fn cache_returns_inserted_entry() {
        let mut cache = PreviewCache::new(4, Duration::from_secs(60));
        cache.insert("a".to_string(), image("one"));

        let hit = cache.get("a").expect("hit");
        assert_eq!(hit.image_url, "one");
        assert!(cache.get("b").is_none());
    }

    #[test]
    fn cache_expires_entries() {
        let mut cache = PreviewCache::new(4, Duration::from_millis(10));
        cache.insert("a".to_string(), image("one"));

        std::thread::sleep(Duration::from_millis(20));
        assert!(cache.get("a").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn cache_evicts_least_recently_used() {
        let mut cache = PreviewCache::new(2, Duration::from_secs(60));
        cache.insert("a".to_string(), image("one"));
        cache.insert("b".to_string(), image("two"));

        // Touch "a" so "b" becomes the eviction candidate.
        let _ = cache.get("a");
        cache.insert("c".to_string(), image("three"));

        assert!(cache.get("a").is_some());
        assert!(cache.get("b").is_none());
        assert!(cache.get("c").is_some());
    }

    #[tokio::test]
    async fn caching_generator_serves_repeats_from_cache() {
        let mock = Arc::new(MockGenerator::ok("mock://preview"));
        let generator =
            CachingGenerator::new(Arc::clone(&mock) as Arc<dyn ImageGenerator>, 8, Duration::from_secs(60));

        let request = GenerateRequest::new("roses", 512, 512).with_cache_key("k1");

        let first = generator.generate(request.clone()).await.expect("first");
        assert!(!first.cached);

        let second = generator.generate(request).await.expect("second");
        assert!(second.cached);
        assert_eq!(second.image_url, first.image_url);

        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn requests_without_cache_key_bypass_cache() {
        let mock = Arc::new(MockGenerator::ok("mock://preview"));
        let generator =
            CachingGenerator::new(Arc::clone(&mock) as Arc<dyn ImageGenerator>, 8, Duration::from_secs(60));

        let request = GenerateRequest::new("roses", 512, 512);
        let _ = generator.generate(request.clone()).await.expect("first");
        let _ = generator.generate(request).await.expect("second");

        assert_eq!(mock.calls(), 2);
        assert_eq!(generator.cached_count().await, 0);
    }
}
