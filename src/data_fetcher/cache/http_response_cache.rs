use lru::LruCache;
use serde_json::Value;
use std::num::NonZeroUsize;
use tracing::debug;

/// In-memory store of parsed API responses keyed by request URL.
///
/// Keys are compared as exact strings. Entries never expire. The default cache
/// is unbounded and never drops anything; a bounded cache evicts the least
/// recently used entry once it is full.
///
/// The cache does no locking of its own. Clients wrap it in a mutex.
#[derive(Debug)]
pub struct ResponseCache {
    entries: LruCache<String, Value>,
    /// Entry limit enforced on insert. Storage grows on demand either way.
    limit: Option<NonZeroUsize>,
}

impl ResponseCache {
    /// Creates an empty, unbounded cache.
    pub fn new() -> Self {
        Self {
            entries: LruCache::unbounded(),
            limit: None,
        }
    }

    /// Creates an empty cache holding at most `capacity` entries.
    /// A capacity of zero yields an unbounded cache. Nothing is allocated up
    /// front, so any capacity is accepted.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: LruCache::unbounded(),
            limit: NonZeroUsize::new(capacity),
        }
    }

    /// Creates a cache from an optional capacity, unbounded when `None`.
    pub fn from_capacity(capacity: Option<usize>) -> Self {
        capacity.map_or_else(Self::new, Self::with_capacity)
    }

    /// Returns true if a response for `url` has been stored.
    pub fn exists(&self, url: &str) -> bool {
        self.entries.contains(url)
    }

    /// Returns the stored response for `url`, if any.
    pub fn get(&mut self, url: &str) -> Option<&Value> {
        let entry = self.entries.get(url);
        if entry.is_some() {
            debug!("Cache hit for HTTP response: url={}", url);
        } else {
            debug!("Cache miss for HTTP response: url={}", url);
        }
        entry
    }

    /// Stores or overwrites the response for `url`.
    pub fn set(&mut self, url: impl Into<String>, value: Value) {
        let url = url.into();
        debug!("Caching HTTP response: url={}", url);
        if let Some(limit) = self.limit
            && !self.entries.contains(&url)
            && self.entries.len() >= limit.get()
            && let Some((evicted, _)) = self.entries.pop_lru()
        {
            debug!("Evicted least recently used response: url={}", evicted);
        }
        self.entries.put(url, value);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries, `None` for an unbounded cache.
    pub fn capacity(&self) -> Option<usize> {
        self.limit.map(NonZeroUsize::get)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_cache_is_empty_and_unbounded() {
        let cache = ResponseCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.capacity(), None);
        assert!(!cache.exists("https://example.com/api/v2/team/frc3128"));
    }

    #[test]
    fn test_set_then_get() {
        let mut cache = ResponseCache::new();
        let url = "https://example.com/api/v2/team/frc3128";
        cache.set(url, json!({"rookie_year": "2010"}));

        assert!(cache.exists(url));
        assert_eq!(cache.get(url), Some(&json!({"rookie_year": "2010"})));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_get_missing_returns_none() {
        let mut cache = ResponseCache::new();
        assert_eq!(cache.get("https://example.com/missing"), None);
    }

    #[test]
    fn test_set_overwrites() {
        let mut cache = ResponseCache::new();
        let url = "https://example.com/api/v2/events/2015";
        cache.set(url, json!([1]));
        cache.set(url, json!([1, 2]));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(url), Some(&json!([1, 2])));
    }

    #[test]
    fn test_keys_are_exact_strings() {
        let mut cache = ResponseCache::new();
        cache.set("https://example.com/api/v2/team/frc3128", json!(1));

        assert!(!cache.exists("https://example.com/api/v2/team/frc3128/"));
        assert!(!cache.exists("https://example.com/api/v2/team/FRC3128"));
        assert!(!cache.exists("https://example.com/api/v2//team/frc3128"));
    }

    #[test]
    fn test_unbounded_cache_keeps_everything() {
        let mut cache = ResponseCache::new();
        for page in 0..2000 {
            cache.set(format!("https://example.com/api/v2/teams/{page}"), json!(page));
        }

        assert_eq!(cache.len(), 2000);
        assert!(cache.exists("https://example.com/api/v2/teams/0"));
        assert!(cache.exists("https://example.com/api/v2/teams/1999"));
    }

    #[test]
    fn test_bounded_cache_evicts_least_recently_used() {
        let mut cache = ResponseCache::with_capacity(2);
        assert_eq!(cache.capacity(), Some(2));

        cache.set("a", json!("a"));
        cache.set("b", json!("b"));
        // Touch "a" so that "b" becomes the eviction candidate
        assert!(cache.get("a").is_some());
        cache.set("c", json!("c"));

        assert_eq!(cache.len(), 2);
        assert!(cache.exists("a"));
        assert!(!cache.exists("b"));
        assert!(cache.exists("c"));
    }

    #[test]
    fn test_huge_capacity_allocates_lazily() {
        let mut cache = ResponseCache::from_capacity(Some(usize::MAX / 2));
        assert_eq!(cache.capacity(), Some(usize::MAX / 2));
        assert!(cache.is_empty());

        cache.set("https://example.com/api/v2/team/frc3128", json!({"rookie_year": "2010"}));
        cache.set("https://example.com/api/v2/team/frc254", json!({"rookie_year": "1999"}));

        assert_eq!(cache.len(), 2);
        assert!(cache.exists("https://example.com/api/v2/team/frc3128"));

        let max = ResponseCache::with_capacity(usize::MAX);
        assert_eq!(max.capacity(), Some(usize::MAX));
    }

    #[test]
    fn test_overwrite_in_full_cache_does_not_evict() {
        let mut cache = ResponseCache::with_capacity(2);
        cache.set("a", json!(1));
        cache.set("b", json!(2));
        cache.set("a", json!(3));

        assert_eq!(cache.len(), 2);
        assert!(cache.exists("b"));
        assert_eq!(cache.get("a"), Some(&json!(3)));
    }

    #[test]
    fn test_zero_capacity_means_unbounded() {
        let cache = ResponseCache::with_capacity(0);
        assert_eq!(cache.capacity(), None);

        assert_eq!(ResponseCache::from_capacity(None).capacity(), None);
        assert_eq!(ResponseCache::from_capacity(Some(5)).capacity(), Some(5));
    }

    #[test]
    fn test_clear() {
        let mut cache = ResponseCache::new();
        cache.set("a", json!(null));
        cache.set("b", json!(null));
        cache.clear();

        assert!(cache.is_empty());
        assert!(!cache.exists("a"));
    }
}
