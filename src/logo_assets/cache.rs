//! Insert-only cache of resolved logo references

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use super::catalog::LogoId;

static SHARED_CACHE: LazyLock<Arc<LogoCache>> = LazyLock::new(|| Arc::new(LogoCache::new()));

/// Logo reference cache scoped to whoever owns it
///
/// Entries are added once and never replaced or evicted; the logo set is
/// fixed so a cached reference cannot go stale.
#[derive(Debug, Default)]
pub struct LogoCache {
    entries: RwLock<HashMap<LogoId, String>>,
}

impl LogoCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide cache for hosts that want one cache per process
    pub fn shared() -> Arc<Self> {
        Arc::clone(&SHARED_CACHE)
    }

    pub fn get(&self, id: LogoId) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }

    /// Store a reference unless one is already present; returns the stored value
    pub fn insert(&self, id: LogoId, reference: String) -> String {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(id)
            .or_insert(reference)
            .clone()
    }

    pub fn contains(&self, id: LogoId) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_insert_wins() {
        let cache = LogoCache::new();
        assert!(cache.is_empty());

        let stored = cache.insert(LogoId::BroxiDark, "first".to_string());
        assert_eq!(stored, "first");

        let stored = cache.insert(LogoId::BroxiDark, "second".to_string());
        assert_eq!(stored, "first");
        assert_eq!(cache.get(LogoId::BroxiDark).as_deref(), Some("first"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_shared_cache_is_one_instance() {
        assert!(Arc::ptr_eq(&LogoCache::shared(), &LogoCache::shared()));
    }

    #[test]
    fn test_concurrent_inserts_keep_one_entry() {
        let cache = Arc::new(LogoCache::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || cache.insert(LogoId::GuidenaiLight, format!("ref-{i}")))
            })
            .collect();

        let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let stored = cache.get(LogoId::GuidenaiLight).unwrap();
        assert!(results.iter().all(|r| *r == stored));
        assert_eq!(cache.len(), 1);
    }
}
