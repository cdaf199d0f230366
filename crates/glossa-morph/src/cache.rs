//! Per-corpus memo of word → stem key.
//!
//! The same surface form repeats across many documents; the backend is
//! called at most once per distinct word. One cache serves one corpus and
//! is dropped with it.

use std::collections::HashMap;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use glossa_core::ReductionMode;

use crate::reducer::Reducer;

/// Hit/miss counters for the run report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

impl CacheStats {
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Thread-safe memoizing wrapper around a `Reducer`.
pub struct CachedReducer {
    reducer: Reducer,
    inner: Mutex<CacheInner>,
}

struct CacheInner {
    entries: HashMap<String, String>,
    hits: u64,
    misses: u64,
}

impl CachedReducer {
    pub fn new(reducer: Reducer) -> Self {
        Self {
            reducer,
            inner: Mutex::new(CacheInner {
                entries: HashMap::new(),
                hits: 0,
                misses: 0,
            }),
        }
    }

    pub fn mode(&self) -> ReductionMode {
        self.reducer.mode()
    }

    /// Reduce a single word, consulting the memo first.
    pub fn reduce_word(&self, word: &str) -> String {
        {
            let mut inner = self.inner.lock();
            if let Some(key) = inner.entries.get(word).cloned() {
                inner.hits += 1;
                return key;
            }
        }

        // Backend runs outside the lock.
        let key = self.reducer.reduce_word(word);

        let mut inner = self.inner.lock();
        inner.misses += 1;
        inner.entries.insert(word.to_string(), key.clone());
        key
    }

    /// Reduce whitespace-separated words, rejoined with single spaces.
    pub fn reduce(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|w| self.reduce_word(w))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.lock();
        CacheStats {
            hits: inner.hits,
            misses: inner.misses,
            entries: inner.entries.len(),
        }
    }
}

impl std::fmt::Debug for CachedReducer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedReducer")
            .field("reducer", &self.reducer)
            .field("stats", &self.stats())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MorphologicalReducer;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Counting {
        calls: Arc<AtomicUsize>,
    }

    impl MorphologicalReducer for Counting {
        fn reduce(&self, word: &str) -> String {
            self.calls.fetch_add(1, Ordering::SeqCst);
            word.trim_end_matches('ς').to_string()
        }

        fn mode(&self) -> ReductionMode {
            ReductionMode::Stem
        }

        fn name(&self) -> &str {
            "counting"
        }
    }

    #[test]
    fn test_backend_called_once_per_distinct_word() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cache = CachedReducer::new(Reducer::new(Arc::new(Counting {
            calls: Arc::clone(&calls),
        })));

        for _ in 0..5 {
            assert_eq!(cache.reduce("μεταναστες ηρθαν μεταναστες"), "μεταναστε ηρθαν μεταναστε");
        }

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        let stats = cache.stats();
        assert_eq!(stats.misses, 2);
        assert_eq!(stats.hits, 13);
        assert_eq!(stats.entries, 2);
        assert!(stats.hit_ratio() > 0.8);
    }

    #[test]
    fn test_empty_stats() {
        let cache = CachedReducer::new(Reducer::new(Arc::new(Counting {
            calls: Arc::new(AtomicUsize::new(0)),
        })));
        assert_eq!(cache.stats(), CacheStats::default());
        assert_eq!(cache.stats().hit_ratio(), 0.0);
    }
}
