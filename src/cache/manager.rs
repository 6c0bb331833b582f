//! Cache manager: TTL policy, payload codec, and statistics.

use super::backend::CacheBackend;
use super::key::CacheKey;
use crate::types::GameMode;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Expiry policy: word-list and story payloads live in separate regions
/// with different TTLs.
#[derive(Debug, Clone)]
pub struct CachePolicy {
    pub words_ttl: Duration,
    pub stories_ttl: Duration,
    pub enabled: bool,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            words_ttl: Duration::from_secs(3600),
            stories_ttl: Duration::from_secs(7200),
            enabled: true,
        }
    }
}

impl CachePolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_words_ttl(mut self, ttl: Duration) -> Self {
        self.words_ttl = ttl;
        self
    }

    pub fn with_stories_ttl(mut self, ttl: Duration) -> Self {
        self.stories_ttl = ttl;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn ttl_for(&self, mode: GameMode) -> Duration {
        if mode.is_story() {
            self.stories_ttl
        } else {
            self.words_ttl
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub sets: u64,
    pub errors: u64,
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

struct AtomicStats {
    hits: AtomicU64,
    misses: AtomicU64,
    sets: AtomicU64,
    errors: AtomicU64,
}

impl AtomicStats {
    fn new() -> Self {
        Self {
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            sets: AtomicU64::new(0),
            errors: AtomicU64::new(0),
        }
    }

    fn to_stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            sets: self.sets.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
        }
    }
}

/// High-level cache front. Payloads are serialized as JSON; the region and
/// TTL are chosen from the request's [`GameMode`].
///
/// Failure semantics: a backend read error or a corrupt payload counts as a
/// miss, and a write error is logged and swallowed. Neither ever reaches
/// the response path.
pub struct CacheManager {
    policy: CachePolicy,
    backend: Box<dyn CacheBackend>,
    stats: Arc<AtomicStats>,
}

impl CacheManager {
    pub fn new(policy: CachePolicy, backend: Box<dyn CacheBackend>) -> Self {
        Self {
            policy,
            backend,
            stats: Arc::new(AtomicStats::new()),
        }
    }

    /// Look up a previously stored payload. Returns `None` on a miss, a
    /// stale entry, a disabled cache, or any backend/decoding error.
    pub async fn lookup<T: DeserializeOwned>(&self, mode: GameMode, key: &CacheKey) -> Option<T> {
        if !self.policy.enabled {
            return None;
        }
        let regioned = self.region_key(mode, key);
        match self.backend.get(&regioned).await {
            Ok(Some(data)) => match serde_json::from_slice(&data) {
                Ok(value) => {
                    self.stats.hits.fetch_add(1, Ordering::Relaxed);
                    Some(value)
                }
                Err(e) => {
                    self.stats.errors.fetch_add(1, Ordering::Relaxed);
                    warn!(key = %key, error = %e, "corrupt cache payload, treating as miss");
                    None
                }
            },
            Ok(None) => {
                self.stats.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
            Err(e) => {
                self.stats.errors.fetch_add(1, Ordering::Relaxed);
                warn!(key = %key, error = %e, "cache read failed, treating as miss");
                None
            }
        }
    }

    /// Store a payload under the mode's region and TTL. Best-effort: errors
    /// are logged and swallowed, never surfaced to the caller.
    pub async fn store<T: Serialize>(&self, mode: GameMode, key: &CacheKey, value: &T) {
        if !self.policy.enabled {
            return;
        }
        let data = match serde_json::to_vec(value) {
            Ok(data) => data,
            Err(e) => {
                self.stats.errors.fetch_add(1, Ordering::Relaxed);
                warn!(key = %key, error = %e, "cache payload encoding failed");
                return;
            }
        };
        let regioned = self.region_key(mode, key);
        match self
            .backend
            .set(&regioned, &data, self.policy.ttl_for(mode))
            .await
        {
            Ok(()) => {
                self.stats.sets.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                self.stats.errors.fetch_add(1, Ordering::Relaxed);
                warn!(key = %key, error = %e, "cache write failed");
            }
        }
    }

    pub fn stats(&self) -> CacheStats {
        self.stats.to_stats()
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    fn region_key(&self, mode: GameMode, key: &CacheKey) -> CacheKey {
        let region = if mode.is_story() { "stories" } else { "words" };
        CacheKey::new(format!("{}:{}", region, key.hash))
    }
}
