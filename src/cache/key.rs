//! Cache key generation.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A cache key derived from the full request signature.
///
/// The key hashes the raw query string exactly as received, including any
/// caller-supplied uniqueness token. The game UIs append a fresh timestamp
/// to every request, so in practice distinct requests almost never collide
/// on a key: the cache acts as per-exact-request memoization with a short
/// window for accidental duplicate calls, not as a shared content pool.
/// That is the documented contract, preserved deliberately.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey {
    pub hash: String,
}

impl CacheKey {
    pub fn new(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    /// Hash a raw query string into a key.
    pub fn from_query(query: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(query.as_bytes());
        let hash: String = hasher
            .finalize()
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect();
        Self { hash }
    }

    pub fn as_str(&self) -> &str {
        &self.hash
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hash)
    }
}

impl From<&str> for CacheKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CacheKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_query_same_key() {
        let a = CacheKey::from_query("mode=acid-rain&count=10");
        let b = CacheKey::from_query("mode=acid-rain&count=10");
        assert_eq!(a, b);
    }

    #[test]
    fn test_uniqueness_token_changes_key() {
        let a = CacheKey::from_query("mode=acid-rain&count=10&timestamp=1");
        let b = CacheKey::from_query("mode=acid-rain&count=10&timestamp=2");
        assert_ne!(a, b);
    }

    #[test]
    fn test_key_is_hex_digest() {
        let key = CacheKey::from_query("");
        assert_eq!(key.as_str().len(), 64);
        assert!(key.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }
}
