//! Response memoization with pluggable backends.
//!
//! A successful generation payload is cached under the exact request
//! signature with a mode-dependent TTL, so accidental duplicate calls within
//! a short window are served without touching the model. The cache is
//! best-effort throughout: any read error degrades to a miss, any write
//! error is logged and swallowed, and the service is fully correct with the
//! cache disabled.
//!
//! ## Key Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`CacheManager`] | TTL policy, payload codec, and hit/miss statistics |
//! | [`CachePolicy`] | Per-region TTLs and the enable switch |
//! | [`CacheBackend`] | Trait for implementing custom backends |
//! | [`MemoryCache`] | In-process map with read-time expiry |
//! | [`NullCache`] | No-op backend for disabling caching |
//! | [`CacheKey`] | Key derived from the full request query string |
//!
//! Word-list and story payloads live in separate named regions (`words` /
//! `stories`) with different TTLs, chosen by the request's [`GameMode`].
//!
//! [`GameMode`]: crate::types::GameMode

mod backend;
mod key;
mod manager;

pub use backend::{CacheBackend, MemoryCache, NullCache};
pub use key::CacheKey;
pub use manager::{CacheManager, CachePolicy, CacheStats};
