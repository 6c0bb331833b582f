//! Language-model service client.
//!
//! The model is the sole non-deterministic input to this service and is
//! treated as unreliable: it may be unreachable, answer with an error
//! status, or return malformed or off-format text. Exactly one attempt is
//! made per request; there is no retry. Recovery policy lives in
//! [`crate::generate`], not here.

mod http;

pub use http::{HttpModelClient, TransportError};

use crate::Result;
use async_trait::async_trait;

/// Seam between the generator and the hosted model. The generator only
/// needs a `{system, user}` message pair answered with raw text.
#[async_trait]
pub trait TextModel: Send + Sync {
    async fn generate(&self, system: &str, user: &str) -> Result<String>;

    fn name(&self) -> &'static str {
        "model"
    }
}
