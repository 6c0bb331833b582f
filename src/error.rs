use crate::model::TransportError;
use thiserror::Error;

/// Unified error type for the generation service.
///
/// Word-list generation recovers from model failures internally (dictionary
/// fallback), so most of these variants are only ever user-visible on the
/// story path, where no fallback content exists.
#[derive(Debug, Error)]
pub enum Error {
    /// No model endpoint is configured and the requested operation needs one.
    #[error("model service unavailable: no model endpoint configured")]
    ModelUnavailable,

    /// The model endpoint answered but the response was unusable.
    #[error("model error: {0}")]
    Model(String),

    #[error("network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("cache error: {0}")]
    Cache(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn model(msg: impl Into<String>) -> Self {
        Error::Model(msg.into())
    }

    pub fn cache(msg: impl Into<String>) -> Self {
        Error::Cache(msg.into())
    }

    /// Short machine-readable category, used as the `error` field of the
    /// failure envelope.
    pub fn category(&self) -> &'static str {
        match self {
            Error::ModelUnavailable => "model_unavailable",
            Error::Model(_) => "model_error",
            Error::Transport(_) => "transport_error",
            Error::Serialization(_) => "serialization_error",
            Error::Cache(_) => "cache_error",
            Error::Io(_) => "io_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_tags() {
        assert_eq!(Error::ModelUnavailable.category(), "model_unavailable");
        assert_eq!(Error::model("bad reply").category(), "model_error");
        assert_eq!(Error::cache("backend down").category(), "cache_error");
    }

    #[test]
    fn test_display_includes_detail() {
        let err = Error::model("missing text content");
        assert!(err.to_string().contains("missing text content"));
    }
}
