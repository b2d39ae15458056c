use reqwest::StatusCode;
use thiserror::Error;

/// Label used when neither the body nor the status carries a message.
pub const GENERIC_ERROR_DETAIL: &str = "API Error";

/// Every way a call to the assessment service can fail.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP {status}: {detail}")]
    Status { status: StatusCode, detail: String },
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
    #[error("invalid response body (HTTP {status}): {source}")]
    Decode {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl TransportError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } | Self::Decode { status, .. } => Some(*status),
            Self::Network(err) => err.status(),
            Self::InvalidBaseUrl { .. } => None,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            Self::Status { detail, .. } => detail.clone(),
            other => other.to_string(),
        }
    }
}

/// Detail for a non-2xx response: the body's `detail`, else the reason
/// phrase, else [`GENERIC_ERROR_DETAIL`].
pub fn error_detail(status: StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<shared::error::ApiErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message())
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| GENERIC_ERROR_DETAIL.to_string())
}
