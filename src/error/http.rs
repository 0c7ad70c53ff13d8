use thiserror::Error;

/// Failures raised while building the client or a single request.
///
/// The `Display` text of the per-request variants doubles as the error
/// message fed into failure signatures, so it must stay stable.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("invalid URL: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("request creation failed: invalid header name '{header}'")]
    InvalidHeaderName {
        header: String,
        #[source]
        source: reqwest::header::InvalidHeaderName,
    },
    #[error("request creation failed: invalid value for header '{header}'")]
    InvalidHeaderValue {
        header: String,
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },
    #[error("request creation failed: {source}")]
    BuildRequestFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("request failed: {source}")]
    RequestFailed {
        #[source]
        source: reqwest::Error,
    },
}

impl HttpError {
    /// Returns true when the request never reached the network.
    #[must_use]
    pub const fn is_construction(&self) -> bool {
        matches!(
            self,
            HttpError::InvalidUrl { .. }
                | HttpError::InvalidHeaderName { .. }
                | HttpError::InvalidHeaderValue { .. }
                | HttpError::BuildRequestFailed { .. }
        )
    }

    /// Returns true when the per-request timeout cut the request short.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        match self {
            HttpError::RequestFailed { source } | HttpError::BuildRequestFailed { source } => {
                source.is_timeout()
            }
            HttpError::BuildClientFailed { .. }
            | HttpError::InvalidUrl { .. }
            | HttpError::InvalidHeaderName { .. }
            | HttpError::InvalidHeaderValue { .. } => false,
        }
    }
}
