//! API Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{url} answered with status {status}")]
    Status { status: u16, url: String },
    #[error("invalid response body: {0}")]
    Decode(String),
    /// The request was cancelled through its abort signal
    #[error("request aborted")]
    Aborted,
}

impl ApiError {
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted)
    }

    pub(super) fn decode(err: gloo_net::Error) -> Self {
        match Self::from(err) {
            Self::Network(msg) => Self::Decode(msg),
            other => other,
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::JsError(js) if js.name == "AbortError" => Self::Aborted,
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}
