use reqwest::Method;
use reqwest::StatusCode;
use serde::Deserialize;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Rejected before any request was sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Connection, TLS or timeout failure inside the HTTP stack.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The server answered with a success status but the body did not match
    /// the expected envelope or schema.
    #[error("decode error for {url}: {source}; body={body}")]
    Decode {
        url: String,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    /// HTTP status of an API rejection, `None` for every other category.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api(err) => Some(err.status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api(err) if err.is_not_found())
    }
}

/// A non-2xx response from the API.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{method} {url} failed: {status}; body={body}")]
pub struct ApiError {
    pub method: Method,
    pub url: String,
    pub status: StatusCode,
    pub body: String,
    /// The structured `{"error": {...}}` object, when the body carried one.
    pub details: Option<ApiErrorDetails>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorDetails {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<String>,
}

#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorDetails,
}

impl ApiError {
    pub(crate) fn new(method: Method, url: String, status: StatusCode, body: String) -> Self {
        let details = serde_json::from_str::<ApiErrorEnvelope>(&body)
            .ok()
            .map(|envelope| envelope.error);
        Self {
            method,
            url,
            status,
            body,
            details,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status == StatusCode::NOT_FOUND
    }
}
