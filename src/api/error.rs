use thiserror::Error;

/// Failures at the HTTP boundary. Everything here degrades to a toast
/// or CLI message plus a retry affordance; nothing is fatal.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("permintaan gagal: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server membalas {0}")]
    Status(reqwest::StatusCode),

    #[error("bentuk respons tidak dikenali: {0}")]
    Shape(String),

    /// Identity-provider rejection, with the provider's own message.
    #[error("{0}")]
    Provider(String),
}

impl ApiError {
    pub fn shape(what: impl Into<String>) -> Self {
        ApiError::Shape(what.into())
    }
}
