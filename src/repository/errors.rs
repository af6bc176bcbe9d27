use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Backend rejected credentials")]
    Unauthorized,

    #[error("Backend error ({0}): {1}")]
    Backend(u16, String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RepositoryError::Decode(err.to_string())
        } else if err.is_timeout() || err.is_connect() || err.is_request() || err.is_body() {
            RepositoryError::ConnectionError(err.to_string())
        } else if let Some(status) = err.status() {
            RepositoryError::Backend(status.as_u16(), err.to_string())
        } else {
            RepositoryError::Unexpected(format!("Unexpected HTTP client error: {err}"))
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::Decode(format!("Malformed listing payload: {err}"))
    }
}
