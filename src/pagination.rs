use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while post-processing a paginated backend response.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("{0}")]
    InvalidArgument(&'static str),
}

/// Page of records as returned by the backend's listing endpoints.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationEnvelope<T> {
    pub data: Vec<T>,
    pub offset: u64,
    pub take: u64,
    pub total_count: u64,
    /// Filled in by [`attach_page_count`]; the backend never sends it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u64>,
}

/// Sets `page_count` to `ceil(total_count / take)`.
pub fn attach_page_count<T>(
    mut envelope: PaginationEnvelope<T>,
) -> Result<PaginationEnvelope<T>, PaginationError> {
    if envelope.take == 0 {
        return Err(PaginationError::InvalidArgument("take must be at least 1"));
    }

    envelope.page_count = Some(envelope.total_count.div_ceil(envelope.take));
    Ok(envelope)
}
