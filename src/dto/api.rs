//! DTOs exposed by the listing API endpoints.

use crate::domain::types::{ListingStatus, TypeConstraintError};
use crate::translator::SearchParams;

/// Listing request as sent by the UI: its search parameters plus an optional
/// status filter.
#[derive(Debug, Default)]
pub struct ListingRequest {
    pub params: SearchParams,
    pub status: Option<ListingStatus>,
}

impl ListingRequest {
    /// Splits the `status` key off the UI parameters.
    ///
    /// Only the first `status` value is honoured; it must name a known status.
    pub fn from_params(mut params: SearchParams) -> Result<Self, TypeConstraintError> {
        let status = params
            .take_all("status")
            .into_iter()
            .next()
            .map(|s| s.parse::<ListingStatus>())
            .transpose()?;

        Ok(Self { params, status })
    }
}
