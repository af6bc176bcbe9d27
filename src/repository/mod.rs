//! Thin wrappers over the inventory backend's REST endpoints.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::listing::ListingResource;
use crate::domain::types::ResourceId;
use crate::pagination::PaginationEnvelope;
use crate::repository::errors::RepositoryResult;
use crate::translator::BackendQuery;

pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use http::HttpBackend;

#[async_trait]
pub trait ListingReader {
    /// Fetches one page of `resource` filtered by an already translated query.
    async fn fetch_listing(
        &self,
        resource: ListingResource,
        query: &BackendQuery,
    ) -> RepositoryResult<PaginationEnvelope<Value>>;
}

#[async_trait]
pub trait ListingWriter {
    async fn update_listing_status(
        &self,
        resource: ListingResource,
        id: &ResourceId,
        query: &BackendQuery,
    ) -> RepositoryResult<()>;
    async fn delete_listing(&self, resource: ListingResource, id: &ResourceId)
    -> RepositoryResult<()>;
}

/// Everything the HTTP layer needs from a backend, usable as a trait object.
pub trait ListingBackend: ListingReader + ListingWriter + Send + Sync {}

impl<T> ListingBackend for T where T: ListingReader + ListingWriter + Send + Sync {}
