//! Mock backend implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;

use crate::domain::listing::ListingResource;
use crate::domain::types::ResourceId;
use crate::pagination::PaginationEnvelope;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ListingReader, ListingWriter};
use crate::translator::BackendQuery;

mock! {
    pub Backend {}

    #[async_trait]
    impl ListingReader for Backend {
        async fn fetch_listing(
            &self,
            resource: ListingResource,
            query: &BackendQuery,
        ) -> RepositoryResult<PaginationEnvelope<Value>>;
    }

    #[async_trait]
    impl ListingWriter for Backend {
        async fn update_listing_status(
            &self,
            resource: ListingResource,
            id: &ResourceId,
            query: &BackendQuery,
        ) -> RepositoryResult<()>;
        async fn delete_listing(
            &self,
            resource: ListingResource,
            id: &ResourceId,
        ) -> RepositoryResult<()>;
    }
}
