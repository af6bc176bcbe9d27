use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::Value;

use crate::domain::listing::ListingResource;
use crate::domain::types::ResourceId;
use crate::pagination::PaginationEnvelope;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ListingReader, ListingWriter};
use crate::translator::BackendQuery;

/// REST client for the inventory backend.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Duration) -> RepositoryResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RepositoryError::ConnectionError(format!("HTTP client setup: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn collection_url(&self, resource: ListingResource) -> String {
        format!("{}/{}", self.base_url, resource.path())
    }

    fn item_url(&self, resource: ListingResource, id: &ResourceId) -> String {
        format!("{}/{}/{}", self.base_url, resource.path(), id)
    }

    /// Appends the form-encoded backend query to `url`.
    fn with_query(url: String, query: &BackendQuery) -> RepositoryResult<String> {
        if query.is_empty() {
            return Ok(url);
        }
        let encoded = query
            .to_query_string()
            .map_err(|e| RepositoryError::Unexpected(format!("Query encoding: {e}")))?;
        Ok(format!("{url}?{encoded}"))
    }

    async fn send(request: RequestBuilder) -> RepositoryResult<reqwest::Response> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status {
            StatusCode::NOT_FOUND => Err(RepositoryError::NotFound),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(RepositoryError::Unauthorized),
            _ => {
                let body = match response.text().await {
                    Ok(body) => body,
                    Err(e) => {
                        log::warn!("Failed to read backend error body ({status}): {e}");
                        String::new()
                    }
                };
                Err(RepositoryError::Backend(status.as_u16(), body))
            }
        }
    }
}

#[async_trait]
impl ListingReader for HttpBackend {
    async fn fetch_listing(
        &self,
        resource: ListingResource,
        query: &BackendQuery,
    ) -> RepositoryResult<PaginationEnvelope<Value>> {
        let url = Self::with_query(self.collection_url(resource), query)?;
        let request = self.client.get(url);
        let body = Self::send(request).await?.bytes().await?;

        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl ListingWriter for HttpBackend {
    async fn update_listing_status(
        &self,
        resource: ListingResource,
        id: &ResourceId,
        query: &BackendQuery,
    ) -> RepositoryResult<()> {
        let url = Self::with_query(self.item_url(resource, id), query)?;
        let request = self.client.patch(url);
        Self::send(request).await?;
        Ok(())
    }

    async fn delete_listing(
        &self,
        resource: ListingResource,
        id: &ResourceId,
    ) -> RepositoryResult<()> {
        Self::send(self.client.delete(self.item_url(resource, id))).await?;
        Ok(())
    }
}
