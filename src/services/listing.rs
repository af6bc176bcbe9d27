use serde_json::Value;

use crate::domain::listing::ListingResource;
use crate::domain::types::{ListingStatus, ResourceId};
use crate::dto::api::ListingRequest;
use crate::pagination::{PaginationEnvelope, attach_page_count};
use crate::repository::{ListingReader, ListingWriter};
use crate::services::{ServiceError, ServiceResult};
use crate::translator::{SearchParams, translate_outbound};

/// Loads one page of `resource` for the UI's search parameters.
pub async fn list_listings<R>(
    repo: &R,
    resource: ListingResource,
    request: ListingRequest,
) -> ServiceResult<PaginationEnvelope<Value>>
where
    R: ListingReader + ?Sized,
{
    let query = translate_outbound(&request.params, request.status);

    let envelope = repo.fetch_listing(resource, &query).await.map_err(|err| {
        log::error!("Failed to fetch {resource}: {err}");
        ServiceError::from(err)
    })?;

    Ok(attach_page_count(envelope)?)
}

/// Moves a single record of `resource` to another publication status.
pub async fn update_listing_status<R>(
    repo: &R,
    resource: ListingResource,
    id: &str,
    status: &str,
) -> ServiceResult<()>
where
    R: ListingWriter + ?Sized,
{
    let id = ResourceId::new(id)?;
    let status = status.parse::<ListingStatus>()?;
    let query = translate_outbound(&SearchParams::new(), Some(status));

    repo.update_listing_status(resource, &id, &query)
        .await
        .map_err(|err| {
            log::error!("Failed to set status of {resource}/{id} to {status}: {err}");
            ServiceError::from(err)
        })
}

/// Deletes a single record of `resource`.
pub async fn delete_listing<R>(repo: &R, resource: ListingResource, id: &str) -> ServiceResult<()>
where
    R: ListingWriter + ?Sized,
{
    let id = ResourceId::new(id)?;

    repo.delete_listing(resource, &id).await.map_err(|err| {
        log::error!("Failed to delete {resource}/{id}: {err}");
        ServiceError::from(err)
    })
}
