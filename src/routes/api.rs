use actix_web::{HttpRequest, HttpResponse, Responder, delete, get, patch, web};
use log::error;
use serde::Deserialize;

use crate::domain::listing::ListingResource;
use crate::dto::api::ListingRequest;
use crate::repository::ListingBackend;
use crate::routes::service_error_response;
use crate::services::{ServiceError, listing as listing_service};
use crate::translator::SearchParams;

#[derive(Deserialize)]
struct StatusQueryParams {
    status: String,
}

fn parse_resource(segment: &str) -> Result<ListingResource, HttpResponse> {
    segment.parse::<ListingResource>().map_err(|err| {
        error!("Rejected listing request: {err}");
        service_error_response(&ServiceError::NotFound)
    })
}

#[get("/v1/{resource}")]
pub async fn api_v1_list(
    req: HttpRequest,
    resource: web::Path<String>,
    backend: web::Data<dyn ListingBackend>,
) -> impl Responder {
    let resource = match parse_resource(&resource) {
        Ok(resource) => resource,
        Err(response) => return response,
    };

    let pairs = match web::Query::<Vec<(String, String)>>::from_query(req.query_string()) {
        Ok(pairs) => pairs.into_inner(),
        Err(e) => {
            error!("Failed to parse search parameters: {e}");
            return HttpResponse::BadRequest().finish();
        }
    };

    let request = match ListingRequest::from_params(SearchParams::from(pairs)) {
        Ok(request) => request,
        Err(e) => return service_error_response(&ServiceError::from(e)),
    };

    match listing_service::list_listings(backend.get_ref(), resource, request).await {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => service_error_response(&e),
    }
}

#[patch("/v1/{resource}/{id}")]
pub async fn api_v1_update_status(
    path: web::Path<(String, String)>,
    params: web::Query<StatusQueryParams>,
    backend: web::Data<dyn ListingBackend>,
) -> impl Responder {
    let (resource, id) = path.into_inner();
    let resource = match parse_resource(&resource) {
        Ok(resource) => resource,
        Err(response) => return response,
    };

    match listing_service::update_listing_status(backend.get_ref(), resource, &id, &params.status)
        .await
    {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => service_error_response(&e),
    }
}

#[delete("/v1/{resource}/{id}")]
pub async fn api_v1_delete(
    path: web::Path<(String, String)>,
    backend: web::Data<dyn ListingBackend>,
) -> impl Responder {
    let (resource, id) = path.into_inner();
    let resource = match parse_resource(&resource) {
        Ok(resource) => resource,
        Err(response) => return response,
    };

    match listing_service::delete_listing(backend.get_ref(), resource, &id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => service_error_response(&e),
    }
}
