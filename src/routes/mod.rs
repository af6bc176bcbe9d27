use actix_web::HttpResponse;
use serde_json::json;

use crate::services::ServiceError;

pub mod api;

/// Converts a service failure into the JSON error response sent to the UI.
pub fn service_error_response(err: &ServiceError) -> HttpResponse {
    let body = json!({ "error": err.to_string() });
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().json(body),
        ServiceError::Unauthorized => HttpResponse::Unauthorized().json(body),
        ServiceError::TypeConstraint(_) | ServiceError::InvalidArgument(_) => {
            HttpResponse::BadRequest().json(body)
        }
        ServiceError::Backend(_) => HttpResponse::BadGateway().json(body),
    }
}
