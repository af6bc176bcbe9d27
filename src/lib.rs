#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod translator;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
mod error_conversions;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use std::sync::Arc;

    use actix_cors::Cors;
    use actix_web::{App, HttpServer, middleware, web};

    use crate::models::config::ServerConfig;
    use crate::repository::{HttpBackend, ListingBackend};
    use crate::routes::api::{api_v1_delete, api_v1_list, api_v1_update_status};

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let backend = HttpBackend::new(&server_config.backend_url, server_config.backend_timeout())
            .map_err(|e| std::io::Error::other(format!("Failed to build backend client: {e}")))?;
        let backend: Arc<dyn ListingBackend> = Arc::new(backend);

        let bind_address = (server_config.address.clone(), server_config.port);
        log::info!(
            "Listening on {}:{}, forwarding to {}",
            bind_address.0,
            bind_address.1,
            server_config.backend_url
        );

        HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(
                    web::scope("/api")
                        .service(api_v1_list)
                        .service(api_v1_update_status)
                        .service(api_v1_delete),
                )
                .app_data(web::Data::from(backend.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
