//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

use crate::middleware::error::configure_extractors;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    configure_extractors(cfg);

    cfg.service(
        web::scope("/api")
            // Operational routes
            .route("/health", web::get().to(health::health_check))
            // Post routes
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list_posts))
                    .route("", web::post().to(posts::create_post))
                    .route("/excel", web::post().to(posts::import_posts))
                    .route("/{id}", web::get().to(posts::get_post))
                    .route("/{id}", web::delete().to(posts::delete_post)),
            ),
    );
}
