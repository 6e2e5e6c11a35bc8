// src/api/routes.rs
use super::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health_check))
            .route("/languages", web::get().to(handlers::list_languages))
            .route("/execute", web::post().to(handlers::execute_code)),
    );
}
