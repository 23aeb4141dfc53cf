//! HTTP handlers and route configuration.

mod contents;
mod health;
mod root;

use actix_web::{HttpRequest, error, web};

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/", web::get().to(root::index))
        .service(
            web::scope("/api")
                .route("/hello", web::get().to(root::hello))
                .route("/health", web::get().to(health::health_check))
                .service(
                    web::resource(["/contents", "/contents/"])
                        .route(web::post().to(contents::create_content))
                        .route(web::get().to(contents::list_contents)),
                ),
        );
}

/// Malformed or incomplete JSON bodies become problem-details 400s.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: error::JsonPayloadError, _req: &HttpRequest| {
        AppError::BadRequest(err.to_string()).into()
    })
}
