//! Greeting endpoints.

use actix_web::HttpResponse;
use quill_shared::dto::MessageResponse;

/// GET /
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse {
        message: "Welcome to the Quill content generation API!".to_string(),
    })
}

/// GET /api/hello
pub async fn hello() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse {
        message: "Hello from Quill!".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use serde_json::Value;

    use super::*;

    #[actix_web::test]
    async fn test_greetings_return_a_message() {
        let app = test::init_service(
            App::new()
                .route("/", web::get().to(index))
                .route("/api/hello", web::get().to(hello)),
        )
        .await;

        for uri in ["/", "/api/hello"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);

            let body: Value = test::read_body_json(resp).await;
            assert!(body["message"].is_string());
        }
    }
}
