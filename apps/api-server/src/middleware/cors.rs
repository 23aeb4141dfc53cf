//! Cross-origin policy.

use actix_cors::Cors;

/// Allow the listed origins only, with any method and header, credentials
/// included.
pub fn cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}

#[cfg(test)]
mod tests {
    use actix_web::http::{StatusCode, header};
    use actix_web::{App, HttpResponse, test, web};

    use super::*;

    fn origins() -> Vec<String> {
        vec!["http://localhost:8080".to_string()]
    }

    #[actix_web::test]
    async fn test_listed_origin_is_allowed_with_credentials() {
        let app = test::init_service(
            App::new()
                .wrap(cors(&origins()))
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "http://localhost:8080"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let headers = resp.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:8080"
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
            "true"
        );
    }

    #[actix_web::test]
    async fn test_unlisted_origin_is_rejected() {
        let app = test::init_service(
            App::new()
                .wrap(cors(&origins()))
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "https://evil.example"))
            .to_request();
        // Depending on the request shape the middleware either answers with
        // an error response or fails the call; both deny the origin.
        if let Ok(resp) = test::try_call_service(&app, req).await {
            assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
        }
    }
}
