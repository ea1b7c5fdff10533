//! Fixed-string greeting endpoints under `/api`.

use actix_web::HttpResponse;
use log::debug;

use crate::constants::{LOG_SALAM, MSG_HELLO, MSG_PRIVET, MSG_SALAM};
use crate::models::HealthResponse;

fn text(body: &'static str) -> HttpResponse {
    HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(body)
}

pub async fn hello() -> HttpResponse {
    text(MSG_HELLO)
}

pub async fn salam() -> HttpResponse {
    debug!("{}", LOG_SALAM);
    text(MSG_SALAM)
}

pub async fn privet() -> HttpResponse {
    text(MSG_PRIVET)
}

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::ok())
}

#[cfg(test)]
mod tests {
    use actix_web::http::{Method, StatusCode};
    use actix_web::{test, App};

    use crate::routes::configure_routes;

    #[actix_web::test]
    async fn test_greetings_are_stable_across_calls_and_methods() {
        let app = test::init_service(App::new().configure(configure_routes)).await;

        let greetings = [
            ("/api", "hello"),
            ("/api/salam", "salam"),
            ("/api/privet", "privet"),
        ];
        for (path, expected) in greetings {
            for method in [Method::GET, Method::POST, Method::GET] {
                let req = test::TestRequest::default()
                    .method(method)
                    .uri(path)
                    .to_request();
                let resp = test::call_service(&app, req).await;
                assert_eq!(resp.status(), StatusCode::OK, "{}", path);

                let body = test::read_body(resp).await;
                assert_eq!(body, expected.as_bytes());
            }
        }
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::get().uri("/api/health").to_request();
        let json: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(json["status"], "OK");
        assert_eq!(json["message"], "Server is running");
    }
}
