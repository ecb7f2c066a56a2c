use actix_cors::Cors;
use actix_web::{http::Method, middleware::DefaultHeaders, HttpRequest, HttpResponse};
use serde_json::json;

pub const ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Browser CORS handling: any origin, method and header, answered with a wildcard.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

/// Headers added to every response, including ones to requests without an `Origin`.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Headers", ALLOW_HEADERS))
}

/// Empty 200 for `OPTIONS`, whatever the path.
pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

pub async fn fallback(req: HttpRequest) -> HttpResponse {
    if req.method() == Method::OPTIONS {
        return preflight().await;
    }
    HttpResponse::NotFound().json(json!({ "error": "Not found" }))
}
