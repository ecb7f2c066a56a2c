use crate::{
    middleware::cors::preflight,
    models::route::{CompareRoutesRequest, CompareRoutesResponse},
    services::route_comparison_service::RouteComparisonService,
};
use actix_web::{error::InternalError, web, HttpResponse, Resource};
use serde_json::json;

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        InternalError::from_response(err, HttpResponse::BadRequest().json(json!({ "error": message })))
            .into()
    })
}

pub fn resource(path: &str) -> Resource {
    web::resource(path)
        .app_data(json_config())
        .route(web::post().to(compare))
        .route(web::method(actix_web::http::Method::OPTIONS).to(preflight))
}

/*
    /api/routes/compare
*/
pub async fn compare(input: web::Json<CompareRoutesRequest>) -> HttpResponse {
    let CompareRoutesRequest { routes, filters } = input.into_inner();
    let submitted = routes.len();

    let routes = RouteComparisonService::compare_routes(routes, &filters);
    log::info!("Compared {} routes, {} match the filters", submitted, routes.len());

    HttpResponse::Ok().json(CompareRoutesResponse {
        total: routes.len(),
        routes,
    })
}
