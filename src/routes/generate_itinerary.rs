use crate::{
    middleware::cors::preflight,
    models::{itinerary::GeneratedItinerary, trip::TripRequest},
    services::itinerary_generation_service::{GenerationError, ItineraryGenerator},
};
use actix_web::{web, HttpResponse, Resource};

/// Unreadable bodies are reported like any other failure of the generation call.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| GenerationError::InvalidRequest(err.to_string()).into())
}

pub fn resource(path: &str) -> Resource {
    web::resource(path)
        .app_data(json_config())
        .route(web::post().to(generate))
        .route(web::method(actix_web::http::Method::OPTIONS).to(preflight))
}

/*
    /api/generate-itinerary
*/
pub async fn generate(
    generator: web::Data<ItineraryGenerator>,
    input: web::Json<TripRequest>,
) -> Result<HttpResponse, GenerationError> {
    let trip = input.into_inner();
    let itinerary = generator.generate(&trip).await?;

    Ok(HttpResponse::Ok().json(GeneratedItinerary {
        itinerary_json: itinerary,
    }))
}
