use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use tripcraft_api::{
    middleware::cors,
    routes,
    services::{gateway_client::GatewayConfig, itinerary_generation_service::ItineraryGenerator},
};

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);

    let config = GatewayConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    if config.api_key().is_err() {
        log::warn!("LOVABLE_API_KEY is not set; itinerary generation will fail until it is");
    }
    log::info!("Using model {} at {}", config.model, config.endpoint);

    let generator = web::Data::new(ItineraryGenerator::new(config));

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(cors::cors_headers())
            .wrap(cors::cors())
            .wrap(Logger::default())
            .app_data(generator.clone())
            .configure(routes::configure)
            .default_service(web::to(cors::fallback))
    })
    .bind((host, port))?
    .run()
    .await
}
