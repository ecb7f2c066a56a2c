use crate::services::gateway_client::GatewayConfig;
use crate::services::itinerary_generation_service::ItineraryGenerator;
use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(generator: web::Data<ItineraryGenerator>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let gateway_result = check_ai_gateway(generator.gateway_config());
    health
        .services
        .insert("ai_gateway".to_string(), gateway_result.clone());

    if health.services.values().any(|service| service.status != "ok") {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

// Configuration only; the gateway is not called so health checks cost no credits
fn check_ai_gateway(config: &GatewayConfig) -> ServiceStatus {
    match config.masked_key() {
        Some(masked_key) => ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!(
                "AI gateway key configured ({}), endpoint: {}, model: {}",
                masked_key,
                config.endpoint.host_str().unwrap_or("unknown"),
                config.model
            )),
        },
        None => ServiceStatus {
            status: "error".to_string(),
            details: Some("LOVABLE_API_KEY not configured".to_string()),
        },
    }
}
