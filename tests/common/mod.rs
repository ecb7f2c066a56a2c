#![allow(dead_code)]

use actix_http::Request;
use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceResponse},
    middleware::Logger,
    test, web, App, Error,
};
use serde_json::{json, Value};
use tripcraft_api::{
    middleware::cors,
    routes,
    services::{gateway_client::GatewayConfig, itinerary_generation_service::ItineraryGenerator},
};
use url::Url;

pub const TEST_API_KEY: &str = "test-key-0123456789";
pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Same wiring as the server binary, pointed at the given gateway.
pub async fn init_app(
    config: GatewayConfig,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    test::init_service(
        App::new()
            .wrap(cors::cors_headers())
            .wrap(cors::cors())
            .wrap(Logger::default())
            .app_data(web::Data::new(ItineraryGenerator::new(config)))
            .configure(routes::configure)
            .default_service(web::to(cors::fallback)),
    )
    .await
}

pub fn gateway_config(server_url: &str) -> GatewayConfig {
    GatewayConfig::new(
        Some(TEST_API_KEY.to_string()),
        Url::parse(&format!("{}{}", server_url, COMPLETIONS_PATH)).unwrap(),
        "test-model",
    )
}

pub fn unconfigured_gateway(server_url: &str) -> GatewayConfig {
    GatewayConfig::new(
        None,
        Url::parse(&format!("{}{}", server_url, COMPLETIONS_PATH)).unwrap(),
        "test-model",
    )
}

/// Three-day Paris trip as the web form posts it (travelers as a string).
pub fn paris_trip() -> Value {
    json!({
        "destination": "Paris",
        "startDate": "2025-05-01",
        "endDate": "2025-05-03",
        "travelers": "2",
        "interests": "art, food",
        "budget": "moderate"
    })
}

pub fn sample_itinerary() -> Value {
    json!({
        "destination": "Paris",
        "days": [
            {
                "day": 1,
                "date": "2025-05-01",
                "summary": "Museums and the Marais",
                "items": [
                    {
                        "title": "Louvre Museum",
                        "type": "activity",
                        "timeStart": "09:00",
                        "timeEnd": "12:00",
                        "location": "Rue de Rivoli",
                        "cost": "€22",
                        "description": "Start early to beat the queues",
                        "highlights": ["Mona Lisa", "Winged Victory"]
                    },
                    {
                        "title": "Falafel on Rue des Rosiers",
                        "type": "meal",
                        "timeStart": "12:30",
                        "location": "Le Marais",
                        "cost": "€10",
                        "description": "Quick lunch at L'As du Fallafel",
                        "highlights": ["street food"]
                    }
                ]
            }
        ]
    })
}

pub fn tool_call_completion(arguments: &str) -> String {
    json!({
        "id": "chatcmpl-1",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": null,
                "tool_calls": [{
                    "id": "call_1",
                    "type": "function",
                    "function": { "name": "return_itinerary", "arguments": arguments }
                }]
            },
            "finish_reason": "tool_calls"
        }]
    })
    .to_string()
}

pub fn content_completion(content: Option<&str>) -> String {
    json!({
        "id": "chatcmpl-2",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
    .to_string()
}
