use crate::models::{itinerary::ItineraryJson, trip::TripRequest};
use crate::services::gateway_client::{GatewayClient, GatewayConfig};
use crate::services::prompt_builder::build_prompt;
use crate::services::response_reconciler::{reconcile, Tier};
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use std::error::Error;
use std::fmt;
use uuid::Uuid;

#[derive(Debug)]
pub enum GenerationError {
    Configuration(String),
    InvalidRequest(String),
    RateLimited,
    QuotaExhausted,
    Gateway { status: u16 },
    Transport(reqwest::Error),
    InvalidGatewayResponse(String),
    NoContentReturned,
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::Configuration(msg) => write!(f, "{}", msg),
            GenerationError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            GenerationError::RateLimited => {
                write!(f, "Rate limit exceeded. Please try again in a moment.")
            }
            GenerationError::QuotaExhausted => {
                write!(f, "AI credits depleted. Please add credits to continue.")
            }
            GenerationError::Gateway { .. } => write!(f, "AI gateway error"),
            GenerationError::Transport(err) => write!(f, "AI gateway unreachable: {}", err),
            GenerationError::InvalidGatewayResponse(msg) => write!(f, "{}", msg),
            GenerationError::NoContentReturned => write!(f, "No itinerary generated"),
        }
    }
}

impl Error for GenerationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GenerationError::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        GenerationError::Transport(err)
    }
}

impl ResponseError for GenerationError {
    fn status_code(&self) -> StatusCode {
        match self {
            GenerationError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            GenerationError::QuotaExhausted => StatusCode::PAYMENT_REQUIRED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

/// Runs one generation: prompt, single gateway call, reconciliation.
#[derive(Clone)]
pub struct ItineraryGenerator {
    gateway: GatewayClient,
}

impl ItineraryGenerator {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            gateway: GatewayClient::new(config),
        }
    }

    pub fn gateway_config(&self) -> &GatewayConfig {
        self.gateway.config()
    }

    pub async fn generate(&self, trip: &TripRequest) -> Result<ItineraryJson, GenerationError> {
        let request_id = Uuid::new_v4();
        log::info!(
            "[{}] Generating itinerary for {} ({} to {}, {} traveler(s), {} budget)",
            request_id,
            trip.destination,
            trip.start_date,
            trip.end_date,
            trip.travelers,
            trip.budget
        );

        let prompt = build_prompt(trip);
        let message = self.gateway.complete(&prompt).await.map_err(|err| {
            log::error!("[{}] Generation failed: {}", request_id, err);
            err
        })?;

        let reconciled = reconcile(&message, trip).map_err(|err| {
            log::error!("[{}] Generation failed: {}", request_id, err);
            err
        })?;

        match reconciled.tier {
            Tier::RawText => log::warn!(
                "[{}] Itinerary returned as raw text ({} days)",
                request_id,
                reconciled.itinerary.day_count()
            ),
            tier => log::info!(
                "[{}] Itinerary generated successfully from {} ({} days)",
                request_id,
                tier,
                reconciled.itinerary.day_count()
            ),
        }

        Ok(reconciled.itinerary)
    }
}
