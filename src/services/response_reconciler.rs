//! Response Reconciler
//!
//! Turns the gateway's answer into itinerary JSON through an ordered chain of
//! tiers. Each tier either yields a whole document or a [`TierFailure`]; nothing
//! is salvaged field by field from a failed tier.
//!
//! 1. `StructuredCall` - arguments of the forced `return_itinerary` function call
//! 2. `MessageJson` - the message text parsed as JSON, after removing code fence markers
//! 3. `RawText` - the message text kept verbatim next to one empty day per trip day
//!
//! JSON from tiers 1 and 2 must read as an [`ItineraryDocument`] but is returned as
//! parsed. Only a message with neither a usable function call nor any text is an error.

use crate::models::itinerary::{ItineraryDocument, ItineraryJson};
use crate::models::trip::TripRequest;
use crate::services::gateway_client::GatewayMessage;
use crate::services::itinerary_generation_service::GenerationError;
use crate::services::prompt_builder::ITINERARY_TOOL_NAME;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static OPENING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*```(?:json)?[ \t]*").unwrap());
static CLOSING_FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"```\s*$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    StructuredCall,
    MessageJson,
    RawText,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::StructuredCall => write!(f, "structured function call"),
            Tier::MessageJson => write!(f, "message JSON"),
            Tier::RawText => write!(f, "raw text"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TierFailure {
    NoToolCall,
    InvalidJson(String),
    NonConforming(String),
    NoContent,
}

impl fmt::Display for TierFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TierFailure::NoToolCall => write!(f, "no {} call in response", ITINERARY_TOOL_NAME),
            TierFailure::InvalidJson(msg) => write!(f, "invalid JSON: {}", msg),
            TierFailure::NonConforming(msg) => write!(f, "not an itinerary: {}", msg),
            TierFailure::NoContent => write!(f, "no message content"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reconciled {
    pub itinerary: ItineraryJson,
    pub tier: Tier,
}

pub fn reconcile(
    message: &GatewayMessage,
    trip: &TripRequest,
) -> Result<Reconciled, GenerationError> {
    match from_tool_call(message) {
        Ok(itinerary) => {
            return Ok(Reconciled {
                itinerary,
                tier: Tier::StructuredCall,
            })
        }
        Err(failure) => log::warn!("Structured call unusable, trying message text: {}", failure),
    }

    let content = match message_text(message) {
        Ok(content) => content,
        Err(_) => return Err(GenerationError::NoContentReturned),
    };

    match from_message_text(content) {
        Ok(itinerary) => Ok(Reconciled {
            itinerary,
            tier: Tier::MessageJson,
        }),
        Err(failure) => {
            log::warn!("Message text is not an itinerary, keeping raw text: {}", failure);
            let shell = raw_text_shell(trip, content);
            let itinerary = ItineraryJson::from_document(&shell)
                .map_err(|e| GenerationError::InvalidGatewayResponse(e.to_string()))?;
            Ok(Reconciled {
                itinerary,
                tier: Tier::RawText,
            })
        }
    }
}

/// Tier 1: arguments of the first `return_itinerary` call.
pub fn from_tool_call(message: &GatewayMessage) -> Result<ItineraryJson, TierFailure> {
    let call = message
        .tool_calls
        .iter()
        .flatten()
        .find(|call| call.function.name == ITINERARY_TOOL_NAME)
        .ok_or(TierFailure::NoToolCall)?;

    parse_itinerary(&call.function.arguments)
}

/// Tier 2: the message text as JSON, with ```json fence markers removed.
pub fn from_message_text(content: &str) -> Result<ItineraryJson, TierFailure> {
    parse_itinerary(strip_code_fence(content))
}

/// Tier 3: the unparsed text shown as-is, one empty day per trip day.
pub fn raw_text_shell(trip: &TripRequest, content: &str) -> ItineraryDocument {
    ItineraryDocument::raw_text(&trip.destination, trip.trip_length_days(), content)
}

/// Whitespace-only text still counts as an answer and ends up in the raw shell.
fn message_text(message: &GatewayMessage) -> Result<&str, TierFailure> {
    message
        .content
        .as_deref()
        .filter(|content| !content.is_empty())
        .ok_or(TierFailure::NoContent)
}

/// Removes a leading ```` ```json ```` and a trailing ```` ``` ````, each on its own.
pub fn strip_code_fence(content: &str) -> &str {
    let start = OPENING_FENCE.find(content).map_or(0, |m| m.end());
    let body = &content[start..];
    let end = CLOSING_FENCE.find(body).map_or(body.len(), |m| m.start());
    body[..end].trim()
}

fn parse_itinerary(text: &str) -> Result<ItineraryJson, TierFailure> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| TierFailure::InvalidJson(e.to_string()))?;

    ItineraryJson::checked(value).map_err(TierFailure::NonConforming)
}
