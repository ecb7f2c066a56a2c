//! Prompt Builder
//!
//! Turns a [`TripRequest`] into the instructions sent to the model gateway together
//! with the single function the model is forced to call. Everything here is a pure
//! function of the request: the same request always yields byte-identical prompts.

use crate::models::{itinerary::ActivityType, trip::TripRequest};
use serde_json::{json, Value};

/// Name of the function the model must call to return its itinerary.
pub const ITINERARY_TOOL_NAME: &str = "return_itinerary";

const SYSTEM_PROMPT: &str = "You are an expert travel planner with deep knowledge of destinations worldwide. \
Create detailed, practical, and exciting travel itineraries that match the traveler's interests and budget. \
Always answer by calling the return_itinerary function.";

const MIN_ITEMS_PER_DAY: u32 = 3;
const MAX_ITEMS_PER_DAY: u32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryPrompt {
    pub system: String,
    pub user: String,
    pub tool: ToolSpec,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: Value,
}

pub fn build_prompt(trip: &TripRequest) -> ItineraryPrompt {
    ItineraryPrompt {
        system: SYSTEM_PROMPT.to_string(),
        user: user_prompt(trip),
        tool: itinerary_tool(),
    }
}

fn user_prompt(trip: &TripRequest) -> String {
    let days = trip.trip_length_days();

    let mut details = vec![
        format!("- Dates: {} to {} ({} days)", trip.start_date, trip.end_date, days),
        format!("- Budget: {}", trip.budget),
        format!("- Interests: {}", trip.interests),
    ];
    if let Some(origin) = trip.origin() {
        details.push(format!("- Traveling from: {}", origin));
    }
    if let Some(mode) = trip.transport_mode.preference() {
        details.push(format!("- Preferred transport: {}", mode));
    }

    let mut prompt = format!(
        "Create a detailed {days}-day travel itinerary for {destination} for {travelers} traveler(s).\n\n\
Travel Details:\n{details}\n\n\
For every day, plan {min}-{max} items in this order: a morning activity, a midday activity, a meal, then an afternoon or evening activity.\n\
Give each item a start time in 24-hour HH:MM format, a specific location, a short practical description and 1-3 short highlight tags.\n\
Write costs as a currency-prefixed string such as \"$25\" or \"€40-60\", matching the {budget} budget.\n\
Number the days from 1 to {days} and add a one-line summary for each day.",
        days = days,
        destination = trip.destination,
        travelers = trip.travelers,
        details = details.join("\n"),
        min = MIN_ITEMS_PER_DAY,
        max = MAX_ITEMS_PER_DAY,
        budget = trip.budget,
    );

    if let Some(origin) = trip.origin() {
        let by_mode = trip
            .transport_mode
            .preference()
            .map(|mode| format!(" by {}", mode))
            .unwrap_or_default();
        prompt.push_str(&format!(
            "\nStart day 1 with a transport item for the journey from {}{} to {}.",
            origin, by_mode, trip.destination
        ));
    }

    prompt.push_str(&format!(
        "\nReturn the complete itinerary by calling the {} function.",
        ITINERARY_TOOL_NAME
    ));
    prompt
}

/// Function definition describing the itinerary document the model must return.
pub fn itinerary_tool() -> ToolSpec {
    let kinds: Vec<&str> = ActivityType::ALL.iter().map(|kind| kind.as_str()).collect();

    ToolSpec {
        name: ITINERARY_TOOL_NAME,
        description: "Return a structured day-by-day travel itinerary",
        parameters: json!({
            "type": "object",
            "properties": {
                "destination": { "type": "string" },
                "days": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "day": { "type": "integer", "minimum": 1 },
                            "date": { "type": "string", "description": "Calendar date, YYYY-MM-DD" },
                            "summary": { "type": "string" },
                            "items": {
                                "type": "array",
                                "minItems": MIN_ITEMS_PER_DAY,
                                "maxItems": MAX_ITEMS_PER_DAY,
                                "items": {
                                    "type": "object",
                                    "properties": {
                                        "title": { "type": "string" },
                                        "type": { "type": "string", "enum": kinds },
                                        "timeStart": { "type": "string", "description": "24-hour HH:MM" },
                                        "timeEnd": { "type": "string", "description": "24-hour HH:MM" },
                                        "location": { "type": "string" },
                                        "cost": { "type": "string", "description": "Currency-prefixed amount, e.g. \"$25\"" },
                                        "description": { "type": "string" },
                                        "highlights": {
                                            "type": "array",
                                            "items": { "type": "string" }
                                        }
                                    },
                                    "required": ["title", "type", "timeStart", "location", "description", "highlights"]
                                }
                            }
                        },
                        "required": ["day", "items"]
                    }
                }
            },
            "required": ["destination", "days"]
        }),
    }
}
