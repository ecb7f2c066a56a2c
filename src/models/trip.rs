use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    Budget,
    Moderate,
    Luxury,
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Budget::Budget => "budget",
            Budget::Moderate => "moderate",
            Budget::Luxury => "luxury",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    #[default]
    Any,
    Flight,
    Train,
    Bus,
    Car,
    Bike,
}

impl TransportMode {
    /// Phrase used when the mode is mentioned in a prompt, `None` for no preference.
    pub fn preference(&self) -> Option<&'static str> {
        match self {
            TransportMode::Any => None,
            TransportMode::Flight => Some("flying"),
            TransportMode::Train => Some("train"),
            TransportMode::Bus => Some("bus"),
            TransportMode::Car => Some("car"),
            TransportMode::Bike => Some("bike"),
        }
    }
}

/// Parameters of one generation attempt, as posted by the web client.
///
/// `travelers` arrives either as a JSON number or as the string value of a form
/// field, so both are accepted.
#[serde_as]
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub travelers: u32,
    #[serde(default)]
    pub interests: String,
    pub budget: Budget,
    #[serde(default)]
    pub transport_mode: TransportMode,
}

impl TripRequest {
    /// Inclusive number of calendar days covered by the trip.
    ///
    /// A trip that starts and ends on the same date is one day long. An end date
    /// before the start date is clamped to one day instead of being rejected.
    pub fn trip_length_days(&self) -> u32 {
        let span = (self.end_date - self.start_date).num_days() + 1;
        span.max(1) as u32
    }

    /// Origin with surrounding whitespace removed, `None` when blank.
    pub fn origin(&self) -> Option<&str> {
        self.origin
            .as_deref()
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
    }
}
