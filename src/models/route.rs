use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransportType {
    Flight,
    Train,
    Bus,
    Ferry,
    Car,
    Bike,
    Walk,
    Taxi,
    Uber,
}

impl TransportType {
    /// Types a traveller can toggle in the route filters.
    pub const SELECTABLE: [TransportType; 6] = [
        TransportType::Flight,
        TransportType::Train,
        TransportType::Bus,
        TransportType::Ferry,
        TransportType::Car,
        TransportType::Bike,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TransportType::Flight => "Flights",
            TransportType::Train => "Trains",
            TransportType::Bus => "Buses",
            TransportType::Ferry => "Ferries",
            TransportType::Car => "Cars",
            TransportType::Bike => "Bikes",
            TransportType::Walk => "Walking",
            TransportType::Taxi => "Taxis",
            TransportType::Uber => "Ride share",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RouteType {
    Cheapest,
    Fastest,
    Eco,
    Experience,
    #[default]
    #[serde(other)]
    Balanced,
}

impl RouteType {
    pub fn label(&self) -> &'static str {
        match self {
            RouteType::Cheapest => "Best Value",
            RouteType::Fastest => "Fastest Route",
            RouteType::Eco => "Greenest Option",
            RouteType::Experience => "Best Experience",
            RouteType::Balanced => "Balanced",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct JourneySegment {
    pub transport_type: TransportType,
    pub from_location: String,
    pub to_location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_link: Option<Url>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub luggage_policy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbon_kg: Option<f64>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct JourneyRoute {
    pub id: String,
    #[serde(default)]
    pub route_type: RouteType,
    pub total_duration_minutes: u32,
    pub total_cost: f64,
    #[serde(default)]
    pub carbon_footprint_kg: f64,
    #[serde(default)]
    pub num_transfers: u32,
    #[serde(default)]
    pub comfort_rating: f64,
    #[serde(default)]
    pub is_recommended: bool,
    #[serde(default)]
    pub journey_segments: Vec<JourneySegment>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Cheapest,
    Fastest,
    Eco,
    Experience,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TravelStyle {
    #[default]
    All,
    Budget,
    Eco,
    Time,
    Adventure,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct RouteFilters {
    pub sort_by: SortBy,
    pub transport_types: Vec<TransportType>,
    pub max_transfers: u32,
    pub budget_range: (f64, f64),
    pub travel_style: TravelStyle,
}

impl Default for RouteFilters {
    fn default() -> Self {
        Self {
            sort_by: SortBy::Cheapest,
            transport_types: TransportType::SELECTABLE.to_vec(),
            max_transfers: 3,
            budget_range: (0.0, 2000.0),
            travel_style: TravelStyle::All,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CompareRoutesRequest {
    pub routes: Vec<JourneyRoute>,
    #[serde(default)]
    pub filters: RouteFilters,
}

#[derive(Debug, Serialize, Clone)]
pub struct ComparedRoute {
    #[serde(flatten)]
    pub route: JourneyRoute,
    pub label: &'static str,
    pub from: Option<String>,
    pub to: Option<String>,
    pub formatted_duration: String,
    pub formatted_cost: String,
    pub layovers: Vec<i64>,
    /// One entry per segment, `None` where the segment has no duration.
    pub segment_durations: Vec<Option<String>>,
}

#[derive(Debug, Serialize)]
pub struct CompareRoutesResponse {
    pub total: usize,
    pub routes: Vec<ComparedRoute>,
}
