//! Route Comparison Service
//!
//! Filters and ranks door-to-door journey options (flight, train, bus, ferry, car,
//! bike legs chained together) according to the traveller's filters and travel
//! style, and decorates each option with the values shown on its card.

use crate::models::route::{
    ComparedRoute, JourneyRoute, JourneySegment, RouteFilters, SortBy, TransportType, TravelStyle,
};
use std::cmp::Ordering;

pub struct RouteComparisonService;

impl RouteComparisonService {
    /// Overlay the preset of the chosen travel style on the filters.
    pub fn apply_travel_style(filters: &RouteFilters) -> RouteFilters {
        let mut filters = filters.clone();
        match filters.travel_style {
            TravelStyle::All => {}
            TravelStyle::Budget => filters.sort_by = SortBy::Cheapest,
            TravelStyle::Eco => {
                filters.sort_by = SortBy::Eco;
                filters.transport_types = vec![
                    TransportType::Train,
                    TransportType::Bus,
                    TransportType::Bike,
                    TransportType::Ferry,
                ];
            }
            TravelStyle::Time => {
                filters.sort_by = SortBy::Fastest;
                filters.max_transfers = 1;
            }
            TravelStyle::Adventure => filters.sort_by = SortBy::Experience,
        }
        filters
    }

    pub fn matches(route: &JourneyRoute, filters: &RouteFilters) -> bool {
        let has_allowed_transport = route
            .journey_segments
            .iter()
            .any(|segment| filters.transport_types.contains(&segment.transport_type));
        let within_transfer_limit = route.num_transfers <= filters.max_transfers;
        let (min_cost, max_cost) = filters.budget_range;
        let within_budget = route.total_cost >= min_cost && route.total_cost <= max_cost;

        has_allowed_transport && within_transfer_limit && within_budget
    }

    fn ordering(a: &JourneyRoute, b: &JourneyRoute, sort_by: SortBy) -> Ordering {
        match sort_by {
            SortBy::Cheapest => a.total_cost.total_cmp(&b.total_cost),
            SortBy::Fastest => a.total_duration_minutes.cmp(&b.total_duration_minutes),
            SortBy::Eco => a.carbon_footprint_kg.total_cmp(&b.carbon_footprint_kg),
            SortBy::Experience => b.comfort_rating.total_cmp(&a.comfort_rating),
        }
    }

    pub fn compare_routes(routes: Vec<JourneyRoute>, filters: &RouteFilters) -> Vec<ComparedRoute> {
        let filters = Self::apply_travel_style(filters);

        let mut kept: Vec<JourneyRoute> = routes
            .into_iter()
            .filter(|route| Self::matches(route, &filters))
            .collect();
        // Stable, so equal routes keep their submitted order
        kept.sort_by(|a, b| Self::ordering(a, b, filters.sort_by));

        kept.into_iter().map(Self::decorate).collect()
    }

    fn decorate(route: JourneyRoute) -> ComparedRoute {
        ComparedRoute {
            label: route.route_type.label(),
            from: route
                .journey_segments
                .first()
                .map(|segment| segment.from_location.clone()),
            to: route
                .journey_segments
                .last()
                .map(|segment| segment.to_location.clone()),
            formatted_duration: format_duration(route.total_duration_minutes),
            formatted_cost: format_cost(route.total_cost),
            layovers: layovers(&route.journey_segments),
            segment_durations: route
                .journey_segments
                .iter()
                .map(|segment| segment.duration_minutes.map(format_segment_duration))
                .collect(),
            route,
        }
    }
}

/// Route totals always show hours, e.g. "0h 45m".
pub fn format_duration(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Single legs drop the hours when under one hour, e.g. "45m".
pub fn format_segment_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

pub fn format_cost(cost: f64) -> String {
    format!("${:.0}", cost)
}

/// Minutes between each leg's arrival and the next leg's departure.
pub fn layovers(segments: &[JourneySegment]) -> Vec<i64> {
    segments
        .windows(2)
        .filter_map(|pair| match (pair[0].arrival_time, pair[1].departure_time) {
            (Some(arrival), Some(departure)) => Some((departure - arrival).num_minutes()),
            _ => None,
        })
        .collect()
}
