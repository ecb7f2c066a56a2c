pub mod gateway_client;
pub mod itinerary_generation_service;
pub mod prompt_builder;
pub mod response_reconciler;
pub mod route_comparison_service;
