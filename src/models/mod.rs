pub mod itinerary;
pub mod route;
pub mod trip;
