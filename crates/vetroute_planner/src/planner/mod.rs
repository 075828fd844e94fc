pub mod fallback;
pub mod itinerary;
pub mod planning_request;
pub mod planning_session;
pub mod route;
pub mod route_optimizer;
