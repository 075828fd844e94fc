pub mod config;
pub mod error;
pub mod optimization_request;
pub mod optimization_response;
pub mod route_optimization_client;
pub mod route_optimization_provider;
pub mod van_capacity;
