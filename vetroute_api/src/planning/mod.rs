pub mod post_load_statistics;
pub mod post_plan;
pub mod post_zone_weights;
pub mod routes;
