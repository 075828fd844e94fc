pub mod zone_weights;
