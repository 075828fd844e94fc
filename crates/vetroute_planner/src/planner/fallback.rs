use crate::problem::{stop::Stop, zone::ZoneWeights};

/// Orders stops by ascending zone weight. The sort is stable so stops sharing
/// a weight keep their input order.
pub fn sort_by_zone_weight(
    stops: &[Stop],
    zone_weights: &ZoneWeights,
    default_weight: f64,
) -> Vec<Stop> {
    let weight = |stop: &Stop| zone_weights.weight_or(stop.zone_name(), default_weight);

    let mut sorted = stops.to_vec();
    sorted.sort_by(|a, b| weight(a).total_cmp(&weight(b)));
    sorted
}
