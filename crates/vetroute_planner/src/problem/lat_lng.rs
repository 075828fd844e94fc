use geo::{Distance, Euclidean, Haversine};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use vetroute_providers::optimization_request::WireLatLng;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// `(0, 0)` and non finite values are placeholders left by incomplete records.
    pub fn is_missing(&self) -> bool {
        !self.lat.is_finite() || !self.lng.is_finite() || (self.lat == 0.0 && self.lng == 0.0)
    }

    pub fn point(&self) -> geo::Point {
        geo::Point::new(self.lng, self.lat)
    }

    /// Distance in raw degrees, not geodesic.
    pub fn euclidean_distance(&self, to: &LatLng) -> f64 {
        let euclidean = Euclidean;
        euclidean.distance(&self.point(), &to.point())
    }

    /// Distance in meters along the great circle.
    pub fn haversine_distance(&self, to: &LatLng) -> f64 {
        let haversine = Haversine;
        haversine.distance(self.point(), to.point())
    }
}

impl From<&LatLng> for geo::Coord<f64> {
    fn from(value: &LatLng) -> Self {
        geo::Coord {
            x: value.lng,
            y: value.lat,
        }
    }
}

impl From<LatLng> for WireLatLng {
    fn from(value: LatLng) -> Self {
        WireLatLng {
            lat: value.lat,
            lng: value.lng,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_distance_in_degrees() {
        let a = LatLng::new(0.0, 0.0);
        let b = LatLng::new(3.0, 4.0);

        assert!((a.euclidean_distance(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_haversine_distance() {
        let clinic = LatLng::new(25.6866, -100.3161);
        let centro = LatLng::new(25.669, -100.309);

        let meters = clinic.haversine_distance(&centro);

        assert!(meters > 1_500.0 && meters < 2_500.0, "{meters}");
    }

    #[test]
    fn test_missing() {
        assert!(LatLng::new(0.0, 0.0).is_missing());
        assert!(LatLng::new(f64::NAN, 1.0).is_missing());
        assert!(!LatLng::new(0.0, -100.0).is_missing());
    }
}
