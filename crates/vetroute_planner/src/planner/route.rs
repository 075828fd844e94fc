use geojson::{Feature, Geometry};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::problem::{
    lat_lng::LatLng,
    stop::{Stop, StopId},
};

/// One hop of the route. `None` stands for the clinic.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct RouteLeg {
    pub from: Option<StopId>,
    pub to: Option<StopId>,
    pub distance_meters: f64,
}

/// Ordered stops, leaving from and returning to the clinic. The clinic is an
/// anchor coordinate, not a stop.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct Route {
    pub clinic: LatLng,
    pub stops: Vec<Stop>,
}

impl Route {
    pub fn new(clinic: LatLng, stops: Vec<Stop>) -> Self {
        Self { clinic, stops }
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn stop_ids(&self) -> Vec<&StopId> {
        self.stops.iter().map(|stop| &stop.id).collect()
    }

    pub fn legs(&self) -> Vec<RouteLeg> {
        if self.stops.is_empty() {
            return vec![];
        }

        let waypoints: Vec<(Option<&StopId>, LatLng)> = std::iter::once((None, self.clinic))
            .chain(
                self.stops
                    .iter()
                    .map(|stop| (Some(&stop.id), stop.coordinates)),
            )
            .chain(std::iter::once((None, self.clinic)))
            .collect();

        waypoints
            .windows(2)
            .map(|pair| {
                let (from, from_location) = pair[0];
                let (to, to_location) = pair[1];
                RouteLeg {
                    from: from.cloned(),
                    to: to.cloned(),
                    distance_meters: from_location.haversine_distance(&to_location),
                }
            })
            .collect()
    }

    pub fn total_distance_meters(&self) -> f64 {
        self.legs().iter().map(|leg| leg.distance_meters).sum()
    }

    /// Straight line polyline clinic to clinic, for the map overlay.
    pub fn to_geojson(&self) -> Feature {
        let mut coords: Vec<geo::Coord<f64>> = vec![(&self.clinic).into()];
        coords.extend(self.stops.iter().map(|stop| geo::Coord::from(&stop.coordinates)));
        coords.push((&self.clinic).into());

        let geometry = geo::LineString::new(coords);

        Feature {
            geometry: Some(Geometry::from(&geometry)),
            ..Default::default()
        }
    }
}
