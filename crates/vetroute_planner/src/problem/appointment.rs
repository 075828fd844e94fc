use fxhash::FxHashSet;
use jiff::civil::Date;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::problem::{
    lat_lng::LatLng,
    stop::{Stop, StopId},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Logistics {
    /// The clinic collects the pet at the client's address
    Pickup,
    DropOff,
    InClinic,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct Pet {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct Appointment {
    pub id: StopId,
    pub date: Date,
    pub logistics: Logistics,
    #[serde(default)]
    pub client_coordinates: Option<LatLng>,
    #[serde(default)]
    pub zone_name: Option<String>,
    #[serde(default)]
    pub pet: Option<Pet>,
    #[serde(default)]
    pub scheduled_time: Option<String>,
}

impl Appointment {
    pub fn is_pickup_on(&self, date: Date) -> bool {
        self.logistics == Logistics::Pickup && self.date == date
    }

    fn to_stop(&self, coordinates: LatLng) -> Stop {
        Stop {
            id: self.id.clone(),
            coordinates,
            zone_name: self.zone_name.clone(),
            pet_name: self.pet.as_ref().and_then(|pet| pet.name.clone()),
            pet_weight_kg: self.pet.as_ref().and_then(|pet| pet.weight_kg),
            scheduled_time: self.scheduled_time.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EligibleStops {
    pub stops: Vec<Stop>,

    /// Pickups dropped because the client has no usable coordinates
    pub missing_coordinates: Vec<StopId>,

    /// Repeated ids, only the first occurrence is planned
    pub duplicates: Vec<StopId>,
}

/// Keeps the pickups of `date` that can be located on a map.
pub fn eligible_stops(appointments: &[Appointment], date: Date) -> EligibleStops {
    let mut eligible = EligibleStops::default();
    let mut seen: FxHashSet<&StopId> = FxHashSet::default();

    for appointment in appointments.iter().filter(|a| a.is_pickup_on(date)) {
        let coordinates = match appointment.client_coordinates {
            Some(coordinates) if !coordinates.is_missing() => coordinates,
            _ => {
                debug!("Skipping pickup {}: no client coordinates", appointment.id);
                eligible.missing_coordinates.push(appointment.id.clone());
                continue;
            }
        };

        if !seen.insert(&appointment.id) {
            debug!("Skipping pickup {}: duplicated id", appointment.id);
            eligible.duplicates.push(appointment.id.clone());
            continue;
        }

        eligible.stops.push(appointment.to_stop(coordinates));
    }

    eligible
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn appointment(id: u64, logistics: Logistics, coordinates: Option<LatLng>) -> Appointment {
        Appointment {
            id: StopId::from(id),
            date: date(2026, 3, 14),
            logistics,
            client_coordinates: coordinates,
            zone_name: Some("centro".to_string()),
            pet: Some(Pet {
                name: Some("Firulais".to_string()),
                weight_kg: Some(12.0),
            }),
            scheduled_time: Some("10:30".to_string()),
        }
    }

    #[test]
    fn test_only_located_pickups_of_the_day() {
        let here = Some(LatLng::new(25.67, -100.31));
        let mut other_day = appointment(5, Logistics::Pickup, here);
        other_day.date = date(2026, 3, 15);

        let appointments = vec![
            appointment(1, Logistics::Pickup, here),
            appointment(2, Logistics::InClinic, here),
            appointment(3, Logistics::Pickup, None),
            appointment(4, Logistics::Pickup, Some(LatLng::new(0.0, 0.0))),
            other_day,
            appointment(6, Logistics::DropOff, here),
        ];

        let eligible = eligible_stops(&appointments, date(2026, 3, 14));

        assert_eq!(
            eligible.stops.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(),
            vec!["1"]
        );
        assert_eq!(
            eligible.missing_coordinates,
            vec![StopId::from(3), StopId::from(4)]
        );
        assert!(eligible.duplicates.is_empty());
    }

    #[test]
    fn test_stop_carries_pet_data() {
        let here = Some(LatLng::new(25.67, -100.31));
        let eligible = eligible_stops(
            &[appointment(1, Logistics::Pickup, here)],
            date(2026, 3, 14),
        );

        let stop = &eligible.stops[0];
        assert_eq!(stop.pet_weight_kg, Some(12.0));
        assert_eq!(stop.pet_name.as_deref(), Some("Firulais"));
        assert_eq!(stop.scheduled_time.as_deref(), Some("10:30"));
        assert_eq!(stop.zone_name(), Some("centro"));
    }

    #[test]
    fn test_duplicated_ids_planned_once() {
        let here = Some(LatLng::new(25.67, -100.31));
        let appointments = vec![
            appointment(1, Logistics::Pickup, here),
            appointment(1, Logistics::Pickup, here),
        ];

        let eligible = eligible_stops(&appointments, date(2026, 3, 14));

        assert_eq!(eligible.stops.len(), 1);
        assert_eq!(eligible.duplicates, vec![StopId::from(1)]);
    }
}
