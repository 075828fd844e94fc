pub mod appointment;
pub mod cage;
pub mod inventory;
pub mod kilograms;
pub mod lat_lng;
pub mod stop;
pub mod van_capacity;
pub mod zone;
