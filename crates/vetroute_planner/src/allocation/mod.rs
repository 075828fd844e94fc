pub mod capacity_check;
pub mod load_statistics;
