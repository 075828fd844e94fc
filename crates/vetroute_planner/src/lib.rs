pub mod allocation;
pub mod config;
pub mod planner;
pub mod problem;
pub mod weights;

#[cfg(test)]
pub(crate) mod test_utils;
