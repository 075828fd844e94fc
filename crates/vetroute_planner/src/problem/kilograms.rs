use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, AddAssign, Div, Mul},
};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize, JsonSchema)]
pub struct Kilograms(f64);

impl Kilograms {
    pub const ZERO: Kilograms = Kilograms(0.0);

    pub const fn new(value: f64) -> Self {
        Kilograms(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Display for Kilograms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} kg", self.0)
    }
}

impl Add for Kilograms {
    type Output = Kilograms;

    fn add(self, other: Kilograms) -> Kilograms {
        Kilograms(self.0 + other.0)
    }
}

impl AddAssign for Kilograms {
    fn add_assign(&mut self, other: Kilograms) {
        self.0 += other.0;
    }
}

impl Mul<usize> for Kilograms {
    type Output = Kilograms;

    fn mul(self, rhs: usize) -> Kilograms {
        Kilograms(self.0 * rhs as f64)
    }
}

/// Division by zero items yields zero rather than NaN.
impl Div<usize> for Kilograms {
    type Output = Kilograms;

    fn div(self, rhs: usize) -> Kilograms {
        if rhs == 0 {
            return Kilograms::ZERO;
        }
        Kilograms(self.0 / rhs as f64)
    }
}

impl Sum for Kilograms {
    fn sum<I: Iterator<Item = Kilograms>>(iter: I) -> Kilograms {
        iter.fold(Kilograms::ZERO, |acc, x| acc + x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_div_by_zero_is_zero() {
        assert_eq!(Kilograms::new(12.0) / 0, Kilograms::ZERO);
        assert_eq!(Kilograms::new(12.0) / 4, Kilograms::new(3.0));
    }

    #[test]
    fn test_sum() {
        let total: Kilograms = [1.5, 2.5, 6.0].into_iter().map(Kilograms::new).sum();
        assert_eq!(total, Kilograms::new(10.0));
    }
}
