use std::{fmt::Display, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Coarse size bucket of the pickup van.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum VanCapacity {
    Small,
    #[default]
    Medium,
    Large,
}

impl Display for VanCapacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                VanCapacity::Small => "small",
                VanCapacity::Medium => "medium",
                VanCapacity::Large => "large",
            }
        )
    }
}

impl FromStr for VanCapacity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(VanCapacity::Small),
            "medium" => Ok(VanCapacity::Medium),
            "large" => Ok(VanCapacity::Large),
            other => Err(format!("Unknown van capacity: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_van_capacity_parse() {
        assert_eq!("Small".parse::<VanCapacity>(), Ok(VanCapacity::Small));
        assert_eq!(" large ".parse::<VanCapacity>(), Ok(VanCapacity::Large));
        assert!("huge".parse::<VanCapacity>().is_err());
    }

    #[test]
    fn test_van_capacity_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&VanCapacity::Medium).unwrap(),
            "\"medium\""
        );
    }
}
