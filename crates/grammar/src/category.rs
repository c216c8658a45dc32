use serde::{Deserialize, Serialize};
use std::fmt;

/// Architectural category of a building. Each category has its own
/// generation rules and baking routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingCategory {
    House,
    /// Mansion: wide front with corner towers and bay wings.
    BigHouse,
    Hotel,
    Office,
    Skyscraper,
}

impl BuildingCategory {
    pub const ALL: [BuildingCategory; 5] = [
        BuildingCategory::House,
        BuildingCategory::BigHouse,
        BuildingCategory::Hotel,
        BuildingCategory::Office,
        BuildingCategory::Skyscraper,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BuildingCategory::House => "house",
            BuildingCategory::BigHouse => "bighouse",
            BuildingCategory::Hotel => "hotel",
            BuildingCategory::Office => "office",
            BuildingCategory::Skyscraper => "skyscraper",
        }
    }

    /// Skyscrapers are a banded shaft with no wall tokens.
    pub fn has_walls(self) -> bool {
        !matches!(self, BuildingCategory::Skyscraper)
    }
}

impl fmt::Display for BuildingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
