use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classification tag carried by every floor-plan polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PolygonKind {
    Building,
    Room,
    Wall,
    Pillar,
    Table,
    Obstacle,
    Locker,
    Unknown,
}

impl PolygonKind {
    /// Parse a source classification string. Unrecognised strings map to `Unknown`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "building" => Self::Building,
            "room" => Self::Room,
            "wall" => Self::Wall,
            "pillar" => Self::Pillar,
            "table" => Self::Table,
            "obstacle" => Self::Obstacle,
            "locker" => Self::Locker,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Building => "building",
            Self::Room => "room",
            Self::Wall => "wall",
            Self::Pillar => "pillar",
            Self::Table => "table",
            Self::Obstacle => "obstacle",
            Self::Locker => "locker",
            Self::Unknown => "unknown",
        }
    }

    /// Everything except the outer building footprint blocks movement.
    pub fn is_obstacle(self) -> bool {
        self != Self::Building
    }
}

impl fmt::Display for PolygonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
