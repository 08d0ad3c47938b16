use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::SrsError;

/// The learner's self-reported recall quality for one review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    /// Not recalled. Resets the item to level 0.
    Again,
    /// Recalled. Moves the item up one level.
    Good,
    /// Recalled without effort. Moves the item up two levels.
    Easy,
}

impl Grade {
    pub const ALL: [Self; 3] = [Self::Again, Self::Good, Self::Easy];

    /// How many levels a passing grade climbs. `Again` climbs none.
    pub const fn step(self) -> u32 {
        match self {
            Self::Again => 0,
            Self::Good => 1,
            Self::Easy => 2,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Again => "again",
            Self::Good => "good",
            Self::Easy => "easy",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = SrsError;

    /// Parses a grade, rejecting anything outside `again`, `good`, `easy`.
    ///
    /// Matching is exact, the same rule serde applies to stored records.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|grade| grade.as_str() == s)
            .ok_or_else(|| SrsError::InvalidGrade(s.to_string()))
    }
}
