//! Attendance request enumerations

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Which half of the working day a partial leave request covers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LeaveTime {
    Morning,
    Evening,
}

impl LeaveTime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Evening => "evening",
        }
    }
}

impl FromStr for LeaveTime {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "morning" => Ok(Self::Morning),
            "evening" => Ok(Self::Evening),
            other => Err(TypeError::UnknownVariant {
                kind: "leave time",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for LeaveTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How long a field mission lasts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MissionDuration {
    FullDay,
    HalfDay,
    Hours,
}

impl MissionDuration {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullDay => "full_day",
            Self::HalfDay => "half_day",
            Self::Hours => "hours",
        }
    }

    /// Hour-based missions carry explicit start/end times
    pub fn needs_time_range(&self) -> bool {
        matches!(self, Self::Hours)
    }
}

impl FromStr for MissionDuration {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full_day" => Ok(Self::FullDay),
            "half_day" => Ok(Self::HalfDay),
            "hours" => Ok(Self::Hours),
            other => Err(TypeError::UnknownVariant {
                kind: "mission duration",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for MissionDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
