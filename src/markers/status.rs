use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::MarkerError;

/// Health category a bin marker is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerStatus {
    Critical,
    NotResponding,
    Active,
    Available,
}

impl MarkerStatus {
    pub const ALL: [MarkerStatus; 4] = [
        MarkerStatus::Critical,
        MarkerStatus::NotResponding,
        MarkerStatus::Active,
        MarkerStatus::Available,
    ];

    /// Wire form, same as the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            MarkerStatus::Critical => "critical",
            MarkerStatus::NotResponding => "not_responding",
            MarkerStatus::Active => "active",
            MarkerStatus::Available => "available",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MarkerStatus::Critical => "Critical",
            MarkerStatus::NotResponding => "Not Responding",
            MarkerStatus::Active => "Active",
            MarkerStatus::Available => "Available",
        }
    }

    /// Critical and silent bins count against the operational share.
    pub fn is_operational(self) -> bool {
        matches!(self, MarkerStatus::Active | MarkerStatus::Available)
    }
}

impl fmt::Display for MarkerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarkerStatus {
    type Err = MarkerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MarkerStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| MarkerError::UnknownStatus(s.to_string()))
    }
}
