use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::RingBufferError;

/// Direction used by membership scans.
///
/// Both directions visit the same resident slots, so the outcome of a scan never
/// depends on the mode. Pick `Recent` when matches are expected among fresh
/// elements and `Oldest` when they are expected among elements about to be evicted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Scan from the newest element back to the oldest one
    #[default]
    Recent,
    /// Scan from the oldest element forward to the newest one
    Oldest,
}

impl TryFrom<i32> for SearchMode {
    type Error = RingBufferError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Recent),
            1 => Ok(Self::Oldest),
            other => Err(RingBufferError::InvalidMode(other.to_string())),
        }
    }
}

impl FromStr for SearchMode {
    type Err = RingBufferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recent" => Ok(Self::Recent),
            "oldest" => Ok(Self::Oldest),
            _ => Err(RingBufferError::InvalidMode(String::from(s))),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Recent => f.write_str("recent"),
            SearchMode::Oldest => f.write_str("oldest"),
        }
    }
}
