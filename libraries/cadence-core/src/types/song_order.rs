/// Ordering modes for playlist song retrieval
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Requested ordering of a playlist's songs.
///
/// Only `Default` (stored order) has defined semantics. Anything else a
/// caller sends is kept verbatim in `Unrecognized` and also served in stored
/// order; parsing never fails.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SongOrder {
    /// Stored playback order
    #[default]
    Default,
    /// A value with no defined ordering
    Unrecognized(String),
}

impl SongOrder {
    /// Wire name of the default mode
    pub const DEFAULT: &'static str = "DEFAULT";
}

impl FromStr for SongOrder {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(Self::DEFAULT) {
            Ok(Self::Default)
        } else {
            Ok(Self::Unrecognized(s.to_string()))
        }
    }
}

impl From<String> for SongOrder {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(order) => order,
            Err(never) => match never {},
        }
    }
}

impl From<SongOrder> for String {
    fn from(order: SongOrder) -> Self {
        order.to_string()
    }
}

impl fmt::Display for SongOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str(Self::DEFAULT),
            Self::Unrecognized(value) => f.write_str(value),
        }
    }
}
