//! Broadcast season calculation.

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use std::fmt;

/// Broadcast season, serialized with AniList's `MediaSeason` spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    /// Season for a 0-based calendar month.
    ///
    /// January through April map to WINTER; the April boundary is intentional.
    pub fn from_month0(month0: u32) -> Self {
        match month0 {
            0..=3 => Season::Winter,
            4..=6 => Season::Spring,
            7..=9 => Season::Summer,
            _ => Season::Fall,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Winter => "WINTER",
            Season::Spring => "SPRING",
            Season::Summer => "SUMMER",
            Season::Fall => "FALL",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Season and year for a point in time, evaluated in UTC
pub fn current_season_year(now: DateTime<Utc>) -> (Season, i32) {
    (Season::from_month0(now.month0()), now.year())
}
