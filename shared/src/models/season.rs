//! Seasonal buckets for food recommendations

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

/// One of four fixed seasonal buckets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Resolve the season for a calendar month (1-12).
    pub fn for_month(month: u32) -> Season {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Autumn,
            _ => Season::Winter,
        }
    }

    /// Season for the current wall-clock month.
    pub fn current() -> Season {
        Season::for_month(Local::now().month())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_boundaries() {
        assert_eq!(Season::for_month(1), Season::Winter);
        assert_eq!(Season::for_month(2), Season::Winter);
        assert_eq!(Season::for_month(3), Season::Spring);
        assert_eq!(Season::for_month(5), Season::Spring);
        assert_eq!(Season::for_month(6), Season::Summer);
        assert_eq!(Season::for_month(7), Season::Summer);
        assert_eq!(Season::for_month(8), Season::Summer);
        assert_eq!(Season::for_month(9), Season::Autumn);
        assert_eq!(Season::for_month(11), Season::Autumn);
        assert_eq!(Season::for_month(12), Season::Winter);
    }

    #[test]
    fn test_season_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(Season::Autumn).unwrap(),
            serde_json::json!("autumn")
        );
    }
}
