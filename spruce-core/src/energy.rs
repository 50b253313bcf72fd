//! Energy levels and the per-tier surfacing rules they imply.

use serde::{Deserialize, Serialize};

/// Self-reported capacity for the day. Controls how many tasks each tier
/// surfaces, never which tasks are due.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Energy {
    Red,
    Yellow,
    Green,
}

impl Energy {
    pub const ALL: [Energy; 3] = [Energy::Red, Energy::Yellow, Energy::Green];

    /// Bonus daily tasks offered beyond the weekday essential.
    pub fn daily_bonus_cap(&self) -> usize {
        match self {
            Energy::Red => 2,
            Energy::Yellow => 4,
            Energy::Green => 8,
        }
    }

    /// Weekly-focus tasks offered; `None` means every due task.
    pub fn weekly_cap(&self) -> Option<usize> {
        match self {
            Energy::Red => Some(1),
            Energy::Yellow => Some(2),
            Energy::Green => None,
        }
    }

    /// Whether the biweekly list is surfaced at all.
    pub fn shows_biweekly(&self) -> bool {
        !matches!(self, Energy::Red)
    }

    /// Whether the monthly/quarterly/variety tiers are surfaced.
    pub fn shows_deep_tiers(&self) -> bool {
        matches!(self, Energy::Green)
    }

    /// Storage/CLI label.
    pub fn label(&self) -> &'static str {
        match self {
            Energy::Red => "red",
            Energy::Yellow => "yellow",
            Energy::Green => "green",
        }
    }

    /// Parse a CLI/config label.
    pub fn from_label(label: &str) -> Option<Energy> {
        match label {
            "red" => Some(Energy::Red),
            "yellow" => Some(Energy::Yellow),
            "green" => Some(Energy::Green),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_bonus_caps() {
        assert_eq!(Energy::Red.daily_bonus_cap(), 2);
        assert_eq!(Energy::Yellow.daily_bonus_cap(), 4);
        assert_eq!(Energy::Green.daily_bonus_cap(), 8);
    }

    #[test]
    fn test_weekly_caps() {
        assert_eq!(Energy::Red.weekly_cap(), Some(1));
        assert_eq!(Energy::Yellow.weekly_cap(), Some(2));
        assert_eq!(Energy::Green.weekly_cap(), None);
    }

    #[test]
    fn test_tier_visibility() {
        assert!(!Energy::Red.shows_biweekly());
        assert!(Energy::Yellow.shows_biweekly());
        assert!(Energy::Green.shows_biweekly());
        assert!(!Energy::Yellow.shows_deep_tiers());
        assert!(Energy::Green.shows_deep_tiers());
    }

    #[test]
    fn test_labels_round_trip() {
        for energy in Energy::ALL {
            assert_eq!(Energy::from_label(energy.label()), Some(energy));
        }
        assert_eq!(Energy::from_label("blue"), None);
    }
}
