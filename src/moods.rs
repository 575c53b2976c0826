//! The fixed five-value mood enumeration and its presentation metadata.
//!
//! Both the calendar and the history view render moods; keeping label and
//! style lookups here means the two cannot drift apart.

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Great,
    Good,
    Okay,
    Concerning,
    Difficult,
}

pub const ALL_MOODS: [Mood; 5] = [
    Mood::Great,
    Mood::Good,
    Mood::Okay,
    Mood::Concerning,
    Mood::Difficult,
];

impl Mood {
    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Great => "great",
            Mood::Good => "good",
            Mood::Okay => "okay",
            Mood::Concerning => "concerning",
            Mood::Difficult => "difficult",
        }
    }

    /// Short display name ("Great", "Good", ...).
    pub fn name(self) -> &'static str {
        match self {
            Mood::Great => "Great",
            Mood::Good => "Good",
            Mood::Okay => "Okay",
            Mood::Concerning => "Concerning",
            Mood::Difficult => "Difficult",
        }
    }

    /// Long description shown in the form's select options.
    pub fn description(self) -> &'static str {
        match self {
            Mood::Great => "Great - energetic and happy",
            Mood::Good => "Good - normal day",
            Mood::Okay => "Okay - a bit tired",
            Mood::Concerning => "Concerning - not themselves",
            Mood::Difficult => "Difficult day",
        }
    }

    /// CSS class for the small calendar dot.
    pub fn dot_class(self) -> &'static str {
        match self {
            Mood::Great => "dot-great",
            Mood::Good => "dot-good",
            Mood::Okay => "dot-okay",
            Mood::Concerning => "dot-concerning",
            Mood::Difficult => "dot-difficult",
        }
    }

    /// CSS class for the mood badge on history and detail entries.
    pub fn badge_class(self) -> &'static str {
        match self {
            Mood::Great => "badge-great",
            Mood::Good => "badge-good",
            Mood::Okay => "badge-okay",
            Mood::Concerning => "badge-concerning",
            Mood::Difficult => "badge-difficult",
        }
    }
}

impl FromStr for Mood {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "great" => Ok(Mood::Great),
            "good" => Ok(Mood::Good),
            "okay" => Ok(Mood::Okay),
            "concerning" => Ok(Mood::Concerning),
            "difficult" => Ok(Mood::Difficult),
            _ => Err(()),
        }
    }
}

/// Dot class for a stored mood value; unknown values get a neutral style.
pub fn dot_class_for(mood: &str) -> &'static str {
    mood.parse::<Mood>()
        .map(Mood::dot_class)
        .unwrap_or("dot-unknown")
}

/// Badge class for a stored mood value; unknown values get a neutral style.
pub fn badge_class_for(mood: &str) -> &'static str {
    mood.parse::<Mood>()
        .map(Mood::badge_class)
        .unwrap_or("badge-unknown")
}

/// Display name for a stored mood value; unknown values render as-is
/// capitalized by the caller's template, so fall back to the raw string.
pub fn name_for(mood: &str) -> String {
    match mood.parse::<Mood>() {
        Ok(m) => m.name().to_string(),
        Err(()) => mood.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_all_values() {
        for mood in ALL_MOODS {
            assert_eq!(mood.as_str().parse::<Mood>(), Ok(mood));
        }
    }

    #[test]
    fn rejects_unknown_values() {
        assert!("fantastic".parse::<Mood>().is_err());
        assert!("".parse::<Mood>().is_err());
        assert!("Great".parse::<Mood>().is_err()); // stored values are lowercase
    }

    #[test]
    fn unknown_values_fall_back_to_neutral_style() {
        assert_eq!(dot_class_for("mystery"), "dot-unknown");
        assert_eq!(badge_class_for("mystery"), "badge-unknown");
        assert_eq!(name_for("mystery"), "mystery");
    }

    #[test]
    fn known_values_use_their_own_style() {
        assert_eq!(dot_class_for("great"), "dot-great");
        assert_eq!(badge_class_for("difficult"), "badge-difficult");
        assert_eq!(name_for("okay"), "Okay");
    }
}
