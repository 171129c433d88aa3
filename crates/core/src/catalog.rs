//! Archetype registry: the closed set of simulation templates.
//!
//! Each archetype encodes one evolution story (genesis, rapid
//! intensification, eye formation, dissipation) and owns its top-level
//! parameters. Formulas, narrative tables, and image plans live with the
//! modules that consume them but are always selected through [`Archetype`],
//! keeping the per-archetype behavior co-located and independently testable.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four simulation archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    DevelopingCyclone,
    RapidIntensification,
    EyeFormation,
    WeakeningSystem,
}

/// Subjective difficulty of reading the archetype's imagery, surfaced in the
/// archetype listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Top-level parameters of one archetype. Immutable, one instance per
/// archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationTemplate {
    /// Stable string id (`developing_cyclone`, ...).
    pub id: String,
    /// Human-readable title.
    pub name: String,
    /// One-sentence description of the evolution story.
    pub description: String,
    /// Simulated duration covered by a full sequence.
    pub duration_hours: u32,
    /// Timestamp of the first frame.
    pub base_timestamp: DateTime<Utc>,
}

/// Static listing entry for an archetype (the `list_archetypes` payload).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub duration_hours: u32,
    pub difficulty: Difficulty,
    pub key_features: Vec<String>,
}

impl Archetype {
    /// All archetypes, in catalog order.
    pub const ALL: [Archetype; 4] = [
        Archetype::DevelopingCyclone,
        Archetype::RapidIntensification,
        Archetype::EyeFormation,
        Archetype::WeakeningSystem,
    ];

    /// Stable string id of this archetype.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Archetype::DevelopingCyclone => "developing_cyclone",
            Archetype::RapidIntensification => "rapid_intensification",
            Archetype::EyeFormation => "eye_formation",
            Archetype::WeakeningSystem => "weakening_system",
        }
    }

    /// Parse a string id. Returns `None` for unknown ids; resolution policy
    /// (strict vs. fallback) is decided by the engine, not here.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Archetype::ALL.iter().copied().find(|a| a.id() == id)
    }

    /// Simulated duration covered by a full sequence of this archetype.
    #[must_use]
    pub fn duration_hours(self) -> u32 {
        match self {
            Archetype::DevelopingCyclone => 3,
            Archetype::RapidIntensification => 2,
            Archetype::EyeFormation => 4,
            Archetype::WeakeningSystem => 6,
        }
    }

    /// Timestamp of the first frame of this archetype's sequence.
    #[must_use]
    pub fn base_timestamp(self) -> DateTime<Utc> {
        let (y, mo, d, h) = match self {
            Archetype::DevelopingCyclone => (2024, 5, 15, 12),
            Archetype::RapidIntensification => (2024, 6, 20, 18),
            Archetype::EyeFormation => (2024, 7, 10, 6),
            Archetype::WeakeningSystem => (2024, 8, 5, 9),
        };
        // All four constants are valid calendar dates.
        Utc.with_ymd_and_hms(y, mo, d, h, 0, 0).unwrap()
    }

    /// The full template for this archetype.
    #[must_use]
    pub fn template(self) -> SimulationTemplate {
        let (name, description) = match self {
            Archetype::DevelopingCyclone => (
                "Tropical Cyclone Genesis Simulation",
                "Watch a tropical low-pressure system develop into a cyclone over 3 hours",
            ),
            Archetype::RapidIntensification => (
                "Rapid Intensification Event",
                "Observe explosive strengthening of a tropical system in just 2 hours",
            ),
            Archetype::EyeFormation => (
                "Eye Wall Formation Process",
                "See how a cyclone's eye develops during maturation phase",
            ),
            Archetype::WeakeningSystem => (
                "Cyclone Dissipation Process",
                "Track how a cyclone weakens as it moves over land",
            ),
        };
        SimulationTemplate {
            id: self.id().to_string(),
            name: name.to_string(),
            description: description.to_string(),
            duration_hours: self.duration_hours(),
            base_timestamp: self.base_timestamp(),
        }
    }

    /// Static listing entry, including reading difficulty and the key
    /// features a viewer should watch for.
    #[must_use]
    pub fn info(self) -> ArchetypeInfo {
        let template = self.template();
        let (difficulty, features): (Difficulty, [&str; 3]) = match self {
            Archetype::DevelopingCyclone => (
                Difficulty::Beginner,
                ["Gradual organization", "Spiral development", "Risk escalation"],
            ),
            Archetype::RapidIntensification => (
                Difficulty::Advanced,
                ["Explosive growth", "Eye formation", "Extreme winds"],
            ),
            Archetype::EyeFormation => (
                Difficulty::Intermediate,
                ["Eye development", "Eyewall cycles", "Peak intensity"],
            ),
            Archetype::WeakeningSystem => (
                Difficulty::Intermediate,
                ["Land interaction", "Weakening trends", "Dissipation"],
            ),
        };
        ArchetypeInfo {
            id: template.id,
            name: template.name,
            description: template.description,
            duration_hours: template.duration_hours,
            difficulty,
            key_features: features.iter().map(|f| (*f).to_string()).collect(),
        }
    }

    /// Archetype id with underscores replaced and words title-cased, for
    /// human-facing comparison insights ("Developing Cyclone").
    #[must_use]
    pub fn display_name(self) -> String {
        title_case_id(self.id())
    }
}

/// Title-case a snake_case archetype id ("rapid_intensification" →
/// "Rapid Intensification").
#[must_use]
pub fn title_case_id(id: &str) -> String {
    id.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The archetype every unknown id resolves to under the permissive policy.
pub const FALLBACK_ARCHETYPE: Archetype = Archetype::DevelopingCyclone;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for archetype in Archetype::ALL {
            assert_eq!(Archetype::from_id(archetype.id()), Some(archetype));
        }
        assert_eq!(Archetype::from_id("polar_vortex"), None);
    }

    #[test]
    fn templates_carry_expected_parameters() {
        let t = Archetype::EyeFormation.template();
        assert_eq!(t.id, "eye_formation");
        assert_eq!(t.duration_hours, 4);
        assert_eq!(t.base_timestamp.to_rfc3339(), "2024-07-10T06:00:00+00:00");
    }

    #[test]
    fn display_name_title_cases_ids() {
        assert_eq!(
            Archetype::RapidIntensification.display_name(),
            "Rapid Intensification"
        );
        assert_eq!(Archetype::EyeFormation.display_name(), "Eye Formation");
    }
}
