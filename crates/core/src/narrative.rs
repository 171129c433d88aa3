//! Narrative text generation: per-frame stage sentences, detailed
//! meteorological analysis, risk advisories, and next-step recommendations.
//!
//! All text is canned; selection is deterministic given the frame's
//! archetype, progress, and metrics.

use crate::catalog::Archetype;
use crate::core_types::{FrameMetrics, RiskLevel};
use serde::{Deserialize, Serialize};
use std::fmt;

impl Archetype {
    /// Ordered stage sentences, one per development quarter.
    #[must_use]
    pub fn stage_sentences(self) -> [&'static str; 4] {
        match self {
            Archetype::DevelopingCyclone => [
                "Early convective organization detected in satellite imagery",
                "Cloud cluster showing signs of rotation and consolidation",
                "Tropical cyclone formation becoming increasingly likely",
                "Mature tropical cyclone structure now established",
            ],
            Archetype::RapidIntensification => [
                "Moderate tropical system with organized convection",
                "Rapid deepening detected - system intensifying quickly",
                "Explosive development phase - extreme intensification",
                "Peak intensity reached - extremely dangerous system",
            ],
            Archetype::EyeFormation => [
                "Strong tropical cyclone with developing inner core",
                "Eyewall consolidation process beginning",
                "Clear eye structure forming - mature cyclone",
                "Well-defined eye and eyewall - peak organization",
            ],
            Archetype::WeakeningSystem => [
                "Intense tropical cyclone at peak strength",
                "System beginning to weaken due to land interaction",
                "Continued weakening as system moves inland",
                "Rapid dissipation as cyclone loses energy source",
            ],
        }
    }
}

/// Pick the stage sentence for a frame at `progress`.
///
/// Buckets progress over the sentence list: index `min(len-1, ⌊progress·len⌋)`,
/// so `progress == 0` reads the first sentence and anything at or past the
/// final quarter reads the last.
#[must_use]
pub fn narrate(archetype: Archetype, progress: f32) -> &'static str {
    let sentences = archetype.stage_sentences();
    let index = ((progress * sentences.len() as f32) as usize).min(sentences.len() - 1);
    sentences[index]
}

/// Categorical development stage decided by joint metric thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DevelopmentStage {
    ScatteredConvection,
    OrganizedConvectiveSystem,
    TropicalDepressionStorm,
    DevelopingTropicalCyclone,
    MatureTropicalCyclone,
}

impl fmt::Display for DevelopmentStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DevelopmentStage::ScatteredConvection => "Scattered Convection",
            DevelopmentStage::OrganizedConvectiveSystem => "Organized Convective System",
            DevelopmentStage::TropicalDepressionStorm => "Tropical Depression/Storm",
            DevelopmentStage::DevelopingTropicalCyclone => "Developing Tropical Cyclone",
            DevelopmentStage::MatureTropicalCyclone => "Mature Tropical Cyclone",
        };
        f.write_str(label)
    }
}

/// Classify the development stage from temperature, coverage, and area.
///
/// Thresholds are checked from most to least mature; the first stage whose
/// joint conditions hold wins.
#[must_use]
pub fn development_stage(metrics: &FrameMetrics) -> DevelopmentStage {
    let temp = *metrics.cloud_top_temp_c;
    let coverage = *metrics.coverage_percent;
    let area = *metrics.cluster_area_km2;

    if temp < -75.0 && coverage > 35.0 && area > 3500 {
        DevelopmentStage::MatureTropicalCyclone
    } else if temp < -65.0 && coverage > 25.0 && area > 2000 {
        DevelopmentStage::DevelopingTropicalCyclone
    } else if temp < -55.0 && coverage > 15.0 && area > 1000 {
        DevelopmentStage::TropicalDepressionStorm
    } else if coverage > 10.0 {
        DevelopmentStage::OrganizedConvectiveSystem
    } else {
        DevelopmentStage::ScatteredConvection
    }
}

/// Qualitative intensity indicators triggered independently by their own
/// thresholds.
#[must_use]
pub fn intensity_indicators(metrics: &FrameMetrics) -> Vec<String> {
    let mut indicators = Vec::new();

    let temp = *metrics.cloud_top_temp_c;
    if temp < -80.0 {
        indicators.push("Extremely cold cloud tops - intense convection".to_string());
    } else if temp < -60.0 {
        indicators.push("Cold cloud tops - strong convection".to_string());
    }

    let coverage = *metrics.coverage_percent;
    if coverage > 40.0 {
        indicators.push("Extensive system coverage".to_string());
    } else if coverage > 25.0 {
        indicators.push("Well-organized system".to_string());
    }

    if metrics.model_confidence > 90 {
        indicators.push("High model confidence - clear signatures".to_string());
    } else if metrics.model_confidence > 80 {
        indicators.push("Good model confidence".to_string());
    }

    indicators
}

/// Detailed per-frame meteorological analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedAnalysis {
    pub temperature_analysis: String,
    pub coverage_analysis: String,
    pub size_analysis: String,
    pub development_stage: DevelopmentStage,
    pub intensity_indicators: Vec<String>,
}

/// Build the detailed analysis for one frame's metrics.
#[must_use]
pub fn detailed_analysis(metrics: &FrameMetrics) -> DetailedAnalysis {
    let temp = *metrics.cloud_top_temp_c;
    let convection = if temp < -70.0 {
        "extremely deep convection"
    } else if temp < -50.0 {
        "moderate convection"
    } else {
        "shallow convection"
    };

    let coverage = *metrics.coverage_percent;
    let organization = if coverage > 30.0 {
        "extensive organization"
    } else if coverage > 15.0 {
        "moderate organization"
    } else {
        "developing organization"
    };

    let area = *metrics.cluster_area_km2;
    let scale = if area > 3000 {
        "large-scale system"
    } else if area > 1500 {
        "moderate system"
    } else {
        "developing system"
    };

    DetailedAnalysis {
        temperature_analysis: format!(
            "Cloud top temperatures of {} indicate {convection}",
            metrics.cloud_top_temp_c
        ),
        coverage_analysis: format!(
            "System coverage of {} represents {organization}",
            metrics.coverage_percent
        ),
        size_analysis: format!(
            "Cluster area of {} indicates {scale}",
            metrics.cluster_area_km2
        ),
        development_stage: development_stage(metrics),
        intensity_indicators: intensity_indicators(metrics),
    }
}

/// Fixed advisory attached to a risk level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub immediate_threat: String,
    pub development_potential: String,
    pub recommended_actions: Vec<String>,
    pub time_horizon: String,
}

/// Advisory table keyed by risk level.
#[must_use]
pub fn risk_assessment(level: RiskLevel) -> RiskAssessment {
    let (threat, potential, actions, horizon): (&str, &str, &[&str], &str) = match level {
        RiskLevel::Low => (
            "Minimal immediate threat to populated areas",
            "Low probability of significant intensification",
            &["Continue routine monitoring", "Update maritime advisories"],
            "Monitor for next 12-24 hours",
        ),
        RiskLevel::Moderate => (
            "Potential threat to marine activities and coastal areas",
            "Moderate chance of further intensification",
            &[
                "Increase monitoring frequency",
                "Alert coastal authorities",
                "Prepare evacuation plans",
            ],
            "Enhanced monitoring for next 6-12 hours",
        ),
        RiskLevel::High => (
            "Significant threat to life and property",
            "High probability of continued intensification",
            &[
                "Issue cyclone warnings",
                "Begin evacuations",
                "Deploy emergency resources",
            ],
            "Immediate action required within 3-6 hours",
        ),
    };
    RiskAssessment {
        immediate_threat: threat.to_string(),
        development_potential: potential.to_string(),
        recommended_actions: actions.iter().map(|a| (*a).to_string()).collect(),
        time_horizon: horizon.to_string(),
    }
}

/// Next-step recommendation for a (risk level, archetype) pair.
#[must_use]
pub fn next_steps(level: RiskLevel, archetype: Archetype) -> String {
    let text = match (level, archetype) {
        (RiskLevel::Low, Archetype::DevelopingCyclone) => {
            "Continue monitoring for signs of organization. Watch for temperature drops and increasing coverage."
        }
        (RiskLevel::Low, Archetype::WeakeningSystem) => {
            "Monitor dissipation rate. System should continue weakening over land."
        }
        (RiskLevel::Moderate, Archetype::DevelopingCyclone) => {
            "Increase monitoring frequency. Prepare for potential rapid development in next 6-12 hours."
        }
        (RiskLevel::Moderate, Archetype::RapidIntensification) => {
            "Critical monitoring period. System may intensify rapidly - prepare for HIGH risk escalation."
        }
        (RiskLevel::High, Archetype::DevelopingCyclone) => {
            "Issue alerts immediately. Cyclone formation imminent within 3-6 hours."
        }
        (RiskLevel::High, Archetype::RapidIntensification) => {
            "Emergency protocols active. Extremely dangerous rapid intensification in progress."
        }
        (RiskLevel::High, Archetype::EyeFormation) => {
            "Peak intensity phase. Monitor for eyewall replacement cycles and potential weakening."
        }
        _ => "Continue standard monitoring protocols and maintain situational awareness.",
    };
    text.to_string()
}
