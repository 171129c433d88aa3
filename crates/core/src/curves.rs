//! Per-archetype metric curves.
//!
//! Each archetype defines a hand-tuned, monotone (or near-monotone) base
//! formula mapping normalized progress to the raw metric tuple, before jitter
//! and clamping. These are illustrative functions, not meteorologically
//! validated physics.

use crate::catalog::Archetype;

/// Exponent of the accelerating progress substitution used by
/// `rapid_intensification`: front-loaded slow change, back-loaded rapid
/// change.
const RAPID_CURVE_EXPONENT: f32 = 0.6;

/// Raw (pre-jitter, pre-clamp) metric tuple produced by a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawMetrics {
    /// Coverage percentage.
    pub coverage: f32,
    /// Cluster area in km².
    pub cluster_area: f32,
    /// Cloud-top temperature in °C.
    pub cloud_top_temp: f32,
    /// Risk score, 0-100 scale.
    pub risk_score: f32,
    /// Model confidence percentage.
    pub confidence: f32,
}

impl Archetype {
    /// Evaluate this archetype's base curve at `progress` ∈ [0, 1].
    #[must_use]
    pub fn base_metrics(self, progress: f32) -> RawMetrics {
        let p = progress;
        match self {
            // Gradual development from scattered clouds to organized system
            Archetype::DevelopingCyclone => RawMetrics {
                coverage: 8.5 + p * 22.0,
                cluster_area: 850.0 + p * 1650.0,
                cloud_top_temp: -45.0 - p * 28.0,
                risk_score: 25.0 + p * 60.0,
                confidence: 68.0 + p * 22.0,
            },
            // Accelerating growth: substitute q = p^0.6 for p
            Archetype::RapidIntensification => {
                let q = p.powf(RAPID_CURVE_EXPONENT);
                RawMetrics {
                    coverage: 15.2 + q * 28.0,
                    cluster_area: 1200.0 + q * 2800.0,
                    cloud_top_temp: -58.0 - q * 35.0,
                    risk_score: 45.0 + q * 50.0,
                    confidence: 75.0 + q * 20.0,
                }
            }
            // Eye structure developing in an already-mature cyclone
            Archetype::EyeFormation => RawMetrics {
                coverage: 35.0 + p * 8.0,
                cluster_area: 3200.0 + p * 800.0,
                cloud_top_temp: -78.0 - p * 12.0,
                risk_score: 85.0 + p * 10.0,
                confidence: 88.0 + p * 7.0,
            },
            // Gradual weakening as the system moves inland
            Archetype::WeakeningSystem => RawMetrics {
                coverage: 42.0 - p * 25.0,
                cluster_area: 3800.0 - p * 2200.0,
                cloud_top_temp: -85.0 + p * 30.0,
                risk_score: 90.0 - p * 45.0,
                confidence: 92.0 - p * 15.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn developing_cyclone_curve_endpoints() {
        let start = Archetype::DevelopingCyclone.base_metrics(0.0);
        assert_relative_eq!(start.coverage, 8.5);
        assert_relative_eq!(start.cluster_area, 850.0);
        assert_relative_eq!(start.cloud_top_temp, -45.0);
        assert_relative_eq!(start.risk_score, 25.0);
        assert_relative_eq!(start.confidence, 68.0);

        let end = Archetype::DevelopingCyclone.base_metrics(1.0);
        assert_relative_eq!(end.coverage, 30.5);
        assert_relative_eq!(end.cluster_area, 2500.0);
        assert_relative_eq!(end.cloud_top_temp, -73.0);
        assert_relative_eq!(end.risk_score, 85.0);
        assert_relative_eq!(end.confidence, 90.0);
    }

    #[test]
    fn rapid_intensification_accelerates() {
        // q = p^0.6 > p on (0, 1): the midpoint must sit above the straight
        // line between the endpoints.
        let mid = Archetype::RapidIntensification.base_metrics(0.5);
        let linear_mid = 45.0 + 0.5 * 50.0;
        assert!(
            mid.risk_score > linear_mid,
            "accelerating curve should be front-loaded: {} <= {linear_mid}",
            mid.risk_score
        );

        let end = Archetype::RapidIntensification.base_metrics(1.0);
        assert_relative_eq!(end.risk_score, 95.0);
        assert_relative_eq!(end.cloud_top_temp, -93.0);
    }

    #[test]
    fn eye_formation_risk_always_high_band() {
        for step in 0..=10_i32 {
            let p = step as f32 / 10.0;
            let raw = Archetype::EyeFormation.base_metrics(p);
            assert!(
                raw.risk_score >= 85.0,
                "eye formation base risk must stay >= 85, got {} at p={p}",
                raw.risk_score
            );
        }
    }

    #[test]
    fn weakening_system_declines() {
        let start = Archetype::WeakeningSystem.base_metrics(0.0);
        let end = Archetype::WeakeningSystem.base_metrics(1.0);
        assert!(end.risk_score < start.risk_score);
        assert!(end.cluster_area < start.cluster_area);
        assert!(end.cloud_top_temp > start.cloud_top_temp, "tops warm as the system decays");
        assert_relative_eq!(end.coverage, 17.0);
        assert_relative_eq!(end.risk_score, 45.0);
    }
}
