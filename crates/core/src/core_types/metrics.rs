//! Per-frame metric tuple and the risk-level bucketing derived from it.

use super::units::{Celsius, Percent, SquareKilometers};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Valid range constants for the clamped metric fields.
///
/// Every metric a frame carries is clamped into these ranges after jitter is
/// applied; no generated frame may carry a value outside them.
pub mod metric_ranges {
    use std::ops::RangeInclusive;

    /// System coverage percentage `[1, 50]`.
    pub const COVERAGE: RangeInclusive<f32> = 1.0..=50.0;

    /// Cluster area `[200, 6000]` km².
    pub const CLUSTER_AREA: RangeInclusive<i32> = 200..=6000;

    /// Cloud-top temperature `[-100, -20]` °C.
    pub const CLOUD_TOP_TEMP: RangeInclusive<f32> = -100.0..=-20.0;

    /// Risk score `[10, 98]`.
    pub const RISK_SCORE: RangeInclusive<i32> = 10..=98;

    /// Model confidence `[60, 98]`.
    pub const CONFIDENCE: RangeInclusive<i32> = 60..=98;
}

/// Risk score threshold for the `High` bucket (inclusive).
pub const HIGH_RISK_THRESHOLD: i32 = 75;

/// Risk score threshold for the `Moderate` bucket (inclusive).
pub const MODERATE_RISK_THRESHOLD: i32 = 45;

/// Three-way bucketed intensity label derived from the risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Bucket a clamped risk score: `>=75` High, `>=45` Moderate, else Low.
    #[must_use]
    pub fn from_score(risk_score: i32) -> Self {
        if risk_score >= HIGH_RISK_THRESHOLD {
            RiskLevel::High
        } else if risk_score >= MODERATE_RISK_THRESHOLD {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "LOW"),
            RiskLevel::Moderate => write!(f, "MODERATE"),
            RiskLevel::High => write!(f, "HIGH"),
        }
    }
}

/// The post-jitter, post-clamp metric tuple for a single frame.
///
/// Invariant: every numeric field lies within its [`metric_ranges`] range and
/// `risk_level` is consistent with `risk_score` per [`RiskLevel::from_score`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameMetrics {
    /// Percentage of the imagery classified as part of the system.
    pub coverage_percent: Percent,
    /// Areal extent of the cloud cluster.
    pub cluster_area_km2: SquareKilometers,
    /// Cloud-top brightness temperature.
    pub cloud_top_temp_c: Celsius,
    /// 0-100 intensity proxy (clamped to `[10, 98]`).
    pub risk_score: i32,
    /// Bucketed label derived from `risk_score`.
    pub risk_level: RiskLevel,
    /// Synthetic model-confidence percentage (clamped to `[60, 98]`).
    pub model_confidence: i32,
}

impl FrameMetrics {
    /// Build metrics from raw (pre-clamp) values.
    ///
    /// Applies the declared clamp ranges, truncates the integer-valued
    /// metrics, and derives `risk_level` from the clamped score. Raw values
    /// may come straight out of the jittered archetype curves.
    #[must_use]
    pub fn from_raw(
        coverage: f32,
        cluster_area: f32,
        cloud_top_temp: f32,
        risk_score: f32,
        confidence: f32,
    ) -> Self {
        let coverage = coverage.clamp(*metric_ranges::COVERAGE.start(), *metric_ranges::COVERAGE.end());
        let cluster_area = (cluster_area as i32)
            .clamp(*metric_ranges::CLUSTER_AREA.start(), *metric_ranges::CLUSTER_AREA.end());
        let cloud_top_temp = cloud_top_temp
            .clamp(*metric_ranges::CLOUD_TOP_TEMP.start(), *metric_ranges::CLOUD_TOP_TEMP.end());
        let risk_score = (risk_score as i32)
            .clamp(*metric_ranges::RISK_SCORE.start(), *metric_ranges::RISK_SCORE.end());
        let confidence = (confidence as i32)
            .clamp(*metric_ranges::CONFIDENCE.start(), *metric_ranges::CONFIDENCE.end());

        FrameMetrics {
            coverage_percent: Percent::new(coverage),
            cluster_area_km2: SquareKilometers::new(cluster_area),
            cloud_top_temp_c: Celsius::new(cloud_top_temp),
            risk_score,
            risk_level: RiskLevel::from_score(risk_score),
            model_confidence: confidence,
        }
    }
}
