//! Cross-simulation comparison: per-run summary statistics and qualitative
//! insights derived from the first two distinct archetypes.

use crate::catalog::{title_case_id, SimulationTemplate};
use crate::core_types::Frame;
use serde::{Deserialize, Serialize};

/// Absolute area-growth difference (km²) required before the comparison
/// calls out a faster-expanding system.
const AREA_GROWTH_INSIGHT_THRESHOLD: i32 = 500;

/// Summary statistics for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    /// Highest risk score reached across all frames.
    pub peak_risk: i32,
    /// Net risk change, last frame minus first.
    pub risk_increase: i32,
    /// Largest cluster area reached, km².
    pub max_area: i32,
    /// Net area change, last frame minus first, km².
    pub area_growth: i32,
    /// Highest coverage reached, %.
    pub max_coverage: f32,
    /// Mean frame-to-frame risk delta, points per frame.
    pub avg_intensification_rate: f32,
    /// Wall-clock development time at the fixed 45-minute frame interval.
    pub development_time_hours: f32,
}

/// One archetype's entry in a comparison result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    /// Archetype id this entry was generated from.
    pub archetype_id: String,
    pub template: SimulationTemplate,
    pub summary_metrics: SummaryMetrics,
}

/// Result of comparing several archetypes' evolutions.
///
/// `per_simulation` maps archetype id to entry: insertion-ordered and
/// deduplicated, so requesting the same archetype twice yields one entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub per_simulation: Vec<ComparisonEntry>,
    pub insights: Vec<String>,
}

/// Compute the summary statistics of a generated frame sequence.
///
/// The caller guarantees at least one frame (`frame_count >= 2` at the
/// engine boundary).
#[must_use]
pub fn summarize(frames: &[Frame]) -> SummaryMetrics {
    let risk_scores: Vec<i32> = frames.iter().map(|f| f.metrics.risk_score).collect();
    let areas: Vec<i32> = frames.iter().map(|f| *f.metrics.cluster_area_km2).collect();
    let coverages: Vec<f32> = frames.iter().map(|f| *f.metrics.coverage_percent).collect();

    let deltas: Vec<i32> = risk_scores.windows(2).map(|w| w[1] - w[0]).collect();
    let avg_intensification_rate =
        deltas.iter().sum::<i32>() as f32 / deltas.len().max(1) as f32;

    SummaryMetrics {
        peak_risk: risk_scores.iter().copied().max().unwrap_or(0),
        risk_increase: risk_scores.last().unwrap_or(&0) - risk_scores.first().unwrap_or(&0),
        max_area: areas.iter().copied().max().unwrap_or(0),
        area_growth: areas.last().unwrap_or(&0) - areas.first().unwrap_or(&0),
        max_coverage: coverages.iter().copied().fold(0.0, f32::max),
        avg_intensification_rate,
        development_time_hours: frames.len() as f32 * 0.75,
    }
}

/// Derive qualitative insights from the first two distinct entries.
///
/// Emits up to three sentences: the faster-intensifying archetype (when the
/// rates differ), the higher-peaking one (when the peaks differ), and the
/// faster-growing one (when the absolute area-growth difference exceeds
/// 500 km²). Fewer than two entries yields no insights.
#[must_use]
pub fn insights(entries: &[ComparisonEntry]) -> Vec<String> {
    let mut insights = Vec::new();
    let (Some(first), Some(second)) = (entries.first(), entries.get(1)) else {
        return insights;
    };

    let a = &first.summary_metrics;
    let b = &second.summary_metrics;

    if (a.avg_intensification_rate - b.avg_intensification_rate).abs() > f32::EPSILON {
        let (faster, fast_rate, slow_rate) = if a.avg_intensification_rate > b.avg_intensification_rate {
            (&first.archetype_id, a.avg_intensification_rate, b.avg_intensification_rate)
        } else {
            (&second.archetype_id, b.avg_intensification_rate, a.avg_intensification_rate)
        };
        insights.push(format!(
            "{} shows faster intensification ({fast_rate:.1}% vs {slow_rate:.1}% per frame)",
            title_case_id(faster)
        ));
    }

    if a.peak_risk != b.peak_risk {
        let (higher, high_peak, low_peak) = if a.peak_risk > b.peak_risk {
            (&first.archetype_id, a.peak_risk, b.peak_risk)
        } else {
            (&second.archetype_id, b.peak_risk, a.peak_risk)
        };
        insights.push(format!(
            "{} reaches higher peak intensity ({high_peak}% vs {low_peak}%)",
            title_case_id(higher)
        ));
    }

    if (a.area_growth - b.area_growth).abs() > AREA_GROWTH_INSIGHT_THRESHOLD {
        let faster_growth = if a.area_growth > b.area_growth {
            &first.archetype_id
        } else {
            &second.archetype_id
        };
        insights.push(format!(
            "{} shows more rapid area expansion",
            title_case_id(faster_growth)
        ));
    }

    insights
}
