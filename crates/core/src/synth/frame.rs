//! Per-frame metric synthesis: progress, jitter, clamp, timestamps.

use crate::catalog::Archetype;
use crate::core_types::FrameMetrics;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Uniform jitter half-widths applied to the raw curve output, one per
/// metric. Bounded so a clamped frame can never drift far from its curve.
mod jitter {
    pub const COVERAGE: f32 = 2.0;
    pub const CLUSTER_AREA: f32 = 100.0;
    pub const CLOUD_TOP_TEMP: f32 = 3.0;
    pub const RISK_SCORE: f32 = 5.0;
    pub const CONFIDENCE: f32 = 3.0;
}

/// Normalized position of a frame within its simulation.
///
/// `frame_index` is 0-based; the last frame of a multi-frame simulation maps
/// to exactly 1.0.
#[inline]
#[must_use]
pub fn progress(frame_index: u32, frame_count: u32) -> f32 {
    frame_index as f32 / frame_count.saturating_sub(1).max(1) as f32
}

/// Synthesize the clamped metric tuple for one frame.
///
/// Evaluates the archetype's base curve at `progress`, perturbs each raw
/// value with an independent uniform draw from `rng`, then clamps into the
/// declared metric ranges and derives the risk level.
pub fn jittered_metrics<R: Rng>(archetype: Archetype, progress: f32, rng: &mut R) -> FrameMetrics {
    let raw = archetype.base_metrics(progress);

    let coverage = raw.coverage + rng.random_range(-jitter::COVERAGE..jitter::COVERAGE);
    let cluster_area =
        raw.cluster_area + rng.random_range(-jitter::CLUSTER_AREA..jitter::CLUSTER_AREA);
    let cloud_top_temp =
        raw.cloud_top_temp + rng.random_range(-jitter::CLOUD_TOP_TEMP..jitter::CLOUD_TOP_TEMP);
    let risk_score = raw.risk_score + rng.random_range(-jitter::RISK_SCORE..jitter::RISK_SCORE);
    let confidence = raw.confidence + rng.random_range(-jitter::CONFIDENCE..jitter::CONFIDENCE);

    FrameMetrics::from_raw(coverage, cluster_area, cloud_top_temp, risk_score, confidence)
}

/// Synthetic observation time of a frame.
///
/// The step between frames is `duration_hours * 60 / frame_count` minutes
/// (whole minutes); frame 0 lands exactly on the base timestamp. `chrono`
/// duration arithmetic normalizes hour and day rollover.
#[must_use]
pub fn frame_timestamp(
    base_timestamp: DateTime<Utc>,
    frame_index: u32,
    duration_hours: u32,
    frame_count: u32,
) -> DateTime<Utc> {
    let step_minutes = i64::from(duration_hours * 60 / frame_count.max(1));
    base_timestamp + Duration::minutes(i64::from(frame_index) * step_minutes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::{metric_ranges, RiskLevel};
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn progress_spans_unit_interval() {
        assert_relative_eq!(progress(0, 4), 0.0);
        assert_relative_eq!(progress(3, 4), 1.0);
        assert_relative_eq!(progress(1, 3), 0.5);
        // Degenerate single-frame case guards the divisor
        assert_relative_eq!(progress(0, 1), 0.0);
    }

    #[test]
    fn jittered_metrics_stay_in_declared_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for archetype in Archetype::ALL {
            for trial in 0_usize..200 {
                let p = [0.0, 0.37, 1.0][trial % 3];
                let m = jittered_metrics(archetype, p, &mut rng);
                assert!(
                    metric_ranges::COVERAGE.contains(&*m.coverage_percent),
                    "{archetype} coverage {} out of range",
                    m.coverage_percent
                );
                assert!(metric_ranges::CLUSTER_AREA.contains(&*m.cluster_area_km2));
                assert!(metric_ranges::CLOUD_TOP_TEMP.contains(&*m.cloud_top_temp_c));
                assert!(metric_ranges::RISK_SCORE.contains(&m.risk_score));
                assert!(metric_ranges::CONFIDENCE.contains(&m.model_confidence));
                assert_eq!(m.risk_level, RiskLevel::from_score(m.risk_score));
            }
        }
    }

    #[test]
    fn jitter_stays_within_bounds_of_curve() {
        let mut rng = StdRng::seed_from_u64(21);
        let raw = Archetype::DevelopingCyclone.base_metrics(0.5);
        for _ in 0..100 {
            let m = jittered_metrics(Archetype::DevelopingCyclone, 0.5, &mut rng);
            assert!((*m.coverage_percent - raw.coverage).abs() <= 2.0);
            assert!((*m.cloud_top_temp_c - raw.cloud_top_temp).abs() <= 3.0);
            // Integer truncation can add up to one extra unit below the bound
            assert!((f64::from(*m.cluster_area_km2) - f64::from(raw.cluster_area)).abs() <= 101.0);
            assert!((f64::from(m.risk_score) - f64::from(raw.risk_score)).abs() <= 6.0);
        }
    }

    #[test]
    fn timestamps_step_in_whole_minutes() {
        let base = Archetype::DevelopingCyclone.base_timestamp();
        // 3h over 4 frames: 45-minute step
        assert_eq!(frame_timestamp(base, 0, 3, 4), base);
        assert_eq!(frame_timestamp(base, 1, 3, 4), base + Duration::minutes(45));
        assert_eq!(frame_timestamp(base, 3, 3, 4), base + Duration::minutes(135));
        // 6h over 7 frames: truncated to 51 whole minutes
        assert_eq!(frame_timestamp(base, 2, 6, 7), base + Duration::minutes(102));
    }

    #[test]
    fn timestamp_hour_rollover_normalizes() {
        let base = Archetype::RapidIntensification.base_timestamp(); // 18:00Z
        let late = frame_timestamp(base, 7, 2, 8); // +105 minutes
        assert_eq!(late.to_rfc3339(), "2024-06-20T19:45:00+00:00");
    }
}
