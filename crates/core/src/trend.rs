//! Short-term trend classification from adjacent frames.

use crate::core_types::Frame;
use serde::{Deserialize, Serialize};

/// Risk-change threshold for the "rapid" trend bands.
const RAPID_CHANGE_THRESHOLD: i32 = 10;

/// Risk-change threshold for the ordinary trend bands.
const CHANGE_THRESHOLD: i32 = 5;

/// Classified short-term trend of a frame relative to its predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    /// First frame of a simulation; no predecessor to compare against.
    Initial,
    RapidlyIntensifying,
    Intensifying,
    Stable,
    Weakening,
    RapidlyWeakening,
}

/// Sign of the risk change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Strengthening,
    Weakening,
    Stable,
}

/// Deltas and classification between one frame and the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendReport {
    pub trend: Trend,
    /// Risk-score delta vs. the previous frame.
    pub risk_change: i32,
    /// Cluster-area delta in km².
    pub area_change: i32,
    /// Coverage delta in percentage points, rounded to one decimal.
    pub coverage_change: f32,
    /// Absolute risk change per frame.
    pub change_rate: f32,
    pub direction: Direction,
}

impl TrendReport {
    fn initial() -> Self {
        TrendReport {
            trend: Trend::Initial,
            risk_change: 0,
            area_change: 0,
            coverage_change: 0.0,
            change_rate: 0.0,
            direction: Direction::Stable,
        }
    }
}

/// Classify the trend of `frames[index]` against `frames[index - 1]`.
///
/// `index == 0` always yields [`Trend::Initial`] with zero deltas. The
/// classification thresholds act on the risk-score delta alone; area and
/// coverage deltas are reported for context.
#[must_use]
pub fn trend(frames: &[Frame], index: usize) -> TrendReport {
    if index == 0 {
        return TrendReport::initial();
    }

    let current = &frames[index].metrics;
    let previous = &frames[index - 1].metrics;

    let risk_change = current.risk_score - previous.risk_score;
    let area_change = *current.cluster_area_km2 - *previous.cluster_area_km2;
    let coverage_change = *current.coverage_percent - *previous.coverage_percent;

    let trend = if risk_change > RAPID_CHANGE_THRESHOLD {
        Trend::RapidlyIntensifying
    } else if risk_change > CHANGE_THRESHOLD {
        Trend::Intensifying
    } else if risk_change < -RAPID_CHANGE_THRESHOLD {
        Trend::RapidlyWeakening
    } else if risk_change < -CHANGE_THRESHOLD {
        Trend::Weakening
    } else {
        Trend::Stable
    };

    let direction = match risk_change.cmp(&0) {
        std::cmp::Ordering::Greater => Direction::Strengthening,
        std::cmp::Ordering::Less => Direction::Weakening,
        std::cmp::Ordering::Equal => Direction::Stable,
    };

    TrendReport {
        trend,
        risk_change,
        area_change,
        coverage_change: (coverage_change * 10.0).round() / 10.0,
        change_rate: risk_change.abs() as f32,
        direction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::{FrameMetrics, IrImage};
    use chrono::{TimeZone, Utc};

    fn frame_with_risk(frame_id: u32, risk_score: f32, area: f32, coverage: f32) -> Frame {
        Frame {
            frame_id,
            timestamp: Utc.with_ymd_and_hms(2024, 5, 15, 12, 0, 0).unwrap(),
            time_elapsed_minutes: (frame_id - 1) * 45,
            ir_image: IrImage::Synthetic { png: Vec::new() },
            mask_overlay: Vec::new(),
            metrics: FrameMetrics::from_raw(coverage, area, -60.0, risk_score, 80.0),
            analysis: String::new(),
        }
    }

    #[test]
    fn first_frame_is_always_initial() {
        let frames = vec![frame_with_risk(1, 50.0, 1000.0, 20.0)];
        let report = trend(&frames, 0);
        assert_eq!(report.trend, Trend::Initial);
        assert_eq!(report.direction, Direction::Stable);
        assert_eq!(report.risk_change, 0);
    }

    #[test]
    fn classification_bands() {
        let cases = [
            (12, Trend::RapidlyIntensifying, Direction::Strengthening),
            (11, Trend::RapidlyIntensifying, Direction::Strengthening),
            (8, Trend::Intensifying, Direction::Strengthening),
            (6, Trend::Intensifying, Direction::Strengthening),
            (5, Trend::Stable, Direction::Strengthening),
            (0, Trend::Stable, Direction::Stable),
            (-5, Trend::Stable, Direction::Weakening),
            (-6, Trend::Weakening, Direction::Weakening),
            (-11, Trend::RapidlyWeakening, Direction::Weakening),
        ];
        for (delta, expected_trend, expected_direction) in cases {
            let frames = vec![
                frame_with_risk(1, 50.0, 1000.0, 20.0),
                frame_with_risk(2, 50.0 + delta as f32, 1000.0, 20.0),
            ];
            let report = trend(&frames, 1);
            assert_eq!(
                report.trend, expected_trend,
                "risk delta {delta} should classify as {expected_trend:?}"
            );
            assert_eq!(report.direction, expected_direction);
            assert_eq!(report.risk_change, delta);
            assert_eq!(report.change_rate, delta.abs() as f32);
        }
    }

    #[test]
    fn coverage_change_rounds_to_one_decimal() {
        let frames = vec![
            frame_with_risk(1, 50.0, 1000.0, 20.04),
            frame_with_risk(2, 52.0, 1100.0, 23.21),
        ];
        let report = trend(&frames, 1);
        assert!((report.coverage_change - 3.2).abs() < 1e-4);
        assert_eq!(report.area_change, 100);
    }
}
