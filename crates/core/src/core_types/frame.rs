//! Frame and simulation result types.
//!
//! These are the immutable result graphs returned to callers; nothing here
//! is mutated or persisted after construction.

use super::metrics::FrameMetrics;
use crate::catalog::SimulationTemplate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed wall-clock interval represented by `time_elapsed_minutes`.
pub const FRAME_INTERVAL_MINUTES: u32 = 45;

/// The infrared image attached to a frame.
///
/// Which variant a frame carries records which code path produced it: a
/// matching file from the configured sample dataset, or the procedural
/// synthesis fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum IrImage {
    /// A real sample image selected from the dataset directory.
    Sample {
        /// File name within the dataset directory.
        file_name: String,
    },
    /// Procedurally synthesized single-channel image, PNG-encoded.
    Synthetic {
        /// PNG bytes (256×256, 8-bit grayscale).
        png: Vec<u8>,
    },
}

impl IrImage {
    /// True when this image came from the procedural fallback.
    #[must_use]
    pub fn is_synthetic(&self) -> bool {
        matches!(self, IrImage::Synthetic { .. })
    }
}

/// One step of a simulated evolution sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// 1-based frame index within the simulation.
    pub frame_id: u32,
    /// Synthetic observation time of this frame.
    pub timestamp: DateTime<Utc>,
    /// Minutes elapsed since the first frame, at the fixed 45-minute interval.
    pub time_elapsed_minutes: u32,
    /// Illustrative infrared satellite-style image.
    pub ir_image: IrImage,
    /// Risk-overlay mask, PNG-encoded (256×256 RGB).
    pub mask_overlay: Vec<u8>,
    /// Post-jitter, post-clamp metric tuple.
    pub metrics: FrameMetrics,
    /// One-sentence narrative for this development stage.
    pub analysis: String,
}

/// A complete generated evolution sequence.
///
/// Invariants: `frames.len() == frame_count`, `frames[i].frame_id == i + 1`,
/// and timestamps are non-decreasing starting at the template's base
/// timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    /// The archetype template this sequence was generated from.
    pub template: SimulationTemplate,
    /// Ordered frames, `frame_count` of them.
    pub frames: Vec<Frame>,
    /// Number of frames generated.
    pub frame_count: u32,
    /// Total simulated duration in minutes (`duration_hours * 60`).
    pub total_duration_minutes: u32,
}
