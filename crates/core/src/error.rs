//! Engine error taxonomy.
//!
//! Only caller-input problems surface as errors; recoverable conditions
//! (unknown archetype under the fallback policy, unusable sample dataset)
//! are absorbed internally and never reported here.

use thiserror::Error;

/// Errors returned by the public engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// `frame_count` outside the supported `[2, 8]` range.
    #[error("frame count must be between 2 and 8, got {0}")]
    InvalidFrameCount(u32),

    /// `frame_id` outside `[1, frame_count]`, the not-found condition of
    /// frame inspection.
    #[error("frame {frame_id} out of range for a {frame_count}-frame simulation")]
    FrameOutOfRange { frame_id: u32, frame_count: u32 },

    /// Archetype id not in the catalog, under the strict resolution policy.
    #[error("unknown archetype id: {0}")]
    UnknownArchetype(String),

    /// PNG encoding failure. Not reachable for the fixed-size buffers the
    /// renderer produces, but propagated rather than swallowed.
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}
