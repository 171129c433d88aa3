//! Frame and image synthesis.
//!
//! `frame` turns archetype curves into jittered, clamped per-frame metrics;
//! `plan` draws the randomized description of a frame's imagery; `render`
//! rasterizes plans into pixel buffers; `dataset` selects real sample images
//! when a dataset directory is available.

pub mod dataset;
pub mod frame;
pub mod plan;
pub mod render;

pub use dataset::SampleDataset;
pub use frame::{frame_timestamp, jittered_metrics, progress};
pub use plan::{IrPlan, MaskPlan};
pub use render::{encode_gray_png, encode_rgb_png, render_ir, render_mask, IMAGE_SIZE};
