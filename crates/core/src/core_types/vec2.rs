//! Vector type alias for 2D pixel-space positions.

use nalgebra::Vector2;

/// 2D vector type for pixel coordinates and image-space offsets.
///
/// This is a simple alias for `nalgebra::Vector2<f32>`, used by the image
/// synthesizer for blob centers and distance/angle fields.
pub type Vec2 = Vector2<f32>;
