//! Plan rasterization over coordinate fields.
//!
//! Renders image plans into pixel buffers by evaluating each pattern's
//! closed-form intensity over the distance/angle field from the image
//! center, combining contributions by pointwise maximum. Rows are rendered
//! in parallel; plans are pure data so no synchronization is needed.
//!
//! Pattern definitions:
//! - cloud blob: `intensity · (1 − dist/radius)` inside `radius`
//! - spiral: `intensity · (1 − dist/100) · (0.7 + 0.3·sin(2·angle + 0.08·dist·(1 + development)))`
//!   inside radius 100
//! - eye: clear to a low fixed value inside the eye radius, force
//!   near-maximum intensity in the 15-px eyewall ring
//! - mask spiral: `(1 − dist/80) · development · (0.6 + 0.4·max(0, sin(2·angle + 0.1·dist)))`
//!   inside radius 80, applied per channel to the risk color

use super::plan::{image_center, IrPlan, MaskPattern, MaskPlan};
use crate::core_types::Vec2;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, GrayImage, ImageEncoder, ImageError, ImageResult, RgbImage};
use rayon::prelude::*;

/// Side length of the rendered images, px.
pub const IMAGE_SIZE: u32 = 256;

/// Outer radius of the IR spiral pattern, px.
const SPIRAL_RADIUS: f32 = 100.0;

/// Outer radius of the mask spiral pattern, px.
const MASK_SPIRAL_RADIUS: f32 = 80.0;

/// Residual brightness inside a cleared eye.
const EYE_CLEAR_VALUE: u8 = 40;

/// Width of the forced-bright eyewall ring, px.
const EYEWALL_WIDTH: f32 = 15.0;

/// Render a single-channel infrared image from its plan.
#[must_use]
pub fn render_ir(plan: &IrPlan) -> GrayImage {
    let size = IMAGE_SIZE as usize;
    let mut buf = vec![0_u8; size * size];

    buf.par_chunks_mut(size).enumerate().for_each(|(y, row)| {
        for (x, px) in row.iter_mut().enumerate() {
            *px = ir_pixel(plan, Vec2::new(x as f32, y as f32));
        }
    });

    GrayImage::from_raw(IMAGE_SIZE, IMAGE_SIZE, buf)
        .expect("buffer length matches IMAGE_SIZE²")
}

/// Infrared intensity at one pixel.
fn ir_pixel(plan: &IrPlan, point: Vec2) -> u8 {
    let mut value = 0.0_f32;

    for blob in &plan.blobs {
        let dist = (point - blob.center).norm();
        if dist < blob.radius {
            let alpha = 1.0 - dist / blob.radius;
            value = value.max(blob.intensity * alpha);
        }
    }

    let offset = point - image_center();
    let dist = offset.norm();

    if let Some(spiral) = &plan.spiral {
        if dist < SPIRAL_RADIUS {
            let angle = offset.y.atan2(offset.x);
            let band = (2.0 * angle + 0.08 * dist * (1.0 + spiral.development)).sin();
            let cloud = spiral.intensity * (1.0 - dist / SPIRAL_RADIUS) * (0.7 + 0.3 * band);
            value = value.max(cloud.max(0.0));
        }
    }

    let mut pixel = value.min(255.0) as u8;

    // The eye overrides whatever the spiral put down: cleared center,
    // saturated eyewall ring.
    if let Some(eye) = &plan.eye {
        if dist < eye.radius {
            pixel = pixel.min(EYE_CLEAR_VALUE);
        } else if dist < eye.radius + EYEWALL_WIDTH {
            pixel = 255;
        }
    }

    pixel
}

/// Render a three-channel risk-overlay mask from its plan.
#[must_use]
pub fn render_mask(plan: &MaskPlan) -> RgbImage {
    let size = IMAGE_SIZE as usize;
    let mut buf = vec![0_u8; size * size * 3];

    buf.par_chunks_mut(size * 3).enumerate().for_each(|(y, row)| {
        for x in 0..size {
            let alpha = mask_alpha(plan, Vec2::new(x as f32, y as f32));
            if alpha > 0.0 {
                for c in 0..3 {
                    let value = (f32::from(plan.color[c]) * alpha).min(255.0) as u8;
                    let slot = &mut row[x * 3 + c];
                    *slot = (*slot).max(value);
                }
            }
        }
    });

    RgbImage::from_raw(IMAGE_SIZE, IMAGE_SIZE, buf)
        .expect("buffer length matches IMAGE_SIZE² × 3")
}

/// Mask opacity at one pixel.
fn mask_alpha(plan: &MaskPlan, point: Vec2) -> f32 {
    match &plan.pattern {
        MaskPattern::Scattered(blobs) => {
            let mut alpha = 0.0_f32;
            for blob in blobs {
                let dist = (point - blob.center).norm();
                if dist < blob.radius {
                    alpha = alpha.max((1.0 - dist / blob.radius) * blob.weight);
                }
            }
            alpha
        }
        MaskPattern::Spiral { development } => {
            let offset = point - image_center();
            let dist = offset.norm();
            if dist < MASK_SPIRAL_RADIUS {
                let angle = offset.y.atan2(offset.x);
                let band = (2.0 * angle + 0.1 * dist).sin().max(0.0);
                (1.0 - dist / MASK_SPIRAL_RADIUS) * development * (0.6 + 0.4 * band)
            } else {
                0.0
            }
        }
    }
}

/// PNG-encode a grayscale image.
///
/// # Errors
///
/// Propagates encoder failures; not reachable for the fixed-size buffers
/// the renderer produces.
pub fn encode_gray_png(image: &GrayImage) -> Result<Vec<u8>, ImageError> {
    encode_png(image.as_raw(), image.width(), image.height(), ExtendedColorType::L8)
}

/// PNG-encode an RGB image.
///
/// # Errors
///
/// Propagates encoder failures; not reachable for the fixed-size buffers
/// the renderer produces.
pub fn encode_rgb_png(image: &RgbImage) -> Result<Vec<u8>, ImageError> {
    encode_png(image.as_raw(), image.width(), image.height(), ExtendedColorType::Rgb8)
}

fn encode_png(
    raw: &[u8],
    width: u32,
    height: u32,
    color: ExtendedColorType,
) -> ImageResult<Vec<u8>> {
    let mut out = Vec::new();
    PngEncoder::new(&mut out).write_image(raw, width, height, color)?;
    Ok(out)
}
