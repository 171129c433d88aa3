//! Randomized image plans.
//!
//! An image plan is a small data description of a frame's imagery (blob
//! placements, spiral parameters, eye geometry, mask pattern) drawn from
//! the injected random source up front. Rendering a plan is pure, so the
//! rasterizer can run row-parallel without touching the RNG.

use crate::catalog::Archetype;
use crate::core_types::{RiskLevel, Vec2};
use rand::Rng;

/// Center of the 256×256 image plane.
#[inline]
#[must_use]
pub fn image_center() -> Vec2 {
    Vec2::new(128.0, 128.0)
}

/// A radially-fading cloud cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudBlob {
    pub center: Vec2,
    pub radius: f32,
    /// Peak intensity at the blob center (0-255 scale).
    pub intensity: f32,
}

/// Spiral banding around the image center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralBand {
    /// Development factor tightening the band winding.
    pub development: f32,
    /// Peak intensity at the center (0-255 scale).
    pub intensity: f32,
}

/// Eye clearing and eyewall ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeWall {
    /// Radius of the cleared eye, px.
    pub radius: f32,
}

/// Plan for a frame's single-channel infrared image.
#[derive(Debug, Clone, PartialEq)]
pub struct IrPlan {
    pub blobs: Vec<CloudBlob>,
    pub spiral: Option<SpiralBand>,
    pub eye: Option<EyeWall>,
}

/// A radially-fading risk patch on the overlay mask.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskBlob {
    pub center: Vec2,
    pub radius: f32,
    /// Opacity multiplier at the patch center, 0-1.
    pub weight: f32,
}

/// Spatial pattern of a risk-overlay mask.
#[derive(Debug, Clone, PartialEq)]
pub enum MaskPattern {
    /// Several small scattered risk patches (early, disorganized states).
    Scattered(Vec<RiskBlob>),
    /// Single spiral pattern modulated by a development factor.
    Spiral { development: f32 },
}

/// Plan for a frame's three-channel risk-overlay mask.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskPlan {
    /// RGB risk color for this frame's risk bucket.
    pub color: [u8; 3],
    pub pattern: MaskPattern,
}

/// Overlay color per risk bucket: red for high, orange for moderate,
/// yellow otherwise.
#[must_use]
pub fn risk_color(risk_score: i32) -> [u8; 3] {
    match RiskLevel::from_score(risk_score) {
        RiskLevel::High => [255, 50, 50],
        RiskLevel::Moderate => [255, 165, 0],
        RiskLevel::Low => [255, 255, 100],
    }
}

impl Archetype {
    /// Draw the infrared image plan for a frame at `progress`.
    ///
    /// `coverage` feeds the spiral intensity of the developing-cyclone
    /// branch; the coupling between metrics and imagery is intentionally
    /// limited to branch selection plus this one scaling.
    pub fn ir_plan<R: Rng>(self, progress: f32, coverage: f32, rng: &mut R) -> IrPlan {
        let mut plan = IrPlan {
            blobs: Vec::new(),
            spiral: None,
            eye: None,
        };
        match self {
            Archetype::DevelopingCyclone => {
                if progress < 0.3 {
                    // Scattered convection, organizing as progress grows
                    let count = 5 + (progress * 10.0) as usize;
                    let radius = 15.0 + (progress * 25.0).floor();
                    let intensity = 120.0 + (progress * 80.0).floor();
                    for _ in 0..count {
                        let offset =
                            Vec2::new(rng.random_range(-80.0..80.0), rng.random_range(-80.0..80.0));
                        plan.blobs.push(CloudBlob {
                            center: image_center() + offset,
                            radius,
                            intensity,
                        });
                    }
                } else {
                    plan.spiral = Some(SpiralBand {
                        development: progress,
                        intensity: 100.0 + (coverage * 3.0).floor(),
                    });
                }
            }
            Archetype::RapidIntensification => {
                plan.spiral = Some(SpiralBand {
                    development: progress,
                    intensity: 150.0 + (progress * 80.0).floor(),
                });
                if progress > 0.6 {
                    plan.eye = Some(EyeWall {
                        radius: 20.0 - (progress * 15.0).floor(),
                    });
                }
            }
            Archetype::EyeFormation => {
                plan.spiral = Some(SpiralBand {
                    development: 0.8,
                    intensity: 200.0,
                });
                // Eye contracts as it matures
                plan.eye = Some(EyeWall {
                    radius: 30.0 - (progress * 20.0).floor(),
                });
            }
            Archetype::WeakeningSystem => {
                plan.spiral = Some(SpiralBand {
                    development: 0.7 - progress * 0.4,
                    intensity: 220.0 - (progress * 100.0).floor(),
                });
            }
        }
        plan
    }

    /// Draw the risk-overlay mask plan for a frame at `progress`.
    pub fn mask_plan<R: Rng>(self, progress: f32, risk_score: i32, rng: &mut R) -> MaskPlan {
        let color = risk_color(risk_score);
        let pattern = match self {
            Archetype::DevelopingCyclone if progress < 0.4 => {
                let count = 3 + (progress * 5.0) as usize;
                let radius = 20.0 + (progress * 20.0).floor();
                let weight = progress * 0.7;
                let blobs = (0..count)
                    .map(|_| {
                        let offset =
                            Vec2::new(rng.random_range(-60.0..60.0), rng.random_range(-60.0..60.0));
                        RiskBlob {
                            center: image_center() + offset,
                            radius,
                            weight,
                        }
                    })
                    .collect();
                MaskPattern::Scattered(blobs)
            }
            Archetype::DevelopingCyclone
            | Archetype::RapidIntensification
            | Archetype::EyeFormation => MaskPattern::Spiral {
                development: progress,
            },
            Archetype::WeakeningSystem => MaskPattern::Spiral {
                development: 0.8 - progress * 0.5,
            },
        };
        MaskPlan { color, pattern }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn developing_cyclone_plans_scatter_then_spiral() {
        let mut rng = StdRng::seed_from_u64(3);
        let early = Archetype::DevelopingCyclone.ir_plan(0.1, 10.0, &mut rng);
        assert!(!early.blobs.is_empty());
        assert!(early.spiral.is_none() && early.eye.is_none());
        assert_eq!(early.blobs.len(), 6); // 5 + floor(0.1 * 10)

        let late = Archetype::DevelopingCyclone.ir_plan(0.8, 28.0, &mut rng);
        assert!(late.blobs.is_empty());
        let spiral = late.spiral.expect("organized stage renders a spiral");
        assert_eq!(spiral.intensity, 184.0); // 100 + floor(28 * 3)
    }

    #[test]
    fn rapid_intensification_grows_an_eye_late() {
        let mut rng = StdRng::seed_from_u64(3);
        let early = Archetype::RapidIntensification.ir_plan(0.5, 30.0, &mut rng);
        assert!(early.eye.is_none());
        let late = Archetype::RapidIntensification.ir_plan(1.0, 43.0, &mut rng);
        assert_eq!(late.eye.expect("late stage has an eye").radius, 5.0);
    }

    #[test]
    fn eye_formation_eye_contracts() {
        let mut rng = StdRng::seed_from_u64(3);
        let start = Archetype::EyeFormation.ir_plan(0.0, 35.0, &mut rng);
        let end = Archetype::EyeFormation.ir_plan(1.0, 43.0, &mut rng);
        assert_eq!(start.eye.unwrap().radius, 30.0);
        assert_eq!(end.eye.unwrap().radius, 10.0);
    }

    #[test]
    fn mask_color_tracks_risk_bucket() {
        assert_eq!(risk_color(80), [255, 50, 50]);
        assert_eq!(risk_color(60), [255, 165, 0]);
        assert_eq!(risk_color(20), [255, 255, 100]);
    }

    #[test]
    fn weakening_mask_development_diminishes() {
        let mut rng = StdRng::seed_from_u64(9);
        let plan = Archetype::WeakeningSystem.mask_plan(0.6, 70, &mut rng);
        match plan.pattern {
            MaskPattern::Spiral { development } => {
                assert!((development - 0.5).abs() < 1e-6);
            }
            MaskPattern::Scattered(_) => panic!("weakening system uses the spiral mask"),
        }
    }
}
