//! The simulation engine: an explicitly constructed object holding the
//! archetype catalog, the injected random source, and the optional sample
//! dataset. No global mutable state; every operation allocates and returns
//! an independent result graph.

use crate::catalog::{Archetype, ArchetypeInfo, FALLBACK_ARCHETYPE};
use crate::compare::{insights, summarize, ComparisonEntry, ComparisonResult};
use crate::core_types::{Frame, FrameMetrics, IrImage, Simulation, FRAME_INTERVAL_MINUTES};
use crate::error::EngineError;
use crate::narrative::{self, DetailedAnalysis, RiskAssessment};
use crate::synth::{self, SampleDataset};
use crate::trend::{self, TrendReport};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::PathBuf;
use tracing::{debug, info};

/// Supported number of frames per simulation.
pub const FRAME_COUNT_RANGE: RangeInclusive<u32> = 2..=8;

/// How the engine treats archetype ids that are not in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownArchetypePolicy {
    /// Reject with [`EngineError::UnknownArchetype`].
    #[default]
    Reject,
    /// Silently resolve to `developing_cyclone`, reproducing the reference
    /// behavior. Explicit opt-in.
    Fallback,
}

/// Detailed inspection payload for a single frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameAnalysis {
    pub frame: Frame,
    pub detailed_analysis: DetailedAnalysis,
    pub trend: TrendReport,
    pub risk_assessment: RiskAssessment,
    pub next_steps: String,
}

/// Cyclone-evolution simulation engine.
///
/// Owns its random source: construct with [`SimulationEngine::seeded`] for
/// reproducible output (two engines seeded identically produce bit-identical
/// simulations for identical arguments) or [`SimulationEngine::new`] for a
/// fresh entropy seed.
#[derive(Debug)]
pub struct SimulationEngine {
    rng: StdRng,
    policy: UnknownArchetypePolicy,
    dataset: Option<SampleDataset>,
}

impl SimulationEngine {
    /// Engine with a fresh entropy-seeded random source.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Engine with a fixed-seed random source, for reproducible output.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Engine with a caller-supplied random source.
    #[must_use]
    pub fn with_rng(rng: StdRng) -> Self {
        SimulationEngine {
            rng,
            policy: UnknownArchetypePolicy::default(),
            dataset: None,
        }
    }

    /// Set the unknown-archetype resolution policy.
    #[must_use]
    pub fn with_unknown_archetype_policy(mut self, policy: UnknownArchetypePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Configure a directory of real sample images. Frames prefer a matching
    /// sample over procedural synthesis; an unusable directory silently
    /// degrades back to synthesis.
    #[must_use]
    pub fn with_sample_dataset(mut self, dir: impl Into<PathBuf>) -> Self {
        let dataset = SampleDataset::new(dir);
        info!("sample dataset configured at {}", dataset.dir().display());
        self.dataset = Some(dataset);
        self
    }

    /// Static listing of the available archetypes.
    #[must_use]
    pub fn list_archetypes(&self) -> Vec<ArchetypeInfo> {
        Archetype::ALL.into_iter().map(Archetype::info).collect()
    }

    /// Generate a full evolution sequence for an archetype.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidFrameCount`] when `frame_count` is outside
    /// `[2, 8]`; [`EngineError::UnknownArchetype`] under the strict policy.
    pub fn generate(
        &mut self,
        archetype_id: &str,
        frame_count: u32,
    ) -> Result<Simulation, EngineError> {
        Self::check_frame_count(frame_count)?;
        let archetype = self.resolve(archetype_id)?;
        self.generate_archetype(archetype, frame_count)
    }

    /// Regenerate a simulation and inspect one frame in detail.
    ///
    /// Always generates fresh (no caching across calls), so repeated
    /// inspection of the same frame id reflects new jitter draws.
    ///
    /// # Errors
    ///
    /// [`EngineError::FrameOutOfRange`] when `frame_id` is not in
    /// `[1, frame_count]`, plus the `generate` errors.
    pub fn analyze_frame(
        &mut self,
        archetype_id: &str,
        frame_count: u32,
        frame_id: u32,
    ) -> Result<FrameAnalysis, EngineError> {
        Self::check_frame_count(frame_count)?;
        if !(1..=frame_count).contains(&frame_id) {
            return Err(EngineError::FrameOutOfRange {
                frame_id,
                frame_count,
            });
        }
        let archetype = self.resolve(archetype_id)?;
        let simulation = self.generate_archetype(archetype, frame_count)?;

        let index = (frame_id - 1) as usize;
        let trend = trend::trend(&simulation.frames, index);
        let mut frames = simulation.frames;
        // Index validated against frame_count above
        let frame = frames.swap_remove(index);

        Ok(FrameAnalysis {
            detailed_analysis: narrative::detailed_analysis(&frame.metrics),
            risk_assessment: narrative::risk_assessment(frame.metrics.risk_level),
            next_steps: narrative::next_steps(frame.metrics.risk_level, archetype),
            trend,
            frame,
        })
    }

    /// Run the generator for several archetypes and compare their
    /// evolutions. Repeated ids collapse to a single entry.
    ///
    /// # Errors
    ///
    /// Same as [`SimulationEngine::generate`].
    pub fn compare<S: AsRef<str>>(
        &mut self,
        archetype_ids: &[S],
        frame_count: u32,
    ) -> Result<ComparisonResult, EngineError> {
        Self::check_frame_count(frame_count)?;

        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut entries = Vec::new();
        for id in archetype_ids {
            let id = id.as_ref();
            if !seen.insert(id.to_string()) {
                continue;
            }
            let archetype = self.resolve(id)?;
            let simulation = self.generate_archetype(archetype, frame_count)?;
            entries.push(ComparisonEntry {
                archetype_id: id.to_string(),
                template: simulation.template,
                summary_metrics: summarize(&simulation.frames),
            });
        }

        let insights = insights(&entries);
        Ok(ComparisonResult {
            per_simulation: entries,
            insights,
        })
    }

    fn check_frame_count(frame_count: u32) -> Result<(), EngineError> {
        if FRAME_COUNT_RANGE.contains(&frame_count) {
            Ok(())
        } else {
            Err(EngineError::InvalidFrameCount(frame_count))
        }
    }

    fn resolve(&self, archetype_id: &str) -> Result<Archetype, EngineError> {
        match Archetype::from_id(archetype_id) {
            Some(archetype) => Ok(archetype),
            None => match self.policy {
                UnknownArchetypePolicy::Reject => {
                    Err(EngineError::UnknownArchetype(archetype_id.to_string()))
                }
                UnknownArchetypePolicy::Fallback => {
                    debug!(
                        "unknown archetype id {archetype_id:?}, falling back to {}",
                        FALLBACK_ARCHETYPE
                    );
                    Ok(FALLBACK_ARCHETYPE)
                }
            },
        }
    }

    fn generate_archetype(
        &mut self,
        archetype: Archetype,
        frame_count: u32,
    ) -> Result<Simulation, EngineError> {
        let template = archetype.template();
        info!("generating {frame_count}-frame {archetype} simulation");

        let mut frames = Vec::with_capacity(frame_count as usize);
        for index in 0..frame_count {
            let progress = synth::progress(index, frame_count);
            let metrics = synth::jittered_metrics(archetype, progress, &mut self.rng);
            let timestamp = synth::frame_timestamp(
                template.base_timestamp,
                index,
                template.duration_hours,
                frame_count,
            );
            let ir_image = self.ir_image(archetype, progress, &metrics)?;
            let mask_plan = archetype.mask_plan(progress, metrics.risk_score, &mut self.rng);
            let mask_overlay = synth::encode_rgb_png(&synth::render_mask(&mask_plan))?;

            debug!(
                "frame {}: progress={progress:.2}, risk={} ({}), coverage={}",
                index + 1,
                metrics.risk_score,
                metrics.risk_level,
                metrics.coverage_percent
            );

            frames.push(Frame {
                frame_id: index + 1,
                timestamp,
                time_elapsed_minutes: index * FRAME_INTERVAL_MINUTES,
                ir_image,
                mask_overlay,
                metrics,
                analysis: narrative::narrate(archetype, progress).to_string(),
            });
        }

        Ok(Simulation {
            template,
            frames,
            frame_count,
            total_duration_minutes: archetype.duration_hours() * 60,
        })
    }

    fn ir_image(
        &mut self,
        archetype: Archetype,
        progress: f32,
        metrics: &FrameMetrics,
    ) -> Result<IrImage, EngineError> {
        if let Some(dataset) = &self.dataset {
            if let Some(file_name) = dataset.select_ir(archetype, progress, &mut self.rng) {
                debug!("selected sample image {file_name} for {archetype} at p={progress:.2}");
                return Ok(IrImage::Sample { file_name });
            }
        }
        let plan = archetype.ir_plan(progress, *metrics.coverage_percent, &mut self.rng);
        let png = synth::encode_gray_png(&synth::render_ir(&plan))?;
        Ok(IrImage::Synthetic { png })
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new()
    }
}
