//! Cyclone Simulation Core Library
//!
//! A parametric generator for synthetic tropical-cyclone evolution: given an
//! archetype (genesis, rapid intensification, eye formation, dissipation)
//! and a frame count, it produces a deterministic-up-to-seed time series of
//! frames (jittered metric tuples, satellite-style infrared imagery,
//! risk-overlay masks, and narrative text) plus derived analytics:
//! per-frame trend classification and cross-simulation comparison.
//!
//! The metric curves are hand-tuned illustrative functions, not a physical
//! cyclone model, and the procedural imagery illustrates the narrative state
//! rather than deriving from the metrics by any physical law.
//!
//! ## Reproducibility
//!
//! The engine owns an injected random source: [`SimulationEngine::seeded`]
//! makes two engines with the same seed produce bit-identical output for
//! identical arguments; [`SimulationEngine::new`] draws a fresh entropy
//! seed.

// Core types and utilities
pub mod core_types;

// Archetype registry and per-archetype curves
pub mod catalog;
pub mod curves;

// Frame, image, and dataset synthesis
pub mod synth;

// Narrative and analytics
pub mod compare;
pub mod narrative;
pub mod trend;

// Engine surface
pub mod engine;
pub mod error;

// Re-export core types
pub use core_types::{Celsius, Frame, FrameMetrics, IrImage, Percent, RiskLevel, Simulation,
    SquareKilometers, Vec2, FRAME_INTERVAL_MINUTES};

// Re-export the catalog surface
pub use catalog::{Archetype, ArchetypeInfo, Difficulty, SimulationTemplate, FALLBACK_ARCHETYPE};

// Re-export analytics types
pub use compare::{ComparisonEntry, ComparisonResult, SummaryMetrics};
pub use narrative::{DetailedAnalysis, DevelopmentStage, RiskAssessment};
pub use trend::{Direction, Trend, TrendReport};

// Re-export the engine surface
pub use engine::{FrameAnalysis, SimulationEngine, UnknownArchetypePolicy, FRAME_COUNT_RANGE};
pub use error::EngineError;
