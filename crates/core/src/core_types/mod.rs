//! Core types and utilities

pub mod frame;
pub mod metrics;
pub mod units;
pub mod vec2;

pub use frame::{Frame, IrImage, Simulation, FRAME_INTERVAL_MINUTES};
pub use metrics::{metric_ranges, FrameMetrics, RiskLevel};
pub use units::{Celsius, Percent, SquareKilometers};
pub use vec2::Vec2;
