//! isotype-charts: pictorial chart layout and hover engine.
//!
//! Lays out isotype grids and pictorial bar charts as flat sequences of icon
//! glyphs under a fixed unit-per-icon scale, tracks which glyph the pointer
//! is on, and positions a clamped tooltip. Rendering goes through a
//! backend-agnostic `RenderFrame` (SVG built in, Cairo behind a feature).

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartEngine, ChartEngineConfig, ChartSpec};
pub use error::{ChartError, ChartResult};
