use serde::{Deserialize, Serialize};

use crate::core::CanvasSize;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub canvas: CanvasSize,
    pub glyph_count: usize,
    pub hovered: Option<usize>,
    pub pointer_x: f64,
    pub pointer_y: f64,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    ChartReplaced { glyph_count: usize },
    PointerMoved { x: f64, y: f64 },
    GlyphEntered { flat_index: usize },
    HoverCleared,
    PointerLeft,
    Rendered,
}

/// Observer hook for page-level concerns (analytics, captions, sync).
///
/// Plugins observe events and read context; they cannot mutate engine state.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PluginEvent, context: PluginContext);
}
