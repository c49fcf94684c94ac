mod frame;
mod glyph_shapes;
mod null_renderer;
mod primitives;
mod svg_backend;

pub use frame::{FrameLayer, RenderFrame};
pub use glyph_shapes::{FillRule, GlyphPath, GlyphShape, PartTone, ShapeViewBox};
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, FontWeight, GlyphPrimitive, LinePrimitive, PolygonPrimitive, RectPrimitive, TextHAlign,
    TextPrimitive,
};
pub use svg_backend::SvgRenderer;

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`; drawing code never
/// sees chart data or hover state.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
