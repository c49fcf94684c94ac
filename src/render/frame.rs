use crate::core::CanvasSize;
use crate::error::{ChartError, ChartResult};
use crate::render::{GlyphPrimitive, LinePrimitive, PolygonPrimitive, RectPrimitive, TextPrimitive};

/// Primitives of one paint layer, painted glyphs first, then rects, lines,
/// polygons and texts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameLayer {
    pub glyphs: Vec<GlyphPrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub polygons: Vec<PolygonPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl FrameLayer {
    pub fn validate(&self) -> ChartResult<()> {
        for glyph in &self.glyphs {
            glyph.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for polygon in &self.polygons {
            polygon.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
            && self.rects.is_empty()
            && self.lines.is_empty()
            && self.polygons.is_empty()
            && self.texts.is_empty()
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.glyphs.len() + self.rects.len() + self.lines.len() + self.polygons.len() + self.texts.len()
    }
}

/// Backend-agnostic scene for one chart draw pass.
///
/// `scene` holds the chart body; `overlay` (the tooltip) is painted on top.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub canvas: CanvasSize,
    pub title: Option<String>,
    pub description: Option<String>,
    pub scene: FrameLayer,
    pub overlay: FrameLayer,
}

impl RenderFrame {
    #[must_use]
    pub fn new(canvas: CanvasSize) -> Self {
        Self {
            canvas,
            title: None,
            description: None,
            scene: FrameLayer::default(),
            overlay: FrameLayer::default(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.canvas.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.canvas.width,
                height: self.canvas.height,
            });
        }
        self.scene.validate()?;
        self.overlay.validate()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scene.is_empty() && self.overlay.is_empty()
    }

    /// Layers in paint order.
    pub fn layers(&self) -> impl Iterator<Item = &FrameLayer> {
        [&self.scene, &self.overlay].into_iter()
    }

    /// Every text in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.layers().flat_map(|layer| layer.texts.iter())
    }

    #[must_use]
    pub fn has_text(&self, text: &str) -> bool {
        self.texts().any(|primitive| primitive.text == text)
    }
}
