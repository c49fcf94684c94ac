use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Headless renderer: validates frames and records primitive counts.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_glyph_count: usize,
    pub last_text_count: usize,
    pub last_overlay_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_glyph_count = frame.scene.glyphs.len();
        self.last_text_count = frame.texts().count();
        self.last_overlay_count = frame.overlay.primitive_count();
        Ok(())
    }
}
