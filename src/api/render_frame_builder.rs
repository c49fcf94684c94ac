use crate::error::ChartResult;
use crate::render::{Color, RenderFrame, Renderer};

use super::ChartEngine;
use super::engine_config::METADATA_SOURCE;

impl<R: Renderer> ChartEngine<R> {
    /// Materializes the chart body and, while a glyph is hovered, the tooltip
    /// overlay. Pure with respect to engine state.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.canvas_size());
        if let Some(title) = self.config.title() {
            frame = frame.with_title(title);
        }
        let description = match (self.config.alt_text(), self.config.metadata.get(METADATA_SOURCE)) {
            (Some(alt), Some(source)) => Some(format!("{alt} Source: {source}")),
            (Some(alt), None) => Some(alt.to_owned()),
            (None, Some(source)) => Some(format!("Source: {source}")),
            (None, None) => None,
        };
        if let Some(description) = description {
            frame = frame.with_description(description);
        }

        self.chart.push_scene(&self.hover, &mut frame.scene);

        let tooltip = self.tooltip();
        if let Some(flat_index) = tooltip.glyph {
            let glyph_color = self
                .chart
                .glyph_color(flat_index)
                .unwrap_or(Color::rgb(0.0, 0.0, 0.0));
            self.chart
                .tooltip_style()
                .push_overlay(&tooltip, glyph_color, &mut frame.overlay);
        }

        frame.validate()?;
        Ok(frame)
    }
}
