use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::interaction::{Tooltip, TooltipPlacement};
use crate::render::{
    Color, FontWeight, FrameLayer, GlyphPrimitive, GlyphShape, PolygonPrimitive, RectPrimitive,
    TextHAlign, TextPrimitive,
};

/// Average glyph advance as a share of the font size.
const AVERAGE_GLYPH_ADVANCE_EM: f64 = 0.6;

/// Rough rendered width of `text`; good enough for centring legend rows.
#[must_use]
pub fn estimate_text_width(text: &str, font_size_px: f64) -> f64 {
    AVERAGE_GLYPH_ADVANCE_EM * font_size_px * text.chars().count() as f64
}

fn ensure_unit_interval(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ChartError::InvalidConfig(format!(
            "{name} must be finite and in [0, 1]"
        )));
    }
    Ok(())
}

fn ensure_positive(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "{name} must be finite and > 0"
        )));
    }
    Ok(())
}

/// Floating tooltip look: rounded body above the anchor plus a downward pointer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipStyle {
    pub placement: TooltipPlacement,
    pub corner_radius: f64,
    pub pointer_half_width: f64,
    pub pointer_height: f64,
    /// Fixed body color; `None` takes the hovered glyph's color.
    #[serde(default)]
    pub background: Option<Color>,
    pub background_opacity: f64,
    pub text_color: Color,
    pub headline_font_px: f64,
    pub detail_font_px: f64,
    /// Baseline of the first line, measured from the body top.
    pub first_baseline: f64,
    pub line_advance: f64,
}

impl TooltipStyle {
    #[must_use]
    pub fn new(placement: TooltipPlacement) -> Self {
        Self {
            placement,
            corner_radius: 6.0,
            pointer_half_width: 5.0,
            pointer_height: 6.0,
            background: None,
            background_opacity: 0.95,
            text_color: Color::WHITE,
            headline_font_px: 12.0,
            detail_font_px: 11.0,
            first_baseline: 20.0,
            line_advance: 18.0,
        }
    }

    #[must_use]
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }

    #[must_use]
    pub fn with_fonts(mut self, headline_font_px: f64, detail_font_px: f64) -> Self {
        self.headline_font_px = headline_font_px;
        self.detail_font_px = detail_font_px;
        self
    }

    #[must_use]
    pub fn with_line_metrics(mut self, first_baseline: f64, line_advance: f64) -> Self {
        self.first_baseline = first_baseline;
        self.line_advance = line_advance;
        self
    }

    #[must_use]
    pub fn with_pointer(mut self, half_width: f64, height: f64) -> Self {
        self.pointer_half_width = half_width;
        self.pointer_height = height;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.placement.validate()?;
        ensure_unit_interval("tooltip opacity", self.background_opacity)?;
        ensure_positive("tooltip headline font size", self.headline_font_px)?;
        ensure_positive("tooltip detail font size", self.detail_font_px)?;
        if !self.corner_radius.is_finite()
            || !self.pointer_half_width.is_finite()
            || !self.pointer_height.is_finite()
            || !self.first_baseline.is_finite()
            || !self.line_advance.is_finite()
        {
            return Err(ChartError::InvalidConfig(
                "tooltip metrics must be finite".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Appends the tooltip body, pointer and lines; hidden tooltips add nothing.
    pub(crate) fn push_overlay(&self, tooltip: &Tooltip, glyph_color: Color, layer: &mut FrameLayer) {
        if !tooltip.visible {
            return;
        }
        let fill = self
            .background
            .unwrap_or(glyph_color)
            .with_alpha(self.background_opacity);
        let top = tooltip.top();

        layer.rects.push(
            RectPrimitive::filled(tooltip.left(), top, tooltip.width, tooltip.height, fill)
                .with_corner_radius(self.corner_radius),
        );
        if self.pointer_half_width > 0.0 && self.pointer_height > 0.0 {
            layer.polygons.push(PolygonPrimitive {
                points: vec![
                    (tooltip.anchor_x - self.pointer_half_width, tooltip.anchor_y),
                    (tooltip.anchor_x + self.pointer_half_width, tooltip.anchor_y),
                    (tooltip.anchor_x, tooltip.anchor_y + self.pointer_height),
                ],
                fill,
            });
        }

        for (index, line) in tooltip.lines.iter().enumerate() {
            let y = top + self.first_baseline + index as f64 * self.line_advance;
            let text = if index == 0 {
                TextPrimitive::new(
                    line.clone(),
                    tooltip.anchor_x,
                    y,
                    self.headline_font_px,
                    self.text_color,
                    TextHAlign::Center,
                )
                .with_weight(FontWeight::SemiBold)
            } else {
                TextPrimitive::new(
                    line.clone(),
                    tooltip.anchor_x,
                    y,
                    self.detail_font_px,
                    self.text_color.with_alpha(0.9),
                    TextHAlign::Center,
                )
            };
            layer.texts.push(text);
        }
    }
}

/// Outline drawn around the hovered glyph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighlightStyle {
    /// Outward growth of the glyph box on every side.
    pub inflate: f64,
    pub corner_radius: f64,
    pub stroke_width: f64,
    pub opacity: f64,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            inflate: 2.0,
            corner_radius: 4.0,
            stroke_width: 1.5,
            opacity: 0.6,
        }
    }
}

impl HighlightStyle {
    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        ensure_positive("highlight stroke width", self.stroke_width)?;
        ensure_unit_interval("highlight opacity", self.opacity)?;
        if !self.inflate.is_finite() || !self.corner_radius.is_finite() || self.corner_radius < 0.0
        {
            return Err(ChartError::InvalidConfig(
                "highlight inflate and corner radius must be finite".to_owned(),
            ));
        }
        Ok(self)
    }

    pub(crate) fn outline(self, glyph: &GlyphPrimitive) -> RectPrimitive {
        RectPrimitive::outlined(
            glyph.x - self.inflate,
            glyph.y - self.inflate,
            glyph.width + 2.0 * self.inflate,
            glyph.height + 2.0 * self.inflate,
            glyph.color,
            self.stroke_width,
        )
        .with_corner_radius(self.corner_radius)
        .with_opacity(self.opacity)
    }
}

/// Marker drawn beside a legend label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LegendSwatch {
    Glyph(GlyphShape),
    Square { corner_radius: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
}

impl LegendEntry {
    #[must_use]
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }
}

/// One centred row of swatch + label entries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendStyle {
    pub swatch: LegendSwatch,
    pub swatch_width: f64,
    pub swatch_height: f64,
    /// Gap between a swatch and its label.
    pub label_gap: f64,
    /// Gap between consecutive entries.
    pub entry_gap: f64,
    pub font_px: f64,
    pub text_color: Color,
}

impl LegendStyle {
    #[must_use]
    pub fn new(swatch: LegendSwatch, swatch_width: f64, swatch_height: f64, text_color: Color) -> Self {
        Self {
            swatch,
            swatch_width,
            swatch_height,
            label_gap: 8.0,
            entry_gap: 24.0,
            font_px: 14.0,
            text_color,
        }
    }

    #[must_use]
    pub fn with_font_px(mut self, font_px: f64) -> Self {
        self.font_px = font_px;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        ensure_positive("legend swatch width", self.swatch_width)?;
        ensure_positive("legend swatch height", self.swatch_height)?;
        ensure_positive("legend font size", self.font_px)?;
        Ok(self)
    }

    #[must_use]
    pub fn row_width(&self, entries: &[LegendEntry]) -> f64 {
        let content: f64 = entries
            .iter()
            .map(|entry| self.entry_width(entry))
            .sum();
        content + self.entry_gap * entries.len().saturating_sub(1) as f64
    }

    fn entry_width(&self, entry: &LegendEntry) -> f64 {
        self.swatch_width + self.label_gap + estimate_text_width(&entry.label, self.font_px)
    }

    /// Lays the row out centred on `center_x` with swatch tops at `top`.
    pub(crate) fn push_row(
        &self,
        entries: &[LegendEntry],
        center_x: f64,
        top: f64,
        layer: &mut FrameLayer,
    ) {
        let mut x = center_x - self.row_width(entries) / 2.0;
        let text_y = top + self.swatch_height / 2.0 + self.font_px * 0.35;

        for entry in entries {
            match self.swatch {
                LegendSwatch::Glyph(shape) => layer.glyphs.push(GlyphPrimitive {
                    flat_index: None,
                    shape,
                    x,
                    y: top,
                    width: self.swatch_width,
                    height: self.swatch_height,
                    color: entry.color,
                    opacity: 1.0,
                }),
                LegendSwatch::Square { corner_radius } => layer.rects.push(
                    RectPrimitive::filled(x, top, self.swatch_width, self.swatch_height, entry.color)
                        .with_corner_radius(corner_radius),
                ),
            }
            layer.texts.push(
                TextPrimitive::new(
                    entry.label.clone(),
                    x + self.swatch_width + self.label_gap,
                    text_y,
                    self.font_px,
                    self.text_color,
                    TextHAlign::Left,
                )
                .with_weight(FontWeight::Medium),
            );
            x += self.entry_width(entry) + self.entry_gap;
        }
    }
}

/// Single centred text line, e.g. a footer summary or a chart title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    pub text: String,
    pub font_px: f64,
    pub color: Color,
    pub weight: FontWeight,
}

impl TextLine {
    #[must_use]
    pub fn new(text: impl Into<String>, font_px: f64, color: Color) -> Self {
        Self {
            text: text.into(),
            font_px,
            color,
            weight: FontWeight::Normal,
        }
    }

    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub(crate) fn centered_at(&self, x: f64, y: f64) -> TextPrimitive {
        TextPrimitive::new(
            self.text.clone(),
            x,
            y,
            self.font_px,
            self.color,
            TextHAlign::Center,
        )
        .with_weight(self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::{LegendEntry, LegendStyle, LegendSwatch, estimate_text_width};
    use crate::render::{Color, FrameLayer};

    #[test]
    fn legend_row_is_centred() {
        let style = LegendStyle::new(LegendSwatch::Square { corner_radius: 2.0 }, 16.0, 16.0, Color::WHITE);
        let entries = [
            LegendEntry::new("Before SMC", Color::WHITE),
            LegendEntry::new("After SMC", Color::WHITE),
        ];
        let mut layer = FrameLayer::default();
        style.push_row(&entries, 500.0, 10.0, &mut layer);

        let width = style.row_width(&entries);
        assert_eq!(layer.rects.len(), 2);
        assert_eq!(layer.texts.len(), 2);
        assert!((layer.rects[0].x - (500.0 - width / 2.0)).abs() < 1e-9);
    }

    #[test]
    fn text_width_scales_with_length() {
        assert!(estimate_text_width("abcd", 10.0) > estimate_text_width("ab", 10.0));
        assert_eq!(estimate_text_width("", 10.0), 0.0);
    }
}
