use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    BarColumn, BarLayout, BarLayoutConfig, CanvasSize, DatasetEntry, Glyph, GlyphCategory,
    group_thousands_f64, layout_bars,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{HoverController, HoverRelease, TooltipPlacement};
use crate::render::{
    Color, FontWeight, FrameLayer, GlyphPrimitive, GlyphShape, LinePrimitive, TextHAlign,
    TextPrimitive,
};

use super::decoration::{LegendEntry, LegendStyle, LegendSwatch, TextLine, TooltipStyle};

const TITLE_BASELINE: f64 = 40.0;
const SUBTITLE_GAP: f64 = 25.0;
const PERIOD_LABEL_GAP: f64 = 40.0;
const COUNT_LABEL_GAP: f64 = 2.0;
const DIVIDER_CAPTION_GAP: f64 = 10.0;
const LEGEND_BOTTOM_INSET: f64 = 20.0;

/// Glyph colors per tone category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TonePalette {
    pub uniform: Color,
    pub before: Color,
    pub after: Color,
}

impl TonePalette {
    #[must_use]
    pub fn color_for(self, category: GlyphCategory) -> Color {
        match category {
            GlyphCategory::BeforeThreshold => self.before,
            GlyphCategory::AfterThreshold => self.after,
            _ => self.uniform,
        }
    }
}

fn default_dim_opacity() -> f64 {
    0.4
}

fn default_value_noun() -> String {
    "cases".to_owned()
}

/// Serializable setup of a pictorial bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartConfig {
    /// Ordered periods; the order is the display order.
    pub dataset: Vec<DatasetEntry>,
    pub layout: BarLayoutConfig,
    #[serde(default = "default_shape")]
    pub shape: GlyphShape,
    pub palette: TonePalette,
    /// Color of titles, period/count labels and the divider.
    pub text_color: Color,
    #[serde(default)]
    pub title: Option<TextLine>,
    #[serde(default)]
    pub subtitle: Option<TextLine>,
    #[serde(default)]
    pub divider_caption: Option<String>,
    /// Before/after legend labels, shown in two-tone mode only.
    #[serde(default)]
    pub legend_labels: Option<(String, String)>,
    pub legend: LegendStyle,
    #[serde(default = "default_dim_opacity")]
    pub dim_opacity: f64,
    /// Noun in the tooltip's value line, e.g. `"5,000 cases"`.
    #[serde(default = "default_value_noun")]
    pub value_noun: String,
    pub tooltip: TooltipStyle,
    #[serde(default)]
    pub hover_release: HoverRelease,
}

fn default_shape() -> GlyphShape {
    GlyphShape::HospitalBed
}

impl BarChartConfig {
    #[must_use]
    pub fn new(dataset: Vec<DatasetEntry>, layout: BarLayoutConfig) -> Self {
        let navy = Color::from_rgb8(0x2c, 0x3e, 0x75);
        Self {
            dataset,
            layout,
            shape: default_shape(),
            palette: TonePalette {
                uniform: navy,
                before: Color::from_rgb8(0x9f, 0x1c, 0x20),
                after: Color::from_rgb8(0x02, 0x60, 0x5b),
            },
            text_color: navy,
            title: None,
            subtitle: None,
            divider_caption: None,
            legend_labels: None,
            legend: LegendStyle::new(LegendSwatch::Square { corner_radius: 2.0 }, 16.0, 16.0, navy),
            dim_opacity: default_dim_opacity(),
            value_noun: default_value_noun(),
            tooltip: TooltipStyle::new(
                TooltipPlacement::new(160.0, 70.0)
                    .with_upward_offset(14.0)
                    .with_edge_margin(10.0),
            )
            .with_background(navy)
            .with_fonts(14.0, 12.0)
            .with_line_metrics(20.0, 19.0)
            .with_pointer(6.0, 6.0),
            hover_release: HoverRelease::default(),
        }
    }

    #[must_use]
    pub fn with_palette(mut self, palette: TonePalette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_text_color(mut self, text_color: Color) -> Self {
        self.text_color = text_color;
        self
    }

    #[must_use]
    pub fn with_titles(mut self, title: TextLine, subtitle: Option<TextLine>) -> Self {
        self.title = Some(title);
        self.subtitle = subtitle;
        self
    }

    #[must_use]
    pub fn with_divider_caption(mut self, caption: impl Into<String>) -> Self {
        self.divider_caption = Some(caption.into());
        self
    }

    #[must_use]
    pub fn with_legend_labels(mut self, before: impl Into<String>, after: impl Into<String>) -> Self {
        self.legend_labels = Some((before.into(), after.into()));
        self
    }

    #[must_use]
    pub fn with_dim_opacity(mut self, dim_opacity: f64) -> Self {
        self.dim_opacity = dim_opacity;
        self
    }

    #[must_use]
    pub fn with_value_noun(mut self, value_noun: impl Into<String>) -> Self {
        self.value_noun = value_noun.into();
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipStyle) -> Self {
        self.tooltip = tooltip;
        self
    }

    #[must_use]
    pub fn with_hover_release(mut self, hover_release: HoverRelease) -> Self {
        self.hover_release = hover_release;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.dim_opacity.is_finite() || !(0.0..=1.0).contains(&self.dim_opacity) {
            return Err(ChartError::InvalidConfig(
                "dim opacity must be finite and in [0, 1]".to_owned(),
            ));
        }
        for color in [
            self.palette.uniform,
            self.palette.before,
            self.palette.after,
            self.text_color,
        ] {
            color.validate().map_err(|err| {
                ChartError::InvalidConfig(format!("bar chart color is invalid: {err}"))
            })?;
        }
        self.legend.validate()?;
        self.tooltip.validate()?;
        Ok(())
    }
}

/// Laid-out pictorial bar chart ready for hover and rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct PictorialBarChart {
    config: BarChartConfig,
    layout: BarLayout,
}

impl PictorialBarChart {
    pub fn new(config: BarChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let layout = layout_bars(&config.dataset, config.layout)?;
        debug!(
            periods = layout.columns.len(),
            glyph_count = layout.glyphs.len(),
            shared_row_count = layout.shared_row_count,
            has_divider = layout.divider.is_some(),
            "pictorial bars laid out"
        );
        Ok(Self { config, layout })
    }

    #[must_use]
    pub fn config(&self) -> &BarChartConfig {
        &self.config
    }

    #[must_use]
    pub fn layout(&self) -> &BarLayout {
        &self.layout
    }

    #[must_use]
    pub fn glyphs(&self) -> &[Glyph] {
        &self.layout.glyphs
    }

    #[must_use]
    pub fn columns(&self) -> &[BarColumn] {
        &self.layout.columns
    }

    #[must_use]
    pub fn canvas_size(&self) -> CanvasSize {
        CanvasSize::new(self.layout.canvas_width, self.layout.canvas_height)
    }

    #[must_use]
    pub fn glyph_color(&self, flat_index: usize) -> Option<Color> {
        self.layout
            .glyphs
            .get(flat_index)
            .map(|glyph| self.config.palette.color_for(glyph.category))
    }

    /// Period, `"Icon k of N"` within the period, and the per-icon value.
    #[must_use]
    pub fn label_lines(&self, flat_index: usize) -> Option<Vec<String>> {
        let column = self.layout.column_for_glyph(flat_index)?;
        let ordinal = flat_index - column.first_flat_index + 1;
        Some(vec![
            column.period.to_string(),
            format!("Icon {ordinal} of {}", column.icon_count),
            format!(
                "{} {}",
                group_thousands_f64(self.config.layout.icon_value_unit),
                self.config.value_noun
            ),
        ])
    }

    #[must_use]
    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        match (&self.config.legend_labels, self.config.layout.tone.threshold_period()) {
            (Some((before, after)), Some(_)) => vec![
                LegendEntry::new(before.clone(), self.config.palette.before),
                LegendEntry::new(after.clone(), self.config.palette.after),
            ],
            _ => Vec::new(),
        }
    }

    pub(crate) fn push_scene(&self, hover: &HoverController, layer: &mut FrameLayer) {
        let canvas = self.canvas_size();
        let center_x = canvas.width / 2.0;
        let text_color = self.config.text_color;

        if let Some(title) = &self.config.title {
            layer.texts.push(title.centered_at(center_x, TITLE_BASELINE));
        }
        if let Some(subtitle) = &self.config.subtitle {
            layer
                .texts
                .push(subtitle.centered_at(center_x, TITLE_BASELINE + SUBTITLE_GAP));
        }

        let entries = self.legend_entries();
        if !entries.is_empty() {
            self.config.legend.push_row(
                &entries,
                center_x,
                canvas.height - LEGEND_BOTTOM_INSET,
                layer,
            );
        }

        if let Some(divider) = self.layout.divider {
            layer.lines.push(
                LinePrimitive::new(
                    divider.x,
                    divider.y_top,
                    divider.x,
                    divider.y_bottom,
                    2.0,
                    text_color.with_alpha(0.5),
                )
                .with_dash(5.0, 5.0),
            );
            if let Some(caption) = &self.config.divider_caption {
                layer.texts.push(
                    TextPrimitive::new(
                        caption.clone(),
                        divider.x,
                        self.config.layout.margins.top - DIVIDER_CAPTION_GAP,
                        12.0,
                        text_color,
                        TextHAlign::Center,
                    )
                    .with_weight(FontWeight::SemiBold),
                );
            }
        }

        layer.glyphs.reserve(self.layout.glyphs.len());
        for glyph in &self.layout.glyphs {
            layer.glyphs.push(GlyphPrimitive {
                flat_index: Some(glyph.flat_index),
                shape: self.config.shape,
                x: glyph.x,
                y: glyph.y,
                width: glyph.width,
                height: glyph.height,
                color: self.config.palette.color_for(glyph.category),
                opacity: hover.opacity_for(glyph.flat_index, self.config.dim_opacity),
            });
        }

        let count_y = self.layout.row_budget_top() - COUNT_LABEL_GAP;
        for column in &self.layout.columns {
            layer.texts.push(TextPrimitive::new(
                column.period.to_string(),
                column.center_x,
                self.layout.baseline_y + PERIOD_LABEL_GAP,
                18.0,
                text_color,
                TextHAlign::Center,
            ));
            layer.texts.push(
                TextPrimitive::new(
                    column.summary_label.clone(),
                    column.center_x,
                    count_y,
                    14.0,
                    text_color,
                    TextHAlign::Center,
                )
                .with_weight(FontWeight::Bold),
            );
        }
    }
}
