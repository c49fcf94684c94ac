use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    CanvasSize, CategoryPartition, Glyph, GlyphCategory, GridLayout, GridLayoutConfig,
    group_thousands_f64, partition,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{HoverController, HoverRelease, TooltipPlacement};
use crate::render::{Color, FrameLayer, GlyphPrimitive, GlyphShape};

use super::decoration::{
    HighlightStyle, LegendEntry, LegendStyle, LegendSwatch, TextLine, TooltipStyle,
};

/// Gap between the last grid row and the footer summary baseline.
const SUMMARY_OFFSET: f64 = 30.0;
/// Gap between the summary baseline and the legend swatch tops.
const LEGEND_OFFSET: f64 = 10.0;

/// How one isotype category is colored, labelled and listed in the legend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStyle {
    pub color: Color,
    /// Headline prefix; the label reads `"{heading} {k} of {M}"`.
    pub label_heading: String,
    /// Second tooltip line, e.g. `"represents 1 death"`.
    pub label_detail: String,
    #[serde(default)]
    pub legend_label: Option<String>,
}

impl CategoryStyle {
    #[must_use]
    pub fn new(color: Color, label_heading: impl Into<String>, label_detail: impl Into<String>) -> Self {
        Self {
            color,
            label_heading: label_heading.into(),
            label_detail: label_detail.into(),
            legend_label: None,
        }
    }

    #[must_use]
    pub fn with_legend_label(mut self, legend_label: impl Into<String>) -> Self {
        self.legend_label = Some(legend_label.into());
        self
    }
}

fn default_dim_opacity() -> f64 {
    0.2
}

fn default_footer_height() -> f64 {
    60.0
}

fn default_legend_style() -> LegendStyle {
    LegendStyle::new(LegendSwatch::Glyph(GlyphShape::StandingPerson), 14.0, 18.0, Color::rgb(0.22, 0.29, 0.38))
        .with_font_px(13.0)
}

fn default_tooltip_style() -> TooltipStyle {
    TooltipStyle::new(TooltipPlacement::new(240.0, 50.0).with_upward_offset(16.0))
}

/// Serializable setup of an isotype grid: one whole split into a major
/// aggregate category and a unit-value subcategory tail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsotypeChartConfig {
    pub raw_major_units: f64,
    pub unit_per_icon: f64,
    pub raw_subcategory_count: usize,
    pub grid: GridLayoutConfig,
    pub shape: GlyphShape,
    pub major: CategoryStyle,
    pub subcategory: CategoryStyle,
    #[serde(default = "default_dim_opacity")]
    pub dim_opacity: f64,
    #[serde(default)]
    pub highlight: Option<HighlightStyle>,
    /// Space below the grid for the summary and legend.
    #[serde(default = "default_footer_height")]
    pub footer_height: f64,
    #[serde(default)]
    pub summary: Option<TextLine>,
    #[serde(default)]
    pub show_legend: bool,
    #[serde(default = "default_legend_style")]
    pub legend: LegendStyle,
    #[serde(default = "default_tooltip_style")]
    pub tooltip: TooltipStyle,
    #[serde(default)]
    pub hover_release: HoverRelease,
}

impl IsotypeChartConfig {
    /// Config with generic labels: `"represents ~N units"` for major glyphs
    /// and `"represents 1 unit"` for the tail.
    #[must_use]
    pub fn new(
        raw_major_units: f64,
        unit_per_icon: f64,
        raw_subcategory_count: usize,
        grid: GridLayoutConfig,
    ) -> Self {
        Self {
            raw_major_units,
            unit_per_icon,
            raw_subcategory_count,
            grid,
            shape: GlyphShape::StandingPerson,
            major: CategoryStyle::new(
                Color::from_rgb8(0x39, 0x4a, 0x62),
                "Group",
                format!("represents ~{} units", group_thousands_f64(unit_per_icon)),
            ),
            subcategory: CategoryStyle::new(
                Color::from_rgb8(0x9f, 0x1c, 0x20),
                "Unit",
                "represents 1 unit",
            ),
            dim_opacity: default_dim_opacity(),
            highlight: Some(HighlightStyle::default()),
            footer_height: default_footer_height(),
            summary: None,
            show_legend: false,
            legend: default_legend_style(),
            tooltip: default_tooltip_style(),
            hover_release: HoverRelease::default(),
        }
    }

    #[must_use]
    pub fn with_shape(mut self, shape: GlyphShape) -> Self {
        self.shape = shape;
        self.legend.swatch = LegendSwatch::Glyph(shape);
        self
    }

    #[must_use]
    pub fn with_category_styles(mut self, major: CategoryStyle, subcategory: CategoryStyle) -> Self {
        self.major = major;
        self.subcategory = subcategory;
        self
    }

    #[must_use]
    pub fn with_dim_opacity(mut self, dim_opacity: f64) -> Self {
        self.dim_opacity = dim_opacity;
        self
    }

    #[must_use]
    pub fn with_highlight(mut self, highlight: Option<HighlightStyle>) -> Self {
        self.highlight = highlight;
        self
    }

    #[must_use]
    pub fn with_footer_height(mut self, footer_height: f64) -> Self {
        self.footer_height = footer_height;
        self
    }

    #[must_use]
    pub fn with_summary(mut self, summary: TextLine) -> Self {
        self.summary = Some(summary);
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: LegendStyle) -> Self {
        self.show_legend = true;
        self.legend = legend;
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
        self.grid.validate()?;
        if !self.dim_opacity.is_finite() || !(0.0..=1.0).contains(&self.dim_opacity) {
            return Err(ChartError::InvalidConfig(
                "dim opacity must be finite and in [0, 1]".to_owned(),
            ));
        }
        if !self.footer_height.is_finite() || self.footer_height < 0.0 {
            return Err(ChartError::InvalidConfig(
                "footer height must be finite and >= 0".to_owned(),
            ));
        }
        for style in [&self.major, &self.subcategory] {
            style.color.validate().map_err(|err| {
                ChartError::InvalidConfig(format!("category color is invalid: {err}"))
            })?;
        }
        if let Some(highlight) = self.highlight {
            highlight.validate()?;
        }
        self.legend.validate()?;
        self.tooltip.validate()?;
        Ok(())
    }
}

/// Laid-out isotype grid ready for hover and rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct IsotypeChart {
    config: IsotypeChartConfig,
    partition: CategoryPartition,
    layout: GridLayout,
    glyphs: Vec<Glyph>,
}

impl IsotypeChart {
    pub fn new(config: IsotypeChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let partition = partition(
            config.raw_major_units,
            config.unit_per_icon,
            config.raw_subcategory_count,
        )?;
        let layout = GridLayout::compute(partition.total_icon_count, config.grid)?;
        let glyphs = layout
            .placements
            .iter()
            .map(|placement| Glyph {
                flat_index: placement.flat_index,
                period: None,
                row: placement.row,
                column: placement.column,
                category: partition.category_of(placement.flat_index),
                x: placement.x,
                y: placement.y,
                width: config.grid.icon_width,
                height: config.grid.icon_height,
            })
            .collect::<Vec<_>>();

        debug!(
            glyph_count = glyphs.len(),
            boundary_index = partition.boundary_index,
            rows = layout.rows,
            "isotype grid laid out"
        );

        Ok(Self {
            config,
            partition,
            layout,
            glyphs,
        })
    }

    #[must_use]
    pub fn config(&self) -> &IsotypeChartConfig {
        &self.config
    }

    #[must_use]
    pub fn partition(&self) -> CategoryPartition {
        self.partition
    }

    #[must_use]
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    #[must_use]
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// Grid body plus the footer band.
    #[must_use]
    pub fn canvas_size(&self) -> CanvasSize {
        CanvasSize::new(self.layout.width, self.layout.height + self.config.footer_height)
    }

    #[must_use]
    pub fn style_for(&self, category: GlyphCategory) -> &CategoryStyle {
        match category {
            GlyphCategory::Subcategory => &self.config.subcategory,
            _ => &self.config.major,
        }
    }

    #[must_use]
    pub fn glyph_color(&self, flat_index: usize) -> Option<Color> {
        self.glyphs
            .get(flat_index)
            .map(|glyph| self.style_for(glyph.category).color)
    }

    /// Headline `"{heading} {k} of {M}"` followed by the category detail.
    #[must_use]
    pub fn label_lines(&self, flat_index: usize) -> Option<Vec<String>> {
        let ordinal = self.partition.ordinal_of(flat_index)?;
        let style = self.style_for(ordinal.category);
        Some(vec![
            format!("{} {} of {}", style.label_heading, ordinal.ordinal, ordinal.of),
            style.label_detail.clone(),
        ])
    }

    /// Baseline of the footer summary line.
    #[must_use]
    pub fn summary_baseline(&self) -> f64 {
        self.layout.rows as f64 * self.config.grid.pitch_y() + SUMMARY_OFFSET
    }

    #[must_use]
    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        [&self.config.major, &self.config.subcategory]
            .into_iter()
            .filter_map(|style| {
                style
                    .legend_label
                    .as_ref()
                    .map(|label| LegendEntry::new(label.clone(), style.color))
            })
            .collect()
    }

    pub(crate) fn push_scene(&self, hover: &HoverController, layer: &mut FrameLayer) {
        let canvas = self.canvas_size();
        layer.glyphs.reserve(self.glyphs.len());
        for glyph in &self.glyphs {
            let primitive = GlyphPrimitive {
                flat_index: Some(glyph.flat_index),
                shape: self.config.shape,
                x: glyph.x,
                y: glyph.y,
                width: glyph.width,
                height: glyph.height,
                color: self.style_for(glyph.category).color,
                opacity: hover.opacity_for(glyph.flat_index, self.config.dim_opacity),
            };
            if hover.hovered() == Some(glyph.flat_index) {
                if let Some(highlight) = self.config.highlight {
                    layer.rects.push(highlight.outline(&primitive));
                }
            }
            layer.glyphs.push(primitive);
        }

        let summary_y = self.summary_baseline();
        if let Some(summary) = &self.config.summary {
            layer
                .texts
                .push(summary.centered_at(canvas.width / 2.0, summary_y));
        }
        if self.config.show_legend {
            let entries = self.legend_entries();
            if !entries.is_empty() {
                self.config.legend.push_row(
                    &entries,
                    canvas.width / 2.0,
                    summary_y + LEGEND_OFFSET,
                    layer,
                );
            }
        }
    }
}
