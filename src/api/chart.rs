use serde::{Deserialize, Serialize};

use crate::core::{CanvasSize, Glyph};
use crate::error::ChartResult;
use crate::interaction::{HoverController, HoverRelease};
use crate::render::{Color, FrameLayer};

use super::bar_chart::{BarChartConfig, PictorialBarChart};
use super::decoration::TooltipStyle;
use super::isotype_chart::{IsotypeChart, IsotypeChartConfig};

/// Which chart a [`ChartSpec`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Isotype,
    PictorialBars,
}

/// Serializable description of one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    Isotype(IsotypeChartConfig),
    PictorialBars(BarChartConfig),
}

impl ChartSpec {
    #[must_use]
    pub fn kind(&self) -> ChartKind {
        match self {
            Self::Isotype(_) => ChartKind::Isotype,
            Self::PictorialBars(_) => ChartKind::PictorialBars,
        }
    }

    /// Validates the config and runs the layout pass.
    pub fn build(&self) -> ChartResult<PictorialChart> {
        match self {
            Self::Isotype(config) => IsotypeChart::new(config.clone()).map(PictorialChart::Isotype),
            Self::PictorialBars(config) => {
                PictorialBarChart::new(config.clone()).map(PictorialChart::PictorialBars)
            }
        }
    }
}

/// A laid-out chart of either kind.
#[derive(Debug, Clone, PartialEq)]
pub enum PictorialChart {
    Isotype(IsotypeChart),
    PictorialBars(PictorialBarChart),
}

impl PictorialChart {
    #[must_use]
    pub fn kind(&self) -> ChartKind {
        match self {
            Self::Isotype(_) => ChartKind::Isotype,
            Self::PictorialBars(_) => ChartKind::PictorialBars,
        }
    }

    #[must_use]
    pub fn glyphs(&self) -> &[Glyph] {
        match self {
            Self::Isotype(chart) => chart.glyphs(),
            Self::PictorialBars(chart) => chart.glyphs(),
        }
    }

    #[must_use]
    pub fn canvas_size(&self) -> CanvasSize {
        match self {
            Self::Isotype(chart) => chart.canvas_size(),
            Self::PictorialBars(chart) => chart.canvas_size(),
        }
    }

    /// Tooltip lines for a glyph; `None` when the index is out of range.
    #[must_use]
    pub fn label_lines(&self, flat_index: usize) -> Option<Vec<String>> {
        match self {
            Self::Isotype(chart) => chart.label_lines(flat_index),
            Self::PictorialBars(chart) => chart.label_lines(flat_index),
        }
    }

    #[must_use]
    pub fn glyph_color(&self, flat_index: usize) -> Option<Color> {
        match self {
            Self::Isotype(chart) => chart.glyph_color(flat_index),
            Self::PictorialBars(chart) => chart.glyph_color(flat_index),
        }
    }

    #[must_use]
    pub fn dim_opacity(&self) -> f64 {
        match self {
            Self::Isotype(chart) => chart.config().dim_opacity,
            Self::PictorialBars(chart) => chart.config().dim_opacity,
        }
    }

    #[must_use]
    pub fn tooltip_style(&self) -> TooltipStyle {
        match self {
            Self::Isotype(chart) => chart.config().tooltip,
            Self::PictorialBars(chart) => chart.config().tooltip,
        }
    }

    #[must_use]
    pub fn hover_release(&self) -> HoverRelease {
        match self {
            Self::Isotype(chart) => chart.config().hover_release,
            Self::PictorialBars(chart) => chart.config().hover_release,
        }
    }

    pub(crate) fn push_scene(&self, hover: &HoverController, layer: &mut FrameLayer) {
        match self {
            Self::Isotype(chart) => chart.push_scene(hover, layer),
            Self::PictorialBars(chart) => chart.push_scene(hover, layer),
        }
    }
}
