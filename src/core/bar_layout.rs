use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::number_format::group_thousands;
use crate::core::validation::{
    MAX_GLYPH_COUNT, ensure_at_least_one, ensure_glyph_budget, ensure_non_negative,
    ensure_positive,
};
use crate::core::{DatasetEntry, Glyph, GlyphCategory, Margins};
use crate::error::{ChartError, ChartResult};

/// Gap between the chart body top margin and the divider's upper end.
const DIVIDER_TOP_INSET: f64 = 5.0;

/// Coloring regime of a pictorial bar chart. Chosen by the caller, never
/// inferred from data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToneMode {
    Single,
    TwoTone { threshold_period: i32 },
}

impl ToneMode {
    #[must_use]
    pub fn category_for(self, period: i32) -> GlyphCategory {
        match self {
            Self::Single => GlyphCategory::Uniform,
            Self::TwoTone { threshold_period } if period < threshold_period => {
                GlyphCategory::BeforeThreshold
            }
            Self::TwoTone { .. } => GlyphCategory::AfterThreshold,
        }
    }

    #[must_use]
    pub fn threshold_period(self) -> Option<i32> {
        match self {
            Self::Single => None,
            Self::TwoTone { threshold_period } => Some(threshold_period),
        }
    }
}

/// Geometry and scale of a pictorial bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarLayoutConfig {
    /// Raw units represented by one glyph; shared by every column.
    pub icon_value_unit: f64,
    pub icons_per_row: usize,
    pub icon_size: f64,
    pub spacing: f64,
    pub column_width: f64,
    #[serde(default)]
    pub margins: Margins,
    /// Extra height between the top margin and the tallest possible column,
    /// reserved for count labels.
    #[serde(default)]
    pub headroom: f64,
    pub tone: ToneMode,
}

impl BarLayoutConfig {
    #[must_use]
    pub fn new(icon_value_unit: f64, icons_per_row: usize) -> Self {
        Self {
            icon_value_unit,
            icons_per_row,
            icon_size: 40.0,
            spacing: 5.0,
            column_width: 220.0,
            margins: Margins::default(),
            headroom: 80.0,
            tone: ToneMode::Single,
        }
    }

    #[must_use]
    pub fn with_icon_geometry(mut self, icon_size: f64, spacing: f64) -> Self {
        self.icon_size = icon_size;
        self.spacing = spacing;
        self
    }

    #[must_use]
    pub fn with_column_width(mut self, column_width: f64) -> Self {
        self.column_width = column_width;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_headroom(mut self, headroom: f64) -> Self {
        self.headroom = headroom;
        self
    }

    #[must_use]
    pub fn with_tone(mut self, tone: ToneMode) -> Self {
        self.tone = tone;
        self
    }

    #[must_use]
    pub fn pitch(self) -> f64 {
        self.icon_size + self.spacing
    }

    /// Width of one column's icon block, without trailing spacing.
    #[must_use]
    pub fn block_width(self) -> f64 {
        self.icons_per_row as f64 * self.pitch() - self.spacing
    }

    pub fn validate(self) -> ChartResult<Self> {
        ensure_positive("icon value unit", self.icon_value_unit)?;
        ensure_at_least_one("icons per row", self.icons_per_row)?;
        ensure_positive("icon size", self.icon_size)?;
        ensure_non_negative("icon spacing", self.spacing)?;
        ensure_positive("column width", self.column_width)?;
        ensure_non_negative("headroom", self.headroom)?;
        if !self.margins.is_valid() {
            return Err(ChartError::InvalidConfig(
                "margins must be finite and >= 0".to_owned(),
            ));
        }
        if self.column_width < self.block_width() {
            return Err(ChartError::InvalidConfig(format!(
                "column width {} is narrower than one icon block ({})",
                self.column_width,
                self.block_width()
            )));
        }
        Ok(self)
    }

    /// `round(value / icon_value_unit)`.
    pub fn icons_for(self, value: u64) -> ChartResult<usize> {
        let icons = (value as f64 / self.icon_value_unit).round();
        if !icons.is_finite() || icons > MAX_GLYPH_COUNT as f64 {
            return Err(ChartError::InvalidConfig(format!(
                "value {value} yields more than {MAX_GLYPH_COUNT} icons"
            )));
        }
        Ok(icons as usize)
    }
}

/// Per-period column summary of a bar layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarColumn {
    pub period: i32,
    pub value: u64,
    pub icon_count: usize,
    pub row_count: usize,
    pub category: GlyphCategory,
    pub x_offset: f64,
    /// Right edge of the icon block (last icon column).
    pub block_right: f64,
    pub center_x: f64,
    pub first_flat_index: usize,
    /// Raw value with grouping separators.
    pub summary_label: String,
}

/// Vertical divider between the last pre-threshold and first post-threshold period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdDivider {
    pub x: f64,
    pub y_top: f64,
    pub y_bottom: f64,
    pub before_period: i32,
    pub after_period: i32,
}

/// Deterministic output of [`layout_bars`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarLayout {
    pub config: BarLayoutConfig,
    pub glyphs: Vec<Glyph>,
    pub columns: Vec<BarColumn>,
    pub divider: Option<ThresholdDivider>,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub shared_row_count: usize,
    pub baseline_y: f64,
    period_index: IndexMap<i32, usize>,
}

impl BarLayout {
    #[must_use]
    pub fn column_for_period(&self, period: i32) -> Option<&BarColumn> {
        self.period_index
            .get(&period)
            .and_then(|index| self.columns.get(*index))
    }

    /// Column owning a flat glyph index.
    #[must_use]
    pub fn column_for_glyph(&self, flat_index: usize) -> Option<&BarColumn> {
        let period = self.glyphs.get(flat_index)?.period?;
        self.column_for_period(period)
    }

    /// Top of the shared row budget; every column's count label sits here.
    #[must_use]
    pub fn row_budget_top(&self) -> f64 {
        self.baseline_y - self.shared_row_count as f64 * self.config.pitch()
    }
}

/// Stacks glyphs per period into fixed-width columns sharing one row scale.
///
/// Every column uses the same `icon_value_unit` and the same row budget
/// `ceil(max_icons / icons_per_row)`, so column heights compare on one axis.
pub fn layout_bars(dataset: &[DatasetEntry], config: BarLayoutConfig) -> ChartResult<BarLayout> {
    let config = config.validate()?;

    let mut period_index = IndexMap::with_capacity(dataset.len());
    for (index, entry) in dataset.iter().enumerate() {
        if period_index.insert(entry.period, index).is_some() {
            return Err(ChartError::InvalidConfig(format!(
                "duplicate period {} in dataset",
                entry.period
            )));
        }
    }

    let icon_counts = dataset
        .iter()
        .map(|entry| config.icons_for(entry.value))
        .collect::<ChartResult<Vec<_>>>()?;
    let max_icons = icon_counts.iter().copied().max().unwrap_or(0);
    let shared_row_count = max_icons.div_ceil(config.icons_per_row);

    let pitch = config.pitch();
    let canvas_width = config.column_width * dataset.len() as f64
        + config.margins.left
        + config.margins.right;
    let canvas_height = shared_row_count as f64 * pitch
        + config.margins.top
        + config.margins.bottom
        + config.headroom;
    let baseline_y = canvas_height - config.margins.bottom;

    let total_icons = ensure_glyph_budget("total icon count", icon_counts.iter().sum())?;
    let mut glyphs = Vec::with_capacity(total_icons);
    let mut columns = Vec::with_capacity(dataset.len());

    for (column_index, (entry, icon_count)) in dataset.iter().zip(icon_counts).enumerate() {
        let x_offset = config.margins.left + column_index as f64 * config.column_width;
        let category = config.tone.category_for(entry.period);
        let first_flat_index = glyphs.len();

        for k in 0..icon_count {
            let row = k / config.icons_per_row;
            let column = k % config.icons_per_row;
            glyphs.push(Glyph {
                flat_index: first_flat_index + k,
                period: Some(entry.period),
                row,
                column,
                category,
                x: x_offset + column as f64 * pitch,
                y: baseline_y - (row + 1) as f64 * pitch,
                width: config.icon_size,
                height: config.icon_size,
            });
        }

        let block_right = x_offset + config.block_width();
        columns.push(BarColumn {
            period: entry.period,
            value: entry.value,
            icon_count,
            row_count: icon_count.div_ceil(config.icons_per_row),
            category,
            x_offset,
            block_right,
            center_x: (x_offset + block_right) / 2.0,
            first_flat_index,
            summary_label: group_thousands(entry.value),
        });
    }

    let divider = config
        .tone
        .threshold_period()
        .and_then(|threshold| threshold_divider(&columns, threshold, &config, baseline_y));

    Ok(BarLayout {
        config,
        glyphs,
        columns,
        divider,
        canvas_width,
        canvas_height,
        shared_row_count,
        baseline_y,
        period_index,
    })
}

fn threshold_divider(
    columns: &[BarColumn],
    threshold: i32,
    config: &BarLayoutConfig,
    baseline_y: f64,
) -> Option<ThresholdDivider> {
    columns
        .windows(2)
        .find(|pair| pair[0].period < threshold && pair[1].period >= threshold)
        .map(|pair| ThresholdDivider {
            x: (pair[0].block_right + pair[1].x_offset) / 2.0,
            y_top: config.margins.top + DIVIDER_TOP_INSET,
            y_bottom: baseline_y,
            before_period: pair[0].period,
            after_period: pair[1].period,
        })
}
