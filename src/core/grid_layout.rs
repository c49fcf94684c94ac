use serde::{Deserialize, Serialize};

use crate::core::validation::{
    ensure_at_least_one, ensure_glyph_budget, ensure_non_negative, ensure_positive,
};
use crate::error::ChartResult;

/// Cell geometry for a row-major isotype grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLayoutConfig {
    pub columns: usize,
    pub icon_width: f64,
    pub icon_height: f64,
    #[serde(default)]
    pub pad_x: f64,
    #[serde(default)]
    pub pad_y: f64,
}

impl GridLayoutConfig {
    #[must_use]
    pub fn new(columns: usize, icon_width: f64, icon_height: f64) -> Self {
        Self {
            columns,
            icon_width,
            icon_height,
            pad_x: 0.0,
            pad_y: 0.0,
        }
    }

    #[must_use]
    pub fn with_padding(mut self, pad_x: f64, pad_y: f64) -> Self {
        self.pad_x = pad_x;
        self.pad_y = pad_y;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        ensure_at_least_one("grid columns", self.columns)?;
        ensure_positive("icon width", self.icon_width)?;
        ensure_positive("icon height", self.icon_height)?;
        ensure_non_negative("horizontal padding", self.pad_x)?;
        ensure_non_negative("vertical padding", self.pad_y)?;
        Ok(self)
    }

    #[must_use]
    pub fn pitch_x(self) -> f64 {
        self.icon_width + self.pad_x
    }

    #[must_use]
    pub fn pitch_y(self) -> f64 {
        self.icon_height + self.pad_y
    }

    /// Number of rows needed for `total` glyphs.
    #[must_use]
    pub fn rows_for(self, total: usize) -> usize {
        if self.columns == 0 {
            return 0;
        }
        total.div_ceil(self.columns)
    }

    /// Grid body width: `columns * (icon_w + pad_x) + pad_x`.
    #[must_use]
    pub fn body_width(self) -> f64 {
        self.columns as f64 * self.pitch_x() + self.pad_x
    }

    /// Grid body height: `rows * (icon_h + pad_y) + pad_y`.
    #[must_use]
    pub fn body_height(self, total: usize) -> f64 {
        self.rows_for(total) as f64 * self.pitch_y() + self.pad_y
    }

    /// Placement of one flat index. Does not check `flat_index < total`.
    #[must_use]
    pub fn placement(self, flat_index: usize) -> GridPlacement {
        let row = flat_index / self.columns;
        let column = flat_index % self.columns;
        GridPlacement {
            flat_index,
            row,
            column,
            x: self.pad_x + column as f64 * self.pitch_x(),
            y: self.pad_y + row as f64 * self.pitch_y(),
        }
    }
}

/// One cell of a grid layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridPlacement {
    pub flat_index: usize,
    pub row: usize,
    pub column: usize,
    pub x: f64,
    pub y: f64,
}

/// Deterministic output of [`layout_grid`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub config: GridLayoutConfig,
    pub placements: Vec<GridPlacement>,
    pub rows: usize,
    pub width: f64,
    pub height: f64,
}

impl GridLayout {
    /// Lays out `total` glyphs row-major, left-to-right then top-to-bottom.
    pub fn compute(total: usize, config: GridLayoutConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        ensure_glyph_budget("glyph total", total)?;
        let placements = (0..total).map(|index| config.placement(index)).collect();
        Ok(Self {
            config,
            placements,
            rows: config.rows_for(total),
            width: config.body_width(),
            height: config.body_height(total),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Places `total` glyphs on a `columns`-wide grid.
///
/// `row = i / columns`, `column = i % columns`,
/// `x = pad_x + column * (icon_w + pad_x)`, `y = pad_y + row * (icon_h + pad_y)`.
/// Fails with `InvalidConfig` when `columns < 1` or an icon dimension is not
/// strictly positive.
pub fn layout_grid(
    total: usize,
    columns: usize,
    icon_w: f64,
    icon_h: f64,
    pad_x: f64,
    pad_y: f64,
) -> ChartResult<GridLayout> {
    GridLayout::compute(
        total,
        GridLayoutConfig::new(columns, icon_w, icon_h).with_padding(pad_x, pad_y),
    )
}
