use serde::{Deserialize, Serialize};

/// Drawing-surface size in canvas units (the SVG `viewBox` space).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Width over height; `0.0` for degenerate sizes.
    #[must_use]
    pub fn aspect_ratio(self) -> f64 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            0.0
        }
    }
}

/// Space reserved around a chart body for titles, labels and legends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        [self.top, self.right, self.bottom, self.left]
            .into_iter()
            .all(|value| value.is_finite() && value >= 0.0)
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(80.0, 40.0, 100.0, 40.0)
    }
}

/// One `{period, value}` record of a bar-chart dataset.
///
/// The caller-supplied order of a dataset is its display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatasetEntry {
    pub period: i32,
    pub value: u64,
}

impl DatasetEntry {
    #[must_use]
    pub const fn new(period: i32, value: u64) -> Self {
        Self { period, value }
    }
}

/// Semantic category of a glyph, used for coloring and labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GlyphCategory {
    /// Aggregate glyph of an isotype grid (e.g. healthy people, admissions).
    Major,
    /// Tail glyph of an isotype grid (e.g. malaria cases, deaths).
    Subcategory,
    /// Bar-chart glyph in single-tone mode.
    Uniform,
    /// Bar-chart glyph of a period strictly before the threshold period.
    BeforeThreshold,
    /// Bar-chart glyph of a period at or after the threshold period.
    AfterThreshold,
}

/// The atomic visual unit of a pictorial chart, placed in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    pub flat_index: usize,
    pub period: Option<i32>,
    pub row: usize,
    pub column: usize,
    pub category: GlyphCategory,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Glyph {
    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    /// Half-open containment test: the right and bottom edges belong to the
    /// neighbouring cell.
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    #[must_use]
    pub fn overlaps(self, other: Self) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}
