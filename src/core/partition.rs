use serde::{Deserialize, Serialize};

use crate::core::GlyphCategory;
use crate::core::validation::{
    MAX_GLYPH_COUNT, ensure_glyph_budget, ensure_non_negative, ensure_positive,
};
use crate::error::{ChartError, ChartResult};

/// Relative tolerance under which a units/icon ratio snaps to the nearest integer.
///
/// A unit-per-icon derived as `total / icons` must map back to exactly `icons`.
const RATIO_SNAP_EPSILON: f64 = 1e-9;

/// Split of an isotype grid's flat glyph sequence into major and tail glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPartition {
    pub major_icon_count: usize,
    pub subcategory_icon_count: usize,
    pub total_icon_count: usize,
    /// First flat index of the subcategory tail.
    pub boundary_index: usize,
}

/// Where a glyph sits inside its category: `ordinal` of `of` (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOrdinal {
    pub category: GlyphCategory,
    pub ordinal: usize,
    pub of: usize,
}

impl CategoryPartition {
    #[must_use]
    pub fn category_of(self, flat_index: usize) -> GlyphCategory {
        if flat_index < self.boundary_index {
            GlyphCategory::Major
        } else {
            GlyphCategory::Subcategory
        }
    }

    /// Returns `None` for indices outside `0..total_icon_count`.
    #[must_use]
    pub fn ordinal_of(self, flat_index: usize) -> Option<CategoryOrdinal> {
        if flat_index >= self.total_icon_count {
            return None;
        }
        let ordinal = if flat_index < self.boundary_index {
            CategoryOrdinal {
                category: GlyphCategory::Major,
                ordinal: flat_index + 1,
                of: self.major_icon_count,
            }
        } else {
            CategoryOrdinal {
                category: GlyphCategory::Subcategory,
                ordinal: flat_index - self.boundary_index + 1,
                of: self.subcategory_icon_count,
            }
        };
        Some(ordinal)
    }
}

/// Decides how many glyphs represent each isotype category.
///
/// `major_icon_count = ceil(raw_units / unit_per_icon)`; the last major glyph
/// may stand for fewer than `unit_per_icon` units. Subcategory glyphs are
/// unit-value and always occupy the tail of the flat sequence.
pub fn partition(
    raw_units: f64,
    unit_per_icon: f64,
    raw_subcategory_count: usize,
) -> ChartResult<CategoryPartition> {
    ensure_non_negative("raw major units", raw_units)?;
    ensure_positive("unit per icon", unit_per_icon)?;

    let major_icon_count = icon_count_ceil(raw_units / unit_per_icon)?;
    let total_icon_count = major_icon_count
        .checked_add(raw_subcategory_count)
        .ok_or_else(|| ChartError::InvalidConfig("total icon count overflows".to_owned()))?;
    ensure_glyph_budget("total icon count", total_icon_count)?;

    Ok(CategoryPartition {
        major_icon_count,
        subcategory_icon_count: raw_subcategory_count,
        total_icon_count,
        boundary_index: major_icon_count,
    })
}

fn icon_count_ceil(ratio: f64) -> ChartResult<usize> {
    if !ratio.is_finite() {
        return Err(ChartError::InvalidConfig(
            "major icon count is not representable".to_owned(),
        ));
    }
    if ratio > MAX_GLYPH_COUNT as f64 {
        return Err(ChartError::InvalidConfig(format!(
            "major icon count {ratio} exceeds the glyph limit of {MAX_GLYPH_COUNT}"
        )));
    }
    let nearest = ratio.round();
    let snapped = if (ratio - nearest).abs() <= RATIO_SNAP_EPSILON * nearest.max(1.0) {
        nearest
    } else {
        ratio.ceil()
    };
    Ok(snapped as usize)
}
