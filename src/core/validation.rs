use crate::error::{ChartError, ChartResult};

pub(crate) fn ensure_positive(field: &str, value: f64) -> ChartResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "{field} must be finite and > 0"
        )));
    }
    Ok(value)
}

pub(crate) fn ensure_non_negative(field: &str, value: f64) -> ChartResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "{field} must be finite and >= 0"
        )));
    }
    Ok(value)
}

pub(crate) fn ensure_at_least_one(field: &str, value: usize) -> ChartResult<usize> {
    if value < 1 {
        return Err(ChartError::InvalidConfig(format!("{field} must be >= 1")));
    }
    Ok(value)
}

/// Most glyphs a single layout may hold.
pub const MAX_GLYPH_COUNT: usize = 1_000_000;

pub(crate) fn ensure_glyph_budget(field: &str, count: usize) -> ChartResult<usize> {
    if count > MAX_GLYPH_COUNT {
        return Err(ChartError::InvalidConfig(format!(
            "{field} {count} exceeds the glyph limit of {MAX_GLYPH_COUNT}"
        )));
    }
    Ok(count)
}
