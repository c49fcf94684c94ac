pub mod bar_layout;
pub mod grid_layout;
pub mod number_format;
pub mod partition;
pub mod types;
mod validation;

pub use bar_layout::{
    BarColumn, BarLayout, BarLayoutConfig, ThresholdDivider, ToneMode, layout_bars,
};
pub use grid_layout::{GridLayout, GridLayoutConfig, GridPlacement, layout_grid};
pub use number_format::{format_millions, group_thousands, group_thousands_f64};
pub use partition::{CategoryOrdinal, CategoryPartition, partition};
pub use types::{CanvasSize, DatasetEntry, Glyph, GlyphCategory, Margins};
pub use validation::MAX_GLYPH_COUNT;
