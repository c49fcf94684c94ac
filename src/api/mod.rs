pub mod article;
mod bar_chart;
mod chart;
mod decoration;
mod engine;
mod engine_config;
mod isotype_chart;
mod plugin_registry;
mod render_frame_builder;
mod snapshot;

pub use bar_chart::{BarChartConfig, PictorialBarChart, TonePalette};
pub use chart::{ChartKind, ChartSpec, PictorialChart};
pub use decoration::{
    HighlightStyle, LegendEntry, LegendStyle, LegendSwatch, TextLine, TooltipStyle,
    estimate_text_width,
};
pub use engine::ChartEngine;
pub use engine_config::{
    ChartEngineConfig, ChartEngineConfigJsonContractV1, ENGINE_CONFIG_JSON_SCHEMA_V1,
    METADATA_ALT_TEXT, METADATA_SOURCE, METADATA_TITLE,
};
pub use isotype_chart::{CategoryStyle, IsotypeChart, IsotypeChartConfig};
pub use snapshot::{CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshot, ChartSnapshotJsonContractV1};
